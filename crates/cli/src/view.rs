use anteup_core::{
    BlindOption, Card, Edition, Enhancement, Event, GameState, HandLevels, Phase, ScoreOutcome,
    ShopItem,
};
use std::fmt::Write;

pub fn card_label(card: &Card) -> String {
    let mut label = format!("#{:<2} {}", card.id, card.label());
    match card.enhancement {
        Enhancement::None => {}
        other => {
            let _ = write!(label, " [{other:?}]");
        }
    }
    if card.edition != Edition::Base {
        let _ = write!(label, " <{:?}>", card.edition);
    }
    if card.debuffed {
        label.push_str(" (debuffed)");
    }
    label
}

pub fn render_state(state: &GameState) -> String {
    let mut out = String::new();
    let deck = state
        .deck_variant
        .as_ref()
        .map(|variant| variant.name.as_str())
        .unwrap_or("-");
    let _ = writeln!(
        out,
        "[{:?}] ante {} round {} | ${} | deck {}",
        state.phase, state.ante, state.round, state.money, deck
    );
    if let Some(blind) = state.blind.as_ref() {
        let _ = writeln!(
            out,
            "blind: {} | score {}/{} | hands {} discards {}",
            blind.name, state.display_score, blind.score_goal, state.hands_left, state.discards_left
        );
    }
    if !state.inventory.jokers.is_empty() {
        let names: Vec<&str> = state
            .inventory
            .jokers
            .iter()
            .map(|joker| joker.name.as_str())
            .collect();
        let _ = writeln!(
            out,
            "jokers ({}/{}): {}",
            names.len(),
            state.inventory.joker_slots,
            names.join(", ")
        );
    }
    if !state.inventory.consumables.is_empty() {
        let _ = writeln!(out, "consumables:");
        for (idx, item) in state.inventory.consumables.iter().enumerate() {
            let _ = writeln!(out, "  {idx}: {} ({:?})", item.name, item.kind);
        }
    }
    if matches!(state.phase, Phase::PlayHand | Phase::Scoring) {
        let _ = writeln!(out, "hand ({} in deck):", state.deck.len());
        for card in &state.hand {
            let marker = if card.selected { '*' } else { ' ' };
            let _ = writeln!(out, " {marker} {}", card_label(card));
        }
    }
    if let Some(shop) = state.shop.as_ref().filter(|_| state.phase == Phase::Shop) {
        let _ = writeln!(out, "shop (reroll ${}):", shop.reroll_cost);
        for (idx, offer) in shop.offers.iter().enumerate() {
            let kind = match &offer.item {
                ShopItem::Joker(_) => "joker",
                ShopItem::Consumable(_) => "consumable",
            };
            let _ = writeln!(
                out,
                "  {idx}: {} ${} [{kind}] {}",
                offer.item.name(),
                offer.cost,
                offer.item.description()
            );
        }
    }
    for notice in &state.notices {
        let _ = writeln!(out, "note: {notice}");
    }
    out
}

pub fn render_blind_options(options: &[BlindOption]) -> String {
    let mut out = String::new();
    for option in options {
        let marker = if option.selectable { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:?}: {} goal {} reward ${}",
            option.kind, option.name, option.score_goal, option.reward
        );
    }
    out
}

pub fn render_hand_levels(levels: &HandLevels) -> String {
    let mut out = String::new();
    for (kind, level) in levels.iter() {
        let _ = writeln!(
            out,
            "  {:<16} lvl {:<2} {:>4} x {}",
            kind.display_name(),
            level.level,
            level.chips,
            level.mult
        );
    }
    out
}

/// One line per pipeline step, ending on the final totals.
pub fn render_score_log(outcome: &ScoreOutcome) -> String {
    let mut out = String::new();
    for entry in &outcome.log {
        let _ = writeln!(
            out,
            "  {:>5} x {:<6} {}",
            entry.chips, entry.mult, entry.message
        );
    }
    let _ = writeln!(out, "  = {}", outcome.score);
    out
}

pub fn render_event(event: &Event) -> Option<String> {
    let line = match event {
        Event::BlindStarted { target, .. } => format!("blind started, goal {target}"),
        Event::HandScored { hand, total, .. } => format!("{hand:?} scored {total}"),
        Event::BlindCleared { score, .. } => format!("blind cleared with {score}"),
        Event::BlindFailed { score } => format!("blind failed with {score}"),
        Event::ShopBought { offer, cost, .. } => format!("bought {offer:?} for ${cost}"),
        Event::RoundAdvanced { round, ante } => format!("round {round}, ante {ante}"),
        _ => return None,
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anteup_core::{HandKind, Rank, Suit};

    #[test]
    fn labels_show_modifiers() {
        let mut card = Card::standard(3, Suit::Hearts, Rank::Ace)
            .with_enhancement(Enhancement::Glass)
            .with_edition(Edition::Foil);
        card.debuffed = true;
        let label = card_label(&card);
        assert!(label.contains("[Glass]"));
        assert!(label.contains("<Foil>"));
        assert!(label.ends_with("(debuffed)"));
    }

    #[test]
    fn levels_list_every_leveled_hand() {
        let mut levels = HandLevels::standard();
        levels.level_up(HandKind::Flush, 15, 1.0);
        let view = render_hand_levels(&levels);
        assert_eq!(view.lines().count(), levels.iter().count());
        let flush = view
            .lines()
            .find(|line| line.contains("Flush") && !line.contains("Straight"))
            .expect("flush row");
        assert!(flush.contains("lvl 2"));
    }

    #[test]
    fn menu_state_renders_without_a_blind() {
        let view = render_state(&GameState::new());
        assert!(view.starts_with("[Menu]"));
        assert!(!view.contains("blind:"));
    }
}
