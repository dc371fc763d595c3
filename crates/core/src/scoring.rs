use crate::{
    level_kind, Card, Edition, Enhancement, HandEvaluation, HandKind, HandRule, JokerInstance,
    JokerOutput, JokerState, RuleEffect, Score, ScoreLogEntry, Trigger, TriggerContext,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const BONUS_CHIPS: i64 = 30;
const MULT_BONUS: f64 = 4.0;
const GLASS_X_MULT: f64 = 2.0;
const FOIL_CHIPS: i64 = 50;
const HOLOGRAPHIC_MULT: f64 = 10.0;
const POLYCHROME_X_MULT: f64 = 1.5;
const STEEL_X_MULT: f64 = 1.5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HandLevel {
    pub level: u32,
    pub chips: i64,
    pub mult: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandLevels {
    levels: BTreeMap<HandKind, HandLevel>,
}

impl HandLevels {
    pub fn from_rules(rules: &[HandRule]) -> Self {
        let mut levels = BTreeMap::new();
        for rule in rules.iter().filter(|rule| level_kind(rule.kind) == rule.kind) {
            levels.insert(
                rule.kind,
                HandLevel {
                    level: 1,
                    chips: rule.base_chips,
                    mult: rule.base_mult,
                },
            );
        }
        for kind in HandKind::ALL {
            levels
                .entry(level_kind(kind))
                .or_insert_with(|| default_hand_level(kind));
        }
        Self { levels }
    }

    pub fn standard() -> Self {
        Self::from_rules(&[])
    }

    pub fn get(&self, kind: HandKind) -> HandLevel {
        let kind = level_kind(kind);
        self.levels
            .get(&kind)
            .copied()
            .unwrap_or_else(|| default_hand_level(kind))
    }

    pub fn level_up(&mut self, kind: HandKind, chips: i64, mult: f64) {
        let kind = level_kind(kind);
        let entry = self
            .levels
            .entry(kind)
            .or_insert_with(|| default_hand_level(kind));
        entry.level = entry.level.saturating_add(1);
        entry.chips += chips;
        entry.mult += mult;
    }

    pub fn iter(&self) -> impl Iterator<Item = (HandKind, HandLevel)> + '_ {
        self.levels.iter().map(|(kind, level)| (*kind, *level))
    }
}

fn default_hand_level(kind: HandKind) -> HandLevel {
    let (chips, mult) = match kind {
        HandKind::HighCard => (5, 1.0),
        HandKind::Pair => (10, 2.0),
        HandKind::TwoPair => (20, 2.0),
        HandKind::Trips => (30, 3.0),
        HandKind::Straight => (30, 4.0),
        HandKind::Flush => (35, 4.0),
        HandKind::FullHouse => (40, 4.0),
        HandKind::Quads => (60, 7.0),
        HandKind::StraightFlush | HandKind::RoyalFlush => (100, 8.0),
        HandKind::FiveOfAKind => (120, 12.0),
    };
    HandLevel {
        level: 1,
        chips,
        mult,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreOutcome {
    pub hand: HandKind,
    pub chips: i64,
    pub mult: f64,
    pub score: i64,
    pub log: Vec<ScoreLogEntry>,
    /// Joker counters after this hand, in ownership order.
    pub joker_states: Vec<JokerState>,
}

struct Tally {
    score: Score,
    log: Vec<ScoreLogEntry>,
}

impl Tally {
    fn new(base: Score, message: String) -> Self {
        let mut tally = Self {
            score: base,
            log: Vec::new(),
        };
        tally.record(message);
        tally
    }

    fn apply(&mut self, effect: RuleEffect, message: impl Into<String>) {
        self.score.apply(&effect);
        self.record(message.into());
    }

    fn apply_joker(&mut self, output: JokerOutput) {
        if let Some(chips) = output.chips {
            self.score.apply(&RuleEffect::AddChips(chips));
        }
        if let Some(mult) = output.mult {
            self.score.apply(&RuleEffect::AddMult(mult));
        }
        if let Some(x_mult) = output.x_mult {
            self.score.apply(&RuleEffect::MultiplyMult(x_mult));
        }
        self.record(output.message);
    }

    fn record(&mut self, message: String) {
        self.log.push(ScoreLogEntry {
            chips: self.score.chips,
            mult: self.score.mult,
            message,
        });
    }
}

/// Runs the ordered chip/mult accumulation for one played hand.
///
/// `full_hand` is every card in hand at the time of play; cards whose
/// `selected` flag is clear count as held. The only state this produces
/// beyond the score is the next value of each joker's counter, returned in
/// [`ScoreOutcome::joker_states`].
pub fn score_hand(
    eval: &HandEvaluation,
    full_hand: &[Card],
    jokers: &[JokerInstance],
) -> ScoreOutcome {
    let held: Vec<Card> = full_hand.iter().copied().filter(|c| !c.selected).collect();
    let mut tally = Tally::new(
        Score::new(eval.base_chips, eval.base_mult),
        eval.kind.display_name().to_string(),
    );

    for card in eval.scoring.iter().filter(|c| !c.debuffed) {
        tally.apply(
            RuleEffect::AddChips(card.chips),
            format!("{} +{}", card.label(), card.chips),
        );
        match card.enhancement {
            Enhancement::Bonus => tally.apply(
                RuleEffect::AddChips(BONUS_CHIPS),
                format!("Bonus +{BONUS_CHIPS} Chips"),
            ),
            Enhancement::Mult => tally.apply(
                RuleEffect::AddMult(MULT_BONUS),
                format!("Mult +{MULT_BONUS} Mult"),
            ),
            Enhancement::Glass => tally.apply(
                RuleEffect::MultiplyMult(GLASS_X_MULT),
                format!("Glass x{GLASS_X_MULT}"),
            ),
            _ => {}
        }
        match card.edition {
            Edition::Foil => tally.apply(
                RuleEffect::AddChips(FOIL_CHIPS),
                format!("Foil +{FOIL_CHIPS} Chips"),
            ),
            Edition::Holographic => tally.apply(
                RuleEffect::AddMult(HOLOGRAPHIC_MULT),
                format!("Holographic +{HOLOGRAPHIC_MULT} Mult"),
            ),
            Edition::Polychrome => tally.apply(
                RuleEffect::MultiplyMult(POLYCHROME_X_MULT),
                format!("Polychrome x{POLYCHROME_X_MULT}"),
            ),
            _ => {}
        }
        let ctx = TriggerContext {
            trigger: Trigger::CardScored(card),
            hand: eval,
            held: &held,
        };
        for joker in jokers {
            if let Some(output) = joker.kind.evaluate(&joker.state, &ctx) {
                tally.apply_joker(output);
            }
        }
    }

    for card in held
        .iter()
        .filter(|c| !c.debuffed && c.enhancement == Enhancement::Steel)
    {
        tally.apply(
            RuleEffect::MultiplyMult(STEEL_X_MULT),
            format!("Steel {} x{STEEL_X_MULT}", card.label()),
        );
    }

    let ctx = TriggerContext {
        trigger: Trigger::HandScored,
        hand: eval,
        held: &held,
    };
    let mut joker_states = Vec::with_capacity(jokers.len());
    for joker in jokers {
        if let Some(output) = joker.kind.evaluate(&joker.state, &ctx) {
            tally.apply_joker(output);
        }
        let mut state = joker.state;
        joker.kind.after_hand(&mut state, eval);
        joker_states.push(state);
    }

    ScoreOutcome {
        hand: eval.kind,
        chips: tally.score.chips,
        mult: tally.score.mult,
        score: tally.score.total(),
        log: tally.log,
        joker_states,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate_hand, JokerKind, Rank, Suit};

    fn selected(card: Card) -> Card {
        Card {
            selected: true,
            ..card
        }
    }

    #[test]
    fn level_up_is_shared_by_royal_and_straight_flush() {
        let mut levels = HandLevels::standard();
        levels.level_up(HandKind::StraightFlush, 10, 1.0);
        assert_eq!(levels.get(HandKind::RoyalFlush).level, 2);
        assert_eq!(levels.get(HandKind::RoyalFlush).chips, 110);
    }

    #[test]
    fn log_ends_on_final_totals() {
        let hand = vec![
            selected(Card::standard(1, Suit::Hearts, Rank::Five).with_edition(Edition::Polychrome)),
            selected(Card::standard(2, Suit::Clubs, Rank::Five).with_enhancement(Enhancement::Glass)),
            Card::standard(3, Suit::Spades, Rank::Nine).with_enhancement(Enhancement::Steel),
        ];
        let chosen: Vec<Card> = hand.iter().copied().filter(|c| c.selected).collect();
        let eval = evaluate_hand(&chosen, &HandLevels::standard());
        let jokers = vec![JokerInstance::new("j_joker", JokerKind::Joker)];
        let outcome = score_hand(&eval, &hand, &jokers);
        let last = outcome.log.last().expect("log entry");
        assert_eq!(last.chips, outcome.chips);
        assert_eq!(last.mult, outcome.mult);
        // (10 + 5 + 5) chips; mult ((2 * 1.5) * 2) * 1.5 + 4
        assert_eq!(outcome.chips, 20);
        assert_eq!(outcome.mult, 13.0);
        assert_eq!(outcome.score, 260);
    }

    #[test]
    fn debuffed_held_steel_is_ignored() {
        let mut steel = Card::standard(3, Suit::Hearts, Rank::Nine).with_enhancement(Enhancement::Steel);
        steel.debuffed = true;
        let hand = vec![selected(Card::standard(1, Suit::Clubs, Rank::Two)), steel];
        let eval = evaluate_hand(&hand[..1], &HandLevels::standard());
        let outcome = score_hand(&eval, &hand, &[]);
        assert_eq!(outcome.mult, 1.0);
        assert_eq!(outcome.chips, 7);
    }
}
