#![allow(dead_code)]

use anteup_core::*;

pub fn hand_rules() -> Vec<HandRule> {
    let table = [
        (HandKind::HighCard, 5, 1.0),
        (HandKind::Pair, 10, 2.0),
        (HandKind::TwoPair, 20, 2.0),
        (HandKind::Trips, 30, 3.0),
        (HandKind::Straight, 30, 4.0),
        (HandKind::Flush, 35, 4.0),
        (HandKind::FullHouse, 40, 4.0),
        (HandKind::Quads, 60, 7.0),
        (HandKind::StraightFlush, 100, 8.0),
        (HandKind::FiveOfAKind, 120, 12.0),
    ];
    table
        .into_iter()
        .map(|(kind, chips, mult)| HandRule {
            kind,
            display_name: kind.display_name().to_string(),
            base_chips: chips,
            base_mult: mult,
            level_chips: if kind == HandKind::Flush { 15 } else { 10 },
            level_mult: 1.0,
        })
        .collect()
}

fn deck(id: &str, money: i64, joker_slots: usize, rule: DeckRule) -> DeckVariant {
    DeckVariant {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        color: String::new(),
        money,
        hands: 4,
        discards: 3,
        joker_slots,
        hand_size: 8,
        rule,
    }
}

pub fn config() -> GameConfig {
    GameConfig {
        hands: hand_rules(),
        decks: vec![
            deck("red", 4, 1, DeckRule::Standard),
            deck("yellow", 14, 5, DeckRule::Standard),
            deck(
                "green",
                4,
                5,
                DeckRule::HandDiscardPayout {
                    per_hand: 2,
                    per_discard: 1,
                    discard_income: 1,
                },
            ),
        ],
        blinds: vec![
            BlindRule {
                kind: BlindKind::Small,
                name: "Small Blind".to_string(),
                goal_mult: 1.0,
                reward: 3,
            },
            BlindRule {
                kind: BlindKind::Big,
                name: "Big Blind".to_string(),
                goal_mult: 1.5,
                reward: 4,
            },
            BlindRule {
                kind: BlindKind::Boss,
                name: "Boss Blind".to_string(),
                goal_mult: 2.0,
                reward: 5,
            },
        ],
        antes: AnteTable {
            base_goals: vec![300, 800, 2800, 6000, 11000, 20000, 35000, 50000],
            growth: 1.5,
        },
        economy: EconomyRule {
            interest_step: 5,
            interest_per: 1,
            interest_cap: 5,
            reroll_cost: 5,
        },
        shop: ShopRule {
            joker_offers: 2,
            planet_offers: 1,
            tarot_offers: 1,
        },
        edition_odds: EditionOdds::default(),
        consumable_slots: 2,
        max_selected: 5,
    }
}

fn joker(id: &str, kind: JokerKind, cost: i64) -> JokerDef {
    JokerDef {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        rarity: JokerRarity::Common,
        cost,
        kind,
        visual: ItemVisual::default(),
    }
}

fn consumable(id: &str, kind: ConsumableKind, effect: ConsumableEffect) -> ConsumableDef {
    ConsumableDef {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        kind,
        cost: 3,
        effect,
        visual: ItemVisual::default(),
    }
}

pub fn content_with_bosses(bosses: Vec<BossDef>) -> Content {
    Content {
        jokers: vec![
            joker("j_joker", JokerKind::Joker, 2),
            joker("j_duo", JokerKind::TheDuo, 8),
        ],
        planets: vec![consumable(
            "p_mercury",
            ConsumableKind::Planet,
            ConsumableEffect::LevelUp(HandKind::Pair),
        )],
        tarots: vec![consumable(
            "t_empress",
            ConsumableKind::Tarot,
            ConsumableEffect::SetEnhancement(Enhancement::Mult),
        )],
        bosses,
    }
}

pub fn content() -> Content {
    content_with_bosses(vec![boss("the_wall", BossEffect::None)])
}

pub fn boss(id: &str, effect: BossEffect) -> BossDef {
    BossDef {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        effect,
    }
}

/// A run whose random source always yields zero: every deck deals the same
/// eight cards (2S, then AD KD QD JD 10D 9D 8D) and every pool pick is the
/// first entry.
pub fn run_with(content: Content) -> RunState<FixedSequence> {
    RunState::new(config(), content, FixedSequence::zeros()).expect("valid fixture")
}

pub fn start(deck_id: &str) -> (RunState<FixedSequence>, EventBus) {
    let mut run = run_with(content());
    let mut events = EventBus::default();
    open_deck(&mut run, deck_id, &mut events);
    (run, events)
}

pub fn open_deck(run: &mut RunState<FixedSequence>, deck_id: &str, events: &mut EventBus) {
    run.try_apply(Action::OpenDeckSelect, events).expect("open");
    run.try_apply(
        Action::SelectDeck {
            deck_id: deck_id.to_string(),
        },
        events,
    )
    .expect("deck");
}

pub fn select_scheduled_blind(run: &mut RunState<FixedSequence>, events: &mut EventBus) {
    let blind = BlindKind::for_round(run.state().round);
    run.try_apply(Action::SelectBlind { blind }, events)
        .expect("blind");
}

pub fn card_id(state: &GameState, rank: Rank, suit: Suit) -> u32 {
    state
        .hand
        .iter()
        .find(|card| card.rank == rank && card.suit == suit)
        .map(|card| card.id)
        .expect("card in hand")
}

pub fn toggle(run: &mut RunState<FixedSequence>, ids: &[u32], events: &mut EventBus) {
    for &card_id in ids {
        run.try_apply(Action::ToggleCard { card_id }, events)
            .expect("toggle");
    }
}

pub fn royal_ids(state: &GameState) -> Vec<u32> {
    [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]
        .into_iter()
        .map(|rank| card_id(state, rank, Suit::Diamonds))
        .collect()
}

/// Plays the diamond royal flush from a freshly dealt blind.
pub fn win_blind(run: &mut RunState<FixedSequence>, events: &mut EventBus) {
    select_scheduled_blind(run, events);
    let ids = royal_ids(run.state());
    toggle(run, &ids, events);
    run.try_apply(Action::PlayHand, events).expect("play");
    run.try_apply(Action::FinishScoring, events).expect("finish");
    assert_eq!(run.state().phase, Phase::Victory);
}

pub fn win_round(run: &mut RunState<FixedSequence>, events: &mut EventBus) {
    win_blind(run, events);
    run.try_apply(Action::EndRound, events).expect("end round");
    assert_eq!(run.state().phase, Phase::Shop);
}
