use crate::{Card, Enhancement, HandEvaluation, HandKind, Rank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JokerRarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Behaviour table for every joker the content can reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JokerKind {
    Joker,
    GreenJoker,
    TheDuo,
    Blackboard,
    Runner,
    Fibonacci,
    HalfJoker,
    // Declared content whose ability is not wired yet.
    SmearedJoker,
    Blueprint,
}

/// Persistent per-instance counter owned by a joker.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum JokerState {
    #[default]
    Stateless,
    Mult(i64),
    Chips(i64),
}

#[derive(Debug, Clone, Copy)]
pub enum Trigger<'a> {
    /// Fired once per scoring card, after its own chips and modifiers.
    CardScored(&'a Card),
    /// Fired once per played hand, after held-card effects.
    HandScored,
}

#[derive(Debug, Clone, Copy)]
pub struct TriggerContext<'a> {
    pub trigger: Trigger<'a>,
    pub hand: &'a HandEvaluation,
    /// Unselected cards remaining in hand.
    pub held: &'a [Card],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JokerOutput {
    pub chips: Option<i64>,
    pub mult: Option<f64>,
    pub x_mult: Option<f64>,
    pub message: String,
}

impl JokerOutput {
    fn chips(value: i64) -> Self {
        Self {
            chips: Some(value),
            message: format!("+{value} Chips"),
            ..Self::default()
        }
    }

    fn mult(value: f64) -> Self {
        Self {
            mult: Some(value),
            message: format!("+{value} Mult"),
            ..Self::default()
        }
    }

    fn x_mult(value: f64) -> Self {
        Self {
            x_mult: Some(value),
            message: format!("X{value} Mult"),
            ..Self::default()
        }
    }
}

const FIBONACCI_RANKS: [Rank; 5] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Five, Rank::Eight];

impl JokerKind {
    pub fn initial_state(self) -> JokerState {
        match self {
            JokerKind::GreenJoker => JokerState::Mult(0),
            JokerKind::Runner => JokerState::Chips(0),
            _ => JokerState::Stateless,
        }
    }

    pub fn is_placeholder(self) -> bool {
        matches!(self, JokerKind::SmearedJoker | JokerKind::Blueprint)
    }

    pub fn evaluate(self, state: &JokerState, ctx: &TriggerContext<'_>) -> Option<JokerOutput> {
        match (self, ctx.trigger) {
            (JokerKind::Joker, Trigger::HandScored) => Some(JokerOutput::mult(4.0)),
            (JokerKind::GreenJoker, Trigger::HandScored) => match *state {
                JokerState::Mult(value) if value != 0 => Some(JokerOutput::mult(value as f64)),
                _ => None,
            },
            (JokerKind::TheDuo, Trigger::HandScored) if ctx.hand.kind == HandKind::Pair => {
                Some(JokerOutput::x_mult(2.0))
            }
            (JokerKind::Blackboard, Trigger::HandScored)
                if ctx.held.iter().all(|card| card.suit.is_black()) =>
            {
                Some(JokerOutput::x_mult(3.0))
            }
            (JokerKind::Runner, Trigger::HandScored) => match *state {
                JokerState::Chips(value) if value != 0 => Some(JokerOutput::chips(value)),
                _ => None,
            },
            (JokerKind::Fibonacci, Trigger::CardScored(card))
                if FIBONACCI_RANKS.contains(&card.rank) && card.enhancement != Enhancement::Stone =>
            {
                Some(JokerOutput::mult(8.0))
            }
            (JokerKind::HalfJoker, Trigger::HandScored) if ctx.hand.cards.len() <= 3 => {
                Some(JokerOutput::mult(20.0))
            }
            _ => None,
        }
    }

    /// Counter update applied after the joker's whole-hand trigger.
    pub fn after_hand(self, state: &mut JokerState, hand: &HandEvaluation) {
        match (self, state) {
            (JokerKind::GreenJoker, JokerState::Mult(value)) => *value += 1,
            (JokerKind::Runner, JokerState::Chips(value)) if hand.kind == HandKind::Straight => {
                *value += 10
            }
            _ => {}
        }
    }

    pub fn on_discard(self, state: &mut JokerState) {
        if let (JokerKind::GreenJoker, JokerState::Mult(value)) = (self, state) {
            *value = (*value - 1).max(0);
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConsumableKind {
    Tarot,
    Planet,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConsumableEffect {
    LevelUp(HandKind),
    SetEnhancement(Enhancement),
    RaiseRank,
    /// Declared content with no wired behaviour; consumed without effect.
    Placeholder,
}

impl ConsumableEffect {
    pub fn needs_target(self) -> bool {
        !matches!(self, ConsumableEffect::LevelUp(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    fn eval(kind: HandKind, cards: Vec<Card>) -> HandEvaluation {
        HandEvaluation {
            kind,
            scoring: cards.clone(),
            cards,
            base_chips: 0,
            base_mult: 0.0,
        }
    }

    #[test]
    fn runner_only_grows_on_straights() {
        let mut state = JokerKind::Runner.initial_state();
        JokerKind::Runner.after_hand(&mut state, &eval(HandKind::Pair, Vec::new()));
        assert_eq!(state, JokerState::Chips(0));
        JokerKind::Runner.after_hand(&mut state, &eval(HandKind::Straight, Vec::new()));
        JokerKind::Runner.after_hand(&mut state, &eval(HandKind::Straight, Vec::new()));
        assert_eq!(state, JokerState::Chips(20));
    }

    #[test]
    fn green_joker_counter_never_goes_negative() {
        let mut state = JokerKind::GreenJoker.initial_state();
        JokerKind::GreenJoker.on_discard(&mut state);
        assert_eq!(state, JokerState::Mult(0));
        JokerKind::GreenJoker.after_hand(&mut state, &eval(HandKind::HighCard, Vec::new()));
        JokerKind::GreenJoker.after_hand(&mut state, &eval(HandKind::HighCard, Vec::new()));
        JokerKind::GreenJoker.on_discard(&mut state);
        assert_eq!(state, JokerState::Mult(1));
    }

    #[test]
    fn blackboard_needs_all_black_held_cards() {
        let hand = eval(HandKind::HighCard, Vec::new());
        let black = [
            Card::standard(1, Suit::Spades, Rank::Two),
            Card::standard(2, Suit::Clubs, Rank::Nine),
        ];
        let mixed = [
            Card::standard(1, Suit::Spades, Rank::Two),
            Card::standard(3, Suit::Hearts, Rank::Nine),
        ];
        let black_ctx = TriggerContext {
            trigger: Trigger::HandScored,
            hand: &hand,
            held: &black,
        };
        let mixed_ctx = TriggerContext {
            trigger: Trigger::HandScored,
            hand: &hand,
            held: &mixed,
        };
        let out = JokerKind::Blackboard.evaluate(&JokerState::Stateless, &black_ctx);
        assert_eq!(out.and_then(|o| o.x_mult), Some(3.0));
        assert!(JokerKind::Blackboard
            .evaluate(&JokerState::Stateless, &mixed_ctx)
            .is_none());
    }

    #[test]
    fn placeholders_never_fire() {
        let card = Card::standard(1, Suit::Hearts, Rank::Ace);
        let hand = eval(HandKind::HighCard, vec![card]);
        for trigger in [Trigger::CardScored(&card), Trigger::HandScored] {
            let ctx = TriggerContext {
                trigger,
                hand: &hand,
                held: &[],
            };
            assert!(JokerKind::SmearedJoker
                .evaluate(&JokerState::Stateless, &ctx)
                .is_none());
            assert!(JokerKind::Blueprint
                .evaluate(&JokerState::Stateless, &ctx)
                .is_none());
        }
    }
}
