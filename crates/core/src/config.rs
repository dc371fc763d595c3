use crate::{BlindKind, HandKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandRule {
    pub kind: HandKind,
    pub display_name: String,
    pub base_chips: i64,
    pub base_mult: f64,
    /// Chips added per planet level.
    #[serde(default)]
    pub level_chips: i64,
    #[serde(default)]
    pub level_mult: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DeckRule {
    Standard,
    /// No interest: a flat payout per unused hand and discard at round end,
    /// plus `discard_income` money each time cards are discarded.
    HandDiscardPayout {
        per_hand: i64,
        per_discard: i64,
        discard_income: i64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeckVariant {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub color: String,
    pub money: i64,
    pub hands: u8,
    pub discards: u8,
    pub joker_slots: usize,
    pub hand_size: usize,
    pub rule: DeckRule,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlindRule {
    pub kind: BlindKind,
    pub name: String,
    pub goal_mult: f64,
    pub reward: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnteTable {
    /// Base score goal for antes 1..=len.
    pub base_goals: Vec<i64>,
    /// Growth factor applied per ante past the end of `base_goals`.
    pub growth: f64,
}

impl AnteTable {
    pub fn base_goal(&self, ante: u32) -> Option<i64> {
        let last = *self.base_goals.last()?;
        let ante = ante.max(1) as usize;
        if ante <= self.base_goals.len() {
            return self.base_goals.get(ante - 1).copied();
        }
        let extra = (ante - self.base_goals.len()) as i32;
        Some((last as f64 * self.growth.powi(extra)).floor() as i64)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyRule {
    pub interest_step: i64,
    pub interest_per: i64,
    pub interest_cap: i64,
    pub reroll_cost: i64,
}

impl EconomyRule {
    pub fn interest(&self, money: i64) -> i64 {
        if self.interest_step <= 0 || self.interest_per <= 0 {
            return 0;
        }
        let steps = (money / self.interest_step).max(0);
        (steps * self.interest_per).min(self.interest_cap)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopRule {
    pub joker_offers: u8,
    pub planet_offers: u8,
    pub tarot_offers: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EditionOdds {
    pub foil: f64,
    pub holographic: f64,
}

impl Default for EditionOdds {
    fn default() -> Self {
        Self {
            foil: 0.01,
            holographic: 0.002,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub hands: Vec<HandRule>,
    pub decks: Vec<DeckVariant>,
    pub blinds: Vec<BlindRule>,
    pub antes: AnteTable,
    pub economy: EconomyRule,
    pub shop: ShopRule,
    #[serde(default)]
    pub edition_odds: EditionOdds,
    #[serde(default = "default_consumable_slots")]
    pub consumable_slots: usize,
    #[serde(default = "default_max_selected")]
    pub max_selected: usize,
}

fn default_consumable_slots() -> usize {
    2
}

/// Upper bound on a played or discarded selection.
pub const MAX_SELECTED_CARDS: usize = 5;

fn default_max_selected() -> usize {
    MAX_SELECTED_CARDS
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("no deck variants configured")]
    NoDecks,
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("missing hand rule for {0:?}")]
    MissingHandRule(HandKind),
    #[error("missing blind rule for {0:?}")]
    MissingBlindRule(BlindKind),
    #[error("ante table has no base goals")]
    EmptyAnteTable,
    #[error("deck {0} has invalid starting stats")]
    InvalidDeck(String),
    #[error("shop offers {kind} but the {kind} pool is empty")]
    EmptyPool { kind: &'static str },
    #[error("no boss blinds defined")]
    NoBosses,
    #[error("{item} references hand {hand:?} which has no rule")]
    UnknownHand { item: String, hand: HandKind },
    #[error("{name} is {value}, expected {min}..={max}")]
    InvalidLimit {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

impl GameConfig {
    pub fn deck(&self, id: &str) -> Option<&DeckVariant> {
        self.decks.iter().find(|deck| deck.id == id)
    }

    pub fn blind_rule(&self, kind: BlindKind) -> Option<&BlindRule> {
        self.blinds.iter().find(|rule| rule.kind == kind)
    }

    pub fn hand_rule(&self, kind: HandKind) -> Option<&HandRule> {
        self.hands.iter().find(|rule| rule.kind == kind)
    }

    pub fn goal_for(&self, ante: u32, kind: BlindKind) -> Option<i64> {
        let base = self.antes.base_goal(ante)?;
        let mult = self.blind_rule(kind)?.goal_mult;
        Some((base as f64 * mult).floor() as i64)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks.is_empty() {
            return Err(ConfigError::NoDecks);
        }
        let mut seen = HashSet::new();
        for deck in &self.decks {
            if !seen.insert(deck.id.as_str()) {
                return Err(ConfigError::DuplicateId {
                    kind: "deck",
                    id: deck.id.clone(),
                });
            }
            if deck.hands == 0 || deck.hand_size == 0 || deck.money < 0 {
                return Err(ConfigError::InvalidDeck(deck.id.clone()));
            }
        }
        for kind in HandKind::ALL {
            if kind != HandKind::RoyalFlush && self.hand_rule(kind).is_none() {
                return Err(ConfigError::MissingHandRule(kind));
            }
        }
        for kind in BlindKind::ALL {
            if self.blind_rule(kind).is_none() {
                return Err(ConfigError::MissingBlindRule(kind));
            }
        }
        if self.antes.base_goals.is_empty() {
            return Err(ConfigError::EmptyAnteTable);
        }
        if !(1..=MAX_SELECTED_CARDS).contains(&self.max_selected) {
            return Err(ConfigError::InvalidLimit {
                name: "max_selected",
                value: self.max_selected,
                min: 1,
                max: MAX_SELECTED_CARDS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ante_goals_grow_past_the_table() {
        let table = AnteTable {
            base_goals: vec![300, 800],
            growth: 1.5,
        };
        assert_eq!(table.base_goal(1), Some(300));
        assert_eq!(table.base_goal(2), Some(800));
        assert_eq!(table.base_goal(3), Some(1200));
        assert_eq!(table.base_goal(4), Some(1800));
    }

    #[test]
    fn interest_is_capped() {
        let economy = EconomyRule {
            interest_step: 5,
            interest_per: 1,
            interest_cap: 5,
            reroll_cost: 5,
        };
        assert_eq!(economy.interest(4), 0);
        assert_eq!(economy.interest(14), 2);
        assert_eq!(economy.interest(25), 5);
        assert_eq!(economy.interest(120), 5);
    }
}
