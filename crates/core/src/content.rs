use crate::{
    level_kind, BossEffect, ConfigError, ConsumableEffect, ConsumableKind, GameConfig, JokerKind,
    JokerRarity, RandomSource,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Presentation hints carried alongside content; never read by rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemVisual {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JokerDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: JokerRarity,
    pub cost: i64,
    pub kind: JokerKind,
    #[serde(default)]
    pub visual: ItemVisual,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsumableDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: ConsumableKind,
    pub cost: i64,
    pub effect: ConsumableEffect,
    #[serde(default)]
    pub visual: ItemVisual,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BossDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub effect: BossEffect,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    pub jokers: Vec<JokerDef>,
    pub planets: Vec<ConsumableDef>,
    pub tarots: Vec<ConsumableDef>,
    pub bosses: Vec<BossDef>,
}

impl Content {
    pub fn joker_by_id(&self, id: &str) -> Option<&JokerDef> {
        self.jokers.iter().find(|joker| joker.id == id)
    }

    pub fn consumable_by_id(&self, id: &str) -> Option<&ConsumableDef> {
        self.planets
            .iter()
            .chain(self.tarots.iter())
            .find(|item| item.id == id)
    }

    pub fn boss_by_id(&self, id: &str) -> Option<&BossDef> {
        self.bosses.iter().find(|boss| boss.id == id)
    }

    pub fn pick_joker<'a, R: RandomSource + ?Sized>(&'a self, rng: &mut R) -> Option<&'a JokerDef> {
        rng.pick_index(self.jokers.len())
            .and_then(|idx| self.jokers.get(idx))
    }

    pub fn pick_consumable<'a, R: RandomSource + ?Sized>(
        &'a self,
        kind: ConsumableKind,
        rng: &mut R,
    ) -> Option<&'a ConsumableDef> {
        let pool = match kind {
            ConsumableKind::Tarot => &self.tarots,
            ConsumableKind::Planet => &self.planets,
        };
        rng.pick_index(pool.len()).and_then(|idx| pool.get(idx))
    }

    pub fn pick_boss<'a, R: RandomSource + ?Sized>(&'a self, rng: &mut R) -> Option<&'a BossDef> {
        rng.pick_index(self.bosses.len())
            .and_then(|idx| self.bosses.get(idx))
    }

    /// Checks that every id is unique, every pool the shop draws from is
    /// populated, and every planet levels a configured hand.
    pub fn validate(&self, config: &GameConfig) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        let ids = self
            .jokers
            .iter()
            .map(|joker| ("joker", joker.id.as_str()))
            .chain(self.planets.iter().map(|item| ("planet", item.id.as_str())))
            .chain(self.tarots.iter().map(|item| ("tarot", item.id.as_str())))
            .chain(self.bosses.iter().map(|boss| ("boss", boss.id.as_str())));
        for (kind, id) in ids {
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateId {
                    kind,
                    id: id.to_string(),
                });
            }
        }
        if config.shop.joker_offers > 0 && self.jokers.is_empty() {
            return Err(ConfigError::EmptyPool { kind: "joker" });
        }
        if config.shop.planet_offers > 0 && self.planets.is_empty() {
            return Err(ConfigError::EmptyPool { kind: "planet" });
        }
        if config.shop.tarot_offers > 0 && self.tarots.is_empty() {
            return Err(ConfigError::EmptyPool { kind: "tarot" });
        }
        if self.bosses.is_empty() {
            return Err(ConfigError::NoBosses);
        }
        for planet in &self.planets {
            if let ConsumableEffect::LevelUp(hand) = planet.effect {
                if config.hand_rule(level_kind(hand)).is_none() {
                    return Err(ConfigError::UnknownHand {
                        item: planet.id.clone(),
                        hand,
                    });
                }
            }
        }
        Ok(())
    }
}
