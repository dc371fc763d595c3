use crate::{ConsumableDef, ConsumableKind, Content, JokerDef, RandomSource, ShopRule};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ShopItem {
    Joker(JokerDef),
    Consumable(ConsumableDef),
}

impl ShopItem {
    pub fn name(&self) -> &str {
        match self {
            ShopItem::Joker(def) => &def.name,
            ShopItem::Consumable(def) => &def.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ShopItem::Joker(def) => &def.description,
            ShopItem::Consumable(def) => &def.description,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ShopOfferKind {
    Joker,
    Planet,
    Tarot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopOffer {
    pub item: ShopItem,
    pub cost: i64,
}

impl ShopOffer {
    pub fn kind(&self) -> ShopOfferKind {
        match &self.item {
            ShopItem::Joker(_) => ShopOfferKind::Joker,
            ShopItem::Consumable(def) => match def.kind {
                ConsumableKind::Planet => ShopOfferKind::Planet,
                ConsumableKind::Tarot => ShopOfferKind::Tarot,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopState {
    pub offers: Vec<ShopOffer>,
    pub reroll_cost: i64,
}

impl ShopState {
    /// Jokers first, then planets, then tarots. Each slot draws uniformly
    /// from its pool and may repeat an earlier slot.
    pub fn generate<R: RandomSource + ?Sized>(
        rule: &ShopRule,
        content: &Content,
        rng: &mut R,
        reroll_cost: i64,
    ) -> Self {
        let mut offers = Vec::new();
        for _ in 0..rule.joker_offers {
            if let Some(def) = content.pick_joker(rng) {
                offers.push(ShopOffer {
                    cost: def.cost,
                    item: ShopItem::Joker(def.clone()),
                });
            }
        }
        let consumables = [
            (ConsumableKind::Planet, rule.planet_offers),
            (ConsumableKind::Tarot, rule.tarot_offers),
        ];
        for (kind, count) in consumables {
            for _ in 0..count {
                if let Some(def) = content.pick_consumable(kind, rng) {
                    offers.push(ShopOffer {
                        cost: def.cost,
                        item: ShopItem::Consumable(def.clone()),
                    });
                }
            }
        }
        Self {
            offers,
            reroll_cost,
        }
    }

    pub fn offer(&self, index: usize) -> Option<&ShopOffer> {
        self.offers.get(index)
    }

    pub fn take_offer(&mut self, index: usize) -> Option<ShopOffer> {
        if index < self.offers.len() {
            Some(self.offers.remove(index))
        } else {
            None
        }
    }
}
