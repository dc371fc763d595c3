use crate::{BlindKind, HandKind, ShopOfferKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    BlindStarted {
        ante: u32,
        blind: BlindKind,
        target: i64,
        hands: u8,
        discards: u8,
    },
    HandDealt { count: usize },
    CardsDiscarded { count: usize, income: i64 },
    HandScored {
        hand: HandKind,
        chips: i64,
        mult: f64,
        total: i64,
    },
    BlindCleared { score: i64, reward: i64, money: i64 },
    BlindFailed { score: i64 },
    ShopEntered { offers: usize, reroll_cost: i64 },
    ShopRerolled { offers: usize, cost: i64, money: i64 },
    ShopBought {
        offer: ShopOfferKind,
        cost: i64,
        money: i64,
    },
    ConsumableUsed { id: String, target: Option<u32> },
    RoundAdvanced { round: u32, ante: u32 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    /// Moves every queued event of `other` onto this bus, keeping order.
    pub fn append(&mut self, other: &mut EventBus) {
        self.queue.append(&mut other.queue);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
