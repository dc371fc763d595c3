use crate::{
    ConsumableDef, ConsumableEffect, ConsumableKind, JokerDef, JokerKind, JokerState,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JokerInstance {
    pub id: String,
    pub name: String,
    pub kind: JokerKind,
    #[serde(default)]
    pub state: JokerState,
}

impl JokerInstance {
    pub fn new(id: impl Into<String>, kind: JokerKind) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind,
            state: kind.initial_state(),
        }
    }

    pub fn from_def(def: &JokerDef) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            kind: def.kind,
            state: def.kind.initial_state(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsumableInstance {
    pub id: String,
    pub name: String,
    pub kind: ConsumableKind,
    pub effect: ConsumableEffect,
}

impl ConsumableInstance {
    pub fn from_def(def: &ConsumableDef) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            kind: def.kind,
            effect: def.effect,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inventory {
    pub joker_slots: usize,
    pub consumable_slots: usize,
    pub jokers: Vec<JokerInstance>,
    pub consumables: Vec<ConsumableInstance>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("no joker slots")]
    NoJokerSlots,
    #[error("no consumable slots")]
    NoConsumableSlots,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_slots(5, 2)
    }
}

impl Inventory {
    /// Create a new inventory with explicit initial slot counts.
    pub fn with_slots(joker_slots: usize, consumable_slots: usize) -> Self {
        Self {
            joker_slots,
            consumable_slots,
            jokers: Vec::new(),
            consumables: Vec::new(),
        }
    }

    pub fn jokers_full(&self) -> bool {
        self.jokers.len() >= self.joker_slots
    }

    pub fn consumables_full(&self) -> bool {
        self.consumables.len() >= self.consumable_slots
    }

    pub fn add_joker(&mut self, joker: JokerInstance) -> Result<(), InventoryError> {
        if self.jokers_full() {
            return Err(InventoryError::NoJokerSlots);
        }
        self.jokers.push(joker);
        Ok(())
    }

    pub fn add_consumable(&mut self, item: ConsumableInstance) -> Result<(), InventoryError> {
        if self.consumables_full() {
            return Err(InventoryError::NoConsumableSlots);
        }
        self.consumables.push(item);
        Ok(())
    }

    pub fn take_consumable(&mut self, index: usize) -> Option<ConsumableInstance> {
        if index < self.consumables.len() {
            Some(self.consumables.remove(index))
        } else {
            None
        }
    }

    pub fn discard_triggers(&mut self) {
        for joker in &mut self.jokers {
            joker.kind.on_discard(&mut joker.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandKind;

    #[test]
    fn slots_bound_each_pool() {
        let mut inventory = Inventory::with_slots(1, 1);
        inventory
            .add_joker(JokerInstance::new("j_joker", JokerKind::Joker))
            .expect("first joker");
        assert_eq!(
            inventory.add_joker(JokerInstance::new("j_duo", JokerKind::TheDuo)),
            Err(InventoryError::NoJokerSlots)
        );
        let planet = ConsumableInstance {
            id: "p_mercury".to_string(),
            name: "Mercury".to_string(),
            kind: ConsumableKind::Planet,
            effect: ConsumableEffect::LevelUp(HandKind::Pair),
        };
        inventory.add_consumable(planet.clone()).expect("planet");
        assert_eq!(
            inventory.add_consumable(planet),
            Err(InventoryError::NoConsumableSlots)
        );
        assert!(inventory.take_consumable(3).is_none());
        assert!(inventory.take_consumable(0).is_some());
    }
}
