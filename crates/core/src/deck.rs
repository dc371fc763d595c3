use crate::{Card, Edition, EditionOdds, RandomSource, Rank, Suit};
use serde::{Deserialize, Serialize};

/// Cards of the current round that are not in hand: the undrawn pool and
/// everything already played or discarded.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    pub fn standard52<R: RandomSource + ?Sized>(rng: &mut R, odds: &EditionOdds) -> Self {
        Self {
            draw: create_deck(rng, odds),
            discard: Vec::new(),
        }
    }

    /// Removes a uniformly random undrawn card.
    pub fn draw_random<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        let idx = rng.pick_index(self.draw.len())?;
        Some(self.draw.swap_remove(idx))
    }

    pub fn discard(&mut self, mut cards: Vec<Card>) {
        for card in &mut cards {
            card.selected = false;
        }
        self.discard.append(&mut cards);
    }

    pub fn len(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }
}

/// Builds the 52 standard cards with ids 1..=52, rolling one edition upgrade
/// chance per card.
pub fn create_deck<R: RandomSource + ?Sized>(rng: &mut R, odds: &EditionOdds) -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    let mut next_id = 1u32;
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let edition = roll_edition(rng.next_f64(), odds);
            cards.push(Card::standard(next_id, suit, rank).with_edition(edition));
            next_id += 1;
        }
    }
    cards
}

fn roll_edition(roll: f64, odds: &EditionOdds) -> Edition {
    if roll >= 1.0 - odds.holographic {
        Edition::Holographic
    } else if roll >= 1.0 - odds.holographic - odds.foil {
        Edition::Foil
    } else {
        Edition::Base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedSequence;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_every_card_once() {
        let mut rng = FixedSequence::zeros();
        let cards = create_deck(&mut rng, &EditionOdds::default());
        assert_eq!(cards.len(), 52);
        let pairs: HashSet<(Suit, Rank)> = cards.iter().map(|c| (c.suit, c.rank)).collect();
        assert_eq!(pairs.len(), 52);
        let ids: HashSet<u32> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 52);
        assert!(cards.iter().all(|c| c.edition == Edition::Base));
    }

    #[test]
    fn high_rolls_upgrade_editions() {
        let odds = EditionOdds::default();
        assert_eq!(roll_edition(0.5, &odds), Edition::Base);
        assert_eq!(roll_edition(0.995, &odds), Edition::Foil);
        assert_eq!(roll_edition(0.9995, &odds), Edition::Holographic);

        let mut rng = FixedSequence::new(vec![u64::MAX]);
        let cards = create_deck(&mut rng, &odds);
        assert!(cards.iter().all(|c| c.edition == Edition::Holographic));
    }

    #[test]
    fn draw_random_exhausts_without_replacement() {
        let mut rng = FixedSequence::new(vec![5, 11, 2]);
        let mut deck = Deck::standard52(&mut FixedSequence::zeros(), &EditionOdds::default());
        let mut seen = HashSet::new();
        while let Some(card) = deck.draw_random(&mut rng) {
            assert!(seen.insert(card.id));
        }
        assert_eq!(seen.len(), 52);
        assert!(deck.is_empty());
    }
}
