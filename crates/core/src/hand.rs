use crate::{Card, HandLevels, Rank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
    RoyalFlush,
    FiveOfAKind,
}

impl HandKind {
    pub const ALL: [HandKind; 11] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::Trips,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::Quads,
        HandKind::StraightFlush,
        HandKind::RoyalFlush,
        HandKind::FiveOfAKind,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::HighCard => "high_card",
            HandKind::Pair => "pair",
            HandKind::TwoPair => "two_pair",
            HandKind::Trips => "trips",
            HandKind::Straight => "straight",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::Quads => "quads",
            HandKind::StraightFlush => "straight_flush",
            HandKind::RoyalFlush => "royal_flush",
            HandKind::FiveOfAKind => "five_kind",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::Trips => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::Quads => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::RoyalFlush => "Royal Flush",
            HandKind::FiveOfAKind => "Five of a Kind",
        }
    }
}

/// Royal flushes share the straight flush level entry.
pub fn level_kind(kind: HandKind) -> HandKind {
    match kind {
        HandKind::RoyalFlush => HandKind::StraightFlush,
        other => other,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandEvaluation {
    pub kind: HandKind,
    /// The full selected set, in the order it was given.
    pub cards: Vec<Card>,
    /// Cards that score, highest rank first with stone cards appended.
    pub scoring: Vec<Card>,
    pub base_chips: i64,
    pub base_mult: f64,
}

impl HandEvaluation {
    /// The "nothing selected" display state.
    pub fn empty() -> Self {
        Self {
            kind: HandKind::HighCard,
            cards: Vec::new(),
            scoring: Vec::new(),
            base_chips: 0,
            base_mult: 0.0,
        }
    }
}

pub fn evaluate_hand(selected: &[Card], levels: &HandLevels) -> HandEvaluation {
    if selected.is_empty() {
        return HandEvaluation::empty();
    }

    let mut functional: Vec<Card> = selected.iter().copied().filter(|c| !c.is_stone()).collect();
    functional.sort_by(|a, b| b.rank.value().cmp(&a.rank.value()));
    let kind = classify(&functional);

    let mut scoring = if kind == HandKind::HighCard {
        functional.first().copied().into_iter().collect()
    } else {
        functional
    };
    scoring.extend(selected.iter().copied().filter(|c| c.is_stone()));

    let level = levels.get(kind);
    HandEvaluation {
        kind,
        cards: selected.to_vec(),
        scoring,
        base_chips: level.chips,
        base_mult: level.mult,
    }
}

/// Classifies non-stone cards, expected sorted high to low.
fn classify(cards: &[Card]) -> HandKind {
    if cards.is_empty() {
        return HandKind::HighCard;
    }

    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    for card in cards {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
    }
    let mut counts: Vec<usize> = rank_counts.values().copied().collect();
    counts.sort_by(|a, b| b.cmp(a));
    let first = counts.first().copied().unwrap_or(0);
    let second = counts.get(1).copied().unwrap_or(0);

    let flush = is_flush(cards);
    let straight = is_straight(cards);

    if flush && straight {
        let has_ace = cards.iter().any(|c| c.rank == Rank::Ace);
        let has_king = cards.iter().any(|c| c.rank == Rank::King);
        return if has_ace && has_king {
            HandKind::RoyalFlush
        } else {
            HandKind::StraightFlush
        };
    }
    if first == 5 {
        return HandKind::FiveOfAKind;
    }
    if first == 4 {
        return HandKind::Quads;
    }
    if first == 3 && second == 2 {
        return HandKind::FullHouse;
    }
    if flush {
        return HandKind::Flush;
    }
    if straight {
        return HandKind::Straight;
    }
    if first == 3 {
        return HandKind::Trips;
    }
    if first == 2 && second == 2 {
        return HandKind::TwoPair;
    }
    if first == 2 {
        return HandKind::Pair;
    }
    HandKind::HighCard
}

/// Five cards sharing one printed suit.
fn is_flush(cards: &[Card]) -> bool {
    match cards {
        [first, rest @ ..] if cards.len() == 5 => rest.iter().all(|c| c.suit == first.suit),
        _ => false,
    }
}

fn is_straight(cards: &[Card]) -> bool {
    if cards.len() != 5 {
        return false;
    }
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values.dedup();
    if values.len() != 5 {
        return false;
    }
    values[0] - values[4] == 4 || values == [14, 5, 4, 3, 2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Enhancement, Suit};

    fn card(id: u32, suit: Suit, rank: Rank) -> Card {
        Card::standard(id, suit, rank)
    }

    #[test]
    fn stone_only_selection_scores_the_stones() {
        let stones = vec![
            card(1, Suit::Hearts, Rank::Two).with_enhancement(Enhancement::Stone),
            card(2, Suit::Clubs, Rank::Nine).with_enhancement(Enhancement::Stone),
        ];
        let eval = evaluate_hand(&stones, &HandLevels::standard());
        assert_eq!(eval.kind, HandKind::HighCard);
        assert_eq!(eval.scoring.len(), 2);
    }

    #[test]
    fn wild_card_keeps_its_printed_suit() {
        let cards = vec![
            card(1, Suit::Hearts, Rank::Two),
            card(2, Suit::Hearts, Rank::Six),
            card(3, Suit::Hearts, Rank::Nine),
            card(4, Suit::Hearts, Rank::Jack),
            card(5, Suit::Spades, Rank::King).with_enhancement(Enhancement::Wild),
        ];
        assert_eq!(classify(&cards), HandKind::HighCard);
    }

    #[test]
    fn four_card_run_is_not_a_straight() {
        let cards = vec![
            card(1, Suit::Hearts, Rank::Nine),
            card(2, Suit::Clubs, Rank::Eight),
            card(3, Suit::Spades, Rank::Seven),
            card(4, Suit::Diamonds, Rank::Six),
        ];
        assert_eq!(classify(&cards), HandKind::HighCard);
    }
}
