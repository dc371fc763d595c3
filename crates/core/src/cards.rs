use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub fn is_black(self) -> bool {
        matches!(self, Suit::Spades | Suit::Clubs)
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '\u{2660}',
            Suit::Hearts => '\u{2665}',
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ordinal value used for straights and sorting; Ace is high (14).
    pub fn value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }

    pub fn chips(self) -> i64 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            other => other.value() as i64,
        }
    }

    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Next rank up, saturating at Ace.
    pub fn raised(self) -> Rank {
        let idx = Rank::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Rank::ALL[(idx + 1).min(Rank::ALL.len() - 1)]
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Enhancement {
    #[default]
    None,
    Bonus,
    Mult,
    Wild,
    Glass,
    Steel,
    Stone,
    Gold,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Edition {
    #[default]
    Base,
    Foil,
    Holographic,
    Polychrome,
    Negative,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: u32,
    pub suit: Suit,
    pub rank: Rank,
    #[serde(default)]
    pub edition: Edition,
    #[serde(default)]
    pub enhancement: Enhancement,
    pub chips: i64,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub debuffed: bool,
}

impl Card {
    pub fn standard(id: u32, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            edition: Edition::Base,
            enhancement: Enhancement::None,
            chips: rank.chips(),
            selected: false,
            debuffed: false,
        }
    }

    pub fn with_enhancement(mut self, enhancement: Enhancement) -> Self {
        self.enhancement = enhancement;
        self
    }

    pub fn with_edition(mut self, edition: Edition) -> Self {
        self.edition = edition;
        self
    }

    pub fn is_stone(&self) -> bool {
        self.enhancement == Enhancement::Stone
    }

    pub fn label(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    Rank,
    Suit,
}

/// Rank order sorts high to low, breaking ties by suit; suit order groups by
/// suit, then high to low.
pub fn sort_cards(cards: &mut [Card], order: SortOrder) {
    match order {
        SortOrder::Rank => cards.sort_by(|a, b| {
            b.rank
                .value()
                .cmp(&a.rank.value())
                .then_with(|| a.suit.cmp(&b.suit))
        }),
        SortOrder::Suit => cards.sort_by(|a, b| {
            a.suit
                .cmp(&b.suit)
                .then_with(|| b.rank.value().cmp(&a.rank.value()))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_values_follow_rank() {
        assert_eq!(Rank::Two.chips(), 2);
        assert_eq!(Rank::Ten.chips(), 10);
        assert_eq!(Rank::Jack.chips(), 10);
        assert_eq!(Rank::King.chips(), 10);
        assert_eq!(Rank::Ace.chips(), 11);
    }

    #[test]
    fn raised_rank_saturates_at_ace() {
        assert_eq!(Rank::Nine.raised(), Rank::Ten);
        assert_eq!(Rank::King.raised(), Rank::Ace);
        assert_eq!(Rank::Ace.raised(), Rank::Ace);
    }

    #[test]
    fn sort_by_suit_groups_then_ranks() {
        let mut cards = vec![
            Card::standard(1, Suit::Hearts, Rank::Two),
            Card::standard(2, Suit::Spades, Rank::Three),
            Card::standard(3, Suit::Hearts, Rank::King),
        ];
        sort_cards(&mut cards, SortOrder::Suit);
        let ids: Vec<u32> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        sort_cards(&mut cards, SortOrder::Rank);
        let ids: Vec<u32> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
