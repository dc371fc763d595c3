use crate::{
    Card, Deck, DeckVariant, HandLevels, Inventory, ScoreOutcome, ShopState, Suit,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Menu,
    DeckSelect,
    BlindSelect,
    PlayHand,
    Scoring,
    Victory,
    Shop,
    GameOver,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlindKind {
    Small,
    Big,
    Boss,
}

impl BlindKind {
    pub const ALL: [BlindKind; 3] = [BlindKind::Small, BlindKind::Big, BlindKind::Boss];

    /// The blind scheduled for a 1-based round number.
    pub fn for_round(round: u32) -> BlindKind {
        Self::ALL[(round.max(1) as usize - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BossEffect {
    None,
    SuitDebuffed(Suit),
    FaceDebuffed,
}

impl BossEffect {
    pub fn debuffs(self, card: &Card) -> bool {
        match self {
            BossEffect::None => false,
            BossEffect::SuitDebuffed(suit) => !card.is_stone() && card.suit == suit,
            BossEffect::FaceDebuffed => !card.is_stone() && card.rank.is_face(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Blind {
    pub kind: BlindKind,
    pub name: String,
    pub score_goal: i64,
    pub reward: i64,
    /// Active only while a boss blind is being played.
    pub boss: Option<BossEffect>,
}

/// Everything a front end needs to render a run. Owned by
/// [`crate::RunState`] and only changed through dispatched actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub money: i64,
    /// 1-based; three rounds per ante.
    pub round: u32,
    pub ante: u32,
    pub deck_variant: Option<DeckVariant>,
    pub hands_left: u8,
    pub discards_left: u8,
    pub hand_size: usize,
    pub deck: Deck,
    pub hand: Vec<Card>,
    pub inventory: Inventory,
    pub blind: Option<Blind>,
    /// Boss chosen for the current ante.
    pub boss_id: Option<String>,
    pub current_score: i64,
    /// Score shown to the player; trails `current_score` while a hand is
    /// being revealed.
    pub display_score: i64,
    pub shop: Option<ShopState>,
    pub hand_levels: HandLevels,
    pub scoring: Option<ScoreOutcome>,
    pub last_score: Option<ScoreOutcome>,
    #[serde(default)]
    pub notices: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Menu,
            money: 0,
            round: 1,
            ante: 1,
            deck_variant: None,
            hands_left: 0,
            discards_left: 0,
            hand_size: 0,
            deck: Deck::default(),
            hand: Vec::new(),
            inventory: Inventory::default(),
            blind: None,
            boss_id: None,
            current_score: 0,
            display_score: 0,
            shop: None,
            hand_levels: HandLevels::standard(),
            scoring: None,
            last_score: None,
            notices: Vec::new(),
        }
    }

    /// Fresh run state for a chosen deck variant, waiting on blind select.
    pub fn for_variant(
        variant: &DeckVariant,
        hand_levels: HandLevels,
        consumable_slots: usize,
    ) -> Self {
        Self {
            phase: Phase::BlindSelect,
            money: variant.money,
            hands_left: variant.hands,
            discards_left: variant.discards,
            hand_size: variant.hand_size,
            inventory: Inventory::with_slots(variant.joker_slots, consumable_slots),
            hand_levels,
            deck_variant: Some(variant.clone()),
            ..Self::new()
        }
    }

    pub fn selected_cards(&self) -> Vec<Card> {
        self.hand.iter().copied().filter(|card| card.selected).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.hand.iter().filter(|card| card.selected).count()
    }

    /// Cards of the round across draw pile, hand and discard pile.
    pub fn round_card_count(&self) -> usize {
        self.deck.draw.len() + self.hand.len() + self.deck.discard.len()
    }

    pub fn goal(&self) -> i64 {
        self.blind.as_ref().map(|blind| blind.score_goal).unwrap_or(0)
    }
}
