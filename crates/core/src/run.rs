use crate::{
    Action, BlindKind, ConfigError, Content, EventBus, GameConfig, GameState, InventoryError,
    Phase, RandomSource, RngState,
};
use thiserror::Error;

mod blind;
mod consumable;
mod hand;
mod round;
mod shop;

pub use blind::BlindOption;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RunError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("unknown deck {0}")]
    UnknownDeck(String),
    #[error("blind {0:?} is not selectable this round")]
    BlindNotSelectable(BlindKind),
    #[error("missing config for blind {0:?}")]
    MissingBlindRule(BlindKind),
    #[error("missing score goal for ante {0}")]
    MissingAnteGoal(u32),
    #[error("no card {0} in hand")]
    UnknownCard(u32),
    #[error("too many cards selected")]
    TooManySelected,
    #[error("no cards selected")]
    NothingSelected,
    #[error("no hands left")]
    NoHandsLeft,
    #[error("no discards left")]
    NoDiscardsLeft,
    #[error("no pending score")]
    NoPendingScore,
    #[error("not enough money")]
    NotEnoughMoney,
    #[error("shop not available")]
    ShopNotAvailable,
    #[error("invalid shop offer index")]
    InvalidOfferIndex,
    #[error("invalid consumable index")]
    InvalidConsumableIndex,
    #[error("consumable needs a target card")]
    TargetRequired,
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),
}

/// Owns one run: rules, content, the random source and the current
/// [`GameState`]. The only way to change the state is through
/// [`RunState::dispatch`] or [`RunState::try_apply`].
#[derive(Debug)]
pub struct RunState<R: RandomSource + Clone = RngState> {
    pub config: GameConfig,
    pub content: Content,
    pub rng: R,
    state: GameState,
}

impl RunState<RngState> {
    pub fn with_seed(config: GameConfig, content: Content, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, content, RngState::from_seed(seed))
    }
}

impl<R: RandomSource + Clone> RunState<R> {
    pub fn new(config: GameConfig, content: Content, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        content.validate(&config)?;
        Ok(Self {
            config,
            content,
            rng,
            state: GameState::new(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies `action` if it is legal in the current state. A rejected
    /// action is logged and leaves state and rng exactly as they were.
    pub fn dispatch(&mut self, action: Action, events: &mut EventBus) -> &GameState {
        if let Err(err) = self.try_apply(action.clone(), events) {
            tracing::debug!(action = %action.label(), phase = ?self.state.phase, error = %err, "action rejected");
        }
        &self.state
    }

    pub fn try_apply(&mut self, action: Action, events: &mut EventBus) -> Result<(), RunError> {
        let saved_state = self.state.clone();
        let saved_rng = self.rng.clone();
        let mut pending = EventBus::default();
        match self.apply(action, &mut pending) {
            Ok(()) => {
                self.refill_hand(&mut pending);
                events.append(&mut pending);
                Ok(())
            }
            Err(err) => {
                self.state = saved_state;
                self.rng = saved_rng;
                Err(err)
            }
        }
    }

    fn apply(&mut self, action: Action, events: &mut EventBus) -> Result<(), RunError> {
        match action {
            Action::OpenDeckSelect => self.open_deck_select(),
            Action::SelectDeck { deck_id } => self.select_deck(&deck_id),
            Action::SelectBlind { blind } => self.select_blind(blind, events),
            Action::ToggleCard { card_id } => self.toggle_card(card_id),
            Action::Discard => self.discard_selected(events),
            Action::PlayHand => self.play_hand(events),
            Action::FinishScoring => self.finish_scoring(events),
            Action::SortHand { order } => self.sort_hand(order),
            Action::UseConsumable { index, target } => self.use_consumable(index, target, events),
            Action::EndRound => self.end_round(events),
            Action::BuyItem { index } => self.buy_item(index, events),
            Action::RerollShop => self.reroll_shop(events),
            Action::AdvanceRound => self.advance_round(events),
            Action::GameOver => {
                self.state = GameState::new();
                Ok(())
            }
        }
    }

    fn require_phase(&self, phase: Phase) -> Result<(), RunError> {
        if self.state.phase == phase {
            Ok(())
        } else {
            Err(RunError::InvalidPhase(self.state.phase))
        }
    }
}
