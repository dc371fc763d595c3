use crate::{BlindKind, SortOrder};
use serde::{Deserialize, Serialize};

/// Every input a front end can send to a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    OpenDeckSelect,
    SelectDeck { deck_id: String },
    SelectBlind { blind: BlindKind },
    ToggleCard { card_id: u32 },
    Discard,
    PlayHand,
    FinishScoring,
    SortHand { order: SortOrder },
    UseConsumable { index: usize, target: Option<u32> },
    EndRound,
    BuyItem { index: usize },
    RerollShop,
    AdvanceRound,
    GameOver,
}

impl Action {
    pub fn label(&self) -> String {
        match self {
            Self::OpenDeckSelect => "open_deck_select".to_string(),
            Self::SelectDeck { deck_id } => format!("select_deck {deck_id}"),
            Self::SelectBlind { blind } => format!("select_blind {blind:?}"),
            Self::ToggleCard { card_id } => format!("toggle {card_id}"),
            Self::Discard => "discard".to_string(),
            Self::PlayHand => "play".to_string(),
            Self::FinishScoring => "finish_scoring".to_string(),
            Self::SortHand { order } => format!("sort {order:?}"),
            Self::UseConsumable { index, target } => match target {
                Some(card) => format!("use {index} on {card}"),
                None => format!("use {index}"),
            },
            Self::EndRound => "end_round".to_string(),
            Self::BuyItem { index } => format!("buy {index}"),
            Self::RerollShop => "reroll".to_string(),
            Self::AdvanceRound => "advance_round".to_string(),
            Self::GameOver => "game_over".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_are_tagged_by_type() {
        let action = Action::ToggleCard { card_id: 7 };
        let value = serde_json::to_value(&action).expect("serialize");
        assert_eq!(value["type"], "toggle_card");
        assert_eq!(value["card_id"], 7);
        let back: Action = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, action);
    }
}
