use super::*;
use crate::*;

impl<R: RandomSource + Clone> RunState<R> {
    /// Tops the hand up to `hand_size` while a hand is being built. Cards
    /// pick up the active boss debuff as they are drawn.
    pub(super) fn refill_hand(&mut self, events: &mut EventBus) {
        if self.state.phase != Phase::PlayHand {
            return;
        }
        let boss = self.state.blind.as_ref().and_then(|blind| blind.boss);
        let mut count = 0;
        while self.state.hand.len() < self.state.hand_size {
            let Some(mut card) = self.state.deck.draw_random(&mut self.rng) else {
                break;
            };
            card.selected = false;
            card.debuffed = boss.is_some_and(|effect| effect.debuffs(&card));
            self.state.hand.push(card);
            count += 1;
        }
        if count > 0 {
            sort_cards(&mut self.state.hand, SortOrder::Rank);
            events.push(Event::HandDealt { count });
        }
    }

    pub(super) fn toggle_card(&mut self, card_id: u32) -> Result<(), RunError> {
        self.require_phase(Phase::PlayHand)?;
        let selected = self.state.selected_count();
        let max_selected = self.config.max_selected;
        let card = self
            .state
            .hand
            .iter_mut()
            .find(|card| card.id == card_id)
            .ok_or(RunError::UnknownCard(card_id))?;
        if !card.selected && selected >= max_selected {
            return Err(RunError::TooManySelected);
        }
        card.selected = !card.selected;
        Ok(())
    }

    pub(super) fn sort_hand(&mut self, order: SortOrder) -> Result<(), RunError> {
        self.require_phase(Phase::PlayHand)?;
        sort_cards(&mut self.state.hand, order);
        Ok(())
    }

    pub(super) fn discard_selected(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.require_phase(Phase::PlayHand)?;
        if self.state.discards_left == 0 {
            return Err(RunError::NoDiscardsLeft);
        }
        if self.state.selected_count() == 0 {
            return Err(RunError::NothingSelected);
        }
        let discarded = self.take_selected();
        let count = discarded.len();
        self.state.deck.discard(discarded);
        self.state.discards_left -= 1;
        self.state.inventory.discard_triggers();

        let income = match self.state.deck_variant.as_ref().map(|variant| &variant.rule) {
            Some(DeckRule::HandDiscardPayout { discard_income, .. }) => *discard_income,
            _ => 0,
        };
        if income > 0 {
            self.state.money += income;
            self.state.notices.push(format!("Discard +${income}"));
        }
        events.push(Event::CardsDiscarded { count, income });
        Ok(())
    }

    pub(super) fn play_hand(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.require_phase(Phase::PlayHand)?;
        if self.state.hands_left == 0 {
            return Err(RunError::NoHandsLeft);
        }
        let selected = self.state.selected_cards();
        if selected.is_empty() {
            return Err(RunError::NothingSelected);
        }
        let eval = evaluate_hand(&selected, &self.state.hand_levels);
        let outcome = score_hand(&eval, &self.state.hand, &self.state.inventory.jokers);
        events.push(Event::HandScored {
            hand: outcome.hand,
            chips: outcome.chips,
            mult: outcome.mult,
            total: outcome.score,
        });
        self.state.scoring = Some(outcome);
        self.state.phase = Phase::Scoring;
        Ok(())
    }

    pub(super) fn finish_scoring(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.require_phase(Phase::Scoring)?;
        let outcome = self.state.scoring.take().ok_or(RunError::NoPendingScore)?;
        for (joker, next) in self
            .state
            .inventory
            .jokers
            .iter_mut()
            .zip(outcome.joker_states.iter())
        {
            joker.state = *next;
        }
        let played = self.take_selected();
        self.state.deck.discard(played);
        self.state.hands_left = self.state.hands_left.saturating_sub(1);
        self.state.current_score += outcome.score;
        self.state.display_score = self.state.current_score;
        self.state.last_score = Some(outcome);

        let score = self.state.current_score;
        let (goal, reward) = self
            .state
            .blind
            .as_ref()
            .map(|blind| (blind.score_goal, blind.reward))
            .unwrap_or((0, 0));
        if score >= goal {
            self.state.phase = Phase::Victory;
            tracing::info!(score, goal, "blind cleared");
            events.push(Event::BlindCleared {
                score,
                reward,
                money: self.state.money,
            });
        } else if self.state.hands_left == 0 {
            self.state.phase = Phase::GameOver;
            tracing::info!(score, goal, "blind failed");
            events.push(Event::BlindFailed { score });
        } else {
            self.state.phase = Phase::PlayHand;
        }
        Ok(())
    }

    fn take_selected(&mut self) -> Vec<Card> {
        let (selected, kept): (Vec<Card>, Vec<Card>) =
            self.state.hand.drain(..).partition(|card| card.selected);
        self.state.hand = kept;
        selected
    }
}
