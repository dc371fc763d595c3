use super::*;
use crate::*;

impl<R: RandomSource + Clone> RunState<R> {
    /// Money earned for a cleared blind. Interest is taken on the balance
    /// before the blind reward is added.
    pub fn round_payout(&self) -> i64 {
        let reward = self.state.blind.as_ref().map(|blind| blind.reward).unwrap_or(0);
        let rule = self.state.deck_variant.as_ref().map(|variant| &variant.rule);
        let bonus = match rule {
            Some(DeckRule::HandDiscardPayout {
                per_hand,
                per_discard,
                ..
            }) => {
                per_hand * i64::from(self.state.hands_left)
                    + per_discard * i64::from(self.state.discards_left)
            }
            _ => self.config.economy.interest(self.state.money),
        };
        reward + bonus
    }

    pub(super) fn end_round(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.require_phase(Phase::Victory)?;
        let payout = self.round_payout();
        self.state.money += payout;
        self.state.notices.push(format!("Round payout +${payout}"));

        let held: Vec<Card> = self.state.hand.drain(..).collect();
        self.state.deck.discard(held);

        let shop = ShopState::generate(
            &self.config.shop,
            &self.content,
            &mut self.rng,
            self.config.economy.reroll_cost,
        );
        events.push(Event::ShopEntered {
            offers: shop.offers.len(),
            reroll_cost: shop.reroll_cost,
        });
        self.state.shop = Some(shop);
        self.state.phase = Phase::Shop;
        tracing::info!(payout, money = self.state.money, "round settled");
        Ok(())
    }

    pub(super) fn advance_round(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.require_phase(Phase::Shop)?;
        let leaving = self.state.round;
        self.state.round = leaving.saturating_add(1);
        if leaving % 3 == 0 {
            self.state.ante = self.state.ante.saturating_add(1);
            self.pick_boss();
        }
        self.state.shop = None;
        self.state.blind = None;
        self.state.current_score = 0;
        self.state.display_score = 0;
        self.state.phase = Phase::BlindSelect;
        events.push(Event::RoundAdvanced {
            round: self.state.round,
            ante: self.state.ante,
        });
        Ok(())
    }
}
