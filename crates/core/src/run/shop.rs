use super::*;
use crate::*;

impl<R: RandomSource + Clone> RunState<R> {
    pub(super) fn buy_item(&mut self, index: usize, events: &mut EventBus) -> Result<(), RunError> {
        self.require_phase(Phase::Shop)?;
        let shop = self.state.shop.as_ref().ok_or(RunError::ShopNotAvailable)?;
        let offer = shop.offer(index).ok_or(RunError::InvalidOfferIndex)?;
        if self.state.money < offer.cost {
            return Err(RunError::NotEnoughMoney);
        }
        let kind = offer.kind();
        let cost = offer.cost;
        match &offer.item {
            ShopItem::Joker(def) => {
                let joker = JokerInstance::from_def(def);
                self.state.inventory.add_joker(joker)?;
            }
            ShopItem::Consumable(def) => {
                let item = ConsumableInstance::from_def(def);
                self.state.inventory.add_consumable(item)?;
            }
        }
        if let Some(shop) = self.state.shop.as_mut() {
            shop.take_offer(index);
        }
        self.state.money -= cost;
        events.push(Event::ShopBought {
            offer: kind,
            cost,
            money: self.state.money,
        });
        Ok(())
    }

    pub(super) fn reroll_shop(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.require_phase(Phase::Shop)?;
        let cost = self
            .state
            .shop
            .as_ref()
            .map(|shop| shop.reroll_cost)
            .ok_or(RunError::ShopNotAvailable)?;
        if self.state.money < cost {
            return Err(RunError::NotEnoughMoney);
        }
        self.state.money -= cost;
        let shop = ShopState::generate(&self.config.shop, &self.content, &mut self.rng, cost);
        events.push(Event::ShopRerolled {
            offers: shop.offers.len(),
            cost,
            money: self.state.money,
        });
        self.state.shop = Some(shop);
        Ok(())
    }
}
