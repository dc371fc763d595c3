use super::*;
use crate::*;

impl<R: RandomSource + Clone> RunState<R> {
    pub(super) fn use_consumable(
        &mut self,
        index: usize,
        target: Option<u32>,
        events: &mut EventBus,
    ) -> Result<(), RunError> {
        if !matches!(
            self.state.phase,
            Phase::BlindSelect | Phase::PlayHand | Phase::Shop
        ) {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let item = self
            .state
            .inventory
            .consumables
            .get(index)
            .cloned()
            .ok_or(RunError::InvalidConsumableIndex)?;

        let card_index = if item.effect.needs_target() {
            let card_id = target.ok_or(RunError::TargetRequired)?;
            let position = self
                .state
                .hand
                .iter()
                .position(|card| card.id == card_id)
                .ok_or(RunError::UnknownCard(card_id))?;
            Some(position)
        } else {
            None
        };

        match (item.effect, card_index) {
            (ConsumableEffect::LevelUp(kind), _) => {
                let (chips, mult) = self
                    .config
                    .hand_rule(level_kind(kind))
                    .map(|rule| (rule.level_chips, rule.level_mult))
                    .unwrap_or((0, 0.0));
                self.state.hand_levels.level_up(kind, chips, mult);
                let level = self.state.hand_levels.get(kind).level;
                self.state
                    .notices
                    .push(format!("{} level {level}", level_kind(kind).display_name()));
            }
            (ConsumableEffect::SetEnhancement(enhancement), Some(idx)) => {
                self.state.hand[idx].enhancement = enhancement;
            }
            (ConsumableEffect::RaiseRank, Some(idx)) => {
                let card = &mut self.state.hand[idx];
                card.rank = card.rank.raised();
            }
            (ConsumableEffect::Placeholder, _) => {
                self.state.notices.push(format!("{} has no effect yet", item.name));
            }
            _ => return Err(RunError::TargetRequired),
        }

        self.state.inventory.consumables.remove(index);
        tracing::debug!(id = %item.id, ?target, "consumable used");
        events.push(Event::ConsumableUsed {
            id: item.id,
            target,
        });
        Ok(())
    }
}
