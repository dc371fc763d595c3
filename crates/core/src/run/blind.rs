use super::*;
use crate::*;

/// One entry of the blind-select screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BlindOption {
    pub kind: BlindKind,
    pub name: String,
    pub score_goal: i64,
    pub reward: i64,
    pub selectable: bool,
}

impl<R: RandomSource + Clone> RunState<R> {
    pub(super) fn open_deck_select(&mut self) -> Result<(), RunError> {
        self.require_phase(Phase::Menu)?;
        self.state.phase = Phase::DeckSelect;
        Ok(())
    }

    pub(super) fn select_deck(&mut self, deck_id: &str) -> Result<(), RunError> {
        self.require_phase(Phase::DeckSelect)?;
        let Some(variant) = self.config.deck(deck_id).cloned() else {
            tracing::warn!(deck_id, "unknown deck variant");
            return Err(RunError::UnknownDeck(deck_id.to_string()));
        };
        let levels = HandLevels::from_rules(&self.config.hands);
        self.state = GameState::for_variant(&variant, levels, self.config.consumable_slots);
        self.pick_boss();
        tracing::info!(deck = %variant.id, money = variant.money, "run started");
        Ok(())
    }

    pub(super) fn pick_boss(&mut self) {
        self.state.boss_id = self
            .content
            .pick_boss(&mut self.rng)
            .map(|boss| boss.id.clone());
    }

    pub(super) fn select_blind(
        &mut self,
        kind: BlindKind,
        events: &mut EventBus,
    ) -> Result<(), RunError> {
        self.require_phase(Phase::BlindSelect)?;
        if kind != BlindKind::for_round(self.state.round) {
            return Err(RunError::BlindNotSelectable(kind));
        }
        let blind = self.build_blind(kind)?;
        let (hands, discards) = self
            .state
            .deck_variant
            .as_ref()
            .map(|variant| (variant.hands, variant.discards))
            .unwrap_or((self.state.hands_left, self.state.discards_left));

        let target = blind.score_goal;
        self.state.hands_left = hands;
        self.state.discards_left = discards;
        self.state.current_score = 0;
        self.state.display_score = 0;
        self.state.hand.clear();
        self.state.scoring = None;
        self.state.notices.clear();
        self.state.deck = Deck::standard52(&mut self.rng, &self.config.edition_odds);
        self.state.blind = Some(blind);
        self.state.phase = Phase::PlayHand;

        tracing::debug!(ante = self.state.ante, round = self.state.round, ?kind, target, "blind started");
        events.push(Event::BlindStarted {
            ante: self.state.ante,
            blind: kind,
            target,
            hands,
            discards,
        });
        Ok(())
    }

    fn build_blind(&self, kind: BlindKind) -> Result<Blind, RunError> {
        let rule = self
            .config
            .blind_rule(kind)
            .ok_or(RunError::MissingBlindRule(kind))?;
        let score_goal = self
            .config
            .goal_for(self.state.ante, kind)
            .ok_or(RunError::MissingAnteGoal(self.state.ante))?;
        let boss = match kind {
            BlindKind::Boss => self
                .state
                .boss_id
                .as_deref()
                .and_then(|id| self.content.boss_by_id(id)),
            _ => None,
        };
        Ok(Blind {
            kind,
            name: boss
                .map(|boss| boss.name.clone())
                .unwrap_or_else(|| rule.name.clone()),
            score_goal,
            reward: rule.reward,
            boss: boss.map(|boss| boss.effect),
        })
    }

    /// The three blinds of the current ante; only the one scheduled for this
    /// round can be selected.
    pub fn blind_options(&self) -> Vec<BlindOption> {
        let scheduled = BlindKind::for_round(self.state.round);
        BlindKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let blind = self.build_blind(kind).ok()?;
                Some(BlindOption {
                    kind,
                    name: blind.name,
                    score_goal: blind.score_goal,
                    reward: blind.reward,
                    selectable: kind == scheduled,
                })
            })
            .collect()
    }
}
