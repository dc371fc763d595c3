use anteup_core::{
    AnteTable, BlindRule, BossDef, ConsumableDef, Content, DeckVariant, EconomyRule, EditionOdds,
    GameConfig, HandRule, JokerDef, RngState, RunState, ShopRule,
};
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const LIMITS_FILE: &str = "limits.json";

/// Optional table-wide limits; every field falls back to the engine default.
#[derive(Debug, Default, Deserialize)]
struct RunLimits {
    #[serde(default)]
    consumable_slots: Option<usize>,
    #[serde(default)]
    max_selected: Option<usize>,
    #[serde(default)]
    edition_odds: Option<EditionOdds>,
}

pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let hands: Vec<HandRule> = load_json(dir.join("hands.json"))?;
    let decks: Vec<DeckVariant> = load_json(dir.join("decks.json"))?;
    let blinds: Vec<BlindRule> = load_json(dir.join("blinds.json"))?;
    let antes: AnteTable = load_json(dir.join("antes.json"))?;
    let economy: EconomyRule = load_json(dir.join("economy.json"))?;
    let shop: ShopRule = load_json(dir.join("shop.json"))?;
    let limits_path = dir.join(LIMITS_FILE);
    let limits: RunLimits = if limits_path.exists() {
        load_json(limits_path)?
    } else {
        RunLimits::default()
    };

    let config = GameConfig {
        hands,
        decks,
        blinds,
        antes,
        economy,
        shop,
        edition_odds: limits.edition_odds.unwrap_or_default(),
        consumable_slots: limits.consumable_slots.unwrap_or(2),
        max_selected: limits.max_selected.unwrap_or(5),
    };
    config
        .validate()
        .with_context(|| format!("validate config in {}", dir.display()))?;
    tracing::debug!(decks = config.decks.len(), hands = config.hands.len(), "config loaded");
    Ok(config)
}

pub fn load_content(dir: &Path) -> anyhow::Result<Content> {
    let base = dir.join("content");
    let jokers: Vec<JokerDef> = load_json(base.join("jokers.json"))?;
    let planets: Vec<ConsumableDef> = load_json(base.join("planets.json"))?;
    let tarots: Vec<ConsumableDef> = load_json(base.join("tarots.json"))?;
    let bosses: Vec<BossDef> = load_json(base.join("bosses.json"))?;
    let content = Content {
        jokers,
        planets,
        tarots,
        bosses,
    };
    for joker in content.jokers.iter().filter(|joker| joker.kind.is_placeholder()) {
        tracing::debug!(id = %joker.id, "joker ability not implemented");
    }
    Ok(content)
}

/// Loads config and content from `dir` and builds a seeded run on them.
pub fn new_run(dir: &Path, seed: u64) -> anyhow::Result<RunState> {
    let config = load_game_config(dir)?;
    let content = load_content(dir)?;
    let run = RunState::new(config, content, RngState::from_seed(seed))
        .with_context(|| format!("validate content in {}", dir.display()))?;
    Ok(run)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
