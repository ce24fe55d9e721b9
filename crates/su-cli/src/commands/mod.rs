pub mod check;
pub mod play;
pub mod run;
pub mod show;

use std::path::Path;

use serde::Deserialize;
use su_core::ScenarioDeck;
use su_engine::{GameConfig, PricingRule, SaleRule};

/// Load and normalize a deck, mapping errors to CLI messages.
fn load_deck(path: &Path) -> Result<ScenarioDeck, String> {
    ScenarioDeck::from_file(path).map_err(|e| format!("cannot load deck '{}': {e}", path.display()))
}

/// Rule tables as stored on disk.
#[derive(Debug, Default, Deserialize)]
struct RulesFile {
    #[serde(default)]
    proposal: Vec<PricingRule>,
    #[serde(default)]
    sale: Vec<SaleRule>,
}

/// Build a session config, merging in a rules file if given.
fn load_config(rules: Option<&Path>) -> Result<GameConfig, String> {
    let mut config = GameConfig::default();
    if let Some(path) = rules {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read rules '{}': {e}", path.display()))?;
        let file: RulesFile = serde_json::from_str(&json)
            .map_err(|e| format!("cannot parse rules '{}': {e}", path.display()))?;
        config = config
            .with_proposal_rules(file.proposal)
            .with_sale_rules(file.sale);
    }
    Ok(config)
}
