use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const JACKPOT_MESSAGE: &str = "Jackpot! 💰";
pub const CONSOLATION_MESSAGE: &str = "Thanks for playing!";

/// Message overrides read from TOML. Every key is optional. The symbol
/// catalog is fixed, so nothing here can change the odds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub jackpot_message: String,
    pub consolation_message: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            jackpot_message: JACKPOT_MESSAGE.to_string(),
            consolation_message: CONSOLATION_MESSAGE.to_string(),
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: GameConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
