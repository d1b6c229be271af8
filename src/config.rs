use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_LANGUAGE: &str = "es";
pub const DEFAULT_CONFIG_PATH: &str = "pokedex.ron";

/// Runtime settings for the explorer. Every field has a default, so a config
/// file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokedexConfig {
    pub api_base_url: String,
    pub language: String,
    pub request_timeout_secs: u64,
    pub move_sample_size: usize,
    pub page_limit: u32,
    pub move_seed: Option<u64>,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout_secs: 10,
            move_sample_size: 3,
            page_limit: 10,
            move_seed: None,
        }
    }
}

impl PokedexConfig {
    /// Parse a config from RON text
    pub fn from_ron(content: &str) -> ConfigResult<PokedexConfig> {
        ron::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a config from a RON file. The file must exist.
    pub fn load(path: &Path) -> ConfigResult<PokedexConfig> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_ron(&content)
    }

    /// Load the config from an explicitly named file, or from the default path
    /// if there is one. Only the implicit default may be absent.
    pub fn resolve(explicit: Option<&Path>) -> ConfigResult<PokedexConfig> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(PokedexConfig::default())
                }
            }
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
