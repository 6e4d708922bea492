/// Generator configuration, loadable from RON.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::core::ids::DEFAULT_ID_LENGTH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunables for story and library fabrication. Missing fields take their
/// defaults, so an empty RON struct `()` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Stories per library when no count is given.
    pub library_size: usize,
    /// Length of minted story identifiers.
    pub id_length: usize,
    /// Simulated generation delay before a created story is available.
    pub generation_delay_ms: u64,
    /// chrono format string for `created_at`.
    pub date_format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            library_size: 9,
            id_length: DEFAULT_ID_LENGTH,
            generation_delay_ms: 3000,
            date_format: "%B %-d, %Y".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<GeneratorConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse and validate a config from a RON string.
    pub fn parse_ron(input: &str) -> Result<GeneratorConfig, ConfigError> {
        let config: GeneratorConfig = ron::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id_length == 0 {
            return Err(ConfigError::Invalid(
                "id_length must be at least 1".to_string(),
            ));
        }
        if self.date_format.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "date_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid(format!(
                "date_format '{}' is not a valid strftime pattern",
                self.date_format
            )));
        }
        Ok(())
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }
}
