//! Configuration management

use crate::error::{MensaError, Result};
use crate::infrastructure::store::DataStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub cafeteria: String,
    pub currency: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a config with default values
    pub fn new() -> Self {
        Config {
            cafeteria: "Campus Cafeteria".to_string(),
            currency: "₺".to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .mensa/config.toml
    pub fn load(store: &DataStore) -> Result<Self> {
        let config_path = store.data_dir().join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MensaError::NotInitialized(store.root.clone())
            } else {
                MensaError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MensaError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .mensa/config.toml
    pub fn save(&self, store: &DataStore) -> Result<()> {
        let data_dir = store.data_dir();
        if !data_dir.exists() {
            return Err(MensaError::NotInitialized(store.root.clone()));
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MensaError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(data_dir.join(CONFIG_FILE), contents)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
