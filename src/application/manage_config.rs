//! Config management use case

use crate::error::{MensaError, Result};
use crate::infrastructure::{Config, DataStore};

/// Service for reading and changing cafeteria configuration
pub struct ConfigService {
    store: DataStore,
}

impl ConfigService {
    pub fn new(store: DataStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load(&self.store)?;

        match key {
            "cafeteria" => Ok(config.cafeteria),
            "currency" => Ok(config.currency),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MensaError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: cafeteria, currency, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load(&self.store)?;

        match key {
            "cafeteria" => {
                config.cafeteria = value.to_string();
            }
            "currency" => {
                config.currency = value.to_string();
            }
            "created" => {
                return Err(MensaError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MensaError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: cafeteria, currency",
                    key
                )));
            }
        }

        config.save(&self.store)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load(&self.store)
    }
}
