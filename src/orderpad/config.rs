use crate::error::{OrderPadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "₹";

/// Configuration for orderpad, stored in the data dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderPadConfig {
    /// Currency symbol prefixed to displayed amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Path to a seed catalog document used instead of the bundled one
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for OrderPadConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            seed_path: None,
        }
    }
}

impl OrderPadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(OrderPadError::Io)?;
        let config: OrderPadConfig =
            serde_json::from_str(&content).map_err(OrderPadError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(OrderPadError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(OrderPadError::Serialization)?;
        fs::write(config_path, content).map_err(OrderPadError::Io)?;
        Ok(())
    }
}
