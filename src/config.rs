//! Pipeline configuration, loaded from an optional JSON file.
//!
//! The default dataset path, `data/diabetes.csv`, is not shipped with the
//! crate; point it (or `--data`) at a CSV with the Pima diabetes columns.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::forest::ForestConfig;

/// Pipeline settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: PathBuf,
    pub train_fraction: f64,
    pub split_seed: u64,
    pub forest: ForestConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from("data/diabetes.csv"),
            train_fraction: 0.8,
            split_seed: 0,
            forest: ForestConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            anyhow::bail!(
                "train_fraction must be in (0, 1), got {}",
                self.train_fraction
            );
        }
        self.forest.validate().context("invalid forest settings")?;
        Ok(())
    }
}

/// Load a configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
