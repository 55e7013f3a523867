use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    errors::{ForecastError, Result},
    forecast::rules::{default_rules, RecurringRule},
    storage::json_backend::{tmp_path, write_atomic},
    utils,
};

pub const DEFAULT_HISTORIC_DAYS: u32 = 90;
pub const DEFAULT_FORECAST_DAYS: u32 = 30 * 6;

/// Settings read once per report run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastConfig {
    #[serde(default = "default_historic_days")]
    pub historic_days: u32,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
    #[serde(default = "default_rules")]
    pub rules: Vec<RecurringRule>,
}

fn default_historic_days() -> u32 {
    DEFAULT_HISTORIC_DAYS
}

fn default_forecast_days() -> u32 {
    DEFAULT_FORECAST_DAYS
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            historic_days: DEFAULT_HISTORIC_DAYS,
            forecast_days: DEFAULT_FORECAST_DAYS,
            rules: default_rules(),
        }
    }
}

impl ForecastConfig {
    /// Checks every rule generator and that no two rules share a name and
    /// currency.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.rules.len());
        for rule in &self.rules {
            if !seen.insert(&rule.key) {
                return Err(ForecastError::InvalidRule(format!(
                    "rule `{}` is declared more than once",
                    rule.label()
                )));
            }
            rule.generator
                .validate()
                .map_err(|err| ForecastError::generation(rule.label(), err))?;
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `config.json` inside the application data directory.
    pub fn new() -> Self {
        Self::at(utils::config_file())
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<ForecastConfig> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config: ForecastConfig = serde_json::from_str(&data)?;
            config.validate()?;
            debug!(path = %self.path.display(), rules = config.rules.len(), "loaded config");
            Ok(config)
        } else {
            debug!(path = %self.path.display(), "no config file, using defaults");
            Ok(ForecastConfig::default())
        }
    }

    pub fn save(&self, config: &ForecastConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
