use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{config_file_in, ensure_dir, resolve_base, write_atomic},
    errors::Result,
    schedule::DayPreset,
    storage::DEFAULT_STORAGE_KEY,
};

/// Maintenance calendar parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub anchor_date: NaiveDate,
    pub period_count: usize,
    pub cadence_days: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            anchor_date: NaiveDate::from_ymd_opt(2025, 4, 22).unwrap_or_default(),
            period_count: 8,
            cadence_days: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schedule: ScheduleConfig,
    pub storage_key: String,
    /// Horizon to open with; the first day preset ("Now") when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_days: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule: ScheduleConfig::default(),
            storage_key: DEFAULT_STORAGE_KEY.into(),
            default_days: None,
        }
    }
}

impl Config {
    /// Horizon the planner opens with: `default_days` when set, otherwise the
    /// first preset, otherwise 0.
    pub fn initial_days(&self, presets: &[DayPreset]) -> u32 {
        self.default_days
            .or_else(|| presets.first().map(DayPreset::horizon))
            .unwrap_or(0)
    }
}

/// Loads and saves [`Config`] as `config/config.json` under the app data dir.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(resolve_base(None))
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
