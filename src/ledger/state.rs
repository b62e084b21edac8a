use std::{fmt, str::FromStr};

use serde::{
    de::{DeserializeOwned, Deserializer},
    Deserialize, Serialize,
};

use crate::errors::TrackerError;

/// Raw currency counts and banked pulls for each banner track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyLedger {
    #[serde(default, deserialize_with = "lenient")]
    pub polychromes: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub encrypted_tapes: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub monochromes: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub master_tapes: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub limited_pity_count: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub wengine_count: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub standard_count: u64,
}

impl CurrencyLedger {
    /// Polychromes and monochromes exchange at the same rate. Saturates at
    /// `u64::MAX`.
    pub fn combined_currency(&self) -> u64 {
        self.polychromes.saturating_add(self.monochromes)
    }
}

/// Whether the next limited 5-star is already guaranteed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PitySelection {
    Yes,
    #[default]
    No,
}

impl PitySelection {
    pub fn is_active(self) -> bool {
        matches!(self, PitySelection::Yes)
    }

    fn from_value(value: Option<String>) -> Self {
        value
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for PitySelection {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Yes" => Ok(PitySelection::Yes),
            "No" => Ok(PitySelection::No),
            other => Err(TrackerError::InvalidValue {
                field: "is_pity".into(),
                value: other.into(),
            }),
        }
    }
}

impl fmt::Display for PitySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PitySelection::Yes => "Yes",
            PitySelection::No => "No",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for PitySelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(PitySelection::from_value(
            value.as_str().map(|raw| raw.to_string()),
        ))
    }
}

/// The whole persisted tracker record. Every field falls back to its own
/// default when missing or malformed, so one bad entry never discards the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    #[serde(flatten)]
    pub ledger: CurrencyLedger,
    #[serde(default, deserialize_with = "lenient")]
    pub pb_polychrome: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub pb_weapon: bool,
    #[serde(
        default = "TrackerState::default_residual_store",
        deserialize_with = "lenient_enabled"
    )]
    pub residual_store: bool,
    #[serde(default)]
    pub is_pity: PitySelection,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            ledger: CurrencyLedger::default(),
            pb_polychrome: false,
            pb_weapon: false,
            residual_store: Self::default_residual_store(),
            is_pity: PitySelection::No,
        }
    }
}

impl TrackerState {
    pub fn default_residual_store() -> bool {
        true
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn lenient_enabled<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_bool()
        .unwrap_or_else(TrackerState::default_residual_store))
}
