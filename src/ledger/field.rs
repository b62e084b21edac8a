use crate::errors::{Result, TrackerError};

use super::state::{PitySelection, TrackerState};

/// A single-field edit to the tracker record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Polychromes(u64),
    EncryptedTapes(u64),
    Monochromes(u64),
    MasterTapes(u64),
    LimitedPityCount(u64),
    WengineCount(u64),
    StandardCount(u64),
    PolychromePass(bool),
    WeaponPass(bool),
    ResidualStore(bool),
    Pity(PitySelection),
}

impl FieldUpdate {
    /// Persisted key the edit targets.
    pub fn key(&self) -> &'static str {
        match self {
            FieldUpdate::Polychromes(_) => "polychromes",
            FieldUpdate::EncryptedTapes(_) => "encrypted_tapes",
            FieldUpdate::Monochromes(_) => "monochromes",
            FieldUpdate::MasterTapes(_) => "master_tapes",
            FieldUpdate::LimitedPityCount(_) => "limited_pity_count",
            FieldUpdate::WengineCount(_) => "wengine_count",
            FieldUpdate::StandardCount(_) => "standard_count",
            FieldUpdate::PolychromePass(_) => "pb_polychrome",
            FieldUpdate::WeaponPass(_) => "pb_weapon",
            FieldUpdate::ResidualStore(_) => "residual_store",
            FieldUpdate::Pity(_) => "is_pity",
        }
    }

    /// Builds an edit from a persisted key and raw input text.
    pub fn parse(key: &str, raw: &str) -> Result<Self> {
        let count = || parse_count(key, raw);
        let flag = || parse_flag(key, raw);
        match key {
            "polychromes" => Ok(FieldUpdate::Polychromes(count()?)),
            "encrypted_tapes" => Ok(FieldUpdate::EncryptedTapes(count()?)),
            "monochromes" => Ok(FieldUpdate::Monochromes(count()?)),
            "master_tapes" => Ok(FieldUpdate::MasterTapes(count()?)),
            "limited_pity_count" => Ok(FieldUpdate::LimitedPityCount(count()?)),
            "wengine_count" => Ok(FieldUpdate::WengineCount(count()?)),
            "standard_count" => Ok(FieldUpdate::StandardCount(count()?)),
            "pb_polychrome" => Ok(FieldUpdate::PolychromePass(flag()?)),
            "pb_weapon" => Ok(FieldUpdate::WeaponPass(flag()?)),
            "residual_store" => Ok(FieldUpdate::ResidualStore(flag()?)),
            "is_pity" => Ok(FieldUpdate::Pity(raw.parse()?)),
            other => Err(TrackerError::UnknownField(other.to_string())),
        }
    }
}

impl TrackerState {
    pub fn apply(&mut self, update: FieldUpdate) {
        let ledger = &mut self.ledger;
        match update {
            FieldUpdate::Polychromes(value) => ledger.polychromes = value,
            FieldUpdate::EncryptedTapes(value) => ledger.encrypted_tapes = value,
            FieldUpdate::Monochromes(value) => ledger.monochromes = value,
            FieldUpdate::MasterTapes(value) => ledger.master_tapes = value,
            FieldUpdate::LimitedPityCount(value) => ledger.limited_pity_count = value,
            FieldUpdate::WengineCount(value) => ledger.wengine_count = value,
            FieldUpdate::StandardCount(value) => ledger.standard_count = value,
            FieldUpdate::PolychromePass(value) => self.pb_polychrome = value,
            FieldUpdate::WeaponPass(value) => self.pb_weapon = value,
            FieldUpdate::ResidualStore(value) => self.residual_store = value,
            FieldUpdate::Pity(value) => self.is_pity = value,
        }
    }
}

fn parse_count(key: &str, raw: &str) -> Result<u64> {
    raw.trim().parse().map_err(|_| invalid(key, raw))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, raw)),
    }
}

fn invalid(key: &str, raw: &str) -> TrackerError {
    TrackerError::InvalidValue {
        field: key.to_string(),
        value: raw.to_string(),
    }
}
