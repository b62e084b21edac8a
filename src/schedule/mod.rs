//! Game-version maintenance calendar and the day-count presets built from it.

use std::{collections::HashMap, fmt};

use chrono::{Duration, NaiveDate};
use serde::{Serialize, Serializer};

/// First version covered by the default calendar.
pub const FIRST_VERSION: VersionLabel = VersionLabel { tenths: 17 };

/// Version that never shipped; the step onto it lands on 2.0 instead.
const SKIPPED_VERSION: u32 = 18;
const SKIP_TARGET: u32 = 20;

/// A `major.minor` version kept as whole tenths so stepping never drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionLabel {
    tenths: u32,
}

impl VersionLabel {
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            tenths: major * 10 + minor,
        }
    }

    /// The version released after this one.
    pub fn next(self) -> Self {
        let tenths = self.tenths + 1;
        if tenths == SKIPPED_VERSION {
            Self {
                tenths: SKIP_TARGET,
            }
        } else {
            Self { tenths }
        }
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

impl Serialize for VersionLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceEntry {
    pub version: VersionLabel,
    pub date: NaiveDate,
    /// Negative once the maintenance window has passed.
    pub days_from_today: i64,
}

/// Lists `period_count` maintenance windows spaced `cadence_days` apart,
/// starting at `anchor`, with offsets measured from `today`.
pub fn generate_schedule(
    anchor: NaiveDate,
    period_count: usize,
    cadence_days: u32,
    today: NaiveDate,
) -> Vec<MaintenanceEntry> {
    let mut version = FIRST_VERSION;
    let mut entries = Vec::with_capacity(period_count);
    for idx in 0..period_count {
        let date = anchor + Duration::days(idx as i64 * cadence_days as i64);
        entries.push(MaintenanceEntry {
            version,
            date,
            days_from_today: (date - today).num_days(),
        });
        version = version.next();
    }
    tracing::debug!(
        periods = period_count,
        cadence = cadence_days,
        %anchor,
        "generated maintenance schedule"
    );
    entries
}

/// Entries whose maintenance has not happened yet.
pub fn upcoming(schedule: &[MaintenanceEntry]) -> impl Iterator<Item = &MaintenanceEntry> {
    schedule.iter().filter(|entry| entry.days_from_today >= 0)
}

/// Selectable day count with the version it reaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPreset {
    pub days: i64,
    pub label: String,
}

impl DayPreset {
    /// Projection horizon for this preset. Past windows clamp to 0.
    pub fn horizon(&self) -> u32 {
        u32::try_from(self.days.max(0)).unwrap_or(u32::MAX)
    }
}

impl fmt::Display for DayPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days - v{}", self.days, self.label)
    }
}

const NOW_LABEL: &str = "Now";

/// Presets offered for the projection horizon: "Now" first, then one per
/// maintenance window. The first preset is the default horizon.
pub fn day_presets(schedule: &[MaintenanceEntry]) -> Vec<DayPreset> {
    let mut labels: HashMap<i64, String> = schedule
        .iter()
        .map(|entry| (entry.days_from_today, entry.version.to_string()))
        .collect();
    labels.insert(0, NOW_LABEL.to_string());

    std::iter::once(0)
        .chain(schedule.iter().map(|entry| entry.days_from_today))
        .map(|days| DayPreset {
            days,
            label: labels
                .get(&days)
                .cloned()
                .unwrap_or_else(|| NOW_LABEL.to_string()),
        })
        .collect()
}
