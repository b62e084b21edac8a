//! Projected polychrome income per activity over a day horizon.
//!
//! Every activity pays out at a fixed average rate. Rates are evaluated in
//! floating point in a fixed operand order and truncated per activity, so the
//! totals match the tracker's published numbers to the unit.

pub mod series;

use serde::Serialize;

/// Inputs that shape a projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncomeAssumptions {
    pub days: u32,
    /// Inter-Knot Membership (polychrome battle pass).
    pub polychrome_pass: bool,
    /// New Eridu City Fund (weapon battle pass).
    pub weapon_pass: bool,
}

impl IncomeAssumptions {
    pub fn new(days: u32, polychrome_pass: bool, weapon_pass: bool) -> Self {
        Self {
            days,
            polychrome_pass,
            weapon_pass,
        }
    }

    pub fn with_days(self, days: u32) -> Self {
        Self { days, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Activity {
    Dailies,
    RiduWeekly,
    ShiyuDefense,
    DeadlyAssault,
    HollowZero,
    FadingSignalStore,
    SevenDayLogin,
    Events,
    StreamCodes,
    Maintenance,
    InterKnotMembership,
    NewEriduCityFund,
}

impl Activity {
    /// Display order of the income breakdown.
    pub const ALL: [Activity; 12] = [
        Activity::Dailies,
        Activity::RiduWeekly,
        Activity::ShiyuDefense,
        Activity::DeadlyAssault,
        Activity::HollowZero,
        Activity::FadingSignalStore,
        Activity::SevenDayLogin,
        Activity::Events,
        Activity::StreamCodes,
        Activity::Maintenance,
        Activity::InterKnotMembership,
        Activity::NewEriduCityFund,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Activity::Dailies => "Dailies",
            Activity::RiduWeekly => "Ridu Weekly",
            Activity::ShiyuDefense => "Shiyu Defense",
            Activity::DeadlyAssault => "Deadly Assault",
            Activity::HollowZero => "Hollow Zero",
            Activity::FadingSignalStore => "Fading Signal Store",
            Activity::SevenDayLogin => "7-D Login",
            Activity::Events => "Events (average)",
            Activity::StreamCodes => "Stream Codes",
            Activity::Maintenance => "Maintenance",
            Activity::InterKnotMembership => "Inter-Knot Membership",
            Activity::NewEriduCityFund => "New Eridu City Fund",
        }
    }

    /// Polychromes earned over `assumptions.days`, or `None` when the
    /// activity needs a battle pass that is not active.
    pub fn amount(self, assumptions: &IncomeAssumptions) -> Option<u64> {
        let days = assumptions.days;
        let d = days as f64;
        let amount = match self {
            Activity::Dailies => days as u64 * 60,
            Activity::RiduWeekly => truncate(d / 7.0 * 60.0),
            Activity::ShiyuDefense => truncate(720.0 / 15.0 * d),
            Activity::DeadlyAssault => truncate(d / 15.0 * 300.0),
            Activity::HollowZero => truncate(d / 7.0 * 160.0),
            Activity::FadingSignalStore => truncate(160.0 * 5.0 / 30.0 * d),
            Activity::SevenDayLogin => truncate(160.0 * 10.0 / 42.0 * d),
            Activity::Events => truncate(2320.0 / 42.0 * d),
            Activity::StreamCodes => truncate(300.0 / 42.0 * d),
            Activity::Maintenance => truncate(600.0 / 42.0 * d),
            Activity::InterKnotMembership => {
                if !assumptions.polychrome_pass {
                    return None;
                }
                truncate(90.0 * d)
            }
            Activity::NewEriduCityFund => {
                if !assumptions.weapon_pass {
                    return None;
                }
                truncate(((160.0 * 4.0 / 42.0) + 780.0 / 42.0) * d)
            }
        };
        Some(amount)
    }
}

fn truncate(value: f64) -> u64 {
    value as u64
}

/// How inactive battle-pass lines are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsentHandling {
    /// Keep them as `None` so a table can show them blank.
    Keep,
    /// Report them as zero.
    AsZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionLine {
    pub activity: Activity,
    #[serde(rename = "activityName")]
    pub name: &'static str,
    pub amount: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeProjection {
    pub lines: Vec<ProjectionLine>,
}

impl IncomeProjection {
    /// Sum of every present line; absent lines count as zero.
    pub fn total(&self) -> u64 {
        self.lines.iter().filter_map(|line| line.amount).sum()
    }

    pub fn line(&self, activity: Activity) -> Option<&ProjectionLine> {
        self.lines.iter().find(|line| line.activity == activity)
    }

    pub fn amount(&self, activity: Activity) -> Option<u64> {
        self.line(activity).and_then(|line| line.amount)
    }
}

/// Evaluates all twelve activities in display order.
pub fn evaluate(assumptions: &IncomeAssumptions, absent: AbsentHandling) -> IncomeProjection {
    let lines = Activity::ALL
        .iter()
        .map(|&activity| {
            let amount = match (activity.amount(assumptions), absent) {
                (None, AbsentHandling::AsZero) => Some(0),
                (amount, _) => amount,
            };
            ProjectionLine {
                activity,
                name: activity.name(),
                amount,
            }
        })
        .collect();
    IncomeProjection { lines }
}

/// Income breakdown for display, with inactive battle passes left absent.
pub fn project(assumptions: &IncomeAssumptions) -> IncomeProjection {
    let projection = evaluate(assumptions, AbsentHandling::Keep);
    tracing::debug!(
        days = assumptions.days,
        total = projection.total(),
        "projected polychrome income"
    );
    projection
}
