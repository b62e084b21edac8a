use serde::Serialize;

use super::{evaluate, AbsentHandling, IncomeAssumptions};

/// Cumulative projected polychromes on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccumulationPoint {
    pub day: u32,
    pub total: u64,
}

/// Day-by-day running income for `0..=max_days`, for charting.
///
/// Residual store bonuses are not part of the series.
pub fn build_series(
    max_days: u32,
    polychrome_pass: bool,
    weapon_pass: bool,
) -> Vec<AccumulationPoint> {
    let base = IncomeAssumptions::new(0, polychrome_pass, weapon_pass);
    (0..=max_days)
        .map(|day| AccumulationPoint {
            day,
            total: evaluate(&base.with_days(day), AbsentHandling::AsZero).total(),
        })
        .collect()
}
