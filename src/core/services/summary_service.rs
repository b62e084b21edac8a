use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    config::{Config, ScheduleConfig},
    currency::{
        residual_polychromes, BannerPullLine, BannerPulls, BannerTrack, POLYCHROMES_PER_PULL,
    },
    ledger::TrackerState,
    pity,
    projection::{
        project,
        series::{build_series, AccumulationPoint},
        IncomeAssumptions, IncomeProjection,
    },
    schedule::{day_presets, generate_schedule, DayPreset, MaintenanceEntry},
};

/// Headline numbers for a projection horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerSummary {
    pub banner_pulls: BannerPulls,
    /// Income from activities alone.
    pub projected_polychromes: u64,
    pub residual_polychromes: u64,
    pub expected_total_pulls: u64,
    /// Activity income plus the residual store bonus.
    pub expected_polychromes: u64,
    pub expected_attempts: f64,
    pub universal_attempts: f64,
    pub guaranteed_copies: u64,
}

/// Everything a renderer needs to draw the planner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerReport {
    pub days: u32,
    pub schedule: Vec<MaintenanceEntry>,
    pub day_presets: Vec<DayPreset>,
    pub banner_lines: Vec<BannerPullLine>,
    pub breakdown: IncomeProjection,
    pub series: Vec<AccumulationPoint>,
    pub summary: PlannerSummary,
}

pub struct SummaryService;

impl SummaryService {
    pub fn assumptions(state: &TrackerState, days: u32) -> IncomeAssumptions {
        IncomeAssumptions::new(days, state.pb_polychrome, state.pb_weapon)
    }

    pub fn summarize(state: &TrackerState, days: u32) -> PlannerSummary {
        let projection = project(&Self::assumptions(state, days));
        Self::summarize_projection(state, &projection)
    }

    fn summarize_projection(state: &TrackerState, projection: &IncomeProjection) -> PlannerSummary {
        let per_pull = POLYCHROMES_PER_PULL as f64;
        let limited_pulls = BannerTrack::Limited.pull_equivalent(&state.ledger);
        let projected = projection.total();
        let residual = residual_polychromes(limited_pulls, projected, state.residual_store);
        let expected_total_pulls = (residual as f64 / per_pull + projected as f64 / per_pull) as u64;
        let universal_attempts = pity::universal_attempts(limited_pulls, expected_total_pulls);

        PlannerSummary {
            banner_pulls: BannerPulls::from_ledger(&state.ledger),
            projected_polychromes: projected,
            residual_polychromes: residual,
            expected_total_pulls,
            expected_polychromes: projected.saturating_add(residual),
            expected_attempts: pity::attempts(expected_total_pulls as f64),
            universal_attempts,
            guaranteed_copies: pity::guaranteed_copies(
                universal_attempts,
                state.is_pity.is_active(),
            ),
        }
    }

    pub fn report(
        state: &TrackerState,
        days: u32,
        schedule_config: &ScheduleConfig,
        today: NaiveDate,
    ) -> PlannerReport {
        let schedule = Self::schedule(schedule_config, today);
        Self::build_report(state, days, schedule, today)
    }

    /// Report at the configured starting horizon.
    pub fn initial_report(
        state: &TrackerState,
        config: &Config,
        today: NaiveDate,
    ) -> PlannerReport {
        let schedule = Self::schedule(&config.schedule, today);
        let days = config.initial_days(&day_presets(&schedule));
        Self::build_report(state, days, schedule, today)
    }

    fn schedule(schedule_config: &ScheduleConfig, today: NaiveDate) -> Vec<MaintenanceEntry> {
        generate_schedule(
            schedule_config.anchor_date,
            schedule_config.period_count,
            schedule_config.cadence_days,
            today,
        )
    }

    fn build_report(
        state: &TrackerState,
        days: u32,
        schedule: Vec<MaintenanceEntry>,
        today: NaiveDate,
    ) -> PlannerReport {
        let day_presets = day_presets(&schedule);
        let breakdown = project(&Self::assumptions(state, days));
        let summary = Self::summarize_projection(state, &breakdown);
        let series = build_series(days, state.pb_polychrome, state.pb_weapon);
        tracing::debug!(
            days,
            %today,
            expected_pulls = summary.expected_total_pulls,
            copies = summary.guaranteed_copies,
            "planner report built"
        );

        PlannerReport {
            days,
            schedule,
            day_presets,
            banner_lines: summary.banner_pulls.lines(),
            breakdown,
            series,
            summary,
        }
    }
}
