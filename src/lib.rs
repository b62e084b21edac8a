#![doc(test(attr(deny(warnings))))]

//! Polychrome Core plans gacha currency for Zenless Zone Zero: it converts
//! held currency into pulls, projects income from recurring activities up to
//! a chosen maintenance, and estimates guaranteed limited copies.

pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod pity;
pub mod projection;
pub mod schedule;
pub mod storage;
pub mod utils;

pub use crate::core::services::{PlannerReport, PlannerSummary, SummaryService};
pub use errors::{Result, TrackerError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and logs the build being run.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        utils::build_info::log_current();
    });
}
