pub mod summary_service;

pub use summary_service::{PlannerReport, PlannerSummary, SummaryService};
