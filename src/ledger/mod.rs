//! Player holdings and the persisted tracker record.

pub mod field;
pub mod state;

pub use field::FieldUpdate;
pub use state::{CurrencyLedger, PitySelection, TrackerState};
