//! Value history over a trailing window.
//!
//! Served under the "stock allocation" route name, but it is a time series of
//! aggregate investment value. A per-stock breakdown is not implemented: the
//! catalog stores sector weights only.

mod history_calculator;
mod history_model;

pub use history_calculator::calculate_value_history;
pub use history_model::{HistoryPeriod, ValueHistory, ValuePoint};
