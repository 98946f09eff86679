//! Portfolio overview: totals, growth, one-day return, best and worst scheme.

mod overview_calculator;
mod overview_model;

pub use overview_calculator::calculate_overview;
pub use overview_model::{PortfolioOverview, SchemePerformance};
