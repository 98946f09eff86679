//! Fund overlap: catalog overlap pairs with the sectors both funds share.

mod overlap_calculator;
mod overlap_model;

pub use overlap_calculator::calculate_fund_overlaps;
pub use overlap_model::{FundOverlapAnalysis, FundOverlapDetail};
