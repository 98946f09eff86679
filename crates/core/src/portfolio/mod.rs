//! Portfolio analytics engine.
//!
//! Each view has a pure calculator that works on already-fetched rows, and
//! `PortfolioService` does the batch reads that feed them. Nothing in here
//! writes.

pub mod allocation;
pub mod history;
pub mod overlap;
pub mod overview;

mod portfolio_service;
mod portfolio_traits;


pub use allocation::{SectorAllocation, SectorAllocationEntry};
pub use history::{HistoryPeriod, ValueHistory, ValuePoint};
pub use overlap::{FundOverlapAnalysis, FundOverlapDetail};
pub use overview::{PortfolioOverview, SchemePerformance};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
