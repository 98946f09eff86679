//! Sector allocation: invested amounts apportioned by each fund's sector weights.

mod allocation_calculator;
mod allocation_model;

pub use allocation_calculator::calculate_sector_allocation;
pub use allocation_model::{SectorAllocation, SectorAllocationEntry};
