//! Allocation models for the portfolio breakdown by sector.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Allocation breakdown for a single sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocationEntry {
    /// Sector name as stored in the fund allocation rows
    pub sector: String,
    /// Amount apportioned to this sector, rounded to 2 decimals
    pub invested_amount: Decimal,
    /// Share of the apportioned total (0-100), rounded to 2 decimals
    pub percentage_of_total: Decimal,
}

/// Complete sector breakdown of a user's portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocation {
    /// Sorted by invested amount descending, then sector name
    pub sectors: Vec<SectorAllocationEntry>,
    /// Sum of the apportioned amounts. Differs from the raw invested total
    /// when a fund's weights do not add up to 100.
    pub total_investment: Decimal,
}
