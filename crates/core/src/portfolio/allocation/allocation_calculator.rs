use std::collections::HashMap;

use log::warn;
use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::funds::FundAllocation;
use crate::investments::Investment;
use crate::utils::decimal_utils::{apply_percentage, percentage_of};

use super::{SectorAllocation, SectorAllocationEntry};

/// Apportions every investment across its fund's sector weights.
///
/// Investments in funds with no allocation rows contribute nothing and are
/// logged. Percentages are computed on unrounded amounts.
pub fn calculate_sector_allocation(
    investments: &[Investment],
    allocations_by_fund: &HashMap<i32, Vec<FundAllocation>>,
) -> SectorAllocation {
    let mut sector_values: HashMap<&str, Decimal> = HashMap::new();
    let mut total = Decimal::ZERO;

    for investment in investments {
        let Some(fund_allocations) = allocations_by_fund
            .get(&investment.fund_id)
            .filter(|rows| !rows.is_empty())
        else {
            warn!(
                "Fund {} has no sector allocation rows; investment {} left out of the sector breakdown",
                investment.fund_id, investment.id
            );
            continue;
        };

        for allocation in fund_allocations {
            let amount = apply_percentage(investment.amount_invested, allocation.percentage);
            *sector_values.entry(allocation.sector.as_str()).or_default() += amount;
            total += amount;
        }
    }

    let mut sectors: Vec<SectorAllocationEntry> = sector_values
        .into_iter()
        .map(|(sector, amount)| SectorAllocationEntry {
            sector: sector.to_string(),
            invested_amount: amount.round_dp(DISPLAY_DECIMAL_PRECISION),
            percentage_of_total: percentage_of(amount, total).round_dp(DISPLAY_DECIMAL_PRECISION),
        })
        .collect();

    sectors.sort_by(|a, b| {
        b.invested_amount
            .cmp(&a.invested_amount)
            .then_with(|| a.sector.cmp(&b.sector))
    });

    SectorAllocation {
        sectors,
        total_investment: total.round_dp(DISPLAY_DECIMAL_PRECISION),
    }
}
