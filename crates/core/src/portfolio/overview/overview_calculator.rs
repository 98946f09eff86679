use std::collections::HashMap;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::investments::Investment;
use crate::utils::decimal_utils::percentage_of;
use crate::utils::time_utils::days_before;

use super::{PortfolioOverview, SchemePerformance};

/// Computes the overview for a set of investments as of `as_of`.
///
/// `one_day_return` compares the full current value against the current value
/// of the investments dated on or before yesterday. It is a cohort filter on
/// purchase date, not a re-pricing of the holdings.
///
/// Ties on `returns_since_investment` go to the lowest investment id for both
/// the best and the worst scheme.
pub fn calculate_overview(
    investments: &[Investment],
    fund_names: &HashMap<i32, String>,
    as_of: NaiveDate,
) -> PortfolioOverview {
    if investments.is_empty() {
        return PortfolioOverview::default();
    }

    let total_investment: Decimal = investments.iter().map(|i| i.amount_invested).sum();
    let total_current_value: Decimal = investments.iter().map(Investment::current_value).sum();
    let growth_percentage = percentage_of(total_current_value - total_investment, total_investment);

    let yesterday = days_before(as_of, 1);
    let yesterday_value: Decimal = investments
        .iter()
        .filter(|i| i.date <= yesterday)
        .map(Investment::current_value)
        .sum();
    let one_day_return = percentage_of(total_current_value - yesterday_value, yesterday_value);

    let best = investments.iter().max_by(|a, b| {
        a.returns_since_investment
            .cmp(&b.returns_since_investment)
            .then_with(|| b.id.cmp(&a.id))
    });
    let worst = investments.iter().min_by(|a, b| {
        a.returns_since_investment
            .cmp(&b.returns_since_investment)
            .then_with(|| a.id.cmp(&b.id))
    });

    PortfolioOverview {
        initial_investment: total_investment,
        current_value: total_current_value,
        growth_percentage,
        one_day_return,
        best_performing_scheme: best.map(|i| scheme_performance(i, fund_names)),
        worst_performing_scheme: worst.map(|i| scheme_performance(i, fund_names)),
    }
}

fn scheme_performance(
    investment: &Investment,
    fund_names: &HashMap<i32, String>,
) -> SchemePerformance {
    let fund_name = fund_names.get(&investment.fund_id).cloned();
    if fund_name.is_none() {
        debug!(
            "Investment {} references fund {} which has no catalog entry",
            investment.id, investment.fund_id
        );
    }
    SchemePerformance {
        investment_id: investment.id,
        fund_id: investment.fund_id,
        fund_name,
        amount_invested: investment.amount_invested,
        current_value: investment.current_value(),
        returns_since_investment: investment.returns_since_investment,
    }
}
