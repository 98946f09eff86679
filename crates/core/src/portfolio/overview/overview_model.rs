use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline numbers for a user's whole portfolio.
///
/// A user with no investments gets `PortfolioOverview::default()`: zero
/// amounts and no best/worst scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    /// Sum of invested amounts
    pub initial_investment: Decimal,
    /// Sum of invested amounts grown by each investment's cumulative return
    pub current_value: Decimal,
    /// Percentage change from invested capital to current value
    pub growth_percentage: Decimal,
    /// Percentage change against the value of investments dated up to yesterday
    pub one_day_return: Decimal,
    pub best_performing_scheme: Option<SchemePerformance>,
    pub worst_performing_scheme: Option<SchemePerformance>,
}

/// The investment picked as best or worst performer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemePerformance {
    pub investment_id: i32,
    pub fund_id: i32,
    /// `None` when the fund row could not be resolved
    pub fund_name: Option<String>,
    pub amount_invested: Decimal,
    pub current_value: Decimal,
    pub returns_since_investment: Decimal,
}
