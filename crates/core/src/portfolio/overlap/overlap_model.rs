use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundOverlapDetail {
    pub fund_id: i32,
    pub fund_name: String,
    pub overlapping_fund_id: i32,
    pub overlapping_fund_name: String,
    pub overlap_percentage: Decimal,
    /// Sector names present in both funds' allocation rows. The catalog has
    /// no stock-level holdings, so sectors stand in for stocks here.
    pub common_stocks: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundOverlapAnalysis {
    pub overlaps: Vec<FundOverlapDetail>,
}
