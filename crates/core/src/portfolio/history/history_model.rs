use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Trailing window selector for the value history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryPeriod {
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "3Y")]
    ThreeYears,
    #[serde(rename = "MAX")]
    Max,
}

impl HistoryPeriod {
    pub const ALL: [HistoryPeriod; 6] = [
        HistoryPeriod::OneMonth,
        HistoryPeriod::ThreeMonths,
        HistoryPeriod::SixMonths,
        HistoryPeriod::OneYear,
        HistoryPeriod::ThreeYears,
        HistoryPeriod::Max,
    ];

    /// Window length in days. `Max` is capped at ten years.
    pub fn window_days(self) -> u64 {
        match self {
            HistoryPeriod::OneMonth => 30,
            HistoryPeriod::ThreeMonths => 90,
            HistoryPeriod::SixMonths => 180,
            HistoryPeriod::OneYear => 365,
            HistoryPeriod::ThreeYears => 1095,
            HistoryPeriod::Max => 3650,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HistoryPeriod::OneMonth => "1M",
            HistoryPeriod::ThreeMonths => "3M",
            HistoryPeriod::SixMonths => "6M",
            HistoryPeriod::OneYear => "1Y",
            HistoryPeriod::ThreeYears => "3Y",
            HistoryPeriod::Max => "MAX",
        }
    }
}

impl fmt::Display for HistoryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        HistoryPeriod::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationError::InvalidInput(format!(
                    "Unknown period '{}'; expected one of 1M, 3M, 6M, 1Y, 3Y, MAX",
                    s
                ))
                .into()
            })
    }
}

/// Value of one investment on its purchase date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueHistory {
    pub period: HistoryPeriod,
    pub start_date: NaiveDate,
    /// Ascending by date
    pub history: Vec<ValuePoint>,
    /// Last point's value, zero when empty
    pub total_value: Decimal,
    /// Last minus first value, zero when empty
    pub change_amount: Decimal,
    /// Change relative to the first value, rounded to 2 decimals
    pub change_percentage: Decimal,
}
