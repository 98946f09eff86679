//! Investment domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A recorded purchase of a mutual fund by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: i32,
    pub user_id: i32,
    pub fund_id: i32,
    pub date: NaiveDate,
    pub amount_invested: Decimal,
    pub nav_at_investment: Decimal,
    /// Cumulative return to date, in percent.
    pub returns_since_investment: Decimal,
}

impl Investment {
    /// Invested amount grown by the cumulative return.
    pub fn current_value(&self) -> Decimal {
        self.amount_invested
            + self.amount_invested * self.returns_since_investment / Decimal::ONE_HUNDRED
    }
}

/// Input model for recording a new investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub fund_id: i32,
    pub date: NaiveDate,
    pub amount_invested: Decimal,
    pub nav_at_investment: Decimal,
    pub returns_since_investment: Decimal,
}

impl NewInvestment {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("amountInvested", self.amount_invested),
            ("navAtInvestment", self.nav_at_investment),
        ] {
            if value <= Decimal::ZERO {
                return Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    value,
                }
                .into());
            }
        }
        // A fund can lose at most everything.
        if self.returns_since_investment < -Decimal::ONE_HUNDRED {
            return Err(ValidationError::OutOfRange {
                field: "returnsSinceInvestment".to_string(),
                value: self.returns_since_investment,
            }
            .into());
        }
        Ok(())
    }
}
