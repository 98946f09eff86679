//! Fund catalog domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_PERCENTAGE;
use crate::errors::{Result, ValidationError};

/// A mutual fund in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MutualFund {
    pub id: i32,
    pub name: String,
    pub isin: String,
}

/// Payload used to create a fund or replace its details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutualFundInput {
    pub name: String,
    pub isin: String,
}

impl MutualFundInput {
    /// Trims both fields and rejects blanks.
    pub fn normalized(self) -> Result<Self> {
        let name = self.name.trim().to_string();
        let isin = self.isin.trim().to_uppercase();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if isin.is_empty() {
            return Err(ValidationError::MissingField("isin".to_string()).into());
        }
        Ok(Self { name, isin })
    }
}

/// One sector row of a fund's breakdown. `percentage` is on a 0-100 scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundAllocation {
    pub id: i32,
    pub fund_id: i32,
    pub sector: String,
    pub percentage: Decimal,
}

/// Sector weight submitted when replacing a fund's breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectorWeight {
    pub sector: String,
    pub percentage: Decimal,
}

/// Directed overlap record. The reverse pair may or may not exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundOverlap {
    pub id: i32,
    pub fund_id: i32,
    pub overlapping_fund_id: i32,
    pub overlap_percentage: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFundOverlap {
    pub fund_id: i32,
    pub overlapping_fund_id: i32,
    pub overlap_percentage: Decimal,
}

pub(crate) fn validate_percentage(field: &str, value: Decimal) -> Result<()> {
    if !(Decimal::ZERO..=MAX_PERCENTAGE).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
        }
        .into());
    }
    Ok(())
}
