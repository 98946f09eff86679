use chrono::NaiveDate;
use fundfolio_core::{funds as core_funds, investments as core_investments};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MutualFund {
    pub id: i32,
    pub name: String,
    pub isin: String,
}

impl From<core_funds::MutualFund> for MutualFund {
    fn from(f: core_funds::MutualFund) -> Self {
        Self {
            id: f.id,
            name: f.name,
            isin: f.isin,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MutualFundInput {
    pub name: String,
    pub isin: String,
}

impl From<MutualFundInput> for core_funds::MutualFundInput {
    fn from(i: MutualFundInput) -> Self {
        Self {
            name: i.name,
            isin: i.isin,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FundAllocation {
    pub id: i32,
    pub fund_id: i32,
    pub sector: String,
    pub percentage: Decimal,
}

impl From<core_funds::FundAllocation> for FundAllocation {
    fn from(a: core_funds::FundAllocation) -> Self {
        Self {
            id: a.id,
            fund_id: a.fund_id,
            sector: a.sector,
            percentage: a.percentage,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SectorWeight {
    pub sector: String,
    pub percentage: Decimal,
}

impl From<SectorWeight> for core_funds::SectorWeight {
    fn from(w: SectorWeight) -> Self {
        Self {
            sector: w.sector,
            percentage: w.percentage,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FundOverlap {
    pub id: i32,
    pub fund_id: i32,
    pub overlapping_fund_id: i32,
    pub overlap_percentage: Decimal,
}

impl From<core_funds::FundOverlap> for FundOverlap {
    fn from(o: core_funds::FundOverlap) -> Self {
        Self {
            id: o.id,
            fund_id: o.fund_id,
            overlapping_fund_id: o.overlapping_fund_id,
            overlap_percentage: o.overlap_percentage,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewFundOverlap {
    pub fund_id: i32,
    pub overlapping_fund_id: i32,
    pub overlap_percentage: Decimal,
}

impl From<NewFundOverlap> for core_funds::NewFundOverlap {
    fn from(o: NewFundOverlap) -> Self {
        Self {
            fund_id: o.fund_id,
            overlapping_fund_id: o.overlapping_fund_id,
            overlap_percentage: o.overlap_percentage,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: i32,
    pub fund_id: i32,
    pub date: NaiveDate,
    pub amount_invested: Decimal,
    pub nav_at_investment: Decimal,
    pub returns_since_investment: Decimal,
    pub current_value: Decimal,
}

impl From<core_investments::Investment> for Investment {
    fn from(i: core_investments::Investment) -> Self {
        let current_value = i.current_value();
        Self {
            id: i.id,
            fund_id: i.fund_id,
            date: i.date,
            amount_invested: i.amount_invested,
            nav_at_investment: i.nav_at_investment,
            returns_since_investment: i.returns_since_investment,
            current_value,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub fund_id: i32,
    pub date: NaiveDate,
    pub amount_invested: Decimal,
    pub nav_at_investment: Decimal,
    #[serde(default)]
    pub returns_since_investment: Decimal,
}

impl From<NewInvestment> for core_investments::NewInvestment {
    fn from(i: NewInvestment) -> Self {
        Self {
            fund_id: i.fund_id,
            date: i.date,
            amount_invested: i.amount_invested,
            nav_at_investment: i.nav_at_investment,
            returns_since_investment: i.returns_since_investment,
        }
    }
}
