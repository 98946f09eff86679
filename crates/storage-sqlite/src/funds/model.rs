//! Database models for mutual funds, sector allocations and overlap pairs.

use diesel::prelude::*;
use crate::utils::parse_decimal;
use fundfolio_core::funds::{
    FundAllocation, FundOverlap, MutualFund, MutualFundInput, NewFundOverlap,
};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::mutual_funds)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MutualFundDB {
    pub id: i32,
    pub name: String,
    pub isin: String,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::mutual_funds)]
pub struct NewMutualFundDB {
    pub name: String,
    pub isin: String,
}

#[derive(Queryable, Identifiable, Selectable, Associations, PartialEq, Debug, Clone)]
#[diesel(belongs_to(MutualFundDB, foreign_key = fund_id))]
#[diesel(table_name = crate::schema::fund_allocations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FundAllocationDB {
    pub id: i32,
    pub fund_id: i32,
    pub sector: String,
    pub percentage: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::fund_allocations)]
pub struct NewFundAllocationDB {
    pub fund_id: i32,
    pub sector: String,
    pub percentage: String,
}

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::fund_overlaps)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FundOverlapDB {
    pub id: i32,
    pub fund_id: i32,
    pub overlapping_fund_id: i32,
    pub overlap_percentage: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::fund_overlaps)]
pub struct NewFundOverlapDB {
    pub fund_id: i32,
    pub overlapping_fund_id: i32,
    pub overlap_percentage: String,
}

impl From<MutualFundDB> for MutualFund {
    fn from(db: MutualFundDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            isin: db.isin,
        }
    }
}

impl From<MutualFundInput> for NewMutualFundDB {
    fn from(input: MutualFundInput) -> Self {
        Self {
            name: input.name,
            isin: input.isin,
        }
    }
}

impl From<FundAllocationDB> for FundAllocation {
    fn from(db: FundAllocationDB) -> Self {
        Self {
            id: db.id,
            fund_id: db.fund_id,
            sector: db.sector,
            percentage: parse_decimal(&db.percentage, "percentage"),
        }
    }
}

impl From<FundOverlapDB> for FundOverlap {
    fn from(db: FundOverlapDB) -> Self {
        Self {
            id: db.id,
            fund_id: db.fund_id,
            overlapping_fund_id: db.overlapping_fund_id,
            overlap_percentage: parse_decimal(&db.overlap_percentage, "overlap_percentage"),
        }
    }
}

impl From<NewFundOverlap> for NewFundOverlapDB {
    fn from(domain: NewFundOverlap) -> Self {
        Self {
            fund_id: domain.fund_id,
            overlapping_fund_id: domain.overlapping_fund_id,
            overlap_percentage: domain.overlap_percentage.to_string(),
        }
    }
}
