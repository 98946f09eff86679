//! Database models for investments.

use chrono::NaiveDate;
use diesel::prelude::*;
use fundfolio_core::investments::{Investment, NewInvestment};

use crate::funds::MutualFundDB;
use crate::users::UserDB;
use crate::utils::parse_decimal;

#[derive(Queryable, Identifiable, Selectable, Associations, PartialEq, Debug, Clone)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(belongs_to(MutualFundDB, foreign_key = fund_id))]
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InvestmentDB {
    pub id: i32,
    pub user_id: i32,
    pub fund_id: i32,
    pub date: NaiveDate,
    pub amount_invested: String,
    pub nav_at_investment: String,
    pub returns_since_investment: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::investments)]
pub struct NewInvestmentDB {
    pub user_id: i32,
    pub fund_id: i32,
    pub date: NaiveDate,
    pub amount_invested: String,
    pub nav_at_investment: String,
    pub returns_since_investment: String,
}

impl NewInvestmentDB {
    pub fn for_user(user_id: i32, domain: NewInvestment) -> Self {
        Self {
            user_id,
            fund_id: domain.fund_id,
            date: domain.date,
            amount_invested: domain.amount_invested.to_string(),
            nav_at_investment: domain.nav_at_investment.to_string(),
            returns_since_investment: domain.returns_since_investment.to_string(),
        }
    }
}

impl From<InvestmentDB> for Investment {
    fn from(db: InvestmentDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            fund_id: db.fund_id,
            date: db.date,
            amount_invested: parse_decimal(&db.amount_invested, "amount_invested"),
            nav_at_investment: parse_decimal(&db.nav_at_investment, "nav_at_investment"),
            returns_since_investment: parse_decimal(
                &db.returns_since_investment,
                "returns_since_investment",
            ),
        }
    }
}
