use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use fundfolio_core::investments::{Investment, InvestmentRepositoryTrait, NewInvestment};
use fundfolio_core::Result;

use super::model::{InvestmentDB, NewInvestmentDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::investments;

pub struct InvestmentRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl InvestmentRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    fn list_by_user(&self, user_id: i32, since: Option<NaiveDate>) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = investments::table
            .filter(investments::user_id.eq(user_id))
            .select(InvestmentDB::as_select())
            .into_boxed();
        if let Some(since) = since {
            query = query.filter(investments::date.ge(since));
        }
        let rows = query
            .order((investments::date.asc(), investments::id.asc()))
            .load::<InvestmentDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Investment::from).collect())
    }

    async fn create(&self, user_id: i32, new_investment: NewInvestment) -> Result<Investment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                let row = NewInvestmentDB::for_user(user_id, new_investment);
                let created = diesel::insert_into(investments::table)
                    .values(&row)
                    .returning(InvestmentDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Investment::from(created))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::setup_db;
    use crate::funds::FundRepository;
    use crate::users::UserRepository;
    use fundfolio_core::funds::{FundRepositoryTrait, MutualFundInput};
    use fundfolio_core::users::{NewUser, UserRepositoryTrait};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_investment(
        fund_id: i32,
        on: NaiveDate,
        amount: Decimal,
        returns: Decimal,
    ) -> NewInvestment {
        NewInvestment {
            fund_id,
            date: on,
            amount_invested: amount,
            nav_at_investment: dec!(100),
            returns_since_investment: returns,
        }
    }

    #[tokio::test]
    async fn test_list_by_user_orders_and_filters_by_date() {
        let db = setup_db();
        let users = UserRepository::new(db.pool.clone(), db.writer.clone());
        let funds = FundRepository::new(db.pool.clone(), db.writer.clone());
        let repo = InvestmentRepository::new(db.pool.clone(), db.writer.clone());

        let john = users
            .create(NewUser {
                username: "john_doe".to_string(),
                password_hash: "h".to_string(),
            })
            .await
            .unwrap();
        let jane = users
            .create(NewUser {
                username: "jane_smith".to_string(),
                password_hash: "h".to_string(),
            })
            .await
            .unwrap();
        let fund = funds
            .create_fund(MutualFundInput {
                name: "Mirae Asset Large Cap Fund".to_string(),
                isin: "INF769K01AX2".to_string(),
            })
            .await
            .unwrap();

        let late = repo
            .create(
                john.id,
                new_investment(fund.id, date(2023, 3, 1), dec!(1100000), dec!(13)),
            )
            .await
            .unwrap();
        let early = repo
            .create(
                john.id,
                new_investment(fund.id, date(2022, 12, 5), dec!(800000), dec!(10.2)),
            )
            .await
            .unwrap();
        repo.create(
            jane.id,
            new_investment(fund.id, date(2023, 2, 15), dec!(1200000), dec!(11)),
        )
        .await
        .unwrap();

        let all = repo.list_by_user(john.id, None).unwrap();
        assert_eq!(
            all.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![early.id, late.id]
        );
        assert_eq!(all[0].date, date(2022, 12, 5));

        let recent = repo.list_by_user(john.id, Some(date(2023, 3, 1))).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, late.id);

        assert!(repo.list_by_user(9_999, None).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_decimal_columns_round_trip_exactly() {
        let db = setup_db();
        let users = UserRepository::new(db.pool.clone(), db.writer.clone());
        let funds = FundRepository::new(db.pool.clone(), db.writer.clone());
        let repo = InvestmentRepository::new(db.pool.clone(), db.writer.clone());

        let user = users
            .create(NewUser {
                username: "saver".to_string(),
                password_hash: "h".to_string(),
            })
            .await
            .unwrap();
        let fund = funds
            .create_fund(MutualFundInput {
                name: "Axis Bluechip Fund".to_string(),
                isin: "INF846K01DP8".to_string(),
            })
            .await
            .unwrap();

        let created = repo
            .create(
                user.id,
                new_investment(fund.id, date(2023, 1, 10), dec!(0.1), dec!(-9.875)),
            )
            .await
            .unwrap();
        assert_eq!(created.amount_invested, dec!(0.1));

        let listed = repo.list_by_user(user.id, None).unwrap();
        assert_eq!(listed[0].amount_invested, dec!(0.1));
        assert_eq!(listed[0].returns_since_investment, dec!(-9.875));
        assert_eq!(listed[0].current_value(), dec!(0.0901250));
    }
}
