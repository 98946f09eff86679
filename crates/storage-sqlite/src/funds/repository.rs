use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use fundfolio_core::funds::{
    FundAllocation, FundOverlap, FundRepositoryTrait, MutualFund, MutualFundInput,
    NewFundOverlap, SectorWeight,
};
use fundfolio_core::Result;

use super::model::{
    FundAllocationDB, FundOverlapDB, MutualFundDB, NewFundAllocationDB, NewFundOverlapDB,
    NewMutualFundDB,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{fund_allocations, fund_overlaps, mutual_funds};
use crate::utils::load_in_chunks;

pub struct FundRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl FundRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    fn load_allocations(conn: &mut SqliteConnection, fund_id: i32) -> Result<Vec<FundAllocation>> {
        let rows = fund_allocations::table
            .filter(fund_allocations::fund_id.eq(fund_id))
            .order(fund_allocations::id.asc())
            .select(FundAllocationDB::as_select())
            .load::<FundAllocationDB>(conn)
            .into_core()?;
        Ok(rows.into_iter().map(FundAllocation::from).collect())
    }
}

#[async_trait]
impl FundRepositoryTrait for FundRepository {
    fn list_funds(&self) -> Result<Vec<MutualFund>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = mutual_funds::table
            .order(mutual_funds::id.asc())
            .select(MutualFundDB::as_select())
            .load::<MutualFundDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(MutualFund::from).collect())
    }

    fn find_fund(&self, fund_id: i32) -> Result<Option<MutualFund>> {
        let mut conn = get_connection(&self.pool)?;
        let row = mutual_funds::table
            .find(fund_id)
            .select(MutualFundDB::as_select())
            .first::<MutualFundDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(MutualFund::from))
    }

    fn list_funds_by_ids(&self, fund_ids: &[i32]) -> Result<Vec<MutualFund>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = load_in_chunks(fund_ids, |chunk| {
            mutual_funds::table
                .filter(mutual_funds::id.eq_any(chunk))
                .select(MutualFundDB::as_select())
                .load::<MutualFundDB>(&mut conn)
                .into_core()
        })?;
        Ok(rows.into_iter().map(MutualFund::from).collect())
    }

    async fn create_fund(&self, input: MutualFundInput) -> Result<MutualFund> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<MutualFund> {
                let row: NewMutualFundDB = input.into();
                let created = diesel::insert_into(mutual_funds::table)
                    .values(&row)
                    .returning(MutualFundDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(MutualFund::from(created))
            })
            .await
    }

    async fn update_fund(
        &self,
        fund_id: i32,
        input: MutualFundInput,
    ) -> Result<Option<MutualFund>> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<MutualFund>> {
                let changes: NewMutualFundDB = input.into();
                let updated = diesel::update(mutual_funds::table.find(fund_id))
                    .set(&changes)
                    .returning(MutualFundDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .into_core()?;
                Ok(updated.map(MutualFund::from))
            })
            .await
    }

    async fn delete_fund(&self, fund_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let allocations = diesel::delete(
                    fund_allocations::table.filter(fund_allocations::fund_id.eq(fund_id)),
                )
                .execute(conn)
                .into_core()?;
                let overlaps = diesel::delete(
                    fund_overlaps::table.filter(
                        fund_overlaps::fund_id
                            .eq(fund_id)
                            .or(fund_overlaps::overlapping_fund_id.eq(fund_id)),
                    ),
                )
                .execute(conn)
                .into_core()?;
                debug!(
                    "Deleting fund {} with {} allocation and {} overlap rows",
                    fund_id, allocations, overlaps
                );
                // Investments keep their foreign key, so a referenced fund
                // fails here and the whole transaction rolls back.
                diesel::delete(mutual_funds::table.find(fund_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn list_allocations(&self, fund_id: i32) -> Result<Vec<FundAllocation>> {
        let mut conn = get_connection(&self.pool)?;
        Self::load_allocations(&mut conn, fund_id)
    }

    fn list_allocations_for_funds(&self, fund_ids: &[i32]) -> Result<Vec<FundAllocation>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = load_in_chunks(fund_ids, |chunk| {
            fund_allocations::table
                .filter(fund_allocations::fund_id.eq_any(chunk))
                .order(fund_allocations::id.asc())
                .select(FundAllocationDB::as_select())
                .load::<FundAllocationDB>(&mut conn)
                .into_core()
        })?;
        Ok(rows.into_iter().map(FundAllocation::from).collect())
    }

    async fn replace_allocations(
        &self,
        fund_id: i32,
        weights: Vec<SectorWeight>,
    ) -> Result<Vec<FundAllocation>> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<FundAllocation>> {
                diesel::delete(
                    fund_allocations::table.filter(fund_allocations::fund_id.eq(fund_id)),
                )
                .execute(conn)
                .into_core()?;

                let rows: Vec<NewFundAllocationDB> = weights
                    .into_iter()
                    .map(|w| NewFundAllocationDB {
                        fund_id,
                        sector: w.sector,
                        percentage: w.percentage.to_string(),
                    })
                    .collect();
                if !rows.is_empty() {
                    diesel::insert_into(fund_allocations::table)
                        .values(&rows)
                        .execute(conn)
                        .into_core()?;
                }
                Self::load_allocations(conn, fund_id)
            })
            .await
    }

    fn list_overlaps(&self) -> Result<Vec<FundOverlap>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = fund_overlaps::table
            .order(fund_overlaps::id.asc())
            .select(FundOverlapDB::as_select())
            .load::<FundOverlapDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(FundOverlap::from).collect())
    }

    async fn create_overlap(&self, new_overlap: NewFundOverlap) -> Result<FundOverlap> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<FundOverlap> {
                let row: NewFundOverlapDB = new_overlap.into();
                let created = diesel::insert_into(fund_overlaps::table)
                    .values(&row)
                    .returning(FundOverlapDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(FundOverlap::from(created))
            })
            .await
    }
}
