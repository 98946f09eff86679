use crate::errors::Result;
use crate::funds::funds_model::{
    FundAllocation, FundOverlap, MutualFund, MutualFundInput, NewFundOverlap, SectorWeight,
};
use async_trait::async_trait;

/// Trait for fund catalog repository operations
#[async_trait]
pub trait FundRepositoryTrait: Send + Sync {
    fn list_funds(&self) -> Result<Vec<MutualFund>>;
    fn find_fund(&self, fund_id: i32) -> Result<Option<MutualFund>>;
    /// Batch lookup; ids with no matching fund are absent from the result.
    fn list_funds_by_ids(&self, fund_ids: &[i32]) -> Result<Vec<MutualFund>>;
    async fn create_fund(&self, input: MutualFundInput) -> Result<MutualFund>;
    async fn update_fund(&self, fund_id: i32, input: MutualFundInput)
        -> Result<Option<MutualFund>>;
    /// Deletes the fund together with its allocation and overlap rows.
    async fn delete_fund(&self, fund_id: i32) -> Result<usize>;

    fn list_allocations(&self, fund_id: i32) -> Result<Vec<FundAllocation>>;
    fn list_allocations_for_funds(&self, fund_ids: &[i32]) -> Result<Vec<FundAllocation>>;
    async fn replace_allocations(
        &self,
        fund_id: i32,
        weights: Vec<SectorWeight>,
    ) -> Result<Vec<FundAllocation>>;

    fn list_overlaps(&self) -> Result<Vec<FundOverlap>>;
    async fn create_overlap(&self, new_overlap: NewFundOverlap) -> Result<FundOverlap>;
}

/// Trait for fund catalog service operations
#[async_trait]
pub trait FundServiceTrait: Send + Sync {
    fn get_funds(&self) -> Result<Vec<MutualFund>>;
    fn get_fund(&self, fund_id: i32) -> Result<Option<MutualFund>>;
    async fn create_fund(&self, input: MutualFundInput) -> Result<MutualFund>;
    async fn update_fund(&self, fund_id: i32, input: MutualFundInput)
        -> Result<Option<MutualFund>>;
    /// Returns `false` when no fund had this id.
    async fn delete_fund(&self, fund_id: i32) -> Result<bool>;
    /// Returns `None` when the fund does not exist.
    fn get_allocations(&self, fund_id: i32) -> Result<Option<Vec<FundAllocation>>>;
    async fn replace_allocations(
        &self,
        fund_id: i32,
        weights: Vec<SectorWeight>,
    ) -> Result<Option<Vec<FundAllocation>>>;
    fn get_overlaps(&self) -> Result<Vec<FundOverlap>>;
    async fn create_overlap(&self, new_overlap: NewFundOverlap) -> Result<FundOverlap>;
}
