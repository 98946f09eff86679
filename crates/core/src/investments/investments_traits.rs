use crate::errors::Result;
use crate::investments::investments_model::{Investment, NewInvestment};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for investment repository operations
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Investments of a user, optionally restricted to `date >= since`.
    fn list_by_user(&self, user_id: i32, since: Option<NaiveDate>) -> Result<Vec<Investment>>;
    async fn create(&self, user_id: i32, new_investment: NewInvestment) -> Result<Investment>;
}

/// Trait for investment service operations. `None` means the user is unknown.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    async fn record_investment(
        &self,
        username: &str,
        new_investment: NewInvestment,
    ) -> Result<Option<Investment>>;
    fn get_user_investments(&self, username: &str) -> Result<Option<Vec<Investment>>>;
}
