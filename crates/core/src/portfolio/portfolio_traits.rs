use crate::errors::Result;

use super::{FundOverlapAnalysis, HistoryPeriod, PortfolioOverview, SectorAllocation, ValueHistory};

/// One read per analytics view. `Ok(None)` means the user does not exist;
/// a user without investments gets the view's empty value.
pub trait PortfolioServiceTrait: Send + Sync {
    fn get_overview(&self, username: &str) -> Result<Option<PortfolioOverview>>;
    fn get_sector_allocation(&self, username: &str) -> Result<Option<SectorAllocation>>;
    fn get_value_history(
        &self,
        username: &str,
        period: HistoryPeriod,
    ) -> Result<Option<ValueHistory>>;
    fn get_fund_overlap(&self, username: &str) -> Result<Option<FundOverlapAnalysis>>;
}
