use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::errors::Result;
use crate::funds::{FundAllocation, FundRepositoryTrait, MutualFund};
use crate::investments::{Investment, InvestmentRepositoryTrait};
use crate::users::{User, UserRepositoryTrait};
use crate::utils::time_utils::{days_before, valuation_date_today};

use super::allocation::calculate_sector_allocation;
use super::history::calculate_value_history;
use super::overlap::calculate_fund_overlaps;
use super::overview::calculate_overview;
use super::{
    FundOverlapAnalysis, HistoryPeriod, PortfolioOverview, PortfolioServiceTrait,
    SectorAllocation, ValueHistory,
};

/// Reads a user's rows in batches and hands them to the view calculators.
pub struct PortfolioService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    fund_repository: Arc<dyn FundRepositoryTrait>,
    today: fn() -> NaiveDate,
}

impl PortfolioService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        fund_repository: Arc<dyn FundRepositoryTrait>,
    ) -> Self {
        Self {
            user_repository,
            investment_repository,
            fund_repository,
            today: valuation_date_today,
        }
    }

    /// Overrides the date source used for the time-windowed views.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn find_user(&self, username: &str) -> Result<Option<User>> {
        let user = self.user_repository.find_by_username(username)?;
        if user.is_none() {
            debug!("Portfolio requested for unknown user '{}'", username);
        }
        Ok(user)
    }

    fn funds_by_id(&self, fund_ids: &[i32]) -> Result<HashMap<i32, MutualFund>> {
        if fund_ids.is_empty() {
            return Ok(HashMap::new());
        }
        Ok(self
            .fund_repository
            .list_funds_by_ids(fund_ids)?
            .into_iter()
            .map(|f| (f.id, f))
            .collect())
    }

    fn allocations_by_fund(&self, fund_ids: &[i32]) -> Result<HashMap<i32, Vec<FundAllocation>>> {
        if fund_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let mut grouped: HashMap<i32, Vec<FundAllocation>> = HashMap::new();
        for allocation in self.fund_repository.list_allocations_for_funds(fund_ids)? {
            grouped.entry(allocation.fund_id).or_default().push(allocation);
        }
        Ok(grouped)
    }
}

fn distinct_fund_ids(investments: &[Investment]) -> Vec<i32> {
    investments
        .iter()
        .map(|i| i.fund_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

impl PortfolioServiceTrait for PortfolioService {
    fn get_overview(&self, username: &str) -> Result<Option<PortfolioOverview>> {
        let Some(user) = self.find_user(username)? else {
            return Ok(None);
        };
        let investments = self.investment_repository.list_by_user(user.id, None)?;
        if investments.is_empty() {
            return Ok(Some(PortfolioOverview::default()));
        }

        let fund_names: HashMap<i32, String> = self
            .funds_by_id(&distinct_fund_ids(&investments))?
            .into_iter()
            .map(|(id, fund)| (id, fund.name))
            .collect();
        Ok(Some(calculate_overview(
            &investments,
            &fund_names,
            (self.today)(),
        )))
    }

    fn get_sector_allocation(&self, username: &str) -> Result<Option<SectorAllocation>> {
        let Some(user) = self.find_user(username)? else {
            return Ok(None);
        };
        let investments = self.investment_repository.list_by_user(user.id, None)?;
        let allocations = self.allocations_by_fund(&distinct_fund_ids(&investments))?;
        Ok(Some(calculate_sector_allocation(&investments, &allocations)))
    }

    fn get_value_history(
        &self,
        username: &str,
        period: HistoryPeriod,
    ) -> Result<Option<ValueHistory>> {
        let Some(user) = self.find_user(username)? else {
            return Ok(None);
        };
        let today = (self.today)();
        let start_date = days_before(today, period.window_days());
        let investments = self
            .investment_repository
            .list_by_user(user.id, Some(start_date))?;
        Ok(Some(calculate_value_history(&investments, period, today)))
    }

    /// Covers every overlap pair in the catalog, not only pairs among the
    /// user's own funds. The user's investments only gate the empty state.
    fn get_fund_overlap(&self, username: &str) -> Result<Option<FundOverlapAnalysis>> {
        let Some(user) = self.find_user(username)? else {
            return Ok(None);
        };
        let investments = self.investment_repository.list_by_user(user.id, None)?;
        if investments.is_empty() {
            return Ok(Some(FundOverlapAnalysis::default()));
        }

        let overlaps = self.fund_repository.list_overlaps()?;
        let fund_ids: Vec<i32> = overlaps
            .iter()
            .flat_map(|o| [o.fund_id, o.overlapping_fund_id])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let funds = self.funds_by_id(&fund_ids)?;
        let allocations = self.allocations_by_fund(&fund_ids)?;
        Ok(Some(calculate_fund_overlaps(&overlaps, &funds, &allocations)))
    }
}
