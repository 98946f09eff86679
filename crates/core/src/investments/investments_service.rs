use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Error, Result};
use crate::funds::FundRepositoryTrait;
use crate::investments::investments_model::{Investment, NewInvestment};
use crate::investments::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::users::UserRepositoryTrait;

pub struct InvestmentService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    fund_repository: Arc<dyn FundRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        fund_repository: Arc<dyn FundRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    ) -> Self {
        Self {
            user_repository,
            fund_repository,
            investment_repository,
        }
    }
}

#[async_trait]
impl InvestmentServiceTrait for InvestmentService {
    async fn record_investment(
        &self,
        username: &str,
        new_investment: NewInvestment,
    ) -> Result<Option<Investment>> {
        let Some(user) = self.user_repository.find_by_username(username)? else {
            return Ok(None);
        };
        new_investment.validate()?;
        if self
            .fund_repository
            .find_fund(new_investment.fund_id)?
            .is_none()
        {
            return Err(Error::NotFound(format!(
                "Fund {} not found",
                new_investment.fund_id
            )));
        }

        let investment = self
            .investment_repository
            .create(user.id, new_investment)
            .await?;
        debug!(
            "Recorded investment {} of {} in fund {} for {}",
            investment.id, investment.amount_invested, investment.fund_id, user.username
        );
        Ok(Some(investment))
    }

    fn get_user_investments(&self, username: &str) -> Result<Option<Vec<Investment>>> {
        let Some(user) = self.user_repository.find_by_username(username)? else {
            return Ok(None);
        };
        let mut investments = self.investment_repository.list_by_user(user.id, None)?;
        investments.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(Some(investments))
    }
}
