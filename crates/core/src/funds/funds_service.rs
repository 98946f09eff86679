use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::constants::MAX_PERCENTAGE;
use crate::errors::{Error, Result, ValidationError};
use crate::funds::funds_model::{
    validate_percentage, FundAllocation, FundOverlap, MutualFund, MutualFundInput,
    NewFundOverlap, SectorWeight,
};
use crate::funds::funds_traits::{FundRepositoryTrait, FundServiceTrait};

pub struct FundService {
    repository: Arc<dyn FundRepositoryTrait>,
}

impl FundService {
    pub fn new(repository: Arc<dyn FundRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn normalize_weights(weights: Vec<SectorWeight>) -> Result<Vec<SectorWeight>> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(weights.len());
        for weight in weights {
            let sector = weight.sector.trim().to_string();
            if sector.is_empty() {
                return Err(ValidationError::MissingField("sector".to_string()).into());
            }
            validate_percentage("percentage", weight.percentage)?;
            if !seen.insert(sector.to_lowercase()) {
                return Err(ValidationError::InvalidInput(format!(
                    "Sector '{}' is listed more than once",
                    sector
                ))
                .into());
            }
            normalized.push(SectorWeight {
                sector,
                percentage: weight.percentage,
            });
        }
        Ok(normalized)
    }
}

#[async_trait]
impl FundServiceTrait for FundService {
    fn get_funds(&self) -> Result<Vec<MutualFund>> {
        self.repository.list_funds()
    }

    fn get_fund(&self, fund_id: i32) -> Result<Option<MutualFund>> {
        self.repository.find_fund(fund_id)
    }

    async fn create_fund(&self, input: MutualFundInput) -> Result<MutualFund> {
        let input = input.normalized()?;
        self.repository.create_fund(input).await
    }

    async fn update_fund(
        &self,
        fund_id: i32,
        input: MutualFundInput,
    ) -> Result<Option<MutualFund>> {
        let input = input.normalized()?;
        self.repository.update_fund(fund_id, input).await
    }

    async fn delete_fund(&self, fund_id: i32) -> Result<bool> {
        let deleted = self.repository.delete_fund(fund_id).await?;
        debug!("Deleted {} fund row(s) for id {}", deleted, fund_id);
        Ok(deleted > 0)
    }

    fn get_allocations(&self, fund_id: i32) -> Result<Option<Vec<FundAllocation>>> {
        if self.repository.find_fund(fund_id)?.is_none() {
            return Ok(None);
        }
        self.repository.list_allocations(fund_id).map(Some)
    }

    async fn replace_allocations(
        &self,
        fund_id: i32,
        weights: Vec<SectorWeight>,
    ) -> Result<Option<Vec<FundAllocation>>> {
        let weights = Self::normalize_weights(weights)?;
        if self.repository.find_fund(fund_id)?.is_none() {
            return Ok(None);
        }
        let total: Decimal = weights.iter().map(|w| w.percentage).sum();
        if total > MAX_PERCENTAGE {
            // Stored as given; analytics apportion whatever the rows say.
            debug!(
                "Sector weights for fund {} sum to {}%, above 100%",
                fund_id, total
            );
        }
        self.repository
            .replace_allocations(fund_id, weights)
            .await
            .map(Some)
    }

    fn get_overlaps(&self) -> Result<Vec<FundOverlap>> {
        self.repository.list_overlaps()
    }

    async fn create_overlap(&self, new_overlap: NewFundOverlap) -> Result<FundOverlap> {
        validate_percentage("overlapPercentage", new_overlap.overlap_percentage)?;
        if new_overlap.fund_id == new_overlap.overlapping_fund_id {
            return Err(ValidationError::InvalidInput(
                "A fund cannot overlap with itself".to_string(),
            )
            .into());
        }
        for fund_id in [new_overlap.fund_id, new_overlap.overlapping_fund_id] {
            if self.repository.find_fund(fund_id)?.is_none() {
                return Err(Error::NotFound(format!("Fund {} not found", fund_id)));
            }
        }
        self.repository.create_overlap(new_overlap).await
    }
}
