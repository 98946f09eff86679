//! In-memory repository doubles shared by the service tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::{DatabaseError, Error, Result};
use crate::funds::{
    FundAllocation, FundOverlap, FundRepositoryTrait, MutualFund, MutualFundInput,
    NewFundOverlap, SectorWeight,
};
use crate::investments::{Investment, InvestmentRepositoryTrait, NewInvestment};
use crate::users::{NewUser, User, UserRepositoryTrait};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    funds: BTreeMap<i32, MutualFund>,
    allocations: Vec<FundAllocation>,
    overlaps: Vec<FundOverlap>,
    investments: Vec<Investment>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, username: &str) -> User {
        let mut t = self.tables.lock().unwrap();
        let user = User {
            id: t.next_id(),
            username: username.to_string(),
            password_hash: String::new(),
        };
        t.users.push(user.clone());
        user
    }

    pub fn add_fund(&self, name: &str) -> MutualFund {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        let fund = MutualFund {
            id,
            name: name.to_string(),
            isin: format!("INF{:09}", id),
        };
        t.funds.insert(id, fund.clone());
        fund
    }

    pub fn add_allocation(&self, fund_id: i32, sector: &str, percentage: Decimal) {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        t.allocations.push(FundAllocation {
            id,
            fund_id,
            sector: sector.to_string(),
            percentage,
        });
    }

    pub fn add_overlap(&self, fund_id: i32, overlapping_fund_id: i32, overlap_percentage: Decimal) {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        t.overlaps.push(FundOverlap {
            id,
            fund_id,
            overlapping_fund_id,
            overlap_percentage,
        });
    }

    pub fn add_investment(
        &self,
        user_id: i32,
        fund_id: i32,
        date: NaiveDate,
        amount_invested: Decimal,
        returns_since_investment: Decimal,
    ) -> Investment {
        let mut t = self.tables.lock().unwrap();
        let investment = Investment {
            id: t.next_id(),
            user_id,
            fund_id,
            date,
            amount_invested,
            nav_at_investment: Decimal::ONE_HUNDRED,
            returns_since_investment,
        };
        t.investments.push(investment.clone());
        investment
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryStore {
    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|u| u.username == username).cloned())
    }

    fn count(&self) -> Result<i64> {
        Ok(self.tables.lock().unwrap().users.len() as i64)
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut t = self.tables.lock().unwrap();
        let user = User {
            id: t.next_id(),
            username: new_user.username,
            password_hash: new_user.password_hash,
        };
        t.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl FundRepositoryTrait for InMemoryStore {
    fn list_funds(&self) -> Result<Vec<MutualFund>> {
        Ok(self.tables.lock().unwrap().funds.values().cloned().collect())
    }

    fn find_fund(&self, fund_id: i32) -> Result<Option<MutualFund>> {
        Ok(self.tables.lock().unwrap().funds.get(&fund_id).cloned())
    }

    fn list_funds_by_ids(&self, fund_ids: &[i32]) -> Result<Vec<MutualFund>> {
        let t = self.tables.lock().unwrap();
        Ok(t.funds
            .values()
            .filter(|f| fund_ids.contains(&f.id))
            .cloned()
            .collect())
    }

    async fn create_fund(&self, input: MutualFundInput) -> Result<MutualFund> {
        let mut t = self.tables.lock().unwrap();
        if t.funds
            .values()
            .any(|f| f.name == input.name || f.isin == input.isin)
        {
            return Err(Error::Database(DatabaseError::UniqueViolation(
                "mutual_funds.name".to_string(),
            )));
        }
        let id = t.next_id();
        let fund = MutualFund {
            id,
            name: input.name,
            isin: input.isin,
        };
        t.funds.insert(id, fund.clone());
        Ok(fund)
    }

    async fn update_fund(
        &self,
        fund_id: i32,
        input: MutualFundInput,
    ) -> Result<Option<MutualFund>> {
        let mut t = self.tables.lock().unwrap();
        Ok(t.funds.get_mut(&fund_id).map(|fund| {
            fund.name = input.name;
            fund.isin = input.isin;
            fund.clone()
        }))
    }

    async fn delete_fund(&self, fund_id: i32) -> Result<usize> {
        let mut t = self.tables.lock().unwrap();
        if t.investments.iter().any(|i| i.fund_id == fund_id) {
            return Err(Error::Database(DatabaseError::ForeignKeyViolation(
                "investments.fund_id".to_string(),
            )));
        }
        t.allocations.retain(|a| a.fund_id != fund_id);
        t.overlaps
            .retain(|o| o.fund_id != fund_id && o.overlapping_fund_id != fund_id);
        Ok(usize::from(t.funds.remove(&fund_id).is_some()))
    }

    fn list_allocations(&self, fund_id: i32) -> Result<Vec<FundAllocation>> {
        self.list_allocations_for_funds(&[fund_id])
    }

    fn list_allocations_for_funds(&self, fund_ids: &[i32]) -> Result<Vec<FundAllocation>> {
        let t = self.tables.lock().unwrap();
        Ok(t.allocations
            .iter()
            .filter(|a| fund_ids.contains(&a.fund_id))
            .cloned()
            .collect())
    }

    async fn replace_allocations(
        &self,
        fund_id: i32,
        weights: Vec<SectorWeight>,
    ) -> Result<Vec<FundAllocation>> {
        let mut t = self.tables.lock().unwrap();
        t.allocations.retain(|a| a.fund_id != fund_id);
        let mut created = Vec::new();
        for weight in weights {
            let allocation = FundAllocation {
                id: t.next_id(),
                fund_id,
                sector: weight.sector,
                percentage: weight.percentage,
            };
            t.allocations.push(allocation.clone());
            created.push(allocation);
        }
        Ok(created)
    }

    fn list_overlaps(&self) -> Result<Vec<FundOverlap>> {
        Ok(self.tables.lock().unwrap().overlaps.clone())
    }

    async fn create_overlap(&self, new_overlap: NewFundOverlap) -> Result<FundOverlap> {
        let mut t = self.tables.lock().unwrap();
        let overlap = FundOverlap {
            id: t.next_id(),
            fund_id: new_overlap.fund_id,
            overlapping_fund_id: new_overlap.overlapping_fund_id,
            overlap_percentage: new_overlap.overlap_percentage,
        };
        t.overlaps.push(overlap.clone());
        Ok(overlap)
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InMemoryStore {
    fn list_by_user(&self, user_id: i32, since: Option<NaiveDate>) -> Result<Vec<Investment>> {
        let t = self.tables.lock().unwrap();
        Ok(t.investments
            .iter()
            .filter(|i| i.user_id == user_id)
            .filter(|i| since.map_or(true, |start| i.date >= start))
            .cloned()
            .collect())
    }

    async fn create(&self, user_id: i32, new_investment: NewInvestment) -> Result<Investment> {
        let mut t = self.tables.lock().unwrap();
        let investment = Investment {
            id: t.next_id(),
            user_id,
            fund_id: new_investment.fund_id,
            date: new_investment.date,
            amount_invested: new_investment.amount_invested,
            nav_at_investment: new_investment.nav_at_investment,
            returns_since_investment: new_investment.returns_since_investment,
        };
        t.investments.push(investment.clone());
        Ok(investment)
    }
}
