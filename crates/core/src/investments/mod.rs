//! Investments module - purchase records owned by a user.

mod investments_model;
mod investments_service;
mod investments_traits;

pub use investments_model::{Investment, NewInvestment};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
