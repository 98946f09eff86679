//! SQLite storage implementation for investment records.

mod model;
mod repository;

pub use model::{InvestmentDB, NewInvestmentDB};
pub use repository::InvestmentRepository;
