//! SQLite storage implementation for the fund catalog.

mod model;
mod repository;

pub use model::{
    FundAllocationDB, FundOverlapDB, MutualFundDB, NewFundAllocationDB, NewFundOverlapDB,
    NewMutualFundDB,
};
pub use repository::FundRepository;
