//! Funds module - the mutual fund catalog with sector allocations and overlap pairs.

mod funds_model;
mod funds_service;
mod funds_traits;


pub use funds_model::{
    FundAllocation, FundOverlap, MutualFund, MutualFundInput, NewFundOverlap, SectorWeight,
};
pub use funds_service::FundService;
pub use funds_traits::{FundRepositoryTrait, FundServiceTrait};
