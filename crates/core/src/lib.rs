//! Fundfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for Fundfolio: user identity,
//! the mutual fund catalog, investment records and the portfolio analytics
//! engine. It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod funds;
pub mod investments;
pub mod portfolio;
pub mod users;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
