//! SQLite storage implementation for Fundfolio.
//!
//! This crate is the only place in the application where Diesel is used.
//! It implements the repository traits defined in `fundfolio-core`:
//! - Database initialization, connection pooling and embedded migrations
//! - A single writer task that serializes all mutations
//! - Repository implementations for users, funds and investments
//!
//! ```text
//! apps/server ──▶ core (domain, traits)
//!      │                 ▲
//!      └──────▶ storage-sqlite (this crate) ──▶ SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod funds;
pub mod investments;
pub mod users;

pub use db::{
    create_pool, get_connection, init, ping, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};
pub use errors::{IntoCore, StorageError};
pub use funds::FundRepository;
pub use investments::InvestmentRepository;
pub use users::UserRepository;

pub use fundfolio_core::errors::{DatabaseError, Error, Result};
