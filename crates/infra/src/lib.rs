//! # ShareHub Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite persistence (connection pool, migrations, repositories)
//! - Configuration loading from environment and files
//! - Token authentication
//! - The embedded resource catalog
//!
//! ## Architecture
//! - Implements traits defined in `sharehub-core`
//! - Contains all "impure" code (I/O, crypto, files)

pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod resources;

// Re-export commonly used items
pub use auth::TokenAuthenticator;
pub use database::{DbConnection, DbManager, SqliteProfileRepository};
pub use errors::InfraError;
pub use resources::MockResourceCatalog;
