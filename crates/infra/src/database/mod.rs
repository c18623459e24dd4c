//! Database implementations

pub mod manager;
pub mod profile_repository;

pub use manager::*;
pub use profile_repository::*;
