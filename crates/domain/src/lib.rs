//! # ShareHub Domain
//!
//! Business domain types and models for ShareHub.
//!
//! This crate contains:
//! - Profile and resource data types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (user-facing messages)
//!
//! ## Architecture
//! - No dependencies on other ShareHub crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
