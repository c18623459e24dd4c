//! # ShareHub Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - Profile validation rules
//! - Use cases and services
//!
//! ## Architecture Principles
//! - Only depends on `sharehub-common` and `sharehub-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod auth;
pub mod profile;
pub mod resource;

// Re-export specific items to avoid ambiguity
pub use auth::ports::Authenticator;
pub use profile::ports::ProfileRepository;
pub use profile::ProfileService;
pub use resource::ports::ResourceCatalog;
