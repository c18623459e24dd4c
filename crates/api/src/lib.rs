//! # ShareHub API
//!
//! HTTP application layer - router, handlers and the server entry point.
//!
//! This crate contains:
//! - The `/api/profiles` REST handlers and auth extractor
//! - The server-rendered client shell
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Owns the only mapping from domain errors to HTTP responses

pub mod context;
pub mod http;
pub mod server;
pub mod utils;

// Re-export for convenience
pub use context::*;
pub use http::build_router;
pub use server::serve;
