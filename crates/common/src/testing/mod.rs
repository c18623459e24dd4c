//! Testing utilities and helpers
//!
//! - **[`temp`]**: Temporary file/directory helpers

pub mod temp;

pub use temp::TempDir;
