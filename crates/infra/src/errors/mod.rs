//! Infrastructure error handling

pub mod conversions;

pub use conversions::{map_join_error, map_sql_error, InfraError};
