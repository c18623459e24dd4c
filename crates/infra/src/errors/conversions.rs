//! Conversions from external infrastructure errors into domain errors.

use r2d2::Error as PoolError;
use rusqlite::Error as SqlError;
use sharehub_domain::ShareHubError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ShareHubError);

impl From<InfraError> for ShareHubError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ShareHubError> for InfraError {
    fn from(value: ShareHubError) -> Self {
        InfraError(value)
    }
}

trait IntoShareHubError {
    fn into_sharehub(self) -> ShareHubError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → ShareHubError */
/* -------------------------------------------------------------------------- */

// SQLITE_CONSTRAINT_PRIMARYKEY and SQLITE_CONSTRAINT_UNIQUE
const PRIMARY_KEY_VIOLATION: i32 = 1555;
const UNIQUE_VIOLATION: i32 = 2067;

impl IntoShareHubError for SqlError {
    fn into_sharehub(self) -> ShareHubError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        ShareHubError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        ShareHubError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, UNIQUE_VIOLATION | PRIMARY_KEY_VIOLATION) => {
                        ShareHubError::Conflict("record already exists".into())
                    }
                    _ => ShareHubError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => ShareHubError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                ShareHubError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                ShareHubError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => ShareHubError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => ShareHubError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_sharehub())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → ShareHubError */
/* -------------------------------------------------------------------------- */

impl IntoShareHubError for PoolError {
    fn into_sharehub(self) -> ShareHubError {
        ShareHubError::Database(format!("connection pool unavailable: {self}"))
    }
}

impl From<PoolError> for InfraError {
    fn from(value: PoolError) -> Self {
        InfraError(value.into_sharehub())
    }
}

/// Shorthand for `map_err` on rusqlite results.
pub fn map_sql_error(err: SqlError) -> ShareHubError {
    ShareHubError::from(InfraError::from(err))
}

/// Shorthand for `map_err` on blocking task joins.
pub fn map_join_error(err: tokio::task::JoinError) -> ShareHubError {
    ShareHubError::Internal(format!("Task join error: {err}"))
}
