//! Profile repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use sharehub_core::profile::ports::ProfileRepository as ProfileRepositoryPort;
use sharehub_domain::{Profile, ProfilePatch, Result as DomainResult};
use tokio::task;

use super::manager::DbManager;
use crate::errors::{map_join_error, map_sql_error};

const SELECT_PROFILE: &str = "SELECT id, user_id, first_name, last_name, name, email,
        github_url, twitter_url, youtube_url, created_at, updated_at
     FROM profiles";

/// SQLite-backed implementation of `ProfileRepository`
pub struct SqliteProfileRepository {
    db: Arc<DbManager>,
}

impl SqliteProfileRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepositoryPort for SqliteProfileRepository {
    async fn list(&self) -> DomainResult<Vec<Profile>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Profile>> {
            let conn = db.get_connection()?;
            let mut stmt =
                conn.prepare(&format!("{SELECT_PROFILE} ORDER BY rowid")).map_err(map_sql_error)?;
            let rows = stmt.query_map([], map_profile_row).map_err(map_sql_error)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn get_by_id(&self, id: &str) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let conn = db.get_connection()?;
            find_one(&conn, "id", &id)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn get_by_user(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let conn = db.get_connection()?;
            find_one(&conn, "user_id", &user_id)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn create(&self, profile: Profile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            insert_profile(&conn, &profile).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update_by_user(
        &self,
        user_id: &str,
        patch: ProfilePatch,
        now: i64,
    ) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let mut conn = db.get_connection()?;
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(map_sql_error)?;

            let Some(mut profile) = find_one(&tx, "user_id", &user_id)? else {
                return Ok(None);
            };

            if profile.apply_patch(&patch, now) {
                write_profile_fields(&tx, &profile).map_err(map_sql_error)?;
            }
            tx.commit().map_err(map_sql_error)?;

            Ok(Some(profile))
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete_by_user(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let mut conn = db.get_connection()?;
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(map_sql_error)?;

            let Some(profile) = find_one(&tx, "user_id", &user_id)? else {
                return Ok(None);
            };

            tx.execute("DELETE FROM profiles WHERE id = ?1", params![&profile.id])
                .map_err(map_sql_error)?;
            tx.commit().map_err(map_sql_error)?;

            Ok(Some(profile))
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Fetch a single profile where `column` equals `value`
///
/// `column` is always one of the fixed identifiers above, never user input.
fn find_one(conn: &Connection, column: &str, value: &str) -> DomainResult<Option<Profile>> {
    conn.query_row(
        &format!("{SELECT_PROFILE} WHERE {column} = ?1"),
        params![value],
        map_profile_row,
    )
    .optional()
    .map_err(map_sql_error)
}

fn map_profile_row(row: &Row) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        user: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        name: row.get(4)?,
        email: row.get(5)?,
        github_url: row.get(6)?,
        twitter_url: row.get(7)?,
        youtube_url: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

fn insert_profile(conn: &Connection, profile: &Profile) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO profiles (
            id, user_id, first_name, last_name, name, email,
            github_url, twitter_url, youtube_url, created_at, updated_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            profile.id,
            profile.user,
            profile.first_name,
            profile.last_name,
            profile.name,
            profile.email,
            profile.github_url,
            profile.twitter_url,
            profile.youtube_url,
            profile.created_at,
            profile.updated_at,
        ],
    )?;
    Ok(())
}

fn write_profile_fields(conn: &Connection, profile: &Profile) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE profiles SET
            first_name = ?1, last_name = ?2, name = ?3, email = ?4,
            github_url = ?5, twitter_url = ?6, youtube_url = ?7, updated_at = ?8
         WHERE id = ?9",
        params![
            profile.first_name,
            profile.last_name,
            profile.name,
            profile.email,
            profile.github_url,
            profile.twitter_url,
            profile.youtube_url,
            profile.updated_at,
            profile.id,
        ],
    )?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
