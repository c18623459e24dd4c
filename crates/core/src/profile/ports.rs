//! Port interfaces for profile management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for profile operations.

use async_trait::async_trait;
use sharehub_domain::{Profile, ProfilePatch, Result};

/// Trait for profile persistence and retrieval
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// All profiles in the store's natural (insertion) order
    async fn list(&self) -> Result<Vec<Profile>>;

    /// Get profile by ID
    async fn get_by_id(&self, id: &str) -> Result<Option<Profile>>;

    /// Get the profile owned by `user_id`
    async fn get_by_user(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Insert a new profile
    ///
    /// Fails with `ShareHubError::Conflict` if the owner already has one.
    async fn create(&self, profile: Profile) -> Result<()>;

    /// Merge `patch` into the profile owned by `user_id` and return the
    /// stored result, or `None` if the user has no profile.
    ///
    /// The read and the write happen atomically.
    async fn update_by_user(
        &self,
        user_id: &str,
        patch: ProfilePatch,
        now: i64,
    ) -> Result<Option<Profile>>;

    /// Remove the profile owned by `user_id`, returning it if one existed
    async fn delete_by_user(&self, user_id: &str) -> Result<Option<Profile>>;
}
