//! Profile service - core business logic for the profile endpoints

use std::sync::Arc;

use chrono::Utc;
use sharehub_domain::constants::{MSG_CREATE_EMPTY_RESULT, MSG_NO_PROFILE_FOUND, MSG_PROFILE_EXISTS};
use sharehub_domain::{AuthenticatedUser, Profile, ProfilePayload, Result, ShareHubError};
use tracing::{debug, info, warn};

use super::ports::ProfileRepository;
use super::validation::{self, Mode};

/// Profile service
///
/// Every operation performs at most one validation pass and one logical
/// repository operation. Mutations are always scoped to the calling user.
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
    clock: fn() -> i64,
}

impl ProfileService {
    /// Create a new profile service
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository, clock: unix_now }
    }

    /// Replace the timestamp source (tests pin time with this)
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Every stored profile, in the repository's natural order
    pub async fn list_profiles(&self) -> Result<Vec<Profile>> {
        let profiles = self.repository.list().await?;
        debug!(count = profiles.len(), "listed profiles");
        Ok(profiles)
    }

    /// One profile by id
    pub async fn get_profile(&self, id: &str) -> Result<Profile> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ShareHubError::NotFound(format!("profile {id}")))
    }

    /// Validate `payload` and store it as the caller's profile
    pub async fn create_profile(
        &self,
        owner: &AuthenticatedUser,
        payload: ProfilePayload,
    ) -> Result<Profile> {
        let fields = validation::validate_new_profile(payload)?;

        if self.repository.get_by_user(&owner.user_id).await?.is_some() {
            warn!(user_id = %owner.user_id, "profile already exists for user");
            return Err(ShareHubError::Conflict(MSG_PROFILE_EXISTS.to_string()));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let profile = Profile::new(id.clone(), owner.user_id.clone(), fields, (self.clock)());
        self.repository.create(profile).await?;

        let stored = self
            .repository
            .get_by_id(&id)
            .await?
            .ok_or_else(|| ShareHubError::InvalidInput(MSG_CREATE_EMPTY_RESULT.to_string()))?;

        info!(profile_id = %stored.id, user_id = %owner.user_id, "profile created");
        Ok(stored)
    }

    /// Merge the submitted fields into the caller's profile
    pub async fn update_profile(
        &self,
        owner: &AuthenticatedUser,
        payload: ProfilePayload,
    ) -> Result<Profile> {
        let patch = validation::validate_patch(payload)?;

        let updated = self
            .repository
            .update_by_user(&owner.user_id, patch, (self.clock)())
            .await?
            .ok_or_else(|| ShareHubError::InvalidInput(MSG_NO_PROFILE_FOUND.to_string()))?;

        info!(profile_id = %updated.id, user_id = %owner.user_id, "profile updated");
        Ok(updated)
    }

    /// Remove the caller's profile
    ///
    /// A body is optional; when one is supplied it must pass the full rule set.
    pub async fn delete_profile(
        &self,
        owner: &AuthenticatedUser,
        payload: Option<ProfilePayload>,
    ) -> Result<Profile> {
        if let Some(payload) = payload.as_ref() {
            validation::check_payload(payload, Mode::Complete)?;
        }

        let removed = self
            .repository
            .delete_by_user(&owner.user_id)
            .await?
            .ok_or_else(|| ShareHubError::InvalidInput(MSG_NO_PROFILE_FOUND.to_string()))?;

        info!(profile_id = %removed.id, user_id = %owner.user_id, "profile deleted");
        Ok(removed)
    }
}

fn unix_now() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use sharehub_domain::ProfilePatch;

    use super::*;

    /// In-memory ProfileRepository for testing
    #[derive(Default)]
    struct InMemoryProfileRepository {
        profiles: Mutex<Vec<Profile>>,
        drop_writes: bool,
    }

    #[async_trait]
    impl ProfileRepository for InMemoryProfileRepository {
        async fn list(&self) -> Result<Vec<Profile>> {
            Ok(self.profiles.lock().unwrap().clone())
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Profile>> {
            Ok(self.profiles.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }

        async fn get_by_user(&self, user_id: &str) -> Result<Option<Profile>> {
            Ok(self.profiles.lock().unwrap().iter().find(|p| p.user == user_id).cloned())
        }

        async fn create(&self, profile: Profile) -> Result<()> {
            if !self.drop_writes {
                self.profiles.lock().unwrap().push(profile);
            }
            Ok(())
        }

        async fn update_by_user(
            &self,
            user_id: &str,
            patch: ProfilePatch,
            now: i64,
        ) -> Result<Option<Profile>> {
            let mut profiles = self.profiles.lock().unwrap();
            Ok(profiles.iter_mut().find(|p| p.user == user_id).map(|p| {
                p.apply_patch(&patch, now);
                p.clone()
            }))
        }

        async fn delete_by_user(&self, user_id: &str) -> Result<Option<Profile>> {
            let mut profiles = self.profiles.lock().unwrap();
            let index = profiles.iter().position(|p| p.user == user_id);
            Ok(index.map(|i| profiles.remove(i)))
        }
    }

    fn fixed_clock() -> i64 {
        1_700_000_000
    }

    fn service() -> (ProfileService, Arc<InMemoryProfileRepository>) {
        let repo = Arc::new(InMemoryProfileRepository::default());
        let service = ProfileService::new(repo.clone()).with_clock(fixed_clock);
        (service, repo)
    }

    fn payload() -> ProfilePayload {
        ProfilePayload {
            first_name: Some("Grace".into()),
            last_name: Some("Hopper".into()),
            name: Some("amazing-grace".into()),
            email: Some("grace@example.com".into()),
            github_url: Some("https://github.com/grace".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_binds_profile_to_caller() {
        let (service, repo) = service();
        let owner = AuthenticatedUser::new("user-1");

        let profile = service.create_profile(&owner, payload()).await.unwrap();

        assert_eq!(profile.user, "user-1");
        assert_eq!(profile.first_name, "Grace");
        assert_eq!(profile.github_url.as_deref(), Some("https://github.com/grace"));
        assert_eq!(profile.created_at, fixed_clock());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload_without_writing() {
        let (service, repo) = service();
        let owner = AuthenticatedUser::new("user-1");
        let invalid = ProfilePayload { email: None, ..payload() };

        let err = service.create_profile(&owner, invalid).await.unwrap_err();

        assert!(matches!(err, ShareHubError::ValidationFailed(ref list) if !list.is_empty()));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn second_create_for_same_user_conflicts() {
        let (service, _repo) = service();
        let owner = AuthenticatedUser::new("user-1");
        service.create_profile(&owner, payload()).await.unwrap();

        let err = service.create_profile(&owner, payload()).await.unwrap_err();
        assert!(matches!(err, ShareHubError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_reports_empty_store_result() {
        let repo = Arc::new(InMemoryProfileRepository { drop_writes: true, ..Default::default() });
        let service = ProfileService::new(repo);

        let err = service.create_profile(&AuthenticatedUser::new("u"), payload()).await.unwrap_err();
        assert_eq!(err, ShareHubError::InvalidInput("First & last name is required.".into()));
    }

    #[tokio::test]
    async fn get_missing_profile_is_not_found() {
        let (service, _repo) = service();
        let err = service.get_profile("missing").await.unwrap_err();
        assert!(matches!(err, ShareHubError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_without_profile_is_rejected() {
        let (service, repo) = service();
        let patch = ProfilePayload { name: Some("new".into()), ..Default::default() };

        let err =
            service.update_profile(&AuthenticatedUser::new("nobody"), patch).await.unwrap_err();

        assert_eq!(err, ShareHubError::InvalidInput("No Profile found".into()));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_merges_submitted_fields() {
        let (service, _repo) = service();
        let owner = AuthenticatedUser::new("user-1");
        let created = service.create_profile(&owner, payload()).await.unwrap();

        let patch = ProfilePayload { name: Some("admiral".into()), ..Default::default() };
        let updated = service.update_profile(&owner, patch.clone()).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "admiral");
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.github_url, created.github_url);

        let again = service.update_profile(&owner, patch).await.unwrap();
        assert_eq!(again, updated);
    }

    #[tokio::test]
    async fn delete_removes_only_callers_profile() {
        let (service, repo) = service();
        let first = AuthenticatedUser::new("user-1");
        let second = AuthenticatedUser::new("user-2");
        service.create_profile(&first, payload()).await.unwrap();
        let kept = service.create_profile(&second, payload()).await.unwrap();

        let removed = service.delete_profile(&first, None).await.unwrap();

        assert_eq!(removed.user, "user-1");
        assert_eq!(repo.list().await.unwrap(), vec![kept]);
        let err = service.delete_profile(&first, None).await.unwrap_err();
        assert_eq!(err, ShareHubError::InvalidInput("No Profile found".into()));
    }

    #[tokio::test]
    async fn delete_validates_supplied_body() {
        let (service, repo) = service();
        let owner = AuthenticatedUser::new("user-1");
        service.create_profile(&owner, payload()).await.unwrap();

        let bad_body = ProfilePayload { email: Some("nope".into()), ..payload() };
        let err = service.delete_profile(&owner, Some(bad_body)).await.unwrap_err();

        assert!(matches!(err, ShareHubError::ValidationFailed(_)));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
