//! Port interfaces for request authentication

use async_trait::async_trait;
use sharehub_domain::{AuthenticatedUser, Result};

/// Resolves a bearer credential to the user it was issued for
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify `token`, returning the principal or `ShareHubError::Unauthorized`
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser>;
}
