//! Authenticated principal types

use serde::{Deserialize, Serialize};

/// The caller on whose behalf an authenticated request runs
///
/// Handlers receive this explicitly instead of reading ambient request state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Id the token was issued for
    pub user_id: String,
}

impl AuthenticatedUser {
    /// Principal for `user_id`
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into() }
    }
}
