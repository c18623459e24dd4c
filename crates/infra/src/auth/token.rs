//! Keyed-hash bearer tokens
//!
//! A token has the form `<user_id>.<mac>` where `mac` is the hex-encoded
//! BLAKE3 keyed hash of the user id. The key is derived from the configured
//! secret, so rotating the secret invalidates every outstanding token.

use async_trait::async_trait;
use sharehub_core::auth::ports::Authenticator;
use sharehub_domain::constants::MSG_INVALID_TOKEN;
use sharehub_domain::{AuthenticatedUser, Result, ShareHubError};
use tracing::debug;

const KEY_CONTEXT: &str = "sharehub 2024-01-01 profile api bearer token v1";

/// Verifies (and, for operators and tests, issues) keyed-hash tokens
pub struct TokenAuthenticator {
    key: [u8; 32],
}

impl TokenAuthenticator {
    /// Derive the verification key from `secret`
    pub fn new(secret: &str) -> Self {
        Self { key: blake3::derive_key(KEY_CONTEXT, secret.as_bytes()) }
    }

    /// Issue a token for `user_id`
    pub fn sign(&self, user_id: &str) -> String {
        let mac = blake3::keyed_hash(&self.key, user_id.as_bytes());
        format!("{user_id}.{}", hex::encode(mac.as_bytes()))
    }

    fn verify(&self, token: &str) -> Option<AuthenticatedUser> {
        let (user_id, mac_hex) = token.trim().rsplit_once('.')?;
        if user_id.is_empty() {
            return None;
        }

        let mac: [u8; 32] = hex::decode(mac_hex).ok()?.try_into().ok()?;
        let expected = blake3::keyed_hash(&self.key, user_id.as_bytes());

        // blake3::Hash equality is constant-time
        (expected == blake3::Hash::from(mac)).then(|| AuthenticatedUser::new(user_id))
    }
}

#[async_trait]
impl Authenticator for TokenAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser> {
        self.verify(token).ok_or_else(|| {
            debug!("rejected bearer token");
            ShareHubError::Unauthorized(MSG_INVALID_TOKEN.to_string())
        })
    }
}
