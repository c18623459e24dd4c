//! Authenticated-caller extractor
//!
//! The token is read from `x-auth-token`, falling back to
//! `Authorization: Bearer <token>`.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use sharehub_domain::constants::MSG_NO_TOKEN;
use sharehub_domain::{AuthenticatedUser, ShareHubError};

use super::error::ApiError;
use crate::AppContext;

/// Header carrying the raw token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// The authenticated caller of a request
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<Arc<AppContext>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &Arc<AppContext>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ShareHubError::Unauthorized(MSG_NO_TOKEN.to_string()))?;

        let user = ctx.authenticator.authenticate(token).await?;
        Ok(AuthUser(user))
    }
}

/// Pull the raw token out of the request headers
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    header_value(headers, AUTH_TOKEN_HEADER).or_else(|| {
        header_value(headers, AUTHORIZATION.as_str())?
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    })
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::trim).filter(|v| !v.is_empty())
}
