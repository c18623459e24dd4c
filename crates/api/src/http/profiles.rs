//! `/api/profiles` handlers

use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use sharehub_domain::constants::MSG_PROFILE_DELETED;
use sharehub_domain::{Profile, ProfilePayload};

use super::auth::AuthUser;
use super::error::ApiError;
use crate::utils::logging::log_request_outcome;
use crate::AppContext;

/// Body of `GET /api/profiles/all`
#[derive(Debug, Serialize)]
pub struct ProfilesResponse {
    /// Every stored profile
    pub profiles: Vec<Profile>,
}

/// Body wrapping a single profile
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// The requested or created profile
    pub profile: Profile,
}

/// Body of a successful delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Outcome message
    pub msg: &'static str,
}

/// `GET /api/profiles/all`
pub async fn list_profiles(
    State(ctx): State<Arc<AppContext>>,
    _caller: AuthUser,
) -> Result<Json<ProfilesResponse>, ApiError> {
    let started = Instant::now();
    let outcome = ctx.profiles.list_profiles().await;
    log_request_outcome("profiles::list", &outcome, started.elapsed());

    Ok(Json(ProfilesResponse { profiles: outcome? }))
}

/// `GET /api/profiles/{id}`
pub async fn get_profile(
    State(ctx): State<Arc<AppContext>>,
    _caller: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let started = Instant::now();
    let outcome = ctx.profiles.get_profile(&id).await;
    log_request_outcome("profiles::get", &outcome, started.elapsed());

    Ok(Json(ProfileResponse { profile: outcome? }))
}

/// `POST /api/profiles`
pub async fn create_profile(
    State(ctx): State<Arc<AppContext>>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<ProfilePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    let Json(payload) = payload?;

    let started = Instant::now();
    let outcome = ctx.profiles.create_profile(&caller, payload).await;
    log_request_outcome("profiles::create", &outcome, started.elapsed());

    Ok((StatusCode::CREATED, Json(ProfileResponse { profile: outcome? })))
}

/// `PUT /api/profiles`
///
/// Responds with the bare updated record.
pub async fn update_profile(
    State(ctx): State<Arc<AppContext>>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<ProfilePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    let Json(payload) = payload?;

    let started = Instant::now();
    let outcome = ctx.profiles.update_profile(&caller, payload).await;
    log_request_outcome("profiles::update", &outcome, started.elapsed());

    Ok((StatusCode::CREATED, Json(outcome?)))
}

/// `DELETE /api/profiles`
///
/// The body is optional; an empty body skips validation.
pub async fn delete_profile(
    State(ctx): State<Arc<AppContext>>,
    AuthUser(caller): AuthUser,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let payload = parse_optional_body(&body)?;

    let started = Instant::now();
    let outcome = ctx.profiles.delete_profile(&caller, payload).await;
    log_request_outcome("profiles::delete", &outcome, started.elapsed());

    outcome?;
    Ok((StatusCode::CREATED, Json(MessageResponse { msg: MSG_PROFILE_DELETED })))
}

fn parse_optional_body(body: &[u8]) -> Result<Option<ProfilePayload>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|err| ApiError::MalformedPayload(err.to_string()))
}
