//! HTTP surface: router, extractors, handlers and the error envelope

pub mod auth;
pub mod error;
pub mod profiles;
pub mod shell;

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderName, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use self::error::ApiError;
use crate::AppContext;

/// Assemble the full application router
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(auth::AUTH_TOKEN_HEADER),
        ]);

    Router::new()
        .route("/api/profiles/all", get(profiles::list_profiles))
        .route("/api/profiles/{id}", get(profiles::get_profile))
        .route(
            "/api/profiles",
            post(profiles::create_profile)
                .put(profiles::update_profile)
                .delete(profiles::delete_profile),
        )
        .route("/health", get(health))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(shell::client_shell)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
        .with_state(ctx)
}

async fn health(State(ctx): State<Arc<AppContext>>) -> impl IntoResponse {
    let status = ctx.health_check().await;
    let code = if status.is_healthy { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (code, Json(status))
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{method} {}", uri.path()))
}
