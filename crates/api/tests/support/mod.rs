#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sharehub_api::{build_router, AppContext};
use sharehub_common::testing::TempDir;
use sharehub_domain::{AuthConfig, Config, DatabaseConfig};
use sharehub_infra::TokenAuthenticator;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

/// A fully wired application backed by a throwaway database.
pub struct TestApp {
    pub ctx: Arc<AppContext>,
    router: Router,
    signer: TokenAuthenticator,
    /// Keep temporary directory alive for the lifetime of the app.
    _temp_dir: TempDir,
}

/// Build a test config pointing at a database inside `temp_dir`.
pub fn test_config(temp_dir: &TempDir) -> Config {
    Config {
        database: DatabaseConfig {
            path: temp_dir.join("sharehub.db").to_string_lossy().to_string(),
            pool_size: 4,
        },
        auth: AuthConfig { token_secret: TEST_SECRET.to_string() },
        ..Config::default()
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let temp_dir =
            TempDir::new("sharehub-api-test").expect("failed to create temporary test directory");

        let ctx = AppContext::new_with_config(test_config(&temp_dir))
            .await
            .expect("failed to create test context");
        let ctx = Arc::new(ctx);

        Self {
            router: build_router(Arc::clone(&ctx)),
            ctx,
            signer: TokenAuthenticator::new(TEST_SECRET),
            _temp_dir: temp_dir,
        }
    }

    /// A valid token for `user_id`
    pub fn token_for(&self, user_id: &str) -> String {
        self.signer.sign(user_id)
    }

    /// Send a request and return status plus raw body text.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<String>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("x-auth-token", token);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("failed to build request"))
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("failed to read body");
        (status, String::from_utf8(bytes.to_vec()).expect("body is not UTF-8"))
    }

    /// Send a JSON request and parse the JSON response.
    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, text) = self.send(method, uri, token, body.map(|v| v.to_string())).await;
        let value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).expect("response is not JSON")
        };
        (status, value)
    }
}

/// A complete, valid profile body
pub fn complete_profile() -> Value {
    serde_json::json!({
        "fName": "Ada",
        "lName": "Lovelace",
        "name": "ada",
        "email": "ada@example.com",
        "githubUrl": "https://github.com/ada"
    })
}
