//! Integration tests for the `/api/profiles` routes
//!
//! Every test drives the full router against a fresh SQLite database.

mod support;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use support::{complete_profile, TestApp};

#[tokio::test(flavor = "multi_thread")]
async fn create_then_fetch_round_trips() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");

    let (status, body) =
        app.json(Method::POST, "/api/profiles", Some(&token), Some(complete_profile())).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");

    let created = &body["profile"];
    assert_eq!(created["user"], "user-1");
    assert_eq!(created["fName"], "Ada");
    assert_eq!(created["email"], "ada@example.com");
    assert_eq!(created["githubUrl"], "https://github.com/ada");

    let id = created["id"].as_str().expect("profile id should be a string");
    let (status, body) =
        app.json(Method::GET, &format!("/api/profiles/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body["profile"], created);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_missing_fields_persists_nothing() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");

    let (status, body) = app
        .json(Method::POST, "/api/profiles", Some(&token), Some(json!({"fName": "Ada", "lName": "L"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["kind"], "validation_failed");

    let fields: Vec<&str> = body["errors"]["fields"]
        .as_array()
        .expect("fields should be listed")
        .iter()
        .filter_map(|f| f["field"].as_str())
        .collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"email"));

    let (_, body) = app.json(Method::GET, "/api/profiles/all", Some(&token), None).await;
    assert_eq!(body["profiles"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_bad_urls_and_email() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");

    let mut profile = complete_profile();
    profile["email"] = json!("not-an-email");
    profile["twitterUrl"] = json!("definitely not a url");

    let (status, body) =
        app.json(Method::POST, "/api/profiles", Some(&token), Some(profile)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let fields = body["errors"]["fields"].as_array().expect("fields should be listed");
    assert!(fields.iter().any(|f| f["field"] == "email" && f["message"] == "Invalid Email"));
    assert!(fields.iter().any(|f| f["field"] == "twitterUrl" && f["message"] == "Invalid URL."));
}

#[tokio::test(flavor = "multi_thread")]
async fn second_profile_for_same_user_conflicts() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");

    let (status, _) =
        app.json(Method::POST, "/api/profiles", Some(&token), Some(complete_profile())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) =
        app.json(Method::POST, "/api/profiles", Some(&token), Some(complete_profile())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["errors"]["kind"], "conflict");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_without_profile_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.token_for("nobody");

    let (status, body) =
        app.json(Method::PUT, "/api/profiles", Some(&token), Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["message"], "No Profile found");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_merges_submitted_fields_only() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");
    app.json(Method::POST, "/api/profiles", Some(&token), Some(complete_profile())).await;

    let patch = json!({"name": "countess", "youtubeUrl": "youtube.com/@ada"});
    let (status, updated) =
        app.json(Method::PUT, "/api/profiles", Some(&token), Some(patch.clone())).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {updated}");
    assert_eq!(updated["name"], "countess");
    assert_eq!(updated["youtubeUrl"], "youtube.com/@ada");
    assert_eq!(updated["fName"], "Ada");
    assert_eq!(updated["githubUrl"], "https://github.com/ada");

    // Applying the same patch again changes nothing visible
    let (status, again) =
        app.json(Method::PUT, "/api/profiles", Some(&token), Some(patch)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(again["name"], updated["name"]);
    assert_eq!(again["youtubeUrl"], updated["youtubeUrl"]);
    assert_eq!(again["id"], updated["id"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_cannot_blank_required_fields() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");
    app.json(Method::POST, "/api/profiles", Some(&token), Some(complete_profile())).await;

    let (status, body) =
        app.json(Method::PUT, "/api/profiles", Some(&token), Some(json!({"fName": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["fields"][0]["field"], "fName");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_with_empty_body_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");
    app.json(Method::POST, "/api/profiles", Some(&token), Some(complete_profile())).await;

    let (status, _) = app.json(Method::PUT, "/api/profiles", Some(&token), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_without_profile_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.token_for("nobody");

    let (status, body) = app.json(Method::DELETE, "/api/profiles", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["message"], "No Profile found");
}

#[tokio::test(flavor = "multi_thread")]
async fn deleted_profile_is_gone() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");

    let (_, body) =
        app.json(Method::POST, "/api/profiles", Some(&token), Some(complete_profile())).await;
    let id = body["profile"]["id"].as_str().expect("profile id").to_string();

    let (status, body) = app.json(Method::DELETE, "/api/profiles", Some(&token), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["msg"], "Profile deleted");

    let (status, _) =
        app.json(Method::GET, &format!("/api/profiles/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // A second delete finds nothing
    let (status, _) = app.json(Method::DELETE, "/api/profiles", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_with_incomplete_body_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");
    app.json(Method::POST, "/api/profiles", Some(&token), Some(complete_profile())).await;

    let (status, body) = app
        .json(Method::DELETE, "/api/profiles", Some(&token), Some(json!({"name": "ada"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["kind"], "validation_failed");

    let (_, body) = app.json(Method::GET, "/api/profiles/all", Some(&token), None).await;
    assert_eq!(body["profiles"].as_array().map(Vec::len), Some(1));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_each_profile_once_in_insertion_order() {
    let app = TestApp::spawn().await;

    for user in ["user-a", "user-b", "user-c"] {
        let mut profile = complete_profile();
        profile["name"] = json!(user);
        let (status, _) = app
            .json(Method::POST, "/api/profiles", Some(&app.token_for(user)), Some(profile))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) =
        app.json(Method::GET, "/api/profiles/all", Some(&app.token_for("user-a")), None).await;
    assert_eq!(status, StatusCode::OK);

    let owners: Vec<&str> = body["profiles"]
        .as_array()
        .expect("profiles should be an array")
        .iter()
        .filter_map(|p: &Value| p["user"].as_str())
        .collect();
    assert_eq!(owners, ["user-a", "user-b", "user-c"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_id_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");

    let (status, body) = app.json(Method::GET, "/api/profiles/missing", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"]["kind"], "not_found");
}

#[tokio::test(flavor = "multi_thread")]
async fn writes_require_a_token() {
    let app = TestApp::spawn().await;

    let (status, body) =
        app.json(Method::POST, "/api/profiles", None, Some(complete_profile())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"]["message"], "No token, authorization denied");

    let (status, _) = app.json(Method::DELETE, "/api/profiles", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) =
        app.json(Method::PUT, "/api/profiles", None, Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test(flavor = "multi_thread")]
async fn reads_require_a_token() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");

    let (_, body) =
        app.json(Method::POST, "/api/profiles", Some(&token), Some(complete_profile())).await;
    let id = body["profile"]["id"].as_str().expect("profile id").to_string();

    for uri in ["/api/profiles/all".to_string(), format!("/api/profiles/{id}")] {
        let (status, body) = app.json(Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "uri {uri}");
        assert_eq!(body["errors"]["kind"], "unauthorized");
        assert_eq!(body["errors"]["message"], "No token, authorization denied");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn forged_token_is_rejected() {
    let app = TestApp::spawn().await;
    let forged = app.token_for("user-1").replace("user-1", "user-2");

    let (status, body) = app.json(Method::GET, "/api/profiles/all", Some(&forged), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"]["message"], "Token is not valid");
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_is_a_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");

    let (status, text) = app
        .send(Method::POST, "/api/profiles", Some(&token), Some("{\"fName\": ".to_string()))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_str(&text).expect("error body should be JSON");
    assert_eq!(body["errors"]["kind"], "invalid_input");
}

#[tokio::test(flavor = "multi_thread")]
async fn wrong_method_answers_with_the_error_envelope() {
    let app = TestApp::spawn().await;
    let token = app.token_for("user-1");

    let cases = [
        (Method::GET, "/api/profiles"),
        (Method::PATCH, "/api/profiles"),
        (Method::POST, "/api/profiles/all"),
    ];

    for (method, uri) in cases {
        let (status, body) = app.json(method.clone(), uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(body["errors"]["kind"], "method_not_allowed");
        assert_eq!(body["errors"]["message"], format!("Method not allowed: {method} {uri}"));
    }
}
