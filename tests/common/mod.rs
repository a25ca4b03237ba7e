// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use exercise_tracker::config::Config;
use exercise_tracker::db::{FirestoreDb, MemoryDb, UserStore};
use exercise_tracker::routes::create_router;
use exercise_tracker::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app over an in-memory store.
#[allow(dead_code)]
pub fn create_test_app() -> axum::Router {
    app_with_store(MemoryDb::new().into())
}

/// Create a test app whose store fails every call.
#[allow(dead_code)]
pub fn create_offline_app() -> axum::Router {
    app_with_store(FirestoreDb::new_offline().into())
}

#[allow(dead_code)]
fn app_with_store(store: UserStore) -> axum::Router {
    let state = Arc::new(AppState::new(Config::test_default(), store));
    create_router(state)
}

/// POST a url-encoded form.
#[allow(dead_code)]
pub async fn post_form(app: &axum::Router, uri: &str, body: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn get(app: &axum::Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// Register a user and return its `_id`.
#[allow(dead_code)]
pub async fn register(app: &axum::Router, username: &str) -> String {
    let response = post_form(
        app,
        "/api/exercise/new-user",
        &format!("username={}", username),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["_id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Add an exercise and assert success.
#[allow(dead_code)]
pub async fn add_exercise(app: &axum::Router, user_id: &str, description: &str, date: &str) {
    let response = post_form(
        app,
        "/api/exercise/add",
        &format!(
            "userId={}&description={}&duration=30&date={}",
            user_id, description, date
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
