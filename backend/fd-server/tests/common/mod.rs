#![allow(dead_code)]

//! Test infrastructure for fd-server API tests

use fd_config::ValidationConfig;
use fd_core::{Offer, OfferStatus, User, UserRole};
use fd_server::{AppState, build_router};
use fd_store::Store;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

/// Create AppState over a fresh temporary data directory.
///
/// Keep the `TempDir` alive for the duration of the test.
pub async fn create_test_app_state() -> (TempDir, AppState) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = Store::open(
        temp_dir.path().join("data"),
        "offers.json",
        "claims.json",
        "users.json",
    )
    .await
    .expect("Failed to open store");

    (temp_dir, AppState::new(store, ValidationConfig::default()))
}

/// Create a user directly in the store
pub async fn create_test_user(state: &AppState, email: &str, role: UserRole) -> Uuid {
    let user = User::new(email, format!("Test {}", role), role);
    state
        .store
        .users
        .create(&user)
        .await
        .expect("Failed to create test user");
    user.id
}

/// Create an offer directly in the store
pub async fn create_test_offer(state: &AppState, donor_id: Uuid, status: OfferStatus) -> Uuid {
    let mut offer = Offer::new(
        donor_id,
        "Day-old bread".to_string(),
        "bakery".to_string(),
        12.0,
        "loaves".to_string(),
    );
    offer.status = status;
    state
        .store
        .offers
        .create(&offer)
        .await
        .expect("Failed to create test offer");
    offer.id
}

/// Build a request with an optional identity and JSON body
pub fn request(
    method: &str,
    uri: &str,
    user_id: Option<Uuid>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(user_id) = user_id {
        builder = builder.header("X-User-Id", user_id.to_string());
    }

    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send a request through a fresh router and decode the JSON response
pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let app = build_router(state.clone());
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
