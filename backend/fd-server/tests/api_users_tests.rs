//! Integration tests for registration and profile handlers
mod common;

use crate::common::{create_test_app_state, create_test_user, request, send};

use fd_core::UserRole;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

fn pantry() -> serde_json::Value {
    json!({
        "email": "Pantry@Example.org",
        "name": "Eastside Pantry",
        "role": "recipient",
        "organization": "Eastside Community Kitchen",
        "address": "42 River Rd",
        "latitude": 51.5,
        "longitude": -0.125
    })
}

#[tokio::test]
async fn test_register_then_get_returns_same_user() {
    let (_dir, state) = create_test_app_state().await;

    let (status, created) = send(&state, request("POST", "/api/v1/users", None, Some(pantry()))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["user"]["email"], "pantry@example.org");
    assert_eq!(created["user"]["role"], "recipient");

    let id = created["user"]["id"].as_str().unwrap();
    let (status, fetched) = send(
        &state,
        request("GET", &format!("/api/v1/users/{}", id), None, None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["user"], created["user"]);
}

#[tokio::test]
async fn test_register_uses_forwarded_identity() {
    let (_dir, state) = create_test_app_state().await;
    let identity = Uuid::new_v4();

    let (status, created) = send(
        &state,
        request("POST", "/api/v1/users", Some(identity), Some(pantry())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["user"]["id"], identity.to_string());

    let mut again = pantry();
    again["email"] = json!("other@example.org");
    let (status, _) = send(
        &state,
        request("POST", "/api/v1/users", Some(identity), Some(again)),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let (_dir, state) = create_test_app_state().await;
    send(&state, request("POST", "/api/v1/users", None, Some(pantry()))).await;

    let mut duplicate = pantry();
    duplicate["email"] = json!("  PANTRY@example.ORG ");
    let (status, json) = send(&state, request("POST", "/api/v1/users", None, Some(duplicate))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_register_rejects_bad_input() {
    let (_dir, state) = create_test_app_state().await;

    let mut body = pantry();
    body["email"] = json!("not-an-email");
    let (status, json) = send(&state, request("POST", "/api/v1/users", None, Some(body))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "email");

    let mut body = pantry();
    body["role"] = json!("chef");
    let (status, json) = send(&state, request("POST", "/api/v1/users", None, Some(body))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "role");
}

#[tokio::test]
async fn test_check_user() {
    let (_dir, state) = create_test_app_state().await;
    let id = create_test_user(&state, "donor@example.org", UserRole::Donor).await;

    let (status, json) = send(
        &state,
        request("GET", "/api/v1/users/check?email=DONOR%40example.org", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["registered"], true);
    assert_eq!(json["user"]["id"], id.to_string());

    let (_, json) = send(
        &state,
        request("GET", "/api/v1/users/check?email=nobody%40example.org", None, None),
    )
    .await;
    assert_eq!(json["registered"], false);
    assert!(json["user"].is_null());

    let (status, _) = send(&state, request("GET", "/api/v1/users/check", None, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let (_dir, state) = create_test_app_state().await;

    let (status, _) = send(
        &state,
        request("GET", &format!("/api/v1/users/{}", Uuid::new_v4()), None, None),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_own_profile() {
    let (_dir, state) = create_test_app_state().await;
    let id = create_test_user(&state, "donor@example.org", UserRole::Donor).await;

    let (status, json) = send(
        &state,
        request(
            "PUT",
            &format!("/api/v1/users/{}", id),
            Some(id),
            Some(json!({"name": "Corner Bakery", "phone": "555-0100", "latitude": 10.0})),
        ),
    )
    .await;

    // latitude without longitude on a user that has none
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "longitude");

    let (status, json) = send(
        &state,
        request(
            "PUT",
            &format!("/api/v1/users/{}", id),
            Some(id),
            Some(json!({"name": "Corner Bakery", "phone": "555-0100"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["name"], "Corner Bakery");
    assert_eq!(json["user"]["phone"], "555-0100");
    assert_eq!(json["user"]["role"], "donor");
}

#[tokio::test]
async fn test_update_profile_permissions() {
    let (_dir, state) = create_test_app_state().await;
    let donor = create_test_user(&state, "donor@example.org", UserRole::Donor).await;
    let other = create_test_user(&state, "other@example.org", UserRole::Recipient).await;
    let admin = create_test_user(&state, "admin@example.org", UserRole::Admin).await;
    let uri = format!("/api/v1/users/{}", donor);

    let (status, _) = send(
        &state,
        request("PUT", &uri, Some(other), Some(json!({"name": "Hijacked"}))),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &state,
        request("PUT", &uri, Some(donor), Some(json!({"role": "admin"}))),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, json) = send(
        &state,
        request("PUT", &uri, Some(admin), Some(json!({"role": "recipient"}))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["role"], "recipient");

    let (status, _) = send(&state, request("PUT", &uri, None, Some(json!({"name": "X"})))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_email_to_taken_address_conflicts() {
    let (_dir, state) = create_test_app_state().await;
    let donor = create_test_user(&state, "donor@example.org", UserRole::Donor).await;
    create_test_user(&state, "taken@example.org", UserRole::Donor).await;

    let (status, _) = send(
        &state,
        request(
            "PUT",
            &format!("/api/v1/users/{}", donor),
            Some(donor),
            Some(json!({"email": "Taken@example.org"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_profile_edits_keep_both_fields() {
    let (_dir, state) = create_test_app_state().await;
    let id = create_test_user(&state, "pantry@example.org", UserRole::Recipient).await;
    let uri = format!("/api/v1/users/{}", id);

    let ((name_status, _), (phone_status, _)) = tokio::join!(
        send(&state, request("PUT", &uri, Some(id), Some(json!({"name": "Eastside Pantry"})))),
        send(&state, request("PUT", &uri, Some(id), Some(json!({"phone": "555-0199"})))),
    );
    assert_eq!(name_status, StatusCode::OK);
    assert_eq!(phone_status, StatusCode::OK);

    let (_, json) = send(&state, request("GET", &uri, None, None)).await;
    assert_eq!(json["user"]["name"], "Eastside Pantry");
    assert_eq!(json["user"]["phone"], "555-0199");
}
