use crate::ApiError;

use fd_core::CoreError;
use fd_store::StoreError;

use std::panic::Location;
use std::str::FromStr;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Offer not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Offer not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("Title too long", "title")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_unauthorized_and_forbidden_codes() {
    let (status, json) = body_json(ApiError::unauthorized("Missing header")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");

    let (status, json) = body_json(ApiError::forbidden("Donors only")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_store_not_found_maps_to_404() {
    let id = Uuid::new_v4();
    let error: ApiError = StoreError::not_found("Offer", id).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains(&id.to_string())
    );
}

#[tokio::test]
async fn test_store_conflict_maps_to_409() {
    let error: ApiError = StoreError::conflict("Offer is delivered and cannot be claimed").into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_store_io_error_hides_details() {
    let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: ApiError = StoreError::io("/srv/secret/offers.json", source).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("/srv/secret")
    );
}

#[tokio::test]
async fn test_invalid_status_maps_to_status_field() {
    let core_error: CoreError = fd_core::OfferStatus::from_str("eaten").unwrap_err();
    let error: ApiError = core_error.into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "status");
    assert!(json["error"]["message"].as_str().unwrap().contains("eaten"));
}

#[tokio::test]
async fn test_invalid_uuid_is_validation_error() {
    let error: ApiError = Uuid::parse_str("nope").unwrap_err().into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}
