use crate::UserId;

use axum::{
    body::Body,
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{Request, request::Parts},
};
use uuid::Uuid;

fn parts_with_header(value: Option<&str>) -> Parts {
    let mut builder = Request::builder();
    if let Some(value) = value {
        builder = builder.header("X-User-Id", value);
    }
    let (parts, _body) = builder.body(Body::empty()).unwrap().into_parts();
    parts
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let mut parts = parts_with_header(Some("12345678-1234-1234-1234-123456789abc"));

    let result = <UserId as FromRequestParts<()>>::from_request_parts(&mut parts, &()).await;

    assert_eq!(
        result.unwrap().0.to_string(),
        "12345678-1234-1234-1234-123456789abc"
    );
}

#[tokio::test]
async fn test_extractor_trims_whitespace() {
    let id = Uuid::new_v4();
    let mut parts = parts_with_header(Some(&format!(" {} ", id)));

    let result = <UserId as FromRequestParts<()>>::from_request_parts(&mut parts, &()).await;

    assert_eq!(result.unwrap().0, id);
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let mut parts = parts_with_header(None);

    let result = <UserId as FromRequestParts<()>>::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_invalid_uuid() {
    let mut parts = parts_with_header(Some("not-a-valid-uuid"));

    let result = <UserId as FromRequestParts<()>>::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_optional_extractor_accepts_missing_header() {
    let mut parts = parts_with_header(None);

    let result =
        <UserId as OptionalFromRequestParts<()>>::from_request_parts(&mut parts, &()).await;

    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_optional_extractor_still_rejects_invalid_uuid() {
    let mut parts = parts_with_header(Some("12345"));

    let result =
        <UserId as OptionalFromRequestParts<()>>::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}
