use crate::{ApiError, RequestValidator, sanitize_string};

use fd_config::ValidationConfig;
use fd_core::{OfferStatus, UserRole};

use googletest::prelude::*;

fn config() -> ValidationConfig {
    ValidationConfig {
        max_title_length: 10,
        max_text_length: 20,
        max_quantity: 100.0,
    }
}

fn field_of(error: ApiError) -> Option<String> {
    match error {
        ApiError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_sanitize_string_trims_and_strips_controls() {
    assert_eq!(sanitize_string("  bread\u{0007} "), "bread");
    assert_eq!(sanitize_string("line one\nline two"), "line one\nline two");
}

#[test]
fn test_required_rejects_blank() {
    let config = config();
    let validator = RequestValidator::new(&config);

    let err = validator.required("   ", "title").unwrap_err();

    assert_eq!(field_of(err).as_deref(), Some("title"));
}

#[test]
fn test_required_enforces_max_length_in_chars() {
    let config = config();
    let validator = RequestValidator::new(&config);

    assert_that!(validator.required("ÄÖÜäöüßéèê", "title").is_ok(), eq(true));
    assert_that!(validator.required("eleven char", "title").is_err(), eq(true));
}

#[test]
fn test_optional_text_maps_blank_to_none() {
    let config = config();
    let validator = RequestValidator::new(&config);

    assert_eq!(validator.optional_text(Some("  "), "notes").unwrap(), None);
    assert_eq!(validator.optional_text(None, "notes").unwrap(), None);
    assert_eq!(
        validator.optional_text(Some(" back door "), "notes").unwrap(),
        Some("back door".to_string())
    );

    let err = validator
        .optional_text(Some(&"x".repeat(21)), "notes")
        .unwrap_err();
    assert_eq!(field_of(err).as_deref(), Some("notes"));
}

#[test]
fn test_quantity_bounds() {
    let config = config();
    let validator = RequestValidator::new(&config);

    assert_that!(validator.quantity(2.5).unwrap(), eq(2.5));
    assert_that!(validator.quantity(100.0).is_ok(), eq(true));
    assert_that!(validator.quantity(0.0).is_err(), eq(true));
    assert_that!(validator.quantity(-1.0).is_err(), eq(true));
    assert_that!(validator.quantity(f64::NAN).is_err(), eq(true));
    assert_that!(validator.quantity(100.5).is_err(), eq(true));
}

#[test]
fn test_coordinates_must_come_in_pairs() {
    let config = config();
    let validator = RequestValidator::new(&config);

    assert_eq!(validator.coordinates(None, None).unwrap(), None);
    assert_eq!(
        validator.coordinates(Some(52.52), Some(13.405)).unwrap(),
        Some((52.52, 13.405))
    );

    let err = validator.coordinates(Some(52.52), None).unwrap_err();
    assert_eq!(field_of(err).as_deref(), Some("longitude"));

    let err = validator.coordinates(Some(91.0), Some(0.0)).unwrap_err();
    assert_eq!(field_of(err).as_deref(), Some("latitude"));

    let err = validator.coordinates(Some(0.0), Some(-180.5)).unwrap_err();
    assert_eq!(field_of(err).as_deref(), Some("longitude"));
}

#[test]
fn test_email_shape() {
    let config = ValidationConfig::default();
    let validator = RequestValidator::new(&config);

    assert_that!(validator.email("pantry@example.org").is_ok(), eq(true));
    assert_that!(validator.email("no-at-sign").is_err(), eq(true));
    assert_that!(validator.email("@example.org").is_err(), eq(true));
    assert_that!(validator.email("pantry@").is_err(), eq(true));
    assert_that!(validator.email("a@b@c").is_err(), eq(true));
}

#[test]
fn test_status_and_role_parsing() {
    let config = config();
    let validator = RequestValidator::new(&config);

    assert_eq!(validator.status(" confirmed ").unwrap(), OfferStatus::Confirmed);
    assert_eq!(validator.role("recipient").unwrap(), UserRole::Recipient);

    let err = validator.status("eaten").unwrap_err();
    assert_eq!(field_of(err).as_deref(), Some("status"));

    let err = validator.role("chef").unwrap_err();
    assert_eq!(field_of(err).as_deref(), Some("role"));
}

#[test]
fn test_timestamp_range() {
    let config = config();
    let validator = RequestValidator::new(&config);

    assert_eq!(
        validator.timestamp(1_700_000_000, "available_until").unwrap().timestamp(),
        1_700_000_000
    );
    assert_that!(
        validator.timestamp(i64::MAX, "available_until").is_err(),
        eq(true)
    );
}
