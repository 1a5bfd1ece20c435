//! Integration tests for the dashboard flow endpoint
mod common;

use crate::common::{create_test_app_state, create_test_offer, create_test_user, request, send};

use fd_core::{OfferStatus, UserRole};

use axum::http::StatusCode;

#[tokio::test]
async fn test_flow_summary_empty() {
    let (_dir, state) = create_test_app_state().await;

    let (status, json) = send(&state, request("GET", "/api/v1/analytics/flow", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["flow"]["total_offers"], 0);
    assert_eq!(json["flow"]["predicted"]["count"], 0);
    assert!(json["generated_at"].is_i64());
}

#[tokio::test]
async fn test_flow_summary_counts_each_stage() {
    let (_dir, state) = create_test_app_state().await;
    let donor = create_test_user(&state, "donor@example.org", UserRole::Donor).await;
    for status in [
        OfferStatus::Predicted,
        OfferStatus::Predicted,
        OfferStatus::Confirmed,
        OfferStatus::Claimed,
        OfferStatus::Delivered,
    ] {
        create_test_offer(&state, donor, status).await;
    }

    let (status, json) = send(&state, request("GET", "/api/v1/analytics/flow", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    let flow = &json["flow"];
    assert_eq!(flow["total_offers"], 5);
    assert_eq!(flow["predicted"]["count"], 2);
    assert_eq!(flow["confirmed"]["count"], 1);
    assert_eq!(flow["claimed"]["count"], 1);
    assert_eq!(flow["delivered"]["count"], 1);
    assert_eq!(flow["predicted"]["quantity_by_unit"]["loaves"], 24.0);
    assert_eq!(flow["categories"][0]["category"], "bakery");
    assert_eq!(flow["categories"][0]["count"], 5);
}
