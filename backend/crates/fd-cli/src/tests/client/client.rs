use crate::{Client, ClientError, OfferFields};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_user_id_stored() {
    let client = Client::new("http://localhost:8000", Some("user-123"));
    assert_eq!(client.user_id, Some("user-123".to_string()));
}

#[test]
fn test_user_id_none() {
    let client = Client::new("http://localhost:8000", None);
    assert!(client.user_id.is_none());
}

#[test]
fn test_offer_fields_omit_unset_values() {
    let fields = OfferFields {
        status: Some("confirmed".into()),
        ..OfferFields::default()
    };

    let json = serde_json::to_value(&fields).unwrap();

    assert_eq!(json, serde_json::json!({"status": "confirmed"}));
}

#[test]
fn test_api_error_exposes_code() {
    let err = ClientError::api_error(409, "CONFLICT".into(), "Offer is claimed".into());

    assert_eq!(err.code(), Some("CONFLICT"));
    assert!(err.to_string().contains("409"));
}

#[tokio::test]
async fn test_invalid_base_url_is_reported() {
    let client = Client::new("not a url", None);

    let err = client.flow_summary().await.unwrap_err();

    assert!(matches!(err, ClientError::Url { .. }));
}
