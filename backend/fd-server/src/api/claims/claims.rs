//! Claim REST API handlers

use crate::{
    ApiError, ApiResult, AppState, ClaimDto, ClaimListResponse, ClaimResponse,
    CreateClaimRequest, ListClaimsQuery, RequestValidator, UserId,
};

use fd_core::Claim;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/claims
///
/// List claims, optionally filtered by offer and recipient
pub async fn list_claims(
    State(state): State<AppState>,
    query: Result<Query<ListClaimsQuery>, QueryRejection>,
) -> ApiResult<Json<ClaimListResponse>> {
    let Query(query) = query?;

    let offer_id = query.offer_id.as_deref().map(Uuid::parse_str).transpose()?;
    let recipient_id = query
        .recipient_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()?;

    let claims = state
        .store
        .claims
        .find_all()
        .await?
        .into_iter()
        .filter(|c| offer_id.is_none_or(|id| c.offer_id == id))
        .filter(|c| recipient_id.is_none_or(|id| c.recipient_id == id))
        .map(ClaimDto::from)
        .collect();

    Ok(Json(ClaimListResponse { claims }))
}

/// GET /api/v1/claims/{id}
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ClaimResponse>> {
    let claim_id = Uuid::parse_str(&id)?;

    let claim = state
        .store
        .claims
        .find_by_id(claim_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Claim {} not found", id)))?;

    Ok(Json(ClaimResponse {
        claim: claim.into(),
        offer: None,
    }))
}

/// POST /api/v1/claims
///
/// Claim an offer for the calling recipient. The offer moves to `claimed`
/// in the same step; an offer that is already claimed or delivered yields 409.
pub async fn create_claim(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    body: Result<Json<CreateClaimRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ClaimResponse>)> {
    let Json(req) = body?;
    let validator = RequestValidator::new(&state.validation);

    let recipient = state
        .store
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::forbidden(format!("User {} is not registered", user_id)))?;

    if !recipient.role.can_claim() {
        return Err(ApiError::forbidden(format!(
            "Only recipients can claim offers (role: {})",
            recipient.role
        )));
    }

    let offer_id = Uuid::parse_str(req.offer_id.trim()).map_err(|e| {
        ApiError::validation(format!("Invalid offer_id: {}", e), "offer_id")
    })?;
    let notes = validator.optional_text(req.notes.as_deref(), "notes")?;

    let claim = Claim::new(offer_id, recipient.id, notes);
    let offer = state.store.claims.create(&claim).await?;

    log::info!(
        "Recipient {} claimed offer {} (claim {})",
        claim.recipient_id,
        claim.offer_id,
        claim.id
    );

    Ok((
        StatusCode::CREATED,
        Json(ClaimResponse {
            claim: claim.into(),
            offer: Some(offer.into()),
        }),
    ))
}

/// DELETE /api/v1/claims/{id}
///
/// Release a claim. The offer returns to `confirmed` if the claim still held it.
pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ClaimResponse>> {
    let claim_id = Uuid::parse_str(&id)?;

    let (claim, offer) = state.store.claims.delete(claim_id).await?;

    log::info!("Released claim {} on offer {}", claim.id, claim.offer_id);

    Ok(Json(ClaimResponse {
        claim: claim.into(),
        offer: offer.map(Into::into),
    }))
}
