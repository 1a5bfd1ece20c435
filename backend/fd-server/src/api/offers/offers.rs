//! Offer REST API handlers
//!
//! Donors post offers; anyone can browse them. Claim metadata on an offer is
//! owned by the claims handlers.

use crate::{
    ApiError, ApiResult, AppState, CreateOfferRequest, DeleteResponse, ListOffersQuery, OfferDto,
    OfferListResponse, OfferResponse, RequestValidator, UpdateOfferRequest, UserId,
};

use fd_core::{Offer, OfferStatus};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/offers
///
/// List offers, optionally filtered by status, category and donor
pub async fn list_offers(
    State(state): State<AppState>,
    query: Result<Query<ListOffersQuery>, QueryRejection>,
) -> ApiResult<Json<OfferListResponse>> {
    let Query(query) = query?;
    let validator = RequestValidator::new(&state.validation);

    let status = query
        .status
        .as_deref()
        .map(|s| validator.status(s))
        .transpose()?;
    let donor_id = query
        .donor_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()?;
    let category = query.category.as_deref().map(str::trim);

    let offers = match donor_id {
        Some(donor_id) => state.store.offers.find_by_donor(donor_id).await?,
        None => state.store.offers.find_all().await?,
    };

    let offers = offers
        .into_iter()
        .filter(|o| status.is_none_or(|s| o.status == s))
        .filter(|o| category.is_none_or(|c| o.category.eq_ignore_ascii_case(c)))
        .map(OfferDto::from)
        .collect();

    Ok(Json(OfferListResponse { offers }))
}

/// GET /api/v1/offers/{id}
pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<OfferResponse>> {
    let offer_id = Uuid::parse_str(&id)?;

    let offer = state
        .store
        .offers
        .find_by_id(offer_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Offer {} not found", id)))?;

    Ok(Json(OfferResponse {
        offer: offer.into(),
    }))
}

/// POST /api/v1/offers
///
/// Create an offer on behalf of the calling donor
pub async fn create_offer(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    body: Result<Json<CreateOfferRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<OfferResponse>)> {
    let Json(req) = body?;
    let validator = RequestValidator::new(&state.validation);

    let donor = state
        .store
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::forbidden(format!("User {} is not registered", user_id)))?;

    if !donor.role.can_donate() {
        return Err(ApiError::forbidden(format!(
            "Only donors can post offers (role: {})",
            donor.role
        )));
    }

    let status = match req.status.as_deref() {
        Some(s) => validator.status(s)?,
        None => OfferStatus::default(),
    };
    if !status.is_claimable() {
        return Err(ApiError::validation(
            "New offers must be predicted or confirmed",
            "status",
        ));
    }

    let mut offer = Offer::new(
        donor.id,
        validator.required(&req.title, "title")?,
        validator.required(&req.category, "category")?,
        validator.quantity(req.quantity)?,
        validator.required(&req.unit, "unit")?,
    );
    offer.status = status;
    offer.description = validator.optional_text(req.description.as_deref(), "description")?;
    offer.pickup_address =
        validator.optional_text(req.pickup_address.as_deref(), "pickup_address")?;
    if let Some((lat, lng)) = validator.coordinates(req.latitude, req.longitude)? {
        offer.latitude = Some(lat);
        offer.longitude = Some(lng);
    }
    offer.available_until = req
        .available_until
        .map(|t| validator.timestamp(t, "available_until"))
        .transpose()?;

    state.store.offers.create(&offer).await?;

    log::info!(
        "Created offer {} ({} {} {}) for donor {}",
        offer.id,
        offer.quantity,
        offer.unit,
        offer.category,
        offer.donor_id
    );

    Ok((
        StatusCode::CREATED,
        Json(OfferResponse {
            offer: offer.into(),
        }),
    ))
}

/// PUT /api/v1/offers/{id}
///
/// Partial update. Status may be set to any valid value; claim metadata is
/// left as the claims handlers wrote it.
pub async fn update_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateOfferRequest>, JsonRejection>,
) -> ApiResult<Json<OfferResponse>> {
    let Json(req) = body?;
    let offer_id = Uuid::parse_str(&id)?;
    let validator = RequestValidator::new(&state.validation);

    let offer = state
        .store
        .offers
        .modify(offer_id, |offer| -> ApiResult<()> {
            if let Some(ref title) = req.title {
                offer.title = validator.required(title, "title")?;
            }
            if let Some(ref description) = req.description {
                offer.description =
                    validator.optional_text(Some(description.as_str()), "description")?;
            }
            if let Some(ref category) = req.category {
                offer.category = validator.required(category, "category")?;
            }
            if let Some(quantity) = req.quantity {
                offer.quantity = validator.quantity(quantity)?;
            }
            if let Some(ref unit) = req.unit {
                offer.unit = validator.required(unit, "unit")?;
            }
            if let Some(ref status) = req.status {
                offer.status = validator.status(status)?;
            }
            if let Some(ref address) = req.pickup_address {
                offer.pickup_address =
                    validator.optional_text(Some(address.as_str()), "pickup_address")?;
            }
            if req.latitude.is_some() || req.longitude.is_some() {
                let (lat, lng) = validator
                    .coordinates(
                        req.latitude.or(offer.latitude),
                        req.longitude.or(offer.longitude),
                    )?
                    .unzip();
                offer.latitude = lat;
                offer.longitude = lng;
            }
            if let Some(until) = req.available_until {
                offer.available_until = Some(validator.timestamp(until, "available_until")?);
            }

            offer.updated_at = Utc::now();
            Ok(())
        })
        .await?;

    log::info!("Updated offer {} (status: {})", offer.id, offer.status);

    Ok(Json(OfferResponse {
        offer: offer.into(),
    }))
}

/// DELETE /api/v1/offers/{id}
///
/// Removes the offer together with its claims
pub async fn delete_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let offer_id = Uuid::parse_str(&id)?;

    let (offer, dropped_claims) = state.store.offers.delete(offer_id).await?;

    log::info!(
        "Deleted offer {} and {} claim(s)",
        offer.id,
        dropped_claims
    );

    Ok(Json(DeleteResponse {
        deleted_id: offer.id.to_string(),
    }))
}
