//! User registration and profile handlers
//!
//! Sign-in happens upstream. These handlers only record who signed up and
//! in which role, keyed by the identity the proxy forwards.

use crate::{
    ApiError, ApiResult, AppState, CheckUserQuery, CheckUserResponse, RegisterUserRequest,
    RequestValidator, UpdateUserRequest, UserDto, UserId, UserResponse,
};

use fd_core::{User, UserRole};

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

/// POST /api/v1/users
///
/// Register a profile. When `X-User-Id` is present it becomes the user's id,
/// otherwise a fresh id is assigned.
pub async fn register_user(
    State(state): State<AppState>,
    caller: Option<UserId>,
    body: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(req) = body?;
    let validator = RequestValidator::new(&state.validation);

    let email = validator.email(&req.email)?;
    let name = validator.required(&req.name, "name")?;
    let role = validator.role(&req.role)?;

    let mut user = User::new(&email, name, role);
    if let Some(UserId(id)) = caller {
        user.id = id;
    }
    user.organization = validator.optional_text(req.organization.as_deref(), "organization")?;
    user.phone = validator.optional_text(req.phone.as_deref(), "phone")?;
    user.address = validator.optional_text(req.address.as_deref(), "address")?;
    if let Some((lat, lng)) = validator.coordinates(req.latitude, req.longitude)? {
        user.latitude = Some(lat);
        user.longitude = Some(lng);
    }

    state.store.users.create(&user).await?;

    log::info!("Registered {} {} ({})", user.role, user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse { user: user.into() }),
    ))
}

/// GET /api/v1/users/check?email=
pub async fn check_user(
    State(state): State<AppState>,
    query: Result<Query<CheckUserQuery>, QueryRejection>,
) -> ApiResult<Json<CheckUserResponse>> {
    let Query(query) = query?;

    let email = query
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::validation("email query parameter is required", "email"))?;

    let user = state.store.users.find_by_email(email).await?;

    Ok(Json(CheckUserResponse {
        registered: user.is_some(),
        user: user.map(UserDto::from),
    }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    let user = state
        .store
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/users/{id}
///
/// Users edit their own profile; admins may edit anyone's, including roles.
pub async fn update_user(
    State(state): State<AppState>,
    UserId(caller_id): UserId,
    Path(id): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Json(req) = body?;
    let user_id = Uuid::parse_str(&id)?;
    let validator = RequestValidator::new(&state.validation);

    // Only consulted when someone other than the profile owner is editing
    let caller_is_other_admin = caller_id != user_id
        && state
            .store
            .users
            .find_by_id(caller_id)
            .await?
            .is_some_and(|caller| caller.role == UserRole::Admin);

    let user = state
        .store
        .users
        .modify(user_id, |user| -> ApiResult<()> {
            let caller_is_admin = if caller_id == user_id {
                user.role == UserRole::Admin
            } else {
                caller_is_other_admin
            };

            if caller_id != user_id && !caller_is_admin {
                return Err(ApiError::forbidden(format!(
                    "User {} may not edit profile {}",
                    caller_id, user_id
                )));
            }

            if let Some(ref email) = req.email {
                user.email = User::normalize_email(&validator.email(email)?);
            }
            if let Some(ref name) = req.name {
                user.name = validator.required(name, "name")?;
            }
            if let Some(ref role) = req.role {
                let role = validator.role(role)?;
                if role != user.role && !caller_is_admin {
                    return Err(ApiError::forbidden("Only admins can change roles"));
                }
                user.role = role;
            }
            if let Some(ref organization) = req.organization {
                user.organization =
                    validator.optional_text(Some(organization.as_str()), "organization")?;
            }
            if let Some(ref phone) = req.phone {
                user.phone = validator.optional_text(Some(phone.as_str()), "phone")?;
            }
            if let Some(ref address) = req.address {
                user.address = validator.optional_text(Some(address.as_str()), "address")?;
            }
            if req.latitude.is_some() || req.longitude.is_some() {
                let (lat, lng) = validator
                    .coordinates(
                        req.latitude.or(user.latitude),
                        req.longitude.or(user.longitude),
                    )?
                    .unzip();
                user.latitude = lat;
                user.longitude = lng;
            }

            user.updated_at = Utc::now();
            Ok(())
        })
        .await?;

    log::info!("Updated profile {} (by {})", user.id, caller_id);

    Ok(Json(UserResponse { user: user.into() }))
}
