//! Axum extractors for the caller's identity

use crate::ApiError;

use std::future::Future;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// The authenticated user, as asserted by the upstream OAuth proxy in the
/// `X-User-Id` header.
///
/// Extracting `UserId` rejects requests without the header. Extracting
/// `Option<UserId>` accepts them, but a malformed header is still rejected.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub Uuid);

fn parse_header(parts: &Parts) -> Result<Option<UserId>, ApiError> {
    let Some(header_value) = parts.headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };

    let user_id_str = header_value.to_str().map_err(|_| {
        ApiError::unauthorized(format!("{} header is not valid text", USER_ID_HEADER))
    })?;

    match Uuid::parse_str(user_id_str.trim()) {
        Ok(uuid) => {
            log::debug!("Request authenticated as {}", uuid);
            Ok(Some(UserId(uuid)))
        }
        Err(_) => {
            log::warn!("Invalid UUID in {} header: {}", USER_ID_HEADER, user_id_str);
            Err(ApiError::unauthorized(format!(
                "Invalid {} header",
                USER_ID_HEADER
            )))
        }
    }
}

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parse_header(parts)?.ok_or_else(|| {
                ApiError::unauthorized(format!("Missing {} header", USER_ID_HEADER))
            })
        }
    }
}

impl<S> OptionalFromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        async move { parse_header(parts) }
    }
}
