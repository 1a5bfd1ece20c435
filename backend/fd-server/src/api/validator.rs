//! Input validation for REST requests
//!
//! Limits come from `ValidationConfig`. Every failure names the offending
//! field so clients can highlight it.

use crate::{ApiError, ApiResult};

use fd_config::ValidationConfig;
use fd_core::{OfferStatus, UserRole};

use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Trim surrounding whitespace and drop control characters
pub fn sanitize_string(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !c.is_control() || *c == '\n')
        .collect()
}

pub struct RequestValidator<'a> {
    config: &'a ValidationConfig,
}

impl<'a> RequestValidator<'a> {
    pub fn new(config: &'a ValidationConfig) -> Self {
        Self { config }
    }

    /// Required short text: titles, names, categories, units
    pub fn required(&self, value: &str, field: &str) -> ApiResult<String> {
        let value = sanitize_string(value);

        if value.is_empty() {
            return Err(ApiError::validation(
                format!("{} is required", field),
                field,
            ));
        }

        let length = value.chars().count();
        if length > self.config.max_title_length {
            return Err(ApiError::validation(
                format!(
                    "{} must be at most {} characters (got {})",
                    field, self.config.max_title_length, length
                ),
                field,
            ));
        }

        Ok(value)
    }

    /// Optional long text. Blank input is stored as absent.
    pub fn optional_text(&self, value: Option<&str>, field: &str) -> ApiResult<Option<String>> {
        let Some(value) = value.map(sanitize_string).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };

        let length = value.chars().count();
        if length > self.config.max_text_length {
            return Err(ApiError::validation(
                format!(
                    "{} must be at most {} characters (got {})",
                    field, self.config.max_text_length, length
                ),
                field,
            ));
        }

        Ok(Some(value))
    }

    pub fn quantity(&self, quantity: f64) -> ApiResult<f64> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ApiError::validation(
                "quantity must be a positive number",
                "quantity",
            ));
        }

        if quantity > self.config.max_quantity {
            return Err(ApiError::validation(
                format!("quantity must be at most {}", self.config.max_quantity),
                "quantity",
            ));
        }

        Ok(quantity)
    }

    /// Latitude and longitude travel together
    pub fn coordinates(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> ApiResult<Option<(f64, f64)>> {
        match (latitude, longitude) {
            (None, None) => Ok(None),
            (Some(lat), Some(lng)) => {
                if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
                    return Err(ApiError::validation(
                        "latitude must be between -90 and 90",
                        "latitude",
                    ));
                }
                if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
                    return Err(ApiError::validation(
                        "longitude must be between -180 and 180",
                        "longitude",
                    ));
                }
                Ok(Some((lat, lng)))
            }
            (Some(_), None) => Err(ApiError::validation(
                "longitude is required when latitude is set",
                "longitude",
            )),
            (None, Some(_)) => Err(ApiError::validation(
                "latitude is required when longitude is set",
                "latitude",
            )),
        }
    }

    pub fn email(&self, email: &str) -> ApiResult<String> {
        let email = self.required(email, "email")?;

        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(email)
            }
            _ => Err(ApiError::validation(
                format!("Invalid email address: {}", email),
                "email",
            )),
        }
    }

    pub fn status(&self, status: &str) -> ApiResult<OfferStatus> {
        Ok(OfferStatus::from_str(status.trim())?)
    }

    pub fn role(&self, role: &str) -> ApiResult<UserRole> {
        Ok(UserRole::from_str(role.trim())?)
    }

    /// Unix seconds, must be representable
    pub fn timestamp(&self, seconds: i64, field: &str) -> ApiResult<DateTime<Utc>> {
        DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            ApiError::validation(format!("{} is not a valid timestamp", field), field)
        })
    }
}
