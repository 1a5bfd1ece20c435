use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MIN_TEXT_LENGTH: usize = 0;
pub const MAX_TEXT_LENGTH: usize = 100_000;
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 5_000;

pub const MIN_QUANTITY_LIMIT: f64 = 1.0;
pub const MAX_QUANTITY_LIMIT: f64 = 1_000_000.0;
pub const DEFAULT_MAX_QUANTITY: f64 = 100_000.0;

/// Field limits applied to incoming offers, claims and profiles.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Titles, names, categories and units
    pub max_title_length: usize,
    /// Descriptions, notes and addresses
    pub max_text_length: usize,
    pub max_quantity: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            max_quantity: DEFAULT_MAX_QUANTITY,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_text_length < MIN_TEXT_LENGTH || self.max_text_length > MAX_TEXT_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_text_length must be {}-{}, got {}",
                MIN_TEXT_LENGTH, MAX_TEXT_LENGTH, self.max_text_length
            )));
        }

        if !(MIN_QUANTITY_LIMIT..=MAX_QUANTITY_LIMIT).contains(&self.max_quantity) {
            return Err(ConfigError::validation(format!(
                "validation.max_quantity must be {}-{}, got {}",
                MIN_QUANTITY_LIMIT, MAX_QUANTITY_LIMIT, self.max_quantity
            )));
        }

        Ok(())
    }
}
