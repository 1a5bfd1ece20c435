use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CLAIMS_FILENAME, DEFAULT_DATA_DIRECTORY,
    DEFAULT_OFFERS_FILENAME, DEFAULT_USERS_FILENAME,
};

use std::path::Path;

use serde::Deserialize;

/// Where the flat JSON collections live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the collection files, relative to the config directory
    pub data_dir: String,
    pub offers_file: String,
    pub claims_file: String,
    pub users_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::from(DEFAULT_DATA_DIRECTORY),
            offers_file: String::from(DEFAULT_OFFERS_FILENAME),
            claims_file: String::from(DEFAULT_CLAIMS_FILENAME),
            users_file: String::from(DEFAULT_USERS_FILENAME),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let data_dir = Path::new(&self.data_dir);
        if self.data_dir.is_empty() || data_dir.is_absolute() || self.data_dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.data_dir must be a non-empty relative path without '..'",
            ));
        }

        for (key, name) in [
            ("offers_file", &self.offers_file),
            ("claims_file", &self.claims_file),
            ("users_file", &self.users_file),
        ] {
            if name.is_empty() || name.contains('/') || name.contains('\\') || name == ".." {
                return Err(ConfigError::storage(format!(
                    "storage.{key} must be a plain file name, got '{name}'"
                )));
            }
        }

        let mut names = [&self.offers_file, &self.claims_file, &self.users_file];
        names.sort();
        if names.windows(2).any(|w| w[0] == w[1]) {
            return Err(ConfigError::storage(
                "storage file names must be distinct",
            ));
        }

        Ok(())
    }
}
