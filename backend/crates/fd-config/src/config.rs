use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    LoggingConfig, ServerConfig, StorageConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config from the config directory.
    ///
    /// Loading order:
    /// 1. `FD_CONFIG_DIR` env var, else `./.food/`
    /// 2. Create the directory if it doesn't exist
    /// 3. Parse `config.toml` if present, else defaults
    /// 4. Apply `FD_*` environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: FD_CONFIG_DIR env var > ./.food/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.storage.validate()?;
        self.validation.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::config(format!(
                "logging.file must be a plain file name, got '{file}'"
            )));
        }

        Ok(())
    }

    /// Absolute path of the data directory holding the JSON collections.
    pub fn data_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.data_dir))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  storage: {}/{{{}, {}, {}}}",
            self.storage.data_dir,
            self.storage.offers_file,
            self.storage.claims_file,
            self.storage.users_file
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  validation: title={}, text={}, quantity={}",
            self.validation.max_title_length,
            self.validation.max_text_length,
            self.validation.max_quantity
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FD_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FD_SERVER_PORT", &mut self.server.port);

        // Storage
        Self::apply_env_string("FD_STORAGE_DATA_DIR", &mut self.storage.data_dir);
        Self::apply_env_string("FD_STORAGE_OFFERS_FILE", &mut self.storage.offers_file);
        Self::apply_env_string("FD_STORAGE_CLAIMS_FILE", &mut self.storage.claims_file);
        Self::apply_env_string("FD_STORAGE_USERS_FILE", &mut self.storage.users_file);

        // Logging
        Self::apply_env_parse("FD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FD_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "FD_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "FD_VALIDATION_MAX_TEXT_LENGTH",
            &mut self.validation.max_text_length,
        );
        Self::apply_env_parse(
            "FD_VALIDATION_MAX_QUANTITY",
            &mut self.validation.max_quantity,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
