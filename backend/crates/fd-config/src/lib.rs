mod config;
mod error;
mod log_level;
mod logging_config;
mod port_file;
mod server_config;
mod storage_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use port_file::{PortFileInfo, is_process_running};
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "FD_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".food";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATA_DIRECTORY: &str = "data";
const DEFAULT_OFFERS_FILENAME: &str = "offers.json";
const DEFAULT_CLAIMS_FILENAME: &str = "claims.json";
const DEFAULT_USERS_FILENAME: &str = "users.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
