mod config;
mod error;
mod fields_config;
mod log_level;
mod logging_config;
mod verification_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use fields_config::FieldsConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use verification_config::VerificationConfig;

const CONFIG_DIR_ENV: &str = "PV_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".pv";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
