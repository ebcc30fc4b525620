use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    FieldsConfig, LoggingConfig, VerificationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use pv_core::{FieldLimits, VerificationPolicy};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub verification: VerificationConfig,
    pub fields: FieldsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PV_CONFIG_DIR env var, else use ./.pv/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply PV_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
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

    /// Get the config directory.
    /// Priority: PV_CONFIG_DIR env var > ./.pv/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.verification.validate()?;
        self.fields.validate()?;

        if self.logging.file.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::logging("logging.file must not be empty"));
        }

        Ok(())
    }

    pub fn verification_policy(&self) -> VerificationPolicy {
        self.verification.to_policy()
    }

    pub fn field_limits(&self) -> FieldLimits {
        self.fields.to_limits()
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  verification: schemes=[{}], invisible_class={}, max_link_length={}",
            self.verification.accepted_schemes.join(","),
            self.verification.invisible_class,
            self.verification.max_link_length
        );
        info!(
            "  fields: max={}, name={}, value={}",
            self.fields.max_fields, self.fields.max_name_length, self.fields.max_value_length
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Verification
        Self::apply_env_list("PV_ACCEPTED_SCHEMES", &mut self.verification.accepted_schemes);
        Self::apply_env_string("PV_INVISIBLE_CLASS", &mut self.verification.invisible_class);
        Self::apply_env_parse("PV_MAX_LINK_LENGTH", &mut self.verification.max_link_length);

        // Fields
        Self::apply_env_parse("PV_MAX_FIELDS", &mut self.fields.max_fields);
        Self::apply_env_parse("PV_MAX_FIELD_NAME_LENGTH", &mut self.fields.max_name_length);
        Self::apply_env_parse(
            "PV_MAX_FIELD_VALUE_LENGTH",
            &mut self.fields.max_value_length,
        );

        // Logging
        Self::apply_env_parse("PV_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PV_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PV_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for comma separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
