use crate::{ConfigError, ConfigErrorResult};

use pv_core::FieldLimits;
use pv_core::models::field_limits::{
    DEFAULT_MAX_FIELDS, DEFAULT_MAX_NAME_LENGTH, DEFAULT_MAX_VALUE_LENGTH,
};
use serde::Deserialize;

// Validation constraints
pub const MIN_FIELDS: usize = 1;
pub const MAX_FIELDS: usize = 16;

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 1024;

pub const MIN_VALUE_LENGTH: usize = 1;
pub const MAX_VALUE_LENGTH: usize = 8192;

/// Limits applied when an identity's profile fields are replaced.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    /// Maximum number of fields per identity
    pub max_fields: usize,
    /// Maximum field name length, in characters
    pub max_name_length: usize,
    /// Maximum field value length, in characters
    pub max_value_length: usize,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            max_fields: DEFAULT_MAX_FIELDS,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_value_length: DEFAULT_MAX_VALUE_LENGTH,
        }
    }
}

impl FieldsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_fields < MIN_FIELDS || self.max_fields > MAX_FIELDS {
            return Err(ConfigError::fields(format!(
                "fields.max_fields must be {}-{}, got {}",
                MIN_FIELDS, MAX_FIELDS, self.max_fields
            )));
        }

        if self.max_name_length < MIN_NAME_LENGTH || self.max_name_length > MAX_NAME_LENGTH {
            return Err(ConfigError::fields(format!(
                "fields.max_name_length must be {}-{}, got {}",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH, self.max_name_length
            )));
        }

        if self.max_value_length < MIN_VALUE_LENGTH || self.max_value_length > MAX_VALUE_LENGTH {
            return Err(ConfigError::fields(format!(
                "fields.max_value_length must be {}-{}, got {}",
                MIN_VALUE_LENGTH, MAX_VALUE_LENGTH, self.max_value_length
            )));
        }

        Ok(())
    }

    pub fn to_limits(&self) -> FieldLimits {
        FieldLimits {
            max_fields: self.max_fields,
            max_name_length: self.max_name_length,
            max_value_length: self.max_value_length,
        }
    }
}
