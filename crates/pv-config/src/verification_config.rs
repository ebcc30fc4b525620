use crate::{ConfigError, ConfigErrorResult};

use pv_core::VerificationPolicy;
use pv_core::verification::verification_policy::{
    DEFAULT_ACCEPTED_SCHEMES, DEFAULT_INVISIBLE_CLASS, DEFAULT_MAX_LINK_LENGTH,
};
use serde::Deserialize;

// Validation constraints
pub const MIN_LINK_LENGTH: usize = 16;
pub const MAX_LINK_LENGTH: usize = 65536;

/// Rules for deciding which field values may be checked for ownership.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Schemes a verifiable link may use
    pub accepted_schemes: Vec<String>,
    /// Class renderers put on wrappers hidden from sighted readers
    pub invisible_class: String,
    /// Longest link handed to the ownership checker
    pub max_link_length: usize,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            accepted_schemes: DEFAULT_ACCEPTED_SCHEMES
                .iter()
                .map(|scheme| scheme.to_string())
                .collect(),
            invisible_class: String::from(DEFAULT_INVISIBLE_CLASS),
            max_link_length: DEFAULT_MAX_LINK_LENGTH,
        }
    }
}

impl VerificationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.accepted_schemes.is_empty() {
            return Err(ConfigError::verification(
                "verification.accepted_schemes must not be empty",
            ));
        }

        if let Some(bad) = self
            .accepted_schemes
            .iter()
            .find(|scheme| !is_valid_scheme(scheme))
        {
            return Err(ConfigError::verification(format!(
                "verification.accepted_schemes contains invalid scheme {bad:?} (expected lowercase, e.g. \"https\")"
            )));
        }

        if self.invisible_class.is_empty()
            || self.invisible_class.chars().any(char::is_whitespace)
        {
            return Err(ConfigError::verification(format!(
                "verification.invisible_class must be a single class name, got {:?}",
                self.invisible_class
            )));
        }

        if self.max_link_length < MIN_LINK_LENGTH || self.max_link_length > MAX_LINK_LENGTH {
            return Err(ConfigError::verification(format!(
                "verification.max_link_length must be {}-{}, got {}",
                MIN_LINK_LENGTH, MAX_LINK_LENGTH, self.max_link_length
            )));
        }

        Ok(())
    }

    pub fn to_policy(&self) -> VerificationPolicy {
        VerificationPolicy {
            accepted_schemes: self.accepted_schemes.clone(),
            invisible_class: self.invisible_class.clone(),
            max_link_length: self.max_link_length,
        }
    }
}

/// RFC 3986 scheme grammar, restricted to the lowercase form the URL parser produces
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '-' | '.')
        })
}
