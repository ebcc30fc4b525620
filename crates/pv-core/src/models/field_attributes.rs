use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored shape of a profile field inside the identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAttributes {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
}

impl FieldAttributes {
    pub fn new(name: String, value: String) -> Self {
        Self {
            name,
            value,
            verified_at: None,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verified_at.is_some()
    }
}
