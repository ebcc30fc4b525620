//! JSON file store for an identity's profile fields.

use crate::{CliError, CliResult};

use std::path::Path;

use log::debug;
use pv_core::{IdentityKind, ProfileFields};
use serde::{Deserialize, Serialize};

/// On-disk identity record: where the identity lives and its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsFile {
    #[serde(default)]
    pub identity: IdentityKind,
    #[serde(default)]
    pub fields: ProfileFields,
}

impl FieldsFile {
    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let file: FieldsFile =
            serde_json::from_str(&contents).map_err(|e| CliError::json(path, e))?;

        debug!(
            "Loaded {} fields ({} identity) from {}",
            file.fields.len(),
            file.identity,
            path.display()
        );
        Ok(file)
    }

    /// Load the file, or start an empty local record when it does not exist yet
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the record, replacing the file only once the new contents are on disk
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| CliError::json(path, e))?;

        let staging = path.with_extension("json.tmp");
        std::fs::write(&staging, json).map_err(|e| CliError::io(&staging, e))?;
        std::fs::rename(&staging, path).map_err(|e| CliError::io(path, e))?;

        debug!("Saved {} fields to {}", self.fields.len(), path.display());
        Ok(())
    }
}
