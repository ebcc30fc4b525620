use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] pv_config::ConfigError),

    #[error("Field error: {0}")]
    Core(#[from] pv_core::CoreError),

    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("JSON error in {path}: {source} {location}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Field {index} ({name:?}) is not a verifiable link; use --force to mark it anyway {location}")]
    NotVerifiable {
        index: usize,
        name: String,
        location: ErrorLocation,
    },

    #[error("Output error: {0}")]
    Output(#[source] serde_json::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    /// Wrap an IO error with the file it concerns
    #[track_caller]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a JSON error with the file it concerns
    #[track_caller]
    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        CliError::Json {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_verifiable(index: usize, name: &str) -> Self {
        CliError::NotVerifiable {
            index,
            name: name.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
