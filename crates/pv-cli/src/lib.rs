//! pv-cli library
//!
//! Command handlers and the JSON fields store, exported for the `pv` binary and tests.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod field_commands;
pub(crate) mod fields_file;
pub(crate) mod handlers;
pub(crate) mod logger;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use fields_file::FieldsFile;
pub use handlers::{
    CheckReport, FieldReport, MarkReport, assign_fields, check, load_config, mark_verified, run,
    show_fields,
};
pub use logger::initialize as initialize_logger;
