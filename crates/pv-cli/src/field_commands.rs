use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum FieldCommands {
    /// List fields with their verification state
    Show {
        /// Profile fields JSON file
        file: PathBuf,
    },

    /// Replace all fields, keeping verification for unchanged values
    Assign {
        /// Profile fields JSON file (created if missing)
        file: PathBuf,

        /// Field to set, repeatable, in order
        #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field_pair)]
        fields: Vec<(String, String)>,
    },

    /// Record a successful ownership check for one field
    MarkVerified {
        /// Profile fields JSON file
        file: PathBuf,

        /// Zero-based field index
        index: usize,

        /// Mark even if the value is not a verifiable link
        #[arg(long)]
        force: bool,
    },
}

/// Split `NAME=VALUE` at the first '='
pub(crate) fn parse_field_pair(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got {arg:?}")),
    }
}
