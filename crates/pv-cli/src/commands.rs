use crate::field_commands::FieldCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check whether a single value is eligible for verification
    Check {
        /// Field value as stored (plain text, or HTML with --remote)
        value: String,

        /// Treat the value as sanitized HTML from a remote identity
        #[arg(long)]
        remote: bool,
    },

    /// Operations on a stored profile fields file
    Fields {
        #[command(subcommand)]
        action: FieldCommands,
    },
}
