use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pv")]
#[command(about = "Check and record ownership verification of profile fields")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}

impl Cli {
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
