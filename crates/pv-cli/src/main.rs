//! pv - profile field verification CLI
//!
//! Decides whether profile field values are links eligible for an ownership
//! check, and records checks that succeeded.
//!
//! # Examples
//!
//! ```bash
//! # Is this value a verifiable link?
//! pv check https://example.com
//!
//! # Same, for HTML coming from a remote server
//! pv check --remote '<a href="https://example.com">https://example.com</a>'
//!
//! # Replace an identity's fields, then record a successful check
//! pv fields assign me.json --field Web=https://example.com --field Pronouns=they/them
//! pv fields mark-verified me.json 0
//! ```

use pv_cli::{Cli, initialize_logger, load_config, run};

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = initialize_logger(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    match run(&cli, &config) {
        Ok(value) => {
            let output = if cli.pretty() {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
