use crate::cli::Cli;
use crate::commands::Commands;
use crate::field_commands::FieldCommands;
use crate::fields_file::FieldsFile;
use crate::{CliError, CliResult};

use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;
use pv_config::Config;
use pv_core::{
    CoreError, Field, FieldLimits, Identity, IdentityKind, VerificationPolicy, link_target,
};
use serde::Serialize;

/// Result of classifying a single value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub verifiable: bool,
    pub link: Option<String>,
}

/// One field as reported by `fields show` and `fields assign`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub index: usize,
    pub name: String,
    pub value: String,
    pub verified: bool,
    pub verifiable: bool,
    pub link: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
}

/// Outcome of `fields mark-verified`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkReport {
    pub index: usize,
    pub name: String,
    pub link: Option<String>,
    pub verified_at: DateTime<Utc>,
}

/// Load configuration and validate it before any command runs
pub fn load_config() -> CliResult<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

/// Execute the parsed command and return its JSON output
pub fn run(cli: &Cli, config: &Config) -> CliResult<serde_json::Value> {
    let policy = config.verification_policy();

    match &cli.command {
        Commands::Check { value, remote } => {
            let identity = if *remote {
                IdentityKind::Remote
            } else {
                IdentityKind::Local
            };
            to_json(check(value, &identity, &policy))
        }
        Commands::Fields { action } => match action {
            FieldCommands::Show { file } => to_json(show_fields(file, &policy)?),
            FieldCommands::Assign { file, fields } => to_json(assign_fields(
                file,
                fields.clone(),
                &config.field_limits(),
                &policy,
            )?),
            FieldCommands::MarkVerified { file, index, force } => {
                to_json(mark_verified(file, *index, *force, &policy)?)
            }
        },
    }
}

pub fn check<I: Identity + ?Sized>(
    value: &str,
    identity: &I,
    policy: &VerificationPolicy,
) -> CheckReport {
    let link = link_target(value, identity.is_local(), policy);
    CheckReport {
        verifiable: link.is_some(),
        link,
    }
}

pub fn show_fields(path: &Path, policy: &VerificationPolicy) -> CliResult<Vec<FieldReport>> {
    let mut file = FieldsFile::load(path)?;
    Ok(report_fields(&mut file, policy))
}

pub fn assign_fields(
    path: &Path,
    pairs: Vec<(String, String)>,
    limits: &FieldLimits,
    policy: &VerificationPolicy,
) -> CliResult<Vec<FieldReport>> {
    let mut file = FieldsFile::load_or_default(path)?;
    file.fields.assign(pairs, limits)?;
    file.save(path)?;

    info!("Assigned {} fields in {}", file.fields.len(), path.display());
    Ok(report_fields(&mut file, policy))
}

/// Record a successful ownership check. Refuses values that are not
/// verifiable links unless `force` is set.
pub fn mark_verified(
    path: &Path,
    index: usize,
    force: bool,
    policy: &VerificationPolicy,
) -> CliResult<MarkReport> {
    let mut file = FieldsFile::load(path)?;
    let identity = file.identity;
    let len = file.fields.len();

    let mut field = file
        .fields
        .field(&identity, index)
        .ok_or_else(|| CoreError::field_not_found(index, len))?;

    let link = field.value_for_verification_with(policy);
    if link.is_none() && !force {
        return Err(CliError::not_verifiable(index, field.name()));
    }

    let verified_at = field.mark_verified();
    let name = field.name().to_string();
    file.save(path)?;

    info!("Field {index} ({name:?}) in {} marked verified", path.display());
    Ok(MarkReport {
        index,
        name,
        link,
        verified_at,
    })
}

fn report_fields(file: &mut FieldsFile, policy: &VerificationPolicy) -> Vec<FieldReport> {
    let identity = file.identity;
    file.fields
        .fields(&identity)
        .enumerate()
        .map(|(index, field)| report_field(index, &field, policy))
        .collect()
}

fn report_field<I: Identity + ?Sized>(
    index: usize,
    field: &Field<'_, I>,
    policy: &VerificationPolicy,
) -> FieldReport {
    let link = field.value_for_verification_with(policy);
    FieldReport {
        index,
        name: field.name().to_string(),
        value: field.value().to_string(),
        verified: field.is_verified(),
        verifiable: link.is_some(),
        link,
        verified_at: field.verified_at(),
    }
}

fn to_json<T: Serialize>(report: T) -> CliResult<serde_json::Value> {
    serde_json::to_value(report).map_err(CliError::Output)
}
