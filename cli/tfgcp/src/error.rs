//! Error handling and display for the CLI.

use colored::Colorize;
use tfgcp_id::IdError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("sink id '{0}' has no parent resource and no default resource id is set")]
    MissingResourceId(String),

    #[error("invalid label '{0}', expected KEY=VALUE")]
    InvalidLabel(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(id_err) = err.downcast_ref::<IdError>() {
        match id_err {
            IdError::InvalidIdentifier { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: use NAME, sinks/NAME, RESOURCE_ID/sinks/NAME or RESOURCE_TYPE/RESOURCE_ID/sinks/NAME."
                        .yellow()
                );
            }
            IdError::InvalidResourceType { allowed, .. } => {
                eprintln!(
                    "\n{}",
                    format!("Hint: resource type must be one of {}.", allowed.join(", "))
                        .as_str()
                        .yellow()
                );
            }
        }
    }

    if let Some(CliError::MissingResourceId(_)) = err.downcast_ref::<CliError>() {
        eprintln!(
            "\n{}",
            "Hint: pass --resource-id or set GOOGLE_PROJECT.".yellow()
        );
    }
}
