//! CLI command execution.
//!
//! Each submodule runs one command group against an authenticated
//! [`FilezClient`](crate::client::FilezClient) and prints the JSON result.

use clap::ArgMatches;

use crate::{
    commands::params::{COMMAND_AUTH, COMMAND_CONFIG, COMMAND_FILE, COMMAND_TEAM, COMMAND_USER},
    error::CliError,
};

pub mod config;
pub mod files;
pub mod permissions;
pub mod teams;
pub mod users;
pub mod utils;

pub(crate) fn unsupported(matches: &ArgMatches) -> CliError {
    CliError::UnsupportedSubcommand(
        matches
            .subcommand()
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    )
}

/// Execute the command selected on the command line
pub async fn execute_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_CONFIG, sub_matches)) => config::execute_config_command(sub_matches),
        Some((COMMAND_USER, sub_matches)) => users::execute_user_command(sub_matches).await,
        Some((COMMAND_TEAM, sub_matches)) => teams::execute_team_command(sub_matches).await,
        Some((COMMAND_FILE, sub_matches)) => files::execute_file_command(sub_matches).await,
        Some((COMMAND_AUTH, sub_matches)) => {
            permissions::execute_auth_command(sub_matches).await
        }
        _ => Err(unsupported(matches)),
    }
}
