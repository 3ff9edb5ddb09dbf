//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the clap crate.
//! Each command group lives in its own file; [`create_cli_command`] assembles them.

use clap::Command;

pub mod auth;
pub mod config;
pub mod file;
pub mod params;
pub mod team;
pub mod user;

pub use params::{
    COMMAND_AUTH, COMMAND_CONFIG, COMMAND_FILE, COMMAND_TEAM, COMMAND_USER, PARAMETER_CONFIG,
    PARAMETER_PRETTY, PARAMETER_SUBJECT,
};

/// Create the complete `filez` command line interface.
///
/// Global parameters (`--config`, `--subject`, `--pretty`) are accepted by
/// every subcommand.
pub fn create_cli_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(params::config_parameter())
        .arg(params::subject_parameter())
        .arg(params::pretty_parameter())
        .subcommand(config::config_command())
        .subcommand(user::user_command())
        .subcommand(team::team_command())
        .subcommand(file::file_command())
        .subcommand(auth::auth_command())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        create_cli_command().debug_assert();
    }

    #[test]
    fn test_global_parameters_reach_subcommands() {
        let matches = create_cli_command()
            .try_get_matches_from(["filez", "team", "list", "--subject", "admin", "--pretty"])
            .unwrap();
        let (_, team) = matches.subcommand().unwrap();
        let (_, list) = team.subcommand().unwrap();
        assert_eq!(
            list.get_one::<String>(PARAMETER_SUBJECT).map(String::as_str),
            Some("admin")
        );
        assert!(list.get_flag(PARAMETER_PRETTY));
    }

    #[test]
    fn test_invalid_path_type_is_rejected_by_parser() {
        let result = create_cli_command().try_get_matches_from([
            "filez",
            "file",
            "mkdir",
            "--path",
            "/a",
            "--path-type",
            "team",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_file_info_requires_neid_or_path() {
        let result = create_cli_command().try_get_matches_from(["filez", "file", "info"]);
        assert!(result.is_err());

        let result =
            create_cli_command().try_get_matches_from(["filez", "file", "info", "--neid", "7"]);
        assert!(result.is_ok());
    }
}
