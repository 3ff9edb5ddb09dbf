//! Configuration command definitions.

use crate::commands::params::{
    COMMAND_CONFIG, COMMAND_PATH, COMMAND_SET, COMMAND_SHOW, PARAMETER_API_VERSION,
    PARAMETER_APP_KEY, PARAMETER_APP_SECRET, PARAMETER_HOST, PARAMETER_HTTPS, PARAMETER_TIMEOUT,
};
use crate::configuration::DEFAULT_API_VERSION;
use clap::{Arg, ArgAction, Command};

/// Create the configuration command with all its subcommands.
pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Working with configuration")
        .subcommand_required(true)
        .subcommand(Command::new(COMMAND_PATH).about("Show the configuration file path"))
        .subcommand(
            Command::new(COMMAND_SHOW).about("Display the configuration with the secret masked"),
        )
        .subcommand(
            Command::new(COMMAND_SET)
                .about("Write service credentials to the configuration file")
                .arg(
                    Arg::new(PARAMETER_APP_KEY)
                        .long(PARAMETER_APP_KEY)
                        .num_args(1)
                        .required(true)
                        .help("Application key"),
                )
                .arg(
                    Arg::new(PARAMETER_APP_SECRET)
                        .long(PARAMETER_APP_SECRET)
                        .num_args(1)
                        .required(true)
                        .help("Application secret"),
                )
                .arg(
                    Arg::new(PARAMETER_HOST)
                        .long(PARAMETER_HOST)
                        .num_args(1)
                        .required(true)
                        .help("Service host and port, e.g. filez.example.com:3333"),
                )
                .arg(
                    Arg::new(PARAMETER_HTTPS)
                        .long(PARAMETER_HTTPS)
                        .action(ArgAction::SetTrue)
                        .help("Use HTTPS"),
                )
                .arg(
                    Arg::new(PARAMETER_API_VERSION)
                        .long(PARAMETER_API_VERSION)
                        .num_args(1)
                        .default_value(DEFAULT_API_VERSION)
                        .help("API version path segment"),
                )
                .arg(
                    Arg::new(PARAMETER_TIMEOUT)
                        .long(PARAMETER_TIMEOUT)
                        .num_args(1)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}
