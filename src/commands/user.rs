//! User command definitions.

use crate::commands::params::{
    page_num_parameter, page_size_parameter, uid_parameter, user_identifier_group,
    COMMAND_CREATE, COMMAND_INFO, COMMAND_LIST, COMMAND_USER, PARAMETER_EMAIL, PARAMETER_MOBILE,
    PARAMETER_NAME, PARAMETER_PASSWORD, PARAMETER_QUOTA, PARAMETER_SLUG, PARAMETER_STATUS,
    STATUS_ACTIVE, STATUS_FROZEN,
};
use clap::{Arg, Command};

fn required_text(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).num_args(1).required(true).help(help)
}

/// Define the user command and its subcommands
pub fn user_command() -> Command {
    Command::new(COMMAND_USER)
        .about("Manage users")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a user")
                .arg(required_text(PARAMETER_EMAIL, "Email address (unique)"))
                .arg(required_text(PARAMETER_PASSWORD, "Initial password"))
                .arg(required_text(PARAMETER_NAME, "Display name (unique)"))
                .arg(required_text(PARAMETER_SLUG, "Login slug (unique)"))
                .arg(
                    Arg::new(PARAMETER_MOBILE)
                        .long(PARAMETER_MOBILE)
                        .num_args(1)
                        .help("Mobile phone number"),
                )
                .arg(
                    Arg::new(PARAMETER_QUOTA)
                        .long(PARAMETER_QUOTA)
                        .num_args(1)
                        .help("Storage quota in bytes")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new(PARAMETER_STATUS)
                        .long(PARAMETER_STATUS)
                        .num_args(1)
                        .help("Account status")
                        .value_parser([STATUS_ACTIVE, STATUS_FROZEN]),
                ),
        )
        .subcommand(
            Command::new(COMMAND_INFO)
                .about("Get details for a specific user")
                .arg(uid_parameter())
                .arg(
                    Arg::new(PARAMETER_SLUG)
                        .long(PARAMETER_SLUG)
                        .num_args(1)
                        .help("User slug"),
                )
                .group(user_identifier_group()),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List users")
                .visible_alias("ls")
                .arg(page_num_parameter())
                .arg(page_size_parameter()),
        )
}
