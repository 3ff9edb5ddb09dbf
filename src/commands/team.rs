//! Team command definitions.

use crate::commands::params::{
    page_num_parameter, page_size_parameter, tid_parameter, COMMAND_INFO, COMMAND_LIST,
    COMMAND_TEAM, COMMAND_USERS,
};
use clap::Command;

/// Create the team command with all its subcommands.
pub fn team_command() -> Command {
    Command::new(COMMAND_TEAM)
        .about("Browse teams")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List all teams")
                .visible_alias("ls"),
        )
        .subcommand(
            Command::new(COMMAND_INFO)
                .about("Get team details")
                .arg(tid_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_USERS)
                .about("List the members of a team")
                .arg(tid_parameter())
                .arg(page_num_parameter())
                .arg(page_size_parameter()),
        )
}
