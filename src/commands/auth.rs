//! Permission command definitions.
//!
//! This module defines CLI commands that grant, revoke and list access rights
//! on files and folders.

use crate::commands::params::{
    neid_parameter, nsid_parameter, path_type_parameter, uids_parameter, COMMAND_AUTH,
    COMMAND_GRANT, COMMAND_LIST, COMMAND_REVOKE, PARAMETER_GRANT,
};
use clap::{Arg, ArgAction, Command};

/// Create the permission command with all its subcommands.
pub fn auth_command() -> Command {
    Command::new(COMMAND_AUTH)
        .about("Manage file permissions")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_GRANT)
                .about("Grant users access to a file or folder")
                .arg(neid_parameter())
                .arg(nsid_parameter())
                .arg(path_type_parameter())
                .arg(
                    Arg::new(PARAMETER_GRANT)
                        .long(PARAMETER_GRANT)
                        .num_args(1)
                        .required(true)
                        .action(ArgAction::Append)
                        .help(
                            "UID:PRIVILEGE pair, e.g. 82:2009 or 82:preview; repeat for several \
                             users (no-access 1000, list-only 1011, edit 2001, \
                             upload-download 2003, download 2005, upload 2007, preview 2009)",
                        ),
                ),
        )
        .subcommand(
            Command::new(COMMAND_REVOKE)
                .about("Revoke the access users have to a file or folder")
                .arg(neid_parameter())
                .arg(nsid_parameter())
                .arg(path_type_parameter())
                .arg(uids_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List the permissions set on a file or folder")
                .visible_alias("ls")
                .arg(neid_parameter())
                .arg(nsid_parameter())
                .arg(path_type_parameter()),
        )
}
