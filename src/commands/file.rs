//! File command definitions.
//!
//! This module defines CLI commands for browsing and changing files and folders.

use crate::commands::params::{
    entry_identifier_group, file_parameter, neid_parameter, nsid_parameter,
    output_file_parameter, page_num_parameter, page_size_parameter, path_parameter,
    path_type_parameter, to_path_parameter, COMMAND_COPY, COMMAND_DELETE, COMMAND_DOWNLOAD,
    COMMAND_FILE, COMMAND_HISTORY, COMMAND_INFO, COMMAND_LIST, COMMAND_MKDIR, COMMAND_MOVE,
    COMMAND_PREVIEW, COMMAND_RENAME, COMMAND_UPLOAD, PARAMETER_TO_NAME,
};
use clap::{Arg, Command};

/// Commands addressing a single entry by `--neid` and optional `--nsid`.
fn entry_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(neid_parameter())
        .arg(nsid_parameter())
}

/// Create the file command with all its subcommands.
pub fn file_command() -> Command {
    Command::new(COMMAND_FILE)
        .about("Manage files and folders")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List the contents of a folder")
                .visible_alias("ls")
                .arg(path_parameter())
                .arg(path_type_parameter())
                .arg(page_num_parameter())
                .arg(page_size_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_INFO)
                .about("Get details of a file or folder by ID or by path")
                .arg(neid_parameter().required(false))
                .arg(nsid_parameter())
                .arg(path_parameter().required(false))
                .group(entry_identifier_group()),
        )
        .subcommand(entry_command(COMMAND_DELETE, "Delete a file or folder").visible_alias("rm"))
        .subcommand(
            Command::new(COMMAND_MKDIR)
                .about("Create a folder")
                .arg(path_parameter())
                .arg(path_type_parameter()),
        )
        .subcommand(
            entry_command(COMMAND_COPY, "Copy a file or folder")
                .arg(to_path_parameter())
                .arg(path_type_parameter().help("Destination storage area: ent or self")),
        )
        .subcommand(
            entry_command(COMMAND_MOVE, "Move a file or folder")
                .visible_alias("mv")
                .arg(to_path_parameter())
                .arg(path_type_parameter().help("Destination storage area: ent or self")),
        )
        .subcommand(
            Command::new(COMMAND_UPLOAD)
                .about("Upload a local file")
                .arg(file_parameter())
                .arg(to_path_parameter())
                .arg(path_type_parameter()),
        )
        .subcommand(
            entry_command(COMMAND_RENAME, "Rename a file or folder").arg(
                Arg::new(PARAMETER_TO_NAME)
                    .long(PARAMETER_TO_NAME)
                    .num_args(1)
                    .required(true)
                    .help("New name"),
            ),
        )
        .subcommand(entry_command(COMMAND_HISTORY, "Show the revision history of a file"))
        .subcommand(entry_command(COMMAND_PREVIEW, "Get the preview URL of a file"))
        .subcommand(
            entry_command(COMMAND_DOWNLOAD, "Download a file").arg(output_file_parameter()),
        )
}
