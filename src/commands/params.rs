//! Shared command parameters for all CLI commands.
//!
//! This module defines common parameters that are used across multiple command modules.
//! It provides a centralized place to define parameter names and common argument configurations.

use crate::model::PathType;
use clap::{Arg, ArgAction, ArgGroup};
use std::path::PathBuf;

// Command groups
pub const COMMAND_CONFIG: &str = "config";
pub const COMMAND_USER: &str = "user";
pub const COMMAND_TEAM: &str = "team";
pub const COMMAND_FILE: &str = "file";
pub const COMMAND_AUTH: &str = "auth";

// Config commands
pub const COMMAND_PATH: &str = "path";
pub const COMMAND_SHOW: &str = "show";
pub const COMMAND_SET: &str = "set";

// Resource commands
pub const COMMAND_CREATE: &str = "create";
pub const COMMAND_INFO: &str = "info";
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_USERS: &str = "users";
pub const COMMAND_DELETE: &str = "delete";
pub const COMMAND_MKDIR: &str = "mkdir";
pub const COMMAND_COPY: &str = "copy";
pub const COMMAND_MOVE: &str = "move";
pub const COMMAND_UPLOAD: &str = "upload";
pub const COMMAND_RENAME: &str = "rename";
pub const COMMAND_HISTORY: &str = "history";
pub const COMMAND_PREVIEW: &str = "preview";
pub const COMMAND_DOWNLOAD: &str = "download";

// Permission commands
pub const COMMAND_GRANT: &str = "grant";
pub const COMMAND_REVOKE: &str = "revoke";

// Global parameter names
pub const PARAMETER_CONFIG: &str = "config";
pub const PARAMETER_SUBJECT: &str = "subject";
pub const PARAMETER_PRETTY: &str = "pretty";

// Configuration parameter names
pub const PARAMETER_APP_KEY: &str = "app-key";
pub const PARAMETER_APP_SECRET: &str = "app-secret";
pub const PARAMETER_HOST: &str = "host";
pub const PARAMETER_HTTPS: &str = "https";
pub const PARAMETER_API_VERSION: &str = "api-version";
pub const PARAMETER_TIMEOUT: &str = "timeout";

// Resource parameter names
pub const PARAMETER_UID: &str = "uid";
pub const PARAMETER_SLUG: &str = "slug";
pub const PARAMETER_EMAIL: &str = "email";
pub const PARAMETER_PASSWORD: &str = "password";
pub const PARAMETER_NAME: &str = "name";
pub const PARAMETER_MOBILE: &str = "mobile";
pub const PARAMETER_QUOTA: &str = "quota";
pub const PARAMETER_STATUS: &str = "status";
pub const PARAMETER_TID: &str = "tid";
pub const PARAMETER_PAGE_NUM: &str = "page-num";
pub const PARAMETER_PAGE_SIZE: &str = "page-size";
pub const PARAMETER_NEID: &str = "neid";
pub const PARAMETER_NSID: &str = "nsid";
pub const PARAMETER_PATH: &str = "path";
pub const PARAMETER_PATH_TYPE: &str = "path-type";
pub const PARAMETER_TO_PATH: &str = "to-path";
pub const PARAMETER_TO_NAME: &str = "to-name";
pub const PARAMETER_FILE: &str = "file";
pub const PARAMETER_OUTPUT: &str = "output";
pub const PARAMETER_GRANT: &str = "grant";

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_FROZEN: &str = "frozen";

pub const DEFAULT_PAGE_SIZE: &str = "50";

/// Create the global configuration file parameter.
pub fn config_parameter() -> Arg {
    Arg::new(PARAMETER_CONFIG)
        .short('c')
        .long(PARAMETER_CONFIG)
        .num_args(1)
        .required(false)
        .global(true)
        .env("FILEZ_CONFIG")
        .help("Configuration file (defaults to the per-user filez/config.yml)")
        .value_parser(clap::value_parser!(PathBuf))
}

/// Create the global subject parameter: the user the token is issued for.
pub fn subject_parameter() -> Arg {
    Arg::new(PARAMETER_SUBJECT)
        .short('s')
        .long(PARAMETER_SUBJECT)
        .num_args(1)
        .required(false)
        .global(true)
        .env("FILEZ_SUBJECT")
        .help("User slug the access token is requested for (e.g. admin)")
}

/// This parameter flag is used across all commands for output formatting.
pub fn pretty_parameter() -> Arg {
    Arg::new(PARAMETER_PRETTY)
        .long(PARAMETER_PRETTY)
        .action(ArgAction::SetTrue)
        .required(false)
        .global(true)
        .help("Format the JSON output pretty")
}

pub fn page_num_parameter() -> Arg {
    Arg::new(PARAMETER_PAGE_NUM)
        .long(PARAMETER_PAGE_NUM)
        .num_args(1)
        .default_value("0")
        .help("Page number, starting at 0")
        .value_parser(clap::value_parser!(u32))
}

pub fn page_size_parameter() -> Arg {
    Arg::new(PARAMETER_PAGE_SIZE)
        .long(PARAMETER_PAGE_SIZE)
        .num_args(1)
        .default_value(DEFAULT_PAGE_SIZE)
        .help("Number of entries per page")
        .value_parser(clap::value_parser!(u32))
}

pub fn uid_parameter() -> Arg {
    Arg::new(PARAMETER_UID)
        .long(PARAMETER_UID)
        .num_args(1)
        .help("User ID")
        .value_parser(clap::value_parser!(u64))
}

/// One or more user IDs, repeated or comma separated.
pub fn uids_parameter() -> Arg {
    Arg::new(PARAMETER_UID)
        .long(PARAMETER_UID)
        .num_args(1)
        .required(true)
        .action(ArgAction::Append)
        .value_delimiter(',')
        .help("User ID; repeat or separate with commas for several users")
        .value_parser(clap::value_parser!(u64))
}

pub fn tid_parameter() -> Arg {
    Arg::new(PARAMETER_TID)
        .long(PARAMETER_TID)
        .num_args(1)
        .required(true)
        .help("Team ID")
        .value_parser(clap::value_parser!(u64))
}

/// Create the entry ID parameter.
pub fn neid_parameter() -> Arg {
    Arg::new(PARAMETER_NEID)
        .long(PARAMETER_NEID)
        .num_args(1)
        .required(true)
        .help("File or folder entry ID")
        .value_parser(clap::value_parser!(u64))
}

/// Create the namespace ID parameter.
pub fn nsid_parameter() -> Arg {
    Arg::new(PARAMETER_NSID)
        .long(PARAMETER_NSID)
        .num_args(1)
        .required(false)
        .help("Namespace ID the entry lives in [default: 1]")
        .value_parser(clap::value_parser!(u64))
}

/// Create the remote path parameter.
pub fn path_parameter() -> Arg {
    Arg::new(PARAMETER_PATH)
        .short('p')
        .long(PARAMETER_PATH)
        .num_args(1)
        .required(true)
        .help("Remote path (e.g., /projects/2024)")
}

pub fn path_type_parameter() -> Arg {
    Arg::new(PARAMETER_PATH_TYPE)
        .long(PARAMETER_PATH_TYPE)
        .num_args(1)
        .required(false)
        .help("Storage area: ent (enterprise, default) or self (personal)")
        .value_parser(PathType::names())
}

pub fn to_path_parameter() -> Arg {
    Arg::new(PARAMETER_TO_PATH)
        .long(PARAMETER_TO_PATH)
        .num_args(1)
        .required(true)
        .help("Destination path")
}

/// Create the local input file parameter.
pub fn file_parameter() -> Arg {
    Arg::new(PARAMETER_FILE)
        .long(PARAMETER_FILE)
        .num_args(1)
        .required(true)
        .help("Local file path")
        .value_parser(clap::value_parser!(PathBuf))
}

/// Create the output file parameter.
pub fn output_file_parameter() -> Arg {
    Arg::new(PARAMETER_OUTPUT)
        .short('o')
        .long(PARAMETER_OUTPUT)
        .num_args(1)
        .required(false)
        .help("Output file path (defaults to standard output)")
        .value_parser(clap::value_parser!(PathBuf))
}

/// Either an entry ID or a path identifies the entry for `file info`.
pub fn entry_identifier_group() -> ArgGroup {
    ArgGroup::new("entry")
        .args([PARAMETER_NEID, PARAMETER_PATH])
        .required(true)
}

/// Either a user ID or a slug identifies the user for `user info`.
pub fn user_identifier_group() -> ArgGroup {
    ArgGroup::new("user")
        .args([PARAMETER_UID, PARAMETER_SLUG])
        .required(true)
}
