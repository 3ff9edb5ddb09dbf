//! Helpers shared by the CLI actions: configuration lookup, session setup
//! and output.

use crate::{
    client::FilezClient,
    commands::params::{
        PARAMETER_CONFIG, PARAMETER_NEID, PARAMETER_NSID, PARAMETER_PATH_TYPE, PARAMETER_PRETTY,
        PARAMETER_SUBJECT,
    },
    configuration::Configuration,
    error::{CliError, FilezError},
    model::{FileRef, PathType, DEFAULT_NSID},
};
use clap::ArgMatches;
use serde_json::Value;
use std::{io::Write, path::PathBuf};
use tracing::{debug, trace};

/// Path of the configuration file: `--config` if given, else the default.
pub fn configuration_path(sub_matches: &ArgMatches) -> Result<PathBuf, CliError> {
    match sub_matches.get_one::<PathBuf>(PARAMETER_CONFIG) {
        Some(path) => Ok(path.clone()),
        None => Ok(Configuration::get_default_configuration_file_path()?),
    }
}

pub fn load_configuration(sub_matches: &ArgMatches) -> Result<Configuration, CliError> {
    let path = configuration_path(sub_matches)?;
    Ok(Configuration::load_from_file(&path)?)
}

/// Load the configuration, build a client and acquire a token for the
/// `--subject` user.
pub async fn authenticated_client(sub_matches: &ArgMatches) -> Result<FilezClient, CliError> {
    let subject = sub_matches
        .get_one::<String>(PARAMETER_SUBJECT)
        .ok_or_else(|| CliError::MissingRequiredArgument(format!("--{}", PARAMETER_SUBJECT)))?;

    let configuration = load_configuration(sub_matches)?;
    debug!("Using Filez service at {}", configuration.base_url());

    let mut client = FilezClient::new(configuration)?;
    client.token(subject).await?;
    Ok(client)
}

/// The entry addressed by `--neid` and `--nsid`.
pub fn file_ref(sub_matches: &ArgMatches) -> Result<FileRef, CliError> {
    let neid = sub_matches
        .get_one::<u64>(PARAMETER_NEID)
        .copied()
        .ok_or_else(|| CliError::MissingRequiredArgument(format!("--{}", PARAMETER_NEID)))?;
    let nsid = sub_matches
        .get_one::<u64>(PARAMETER_NSID)
        .copied()
        .unwrap_or(DEFAULT_NSID);
    Ok(FileRef::new(neid).in_namespace(nsid))
}

/// The `--path-type` value if one was given.
pub fn path_type(sub_matches: &ArgMatches) -> Result<Option<PathType>, FilezError> {
    sub_matches
        .get_one::<String>(PARAMETER_PATH_TYPE)
        .map(|value| PathType::from_name(value))
        .transpose()
}

pub fn print_json(sub_matches: &ArgMatches, value: &Value) -> Result<(), CliError> {
    let output = render_json(value, sub_matches.get_flag(PARAMETER_PRETTY))?;
    trace!("Writing {} bytes of output", output.len());
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}

pub fn render_json(value: &Value, pretty: bool) -> Result<String, CliError> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create_cli_command;
    use serde_json::json;

    fn leaf_matches(args: &[&str]) -> ArgMatches {
        let mut matches = create_cli_command().try_get_matches_from(args).unwrap();
        loop {
            let next = match matches.subcommand() {
                Some((_, sub)) => sub.clone(),
                None => return matches,
            };
            matches = next;
        }
    }

    #[test]
    fn test_file_ref_applies_default_nsid() {
        let matches = leaf_matches(&["filez", "file", "history", "--neid", "42"]);
        assert_eq!(file_ref(&matches).unwrap(), FileRef::new(42));

        let matches = leaf_matches(&["filez", "file", "history", "--neid", "42", "--nsid", "3"]);
        assert_eq!(file_ref(&matches).unwrap().nsid, 3);
    }

    #[test]
    fn test_path_type_is_optional() {
        let matches = leaf_matches(&["filez", "file", "mkdir", "--path", "/a"]);
        assert_eq!(path_type(&matches).unwrap(), None);

        let matches =
            leaf_matches(&["filez", "file", "mkdir", "--path", "/a", "--path-type", "self"]);
        assert_eq!(path_type(&matches).unwrap(), Some(PathType::SelfSpace));
    }

    #[test]
    fn test_render_json() {
        let value = json!({"errcode": 0});
        assert_eq!(render_json(&value, false).unwrap(), r#"{"errcode":0}"#);
        assert_eq!(
            render_json(&value, true).unwrap(),
            "{\n  \"errcode\": 0\n}"
        );
    }
}
