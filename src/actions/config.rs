//! Configuration actions: locate, display and write the configuration file.

use crate::{
    actions::{unsupported, utils},
    commands::params::{
        COMMAND_PATH, COMMAND_SET, COMMAND_SHOW, PARAMETER_API_VERSION, PARAMETER_APP_KEY,
        PARAMETER_APP_SECRET, PARAMETER_HOST, PARAMETER_HTTPS, PARAMETER_TIMEOUT,
    },
    configuration::Configuration,
    error::CliError,
};
use clap::ArgMatches;
use tracing::trace;

pub fn execute_config_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_PATH, sub_matches)) => {
            let path = utils::configuration_path(sub_matches)?;
            println!("{}", path.display());
            Ok(())
        }
        Some((COMMAND_SHOW, sub_matches)) => {
            let configuration = utils::load_configuration(sub_matches)?;
            configuration.redacted().write(std::io::stdout())?;
            Ok(())
        }
        Some((COMMAND_SET, sub_matches)) => set_configuration(sub_matches),
        _ => Err(unsupported(matches)),
    }
}

fn required<'a>(sub_matches: &'a ArgMatches, name: &str) -> Result<&'a String, CliError> {
    sub_matches
        .get_one::<String>(name)
        .ok_or_else(|| CliError::MissingRequiredArgument(format!("--{}", name)))
}

fn set_configuration(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"config set\" command...");

    let mut builder = Configuration::builder()
        .app_key(required(sub_matches, PARAMETER_APP_KEY)?)
        .app_secret(required(sub_matches, PARAMETER_APP_SECRET)?)
        .host(required(sub_matches, PARAMETER_HOST)?)
        .https(sub_matches.get_flag(PARAMETER_HTTPS))
        .version(required(sub_matches, PARAMETER_API_VERSION)?);
    if let Some(timeout) = sub_matches.get_one::<u64>(PARAMETER_TIMEOUT) {
        builder = builder.timeout_secs(*timeout);
    }
    let configuration = builder.build()?;

    let path = utils::configuration_path(sub_matches)?;
    configuration.save(&path)?;
    println!("{}", path.display());
    Ok(())
}
