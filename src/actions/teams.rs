//! Team action implementations.

use crate::{
    actions::{unsupported, utils},
    commands::params::{
        COMMAND_INFO, COMMAND_LIST, COMMAND_USERS, PARAMETER_PAGE_NUM, PARAMETER_PAGE_SIZE,
        PARAMETER_TID,
    },
    error::CliError,
};
use clap::ArgMatches;
use tracing::trace;

pub async fn execute_team_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => {
            trace!("Executing \"team list\" command...");
            let client = utils::authenticated_client(sub_matches).await?;
            let teams = client.team_list().await?;
            utils::print_json(sub_matches, &teams)
        }
        Some((COMMAND_INFO, sub_matches)) => {
            trace!("Executing \"team info\" command...");
            let tid = team_id(sub_matches)?;
            let client = utils::authenticated_client(sub_matches).await?;
            let team = client.team_info(tid).await?;
            utils::print_json(sub_matches, &team)
        }
        Some((COMMAND_USERS, sub_matches)) => {
            trace!("Executing \"team users\" command...");
            let tid = team_id(sub_matches)?;
            let page_num = *sub_matches.get_one::<u32>(PARAMETER_PAGE_NUM).unwrap_or(&0);
            let page_size = *sub_matches.get_one::<u32>(PARAMETER_PAGE_SIZE).unwrap_or(&50);

            let client = utils::authenticated_client(sub_matches).await?;
            let members = client.team_user_list(tid, page_num, page_size).await?;
            utils::print_json(sub_matches, &members)
        }
        _ => Err(unsupported(matches)),
    }
}

fn team_id(sub_matches: &ArgMatches) -> Result<u64, CliError> {
    sub_matches
        .get_one::<u64>(PARAMETER_TID)
        .copied()
        .ok_or_else(|| CliError::MissingRequiredArgument(format!("--{}", PARAMETER_TID)))
}
