//! User action implementations.

use crate::{
    actions::{unsupported, utils},
    commands::params::{
        COMMAND_CREATE, COMMAND_INFO, COMMAND_LIST, PARAMETER_EMAIL, PARAMETER_MOBILE,
        PARAMETER_NAME, PARAMETER_PAGE_NUM, PARAMETER_PAGE_SIZE, PARAMETER_PASSWORD,
        PARAMETER_QUOTA, PARAMETER_SLUG, PARAMETER_STATUS, PARAMETER_UID, STATUS_FROZEN,
    },
    error::CliError,
    model::{NewUser, UserStatus},
};
use clap::ArgMatches;
use tracing::trace;

/// Execute user-related subcommands based on the provided arguments
pub async fn execute_user_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_CREATE, sub_matches)) => create_user(sub_matches).await,
        Some((COMMAND_INFO, sub_matches)) => print_user(sub_matches).await,
        Some((COMMAND_LIST, sub_matches)) => list_users(sub_matches).await,
        _ => Err(unsupported(matches)),
    }
}

fn text(sub_matches: &ArgMatches, name: &str) -> Result<String, CliError> {
    sub_matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| CliError::MissingRequiredArgument(format!("--{}", name)))
}

/// Build the account to create from `user create` arguments.
pub fn new_user_from_args(sub_matches: &ArgMatches) -> Result<NewUser, CliError> {
    let mut user = NewUser::new(
        text(sub_matches, PARAMETER_EMAIL)?,
        text(sub_matches, PARAMETER_PASSWORD)?,
        text(sub_matches, PARAMETER_NAME)?,
        text(sub_matches, PARAMETER_SLUG)?,
    );
    user.mobile = sub_matches.get_one::<String>(PARAMETER_MOBILE).cloned();
    user.quota = sub_matches.get_one::<u64>(PARAMETER_QUOTA).copied();
    user.status = sub_matches
        .get_one::<String>(PARAMETER_STATUS)
        .map(|status| match status.as_str() {
            STATUS_FROZEN => UserStatus::Frozen,
            _ => UserStatus::Active,
        });
    Ok(user)
}

async fn create_user(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"user create\" command...");
    let user = new_user_from_args(sub_matches)?;
    let client = utils::authenticated_client(sub_matches).await?;
    let created = client.user_create(&user).await?;
    utils::print_json(sub_matches, &created)
}

async fn print_user(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"user info\" command...");
    let uid = sub_matches.get_one::<u64>(PARAMETER_UID).copied();
    let slug = sub_matches.get_one::<String>(PARAMETER_SLUG).map(String::as_str);

    let client = utils::authenticated_client(sub_matches).await?;
    let user = client.user_info(uid, slug).await?;
    utils::print_json(sub_matches, &user)
}

async fn list_users(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"user list\" command...");
    let page_num = *sub_matches.get_one::<u32>(PARAMETER_PAGE_NUM).unwrap_or(&0);
    let page_size = *sub_matches.get_one::<u32>(PARAMETER_PAGE_SIZE).unwrap_or(&50);

    let client = utils::authenticated_client(sub_matches).await?;
    let users = client.user_list(page_num, page_size).await?;
    utils::print_json(sub_matches, &users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create_cli_command;

    #[test]
    fn test_new_user_from_args() {
        let matches = create_cli_command()
            .try_get_matches_from([
                "filez",
                "user",
                "create",
                "--email",
                "u@example.com",
                "--password",
                "123456",
                "--name",
                "user025",
                "--slug",
                "user025",
                "--status",
                "frozen",
            ])
            .unwrap();
        let (_, user) = matches.subcommand().unwrap();
        let (_, create) = user.subcommand().unwrap();

        let user = new_user_from_args(create).unwrap();
        assert_eq!(user.email, "u@example.com");
        assert_eq!(user.user_slug, "user025");
        assert_eq!(user.status, Some(UserStatus::Frozen));
        assert_eq!(user.mobile, None);
        assert_eq!(user.quota, None);
    }
}
