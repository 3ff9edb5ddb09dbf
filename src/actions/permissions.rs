//! Permission action implementations.

use crate::{
    actions::{unsupported, utils},
    commands::params::{COMMAND_GRANT, COMMAND_LIST, COMMAND_REVOKE, PARAMETER_GRANT, PARAMETER_UID},
    error::{CliError, FilezError},
    model::{PermissionGrant, Privilege},
};
use clap::ArgMatches;
use std::str::FromStr;
use tracing::trace;

pub async fn execute_auth_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_GRANT, sub_matches)) => grant(sub_matches).await,
        Some((COMMAND_REVOKE, sub_matches)) => revoke(sub_matches).await,
        Some((COMMAND_LIST, sub_matches)) => list(sub_matches).await,
        _ => Err(unsupported(matches)),
    }
}

/// Parse a `UID:PRIVILEGE` pair. The privilege may be a numeric code or a
/// name such as `preview`; numeric codes are checked by the client.
pub fn parse_grant(value: &str) -> Result<PermissionGrant, FilezError> {
    let (uid, privilege) = value.split_once(':').ok_or_else(|| {
        FilezError::validation(format!("grant {:?} is not in UID:PRIVILEGE form", value))
    })?;
    let uid = uid
        .trim()
        .parse::<u64>()
        .map_err(|_| FilezError::validation(format!("invalid uid in grant {:?}", value)))?;

    let privilege = privilege.trim();
    let code = match privilege.parse::<u32>() {
        Ok(code) => code,
        Err(_) => Privilege::from_str(privilege)
            .map(Privilege::code)
            .map_err(|_| {
                FilezError::validation(format!("unknown privilege {:?}", privilege))
            })?,
    };

    Ok(PermissionGrant {
        uid,
        privilege: code,
    })
}

async fn grant(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"auth grant\" command...");
    let file = utils::file_ref(sub_matches)?;
    let path_type = utils::path_type(sub_matches)?.unwrap_or_default();
    let grants = sub_matches
        .get_many::<String>(PARAMETER_GRANT)
        .into_iter()
        .flatten()
        .map(|value| parse_grant(value))
        .collect::<Result<Vec<_>, _>>()?;

    let client = utils::authenticated_client(sub_matches).await?;
    let result = client.auth_create(file, path_type, &grants).await?;
    utils::print_json(sub_matches, &result)
}

async fn revoke(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"auth revoke\" command...");
    let file = utils::file_ref(sub_matches)?;
    let path_type = utils::path_type(sub_matches)?.unwrap_or_default();
    let uids: Vec<u64> = sub_matches
        .get_many::<u64>(PARAMETER_UID)
        .into_iter()
        .flatten()
        .copied()
        .collect();

    let client = utils::authenticated_client(sub_matches).await?;
    let result = client.auth_delete(file, path_type, &uids).await?;
    utils::print_json(sub_matches, &result)
}

async fn list(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"auth list\" command...");
    let file = utils::file_ref(sub_matches)?;
    let path_type = utils::path_type(sub_matches)?.unwrap_or_default();
    let client = utils::authenticated_client(sub_matches).await?;
    let permissions = client.auth_list(file, path_type).await?;
    utils::print_json(sub_matches, &permissions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grant_numeric_and_named() {
        assert_eq!(
            parse_grant("82:2009").unwrap(),
            PermissionGrant {
                uid: 82,
                privilege: 2009
            }
        );
        assert_eq!(
            parse_grant("83:edit").unwrap(),
            PermissionGrant::new(83, Privilege::Edit)
        );
    }

    #[test]
    fn test_parse_grant_keeps_unknown_codes_for_client_validation() {
        assert_eq!(parse_grant("82:1234").unwrap().privilege, 1234);
    }

    #[test]
    fn test_parse_grant_rejects_malformed_values() {
        assert!(matches!(
            parse_grant("82"),
            Err(FilezError::ValidationError(_))
        ));
        assert!(matches!(
            parse_grant("abc:2009"),
            Err(FilezError::ValidationError(_))
        ));
        assert!(matches!(
            parse_grant("82:owner"),
            Err(FilezError::ValidationError(_))
        ));
    }
}
