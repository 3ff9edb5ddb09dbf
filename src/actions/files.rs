//! File and folder action implementations.

use crate::{
    actions::{unsupported, utils},
    commands::params::{
        COMMAND_COPY, COMMAND_DELETE, COMMAND_DOWNLOAD, COMMAND_HISTORY, COMMAND_INFO,
        COMMAND_LIST, COMMAND_MKDIR, COMMAND_MOVE, COMMAND_PREVIEW, COMMAND_RENAME,
        COMMAND_UPLOAD, PARAMETER_FILE, PARAMETER_NEID, PARAMETER_OUTPUT, PARAMETER_PAGE_NUM,
        PARAMETER_PAGE_SIZE, PARAMETER_PATH, PARAMETER_TO_NAME, PARAMETER_TO_PATH,
    },
    error::CliError,
    model::FileRef,
};
use clap::ArgMatches;
use serde_json::json;
use std::{io::Write, path::PathBuf};
use tracing::trace;

pub async fn execute_file_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => list_files(sub_matches).await,
        Some((COMMAND_INFO, sub_matches)) => print_file(sub_matches).await,
        Some((COMMAND_DELETE, sub_matches)) => delete_file(sub_matches).await,
        Some((COMMAND_MKDIR, sub_matches)) => create_folder(sub_matches).await,
        Some((COMMAND_COPY, sub_matches)) => transfer_file(sub_matches, false).await,
        Some((COMMAND_MOVE, sub_matches)) => transfer_file(sub_matches, true).await,
        Some((COMMAND_UPLOAD, sub_matches)) => upload_file(sub_matches).await,
        Some((COMMAND_RENAME, sub_matches)) => rename_file(sub_matches).await,
        Some((COMMAND_HISTORY, sub_matches)) => print_history(sub_matches).await,
        Some((COMMAND_PREVIEW, sub_matches)) => print_preview(sub_matches).await,
        Some((COMMAND_DOWNLOAD, sub_matches)) => download_file(sub_matches).await,
        _ => Err(unsupported(matches)),
    }
}

fn text<'a>(sub_matches: &'a ArgMatches, name: &str) -> Result<&'a str, CliError> {
    sub_matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingRequiredArgument(format!("--{}", name)))
}

async fn list_files(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"file list\" command...");
    let path = text(sub_matches, PARAMETER_PATH)?;
    let path_type = utils::path_type(sub_matches)?;
    let page_num = *sub_matches.get_one::<u32>(PARAMETER_PAGE_NUM).unwrap_or(&0);
    let page_size = *sub_matches.get_one::<u32>(PARAMETER_PAGE_SIZE).unwrap_or(&50);

    let client = utils::authenticated_client(sub_matches).await?;
    let listing = client
        .file_list(path, path_type, page_num, page_size)
        .await?;
    utils::print_json(sub_matches, &listing)
}

async fn print_file(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"file info\" command...");
    let file = match sub_matches.get_one::<u64>(PARAMETER_NEID) {
        Some(_) => Some(utils::file_ref(sub_matches)?),
        None => None,
    };
    let path = sub_matches.get_one::<String>(PARAMETER_PATH).map(String::as_str);

    let client = utils::authenticated_client(sub_matches).await?;
    let info = client.file_info(file, path).await?;
    utils::print_json(sub_matches, &info)
}

async fn delete_file(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"file delete\" command...");
    let file = utils::file_ref(sub_matches)?;
    let client = utils::authenticated_client(sub_matches).await?;
    let result = client.file_delete(file).await?;
    utils::print_json(sub_matches, &result)
}

async fn create_folder(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"file mkdir\" command...");
    let path = text(sub_matches, PARAMETER_PATH)?;
    let path_type = utils::path_type(sub_matches)?;
    let client = utils::authenticated_client(sub_matches).await?;
    let folder = client.create_folder(path, path_type).await?;
    utils::print_json(sub_matches, &folder)
}

async fn transfer_file(sub_matches: &ArgMatches, remove_source: bool) -> Result<(), CliError> {
    let from = utils::file_ref(sub_matches)?;
    let to_path = text(sub_matches, PARAMETER_TO_PATH)?;
    let to_path_type = utils::path_type(sub_matches)?;
    let client = utils::authenticated_client(sub_matches).await?;

    let result = if remove_source {
        trace!("Executing \"file move\" command...");
        client.file_move(from, to_path, to_path_type).await?
    } else {
        trace!("Executing \"file copy\" command...");
        client.file_copy(from, to_path, to_path_type).await?
    };
    utils::print_json(sub_matches, &result)
}

async fn upload_file(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"file upload\" command...");
    let source = sub_matches
        .get_one::<PathBuf>(PARAMETER_FILE)
        .ok_or_else(|| CliError::MissingRequiredArgument(format!("--{}", PARAMETER_FILE)))?;
    let to_path = text(sub_matches, PARAMETER_TO_PATH)?;
    let path_type = utils::path_type(sub_matches)?;

    let client = utils::authenticated_client(sub_matches).await?;
    let uploaded = client.file_upload(source, to_path, path_type).await?;
    utils::print_json(sub_matches, &uploaded)
}

async fn rename_file(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"file rename\" command...");
    let file = utils::file_ref(sub_matches)?;
    let to_name = text(sub_matches, PARAMETER_TO_NAME)?;
    let client = utils::authenticated_client(sub_matches).await?;
    let result = client.file_rename(file, to_name).await?;
    utils::print_json(sub_matches, &result)
}

async fn print_history(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"file history\" command...");
    let file = utils::file_ref(sub_matches)?;
    let client = utils::authenticated_client(sub_matches).await?;
    let history = client.file_history(file).await?;
    utils::print_json(sub_matches, &history)
}

async fn print_preview(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"file preview\" command...");
    let file = utils::file_ref(sub_matches)?;
    let client = utils::authenticated_client(sub_matches).await?;
    let preview = client.file_preview(file).await?;
    utils::print_json(sub_matches, &preview)
}

async fn download_file(sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing \"file download\" command...");
    let file: FileRef = utils::file_ref(sub_matches)?;
    let client = utils::authenticated_client(sub_matches).await?;

    match sub_matches.get_one::<PathBuf>(PARAMETER_OUTPUT) {
        Some(destination) => {
            let written = client.file_download_to(file, destination).await?;
            let summary = json!({
                "neid": file.neid,
                "nsid": file.nsid,
                "path": destination.display().to_string(),
                "bytes": written,
            });
            utils::print_json(sub_matches, &summary)
        }
        None => {
            let content = client.file_download(file).await?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&content)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
