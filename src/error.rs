//! Error types for the Filez SDK and its command line front end.

use reqwest::StatusCode;
use thiserror::Error;

use crate::{configuration::ConfigurationError, exit_codes::FilezExitCode};

/// Error returned by every Filez client operation
#[derive(Debug, Error)]
pub enum FilezError {
    /// A required credential is missing or the configuration cannot be used
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigurationError),

    /// A resource operation was attempted before a token was acquired
    #[error("Not authenticated: request an access token first")]
    NotAuthenticated,

    /// The token exchange completed but did not yield a usable token
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// The service could not be reached
    #[error("Connectivity error: {0}")]
    ConnectivityError(#[source] reqwest::Error),

    /// The service answered with a status other than 200 OK
    #[error("Remote error (HTTP {status}): {body}")]
    RemoteError { status: StatusCode, body: String },

    /// A parameter combination or enumerated value was rejected before sending
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Local file access failed while uploading or saving a download
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Anything else the transport or response decoding reported
    #[error("Unknown error: {0}")]
    UnknownError(String),
}

impl FilezError {
    /// Shorthand for building a [`FilezError::ValidationError`]
    pub fn validation(message: impl Into<String>) -> Self {
        FilezError::ValidationError(message.into())
    }

    /// The response body carried by a [`FilezError::RemoteError`]
    pub fn remote_body(&self) -> Option<&str> {
        match self {
            FilezError::RemoteError { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),
    /// Error when a required command-line argument is missing
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),
    /// Error related to configuration loading or management
    #[error("{0}")]
    ConfigurationError(#[from] ConfigurationError),
    /// Error reported by the Filez client
    #[error("{0}")]
    ClientError(#[from] FilezError),
    /// Error related to JSON serialization
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Error while writing command output
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> FilezExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => FilezExitCode::UsageError,
            CliError::MissingRequiredArgument(_) => FilezExitCode::UsageError,
            CliError::ConfigurationError(_) => FilezExitCode::ConfigError,
            CliError::JsonError(_) => FilezExitCode::DataError,
            CliError::IoError(_) => FilezExitCode::IoError,
            CliError::ClientError(e) => match e {
                FilezError::ConfigError(_) => FilezExitCode::ConfigError,
                FilezError::NotAuthenticated | FilezError::AuthError(_) => {
                    FilezExitCode::AuthError
                }
                FilezError::ConnectivityError(_) => FilezExitCode::Unavailable,
                FilezError::RemoteError { .. } => FilezExitCode::ApiError,
                FilezError::ValidationError(_) => FilezExitCode::UsageError,
                FilezError::IoError(_) => FilezExitCode::IoError,
                FilezError::UnknownError(_) => FilezExitCode::SoftwareError,
            },
        }
    }
}
