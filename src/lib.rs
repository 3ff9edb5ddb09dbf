//! Client SDK for the Filez enterprise file storage service.
//!
//! This crate provides an authenticated client for the Filez REST API,
//! covering user and team directory lookups, file operations and
//! permission management, plus the command definitions and actions behind
//! the `filez` command line tool.
//!
//! # Modules
//!
//! - `actions`: CLI command execution on top of the client
//! - `client`: The session client, one method per remote operation
//! - `commands`: CLI command parsing
//! - `configuration`: Credentials and connection settings
//! - `error`: Error types for the client and the CLI
//! - `exit_codes`: Process exit codes for the CLI
//! - `http_utils`: Request sending and response mapping
//! - `model`: Identifiers, enumerations and request payloads

pub mod actions;
pub mod client;
pub mod commands;
pub mod configuration;
pub mod error;
pub mod exit_codes;
pub mod http_utils;
pub mod model;

pub use client::FilezClient;
pub use configuration::Configuration;
pub use error::FilezError;
