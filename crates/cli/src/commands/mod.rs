//! CLI command implementations.
//!
//! Each module maps to one top-level subcommand. All of them build an
//! [`ApiClient`] seeded with the persisted session cookie, run exactly one
//! API call per user action, and print the result as pretty JSON.

use serde::Serialize;
use smart_invoice_client::{ApiClient, ApiConfig, ApiError, ConfigError};
use thiserror::Error;

use crate::session::SessionStore;

pub mod audit;
pub mod auth;
pub mod clients;
pub mod export;
pub mod invoices;
pub mod products;

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading or writing a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The command was invoked with unusable arguments.
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Whether this failure means the user has no valid session.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api(ApiError::Unauthorized))
    }
}

/// Build a client seeded with the persisted session cookie, if one exists.
pub fn client_with_session(config: &ApiConfig) -> Result<ApiClient, CliError> {
    let store = SessionStore::new(config.session_file.clone());
    match store.load()? {
        Some(cookie) => Ok(ApiClient::with_session_cookie(config, &cookie)?),
        None => Ok(ApiClient::new(config)?),
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Write text either to a file or to stdout.
pub fn write_text_output(text: &str, out: Option<&std::path::Path>) -> Result<(), CliError> {
    match out {
        Some(path) => {
            std::fs::write(path, text)?;
            tracing::info!("Wrote {} bytes to {}", text.len(), path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
