//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SMART_INVOICE_API_BASE` - Backend base URL (default: `http://localhost:8080`)
//! - `SMART_INVOICE_USERNAME` - Username for `login` (set together with password)
//! - `SMART_INVOICE_PASSWORD` - Password for `login` (set together with username)
//! - `SMART_INVOICE_SESSION_FILE` - Where the session cookie is persisted
//!   (default: `.si-session` in the home directory)
//! - `SMART_INVOICE_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_API_BASE: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const SESSION_FILE_NAME: &str = ".si-session";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "password",
    "xxx",
    "fixme",
    "insert",
    "enter-",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
    #[error("{0} and {1} must be set together")]
    IncompletePair(&'static str, &'static str),
}

/// Credentials for the backend's form login.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct Credentials {
    /// Login username.
    pub username: String,
    /// Login password.
    pub password: SecretString,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Smart Invoice client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the invoicing backend.
    pub base_url: Url,
    /// Optional credentials for non-interactive login.
    pub credentials: Option<Credentials>,
    /// Path where the session cookie is persisted between invocations.
    pub session_file: PathBuf,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is malformed, only one half of
    /// the credential pair is set, or the password looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = parse_base_url(&get_env_or_default(
            "SMART_INVOICE_API_BASE",
            DEFAULT_API_BASE,
        ))?;

        let credentials = credentials_from_env()?;

        let session_file = get_optional_env("SMART_INVOICE_SESSION_FILE")
            .map_or_else(default_session_file, PathBuf::from);

        let timeout_secs = match get_optional_env("SMART_INVOICE_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("SMART_INVOICE_TIMEOUT_SECS".to_owned(), e.to_string())
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            credentials,
            session_file,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Build a config pointing at an explicit base URL, with defaults for
    /// everything else. Used by tests and by `--api-base` overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            credentials: None,
            session_file: default_session_file(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Replace the base URL, keeping credentials, session file and timeout.
    /// Used for `--api-base` style overrides on top of [`from_env`](Self::from_env).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid URL.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<(), ConfigError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("SMART_INVOICE_API_BASE".to_owned(), e.to_string()))
}

fn credentials_from_env() -> Result<Option<Credentials>, ConfigError> {
    let username = get_optional_env("SMART_INVOICE_USERNAME");
    let password = get_optional_env("SMART_INVOICE_PASSWORD");

    match (username, password) {
        (Some(username), Some(password)) => {
            validate_secret_strength(&password, "SMART_INVOICE_PASSWORD")?;
            Ok(Some(Credentials {
                username,
                password: SecretString::from(password),
            }))
        }
        (None, None) => Ok(None),
        _ => Err(ConfigError::IncompletePair(
            "SMART_INVOICE_USERNAME",
            "SMART_INVOICE_PASSWORD",
        )),
    }
}

fn default_session_file() -> PathBuf {
    dirs::home_dir().map_or_else(
        || PathBuf::from(SESSION_FILE_NAME),
        |home| home.join(SESSION_FILE_NAME),
    )
}

/// Reject secrets that are obviously placeholders.
fn validate_secret_strength(value: &str, name: &str) -> Result<(), ConfigError> {
    let lowered = value.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lowered.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                name.to_owned(),
                format!("looks like a placeholder (contains {pattern:?})"),
            ));
        }
    }
    Ok(())
}

fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn get_env_or_default(name: &str, default: &str) -> String {
    get_optional_env(name).unwrap_or_else(|| default.to_owned())
}
