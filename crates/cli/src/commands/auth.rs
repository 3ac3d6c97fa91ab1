//! Session commands: login, logout, whoami.

use secrecy::ExposeSecret;
use smart_invoice_client::{ApiClient, ApiConfig};

use super::{CliError, client_with_session, print_json};
use crate::session::SessionStore;

/// Log in and persist the session cookie for later commands.
///
/// Credentials come from the flags when given, otherwise from the
/// configured `SMART_INVOICE_USERNAME`/`SMART_INVOICE_PASSWORD` pair.
pub async fn login(
    config: &ApiConfig,
    username: Option<String>,
    password: Option<String>,
) -> Result<(), CliError> {
    let (username, password) = resolve_credentials(config, username, password)?;

    // Fresh jar on purpose: a stale cookie must not leak into the login.
    let client = ApiClient::new(config)?;
    let message = client.login(&username, &password).await?;

    let store = SessionStore::new(config.session_file.clone());
    match client.session_cookie() {
        Some(cookie) => store.save(&cookie)?,
        None => tracing::warn!("Server did not set a session cookie"),
    }

    tracing::info!("Logged in as {username}");
    print_json(&message)
}

/// Invalidate the server session and remove the persisted cookie.
pub async fn logout(config: &ApiConfig) -> Result<(), CliError> {
    let client = client_with_session(config)?;
    let result = client.logout().await;

    // The local cookie is gone either way; the server already rejects it
    // once the session is invalidated.
    SessionStore::new(config.session_file.clone()).clear()?;

    result?;
    tracing::info!("Logged out");
    Ok(())
}

/// Print the currently authenticated user.
pub async fn whoami(config: &ApiConfig) -> Result<(), CliError> {
    let client = client_with_session(config)?;
    let session = client.current_user().await?;
    print_json(&session)
}

fn resolve_credentials(
    config: &ApiConfig,
    username: Option<String>,
    password: Option<String>,
) -> Result<(String, String), CliError> {
    let configured = config.credentials.as_ref();

    let username = username
        .or_else(|| configured.map(|c| c.username.clone()))
        .ok_or_else(|| {
            CliError::Usage(
                "no username: pass --username or set SMART_INVOICE_USERNAME".to_owned(),
            )
        })?;
    let password = password
        .or_else(|| configured.map(|c| c.password.expose_secret().to_owned()))
        .ok_or_else(|| {
            CliError::Usage(
                "no password: pass --password or set SMART_INVOICE_PASSWORD".to_owned(),
            )
        })?;

    Ok((username, password))
}
