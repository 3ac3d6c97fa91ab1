//! Session authentication operations.
//!
//! The backend uses form-encoded login and a session cookie; there is no
//! token refresh and nothing to renew. Whatever `/api/auth/me` last said
//! is the session state.

use tracing::instrument;

use super::{ApiClient, check, parse_json};
use crate::error::ApiError;
use crate::types::{ServerMessage, Session};

impl ApiClient {
    /// Log in with username and password.
    ///
    /// On success the backend sets the session cookie, which the client's
    /// jar stores for all subsequent requests.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for empty credentials,
    /// [`ApiError::Unauthorized`] for rejected ones, or a transport error.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<ServerMessage, ApiError> {
        if username.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "username and password are required".to_owned(),
            ));
        }

        let params = [("username", username), ("password", password)];
        let response = self
            .http()
            .post(self.url("/api/auth/login"))
            .form(&params)
            .send()
            .await?;
        parse_json(check(response).await?).await
    }

    /// Fetch the currently authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when there is no valid session.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<Session, ApiError> {
        let response = self.http().get(self.url("/api/auth/me")).send().await?;
        parse_json(check(response).await?).await
    }

    /// Invalidate the server-side session.
    ///
    /// The caller is responsible for discarding any persisted cookie;
    /// the server will reject it afterwards either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self.http().post(self.url("/api/auth/logout")).send().await?;
        check(response).await?;
        Ok(())
    }
}
