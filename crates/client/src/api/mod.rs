//! Smart Invoice REST API client.
//!
//! This module provides a typed client for the invoicing backend's REST
//! API using cookie-session authentication. The backend sets a session
//! cookie on login; the client's cookie jar carries it on every request
//! afterwards, and the raw cookie can be exported/imported so a CLI
//! process survives restarts.
//!
//! Requests are one round trip each: no coalescing, no retry, no
//! backoff. Overlapping calls may race and the last response wins,
//! exactly as the backend expects of its browser clients.

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Response, StatusCode};
use url::Url;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::ServerMessage;

mod audit;
mod auth;
mod clients;
mod export;
mod invoices;
mod products;

/// Typed client for the Smart Invoice backend.
///
/// Cheap to clone; all clones share one HTTP connection pool and one
/// cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

#[derive(Debug)]
struct ApiClientInner {
    http: reqwest::Client,
    /// Base URL with any trailing slash removed, ready for `format!`.
    base: String,
    /// Origin used for cookie jar lookups.
    origin: Url,
    jar: Arc<Jar>,
}

impl ApiClient {
    /// Create a client with an empty cookie jar.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::build(config, None)
    }

    /// Create a client seeded with a previously saved session cookie.
    ///
    /// `cookie` is a `name=value` pair as returned by
    /// [`session_cookie`](Self::session_cookie).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying HTTP client cannot be
    /// built.
    pub fn with_session_cookie(config: &ApiConfig, cookie: &str) -> Result<Self, ApiError> {
        Self::build(config, Some(cookie))
    }

    fn build(config: &ApiConfig, cookie: Option<&str>) -> Result<Self, ApiError> {
        let jar = Arc::new(Jar::default());
        let origin = config.base_url.clone();

        if let Some(cookie) = cookie {
            // The saved value is a `Cookie` header, possibly holding several
            // pairs. Seeded one at a time; `add_cookie_str` would treat the
            // second pair of "a=b; c=d" as an attribute of the first.
            for pair in cookie.split("; ") {
                jar.add_cookie_str(pair, &origin);
            }
        }

        let http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .timeout(config.timeout)
            .build()?;

        let base = origin.as_str().trim_end_matches('/').to_owned();

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base,
                origin,
                jar,
            }),
        })
    }

    /// The backend base URL this client talks to (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base
    }

    /// Export the current session cookie for persistence, if any.
    ///
    /// Returns the `Cookie` header value the jar would send to the
    /// backend, e.g. `JSESSIONID=ABC123`.
    #[must_use]
    pub fn session_cookie(&self) -> Option<String> {
        self.inner
            .jar
            .cookies(&self.inner.origin)
            .and_then(|value| value.to_str().map(str::to_owned).ok())
    }

    /// Whether the jar currently holds a session cookie.
    #[must_use]
    pub fn has_session_cookie(&self) -> bool {
        self.session_cookie().is_some()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }
}

/// Map a non-success response to the error taxonomy the whole client uses.
///
/// - 401 becomes [`ApiError::Unauthorized`] without reading the body
/// - 404 becomes [`ApiError::NotFound`] with the backend's message
/// - anything else non-2xx becomes [`ApiError::Api`], preferring the
///   backend's `{"message": ...}` body over the status reason
pub(crate) async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }

    let message = server_message(response).await.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_owned()
    });

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(message));
    }
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Decode a JSON response body.
///
/// Reads the body as text first so malformed JSON surfaces as
/// [`ApiError::Parse`] rather than a transport error.
pub(crate) async fn parse_json<T>(response: Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

async fn server_message(response: Response) -> Option<String> {
    let body = response.text().await.ok()?;
    serde_json::from_str::<ServerMessage>(&body)
        .ok()
        .map(|m| m.message)
}
