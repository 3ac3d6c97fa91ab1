//! Integration tests for the Smart Invoice client.
//!
//! The tests in `tests/` run against a [wiremock](https://docs.rs/wiremock)
//! server and assert the exact HTTP traffic the client produces: methods,
//! paths, query strings, JSON bodies, and session cookie handling.
//!
//! A handful of tests marked `#[ignore]` exercise a real backend instead.
//! Point `SMART_INVOICE_API_BASE` at a running server and run them with
//! `cargo test -p smart-invoice-integration-tests -- --ignored`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use smart_invoice_client::{ApiClient, ApiConfig};

/// Cookie value used by the mock server throughout the suite.
pub const TEST_COOKIE: &str = "JSESSIONID=test-session-0001";

/// Builds a client pointed at the given mock server URI, with no session.
///
/// # Panics
///
/// Panics if the URI is not a valid base URL. Mock server URIs always are.
#[must_use]
pub fn anonymous_client(uri: &str) -> ApiClient {
    let config = ApiConfig::with_base_url(uri).unwrap_or_else(|e| panic!("invalid mock URI: {e}"));
    ApiClient::new(&config).unwrap_or_else(|e| panic!("client build failed: {e}"))
}

/// Builds a client pointed at the given mock server URI, carrying
/// [`TEST_COOKIE`] as its session cookie.
///
/// # Panics
///
/// Panics if the URI is not a valid base URL. Mock server URIs always are.
#[must_use]
pub fn logged_in_client(uri: &str) -> ApiClient {
    let config = ApiConfig::with_base_url(uri).unwrap_or_else(|e| panic!("invalid mock URI: {e}"));
    ApiClient::with_session_cookie(&config, TEST_COOKIE)
        .unwrap_or_else(|e| panic!("client build failed: {e}"))
}
