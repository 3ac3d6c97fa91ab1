//! Integration tests for session authentication.
//!
//! A wiremock server plays the backend: login is form-encoded, the
//! response sets a session cookie, and the cookie must come back on
//! every request after that.

use serde_json::json;
use smart_invoice_client::ApiError;
use smart_invoice_integration_tests::{TEST_COOKIE, anonymous_client, logged_in_client};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_sends_form_and_stores_cookie() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=admin"))
        .and(body_string_contains("password=hunter2-but-longer"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "JSESSIONID=test-session-0001; Path=/; HttpOnly")
                .set_body_json(json!({"message": "Login successful"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = anonymous_client(&server.uri());
    assert!(!client.has_session_cookie());

    let message = client
        .login("admin", "hunter2-but-longer")
        .await
        .expect("login should succeed");

    assert_eq!(message.message, "Login successful");
    assert_eq!(client.session_cookie().as_deref(), Some(TEST_COOKIE));
}

#[tokio::test]
async fn test_login_cookie_is_sent_on_next_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "JSESSIONID=test-session-0001; Path=/; HttpOnly")
                .set_body_json(json!({"message": "Login successful"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("cookie", TEST_COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "admin"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = anonymous_client(&server.uri());
    client
        .login("admin", "hunter2-but-longer")
        .await
        .expect("login should succeed");

    let session = client.current_user().await.expect("me should succeed");
    assert_eq!(session.username, "admin");
}

#[tokio::test]
async fn test_login_rejected_maps_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let client = anonymous_client(&server.uri());
    let err = client
        .login("admin", "wrong-password")
        .await
        .expect_err("login should fail");

    assert!(matches!(err, ApiError::Unauthorized));
    assert!(!client.has_session_cookie());
}

#[tokio::test]
async fn test_login_empty_credentials_never_hit_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = anonymous_client(&server.uri());
    let err = client.login("", "").await.expect_err("login should fail");

    assert!(matches!(err, ApiError::Validation(_)));
}

// ============================================================================
// Current user
// ============================================================================

#[tokio::test]
async fn test_me_without_session_maps_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = anonymous_client(&server.uri());
    let err = client.current_user().await.expect_err("me should fail");

    assert!(matches!(err, ApiError::Unauthorized));
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn test_logout_posts_with_session_cookie() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("cookie", TEST_COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Logged out"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server.uri());
    client.logout().await.expect("logout should succeed");
}
