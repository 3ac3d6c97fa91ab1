//! Integration tests for client (customer) management.
//!
//! Each test pins down the exact HTTP traffic: method, path, query
//! string, and JSON body.

use serde_json::json;
use smart_invoice_client::ApiError;
use smart_invoice_client::types::{ClientFilter, ClientInput};
use smart_invoice_core::ClientId;
use smart_invoice_integration_tests::{TEST_COOKIE, logged_in_client};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn acme_json() -> serde_json::Value {
    json!({
        "id": 3,
        "name": "Acme GmbH",
        "email": "billing@acme.example",
        "companyName": "Acme",
        "city": "Berlin",
        "country": "DE"
    })
}

// ============================================================================
// List & Filter
// ============================================================================

#[tokio::test]
async fn test_list_clients() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/clients"))
        .and(header("cookie", TEST_COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([acme_json()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server.uri());
    let clients = client.list_clients().await.expect("list should succeed");

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, ClientId::new(3));
    assert_eq!(clients[0].company_name.as_deref(), Some("Acme"));
}

#[tokio::test]
async fn test_filter_clients_sends_only_set_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/clients/filter"))
        .and(query_param("keyword", "acme"))
        .and(query_param("sortBy", "name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([acme_json()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server.uri());
    let filter = ClientFilter {
        keyword: Some("acme".to_owned()),
        sort_by: Some("name".to_owned()),
        ..ClientFilter::default()
    };
    let clients = client
        .filter_clients(&filter)
        .await
        .expect("filter should succeed");
    assert_eq!(clients.len(), 1);

    // Unset fields must be absent from the query string, not sent empty.
    let requests = server.received_requests().await.expect("recording enabled");
    let query = requests[0].url.query().unwrap_or_default();
    assert!(!query.contains("city="));
    assert!(!query.contains("country="));
}

// ============================================================================
// CRUD
// ============================================================================

#[tokio::test]
async fn test_get_client_not_found_carries_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/clients/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Client not found"})),
        )
        .mount(&server)
        .await;

    let client = logged_in_client(&server.uri());
    let err = client
        .get_client(ClientId::new(99))
        .await
        .expect_err("get should fail");

    match err {
        ApiError::NotFound(message) => assert_eq!(message, "Client not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/clients/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let client = logged_in_client(&server.uri());
    let err = client
        .get_client(ClientId::new(3))
        .await
        .expect_err("get should fail");

    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_create_client_posts_camel_case_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/clients"))
        .and(body_json(json!({
            "name": "Acme GmbH",
            "email": "billing@acme.example",
            "companyName": "Acme"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(acme_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server.uri());
    let input = ClientInput {
        name: "Acme GmbH".to_owned(),
        email: "billing@acme.example".to_owned(),
        company_name: Some("Acme".to_owned()),
        ..ClientInput::default()
    };
    let created = client
        .create_client(&input)
        .await
        .expect("create should succeed");
    assert_eq!(created.name, "Acme GmbH");
}

#[tokio::test]
async fn test_create_client_invalid_input_never_hits_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/clients"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = logged_in_client(&server.uri());
    let input = ClientInput {
        name: "Acme GmbH".to_owned(),
        email: "not-an-email".to_owned(),
        ..ClientInput::default()
    };
    let err = client
        .create_client(&input)
        .await
        .expect_err("create should fail");

    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_update_client_puts_to_id_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/clients/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(acme_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server.uri());
    let input = ClientInput {
        name: "Acme GmbH".to_owned(),
        email: "billing@acme.example".to_owned(),
        ..ClientInput::default()
    };
    let updated = client
        .update_client(ClientId::new(3), &input)
        .await
        .expect("update should succeed");
    assert_eq!(updated.id, ClientId::new(3));
}

#[tokio::test]
async fn test_delete_client() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/clients/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server.uri());
    client
        .delete_client(ClientId::new(3))
        .await
        .expect("delete should succeed");
}

// ============================================================================
// Session expiry
// ============================================================================

#[tokio::test]
async fn test_expired_session_maps_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/clients"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = logged_in_client(&server.uri());
    let err = client.list_clients().await.expect_err("list should fail");

    assert!(matches!(err, ApiError::Unauthorized));
}
