//! Integration tests for the audit log listing.

use chrono::NaiveDate;
use serde_json::json;
use smart_invoice_client::types::AuditLogFilter;
use smart_invoice_core::AuditLogId;
use smart_invoice_integration_tests::logged_in_client;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_audit_logs_unfiltered() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/audit-logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 39,
            "action": "CREATE",
            "entity": "Client",
            "entityId": "3",
            "timestamp": "2026-08-29T17:03:41"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server.uri());
    let entries = client
        .list_audit_logs(&AuditLogFilter::default())
        .await
        .expect("audit list should succeed");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, AuditLogId::new(39));
    assert_eq!(entries[0].action, "CREATE");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_list_audit_logs_forwards_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/audit-logs"))
        .and(query_param("action", "DELETE"))
        .and(query_param("entity", "Invoice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 40,
            "action": "DELETE",
            "entity": "Invoice",
            "entityId": "12",
            "timestamp": "2026-08-30T09:15:00"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server.uri());
    let filter = AuditLogFilter {
        action: Some("DELETE".to_owned()),
        entity: Some("Invoice".to_owned()),
    };
    let entries = client
        .list_audit_logs(&filter)
        .await
        .expect("audit list should succeed");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].entity_id, "12");
    assert_eq!(
        entries[0].timestamp.date(),
        NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date")
    );
}
