//! Audit log wire types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use smart_invoice_core::AuditLogId;

/// One audit trail entry, as returned by `GET /api/audit-logs`.
///
/// Entries are written server-side on every mutating operation; the client
/// can only list them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    /// Backend-assigned identifier.
    pub id: AuditLogId,
    /// Operation performed (`CREATE`, `UPDATE`, `DELETE`, `EMAIL_SENT`).
    pub action: String,
    /// Entity kind the operation touched (`Client`, `Product`, `Invoice`).
    pub entity: String,
    /// Identifier of the touched entity, stringly typed on the wire.
    pub entity_id: String,
    /// When the operation happened (server local time, no offset).
    pub timestamp: NaiveDateTime,
}

/// Query parameters for `GET /api/audit-logs`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditLogFilter {
    /// Restrict to one action kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Restrict to one entity kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
}
