//! Audit trail listing.

use tracing::instrument;

use super::{ApiClient, check, parse_json};
use crate::error::ApiError;
use crate::types::{AuditLogEntry, AuditLogFilter};

impl ApiClient {
    /// List audit log entries, newest first, optionally restricted to one
    /// action and/or entity kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self))]
    pub async fn list_audit_logs(
        &self,
        filter: &AuditLogFilter,
    ) -> Result<Vec<AuditLogEntry>, ApiError> {
        let response = self
            .http()
            .get(self.url("/api/audit-logs"))
            .query(filter)
            .send()
            .await?;
        parse_json(check(response).await?).await
    }
}
