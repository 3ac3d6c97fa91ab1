//! CSV export operations.
//!
//! The backend generates the CSV; the client only forwards filters and
//! returns the body as text.

use tracing::instrument;

use super::{ApiClient, check};
use crate::error::ApiError;
use crate::types::{ClientExportFilter, InvoiceExportFilter};

impl ApiClient {
    /// Export invoices as CSV, optionally filtered by date range, client
    /// and paid state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] before any request when the date
    /// range is inverted, matching the backend's own check.
    #[instrument(skip(self))]
    pub async fn export_invoices_csv(
        &self,
        filter: &InvoiceExportFilter,
    ) -> Result<String, ApiError> {
        filter.validate()?;
        let response = self
            .http()
            .get(self.url("/api/export/invoices/csv"))
            .query(filter)
            .send()
            .await?;
        Ok(check(response).await?.text().await?)
    }

    /// Export clients as CSV, optionally filtered by name, company, city
    /// and country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self))]
    pub async fn export_clients_csv(
        &self,
        filter: &ClientExportFilter,
    ) -> Result<String, ApiError> {
        let response = self
            .http()
            .get(self.url("/api/export/clients/csv"))
            .query(filter)
            .send()
            .await?;
        Ok(check(response).await?.text().await?)
    }
}
