//! Invoice operations.
//!
//! Totals, numbering, payment transitions, PDF rendering and email
//! dispatch all happen server-side; every method here is one request.

use bytes::Bytes;
use smart_invoice_core::InvoiceId;
use tracing::instrument;

use super::{ApiClient, check, parse_json};
use crate::error::ApiError;
use crate::types::{Invoice, InvoiceInput};

impl ApiClient {
    /// List all invoices.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self))]
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        let response = self.http().get(self.url("/api/invoices")).send().await?;
        parse_json(check(response).await?).await
    }

    /// Get a single invoice by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the invoice does not exist.
    #[instrument(skip(self), fields(invoice_id = %id))]
    pub async fn get_invoice(&self, id: InvoiceId) -> Result<Invoice, ApiError> {
        let response = self
            .http()
            .get(self.url(&format!("/api/invoices/{id}")))
            .send()
            .await?;
        parse_json(check(response).await?).await
    }

    /// Create a new invoice from line items.
    ///
    /// The returned invoice carries the server-computed total and status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] before any request for an empty
    /// invoice number or item list.
    #[instrument(skip(self, input))]
    pub async fn create_invoice(&self, input: &InvoiceInput) -> Result<Invoice, ApiError> {
        input.validate()?;
        let response = self
            .http()
            .post(self.url("/api/invoices"))
            .json(input)
            .send()
            .await?;
        parse_json(check(response).await?).await
    }

    /// Delete an invoice by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the invoice does not exist.
    #[instrument(skip(self), fields(invoice_id = %id))]
    pub async fn delete_invoice(&self, id: InvoiceId) -> Result<(), ApiError> {
        let response = self
            .http()
            .delete(self.url(&format!("/api/invoices/{id}")))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// Mark an invoice as paid, returning it with its new status.
    ///
    /// The paid date and status transition are the server's decision.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the invoice does not exist.
    #[instrument(skip(self), fields(invoice_id = %id))]
    pub async fn mark_invoice_paid(&self, id: InvoiceId) -> Result<Invoice, ApiError> {
        let response = self
            .http()
            .patch(self.url(&format!("/api/invoices/{id}/mark-paid")))
            .send()
            .await?;
        parse_json(check(response).await?).await
    }

    /// Email the invoice PDF to its client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the invoice does not exist, or
    /// whatever the backend reports if dispatch fails.
    #[instrument(skip(self), fields(invoice_id = %id))]
    pub async fn email_invoice(&self, id: InvoiceId) -> Result<(), ApiError> {
        let response = self
            .http()
            .post(self.url(&format!("/api/invoices/{id}/email")))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// Download the invoice's PDF.
    ///
    /// The bytes pass through untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the invoice does not exist.
    #[instrument(skip(self), fields(invoice_id = %id))]
    pub async fn invoice_pdf(&self, id: InvoiceId) -> Result<Bytes, ApiError> {
        let response = self
            .http()
            .get(self.url(&format!("/api/invoices/{id}/pdf")))
            .send()
            .await?;
        Ok(check(response).await?.bytes().await?)
    }
}
