//! Invoice wire types.
//!
//! Totals, numbering and payment state are computed server-side; the client
//! sends the line items it picked and reads back whatever the backend
//! decided.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smart_invoice_core::{ClientId, InvoiceId, InvoiceStatus, ProductId};

use crate::error::ApiError;

/// An invoice as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Backend-assigned identifier.
    pub id: InvoiceId,
    /// Human-readable invoice number.
    pub invoice_number: String,
    /// Billed client.
    pub client_id: ClientId,
    /// Billed client's name, denormalized for display.
    pub client_name: String,
    /// Billed client's email.
    #[serde(default)]
    pub email: Option<String>,
    /// Date the invoice was issued.
    pub issue_date: NaiveDate,
    /// Payment due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Server-computed total.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    /// Whether payment has been received.
    #[serde(default)]
    pub is_paid: Option<bool>,
    /// Server-derived payment status.
    #[serde(default)]
    pub status: InvoiceStatus,
    /// Products billed on this invoice.
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
}

/// One line item on a new invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    /// Product being billed.
    pub product_id: ProductId,
    /// Units billed.
    pub quantity: u32,
    /// Unit price at time of invoicing.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Payload for creating an invoice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInput {
    /// Client to bill.
    pub client_id: ClientId,
    /// Invoice number (required).
    pub invoice_number: String,
    /// Date the invoice is issued.
    pub issue_date: NaiveDate,
    /// Payment due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Initial paid flag.
    pub is_paid: bool,
    /// Line items; must not be empty.
    pub products: Vec<InvoiceItem>,
}

impl InvoiceInput {
    /// Required-field check applied before the request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the invoice number is empty or
    /// there are no line items.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.invoice_number.trim().is_empty() {
            return Err(ApiError::Validation("invoice number is required".to_owned()));
        }
        if self.products.is_empty() {
            return Err(ApiError::Validation(
                "invoice needs at least one line item".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Query parameters for `GET /api/export/invoices/csv`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceExportFilter {
    /// Only invoices issued on or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    /// Only invoices issued on or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Only invoices for this client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    /// Only paid (or unpaid) invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
}

impl InvoiceExportFilter {
    /// Reject inverted date ranges before the request goes out, mirroring
    /// the backend's own validation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if both dates are set and the range
    /// is inverted.
    pub fn validate(&self) -> Result<(), ApiError> {
        if let (Some(from), Some(to)) = (self.issue_date, self.due_date)
            && from > to
        {
            return Err(ApiError::Validation(
                "issueDate must not be after dueDate".to_owned(),
            ));
        }
        Ok(())
    }
}
