//! Wire types for the Smart Invoice backend.
//!
//! All business validation lives server-side; these types mirror the
//! backend's DTOs (camelCase JSON) and add only required-field checks on
//! the request side, matching what the forms enforced.

mod audit;
mod client;
mod invoice;
mod product;
mod session;

pub use audit::{AuditLogEntry, AuditLogFilter};
pub use client::{ClientExportFilter, ClientFilter, ClientInput, ClientRecord};
pub use invoice::{Invoice, InvoiceExportFilter, InvoiceInput, InvoiceItem};
pub use product::{Product, ProductFilter, ProductInput};
pub use session::{ServerMessage, Session};
