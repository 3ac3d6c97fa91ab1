//! Smart Invoice REST client.
//!
//! This crate implements the consumption contract of the Smart Invoice
//! backend: cookie-session authentication, CRUD for clients, products and
//! invoices, invoice actions (mark paid, email, PDF download) and CSV
//! exports. The backend owns all business logic - totals, numbering,
//! payment state, PDF/CSV generation - so the client never computes or
//! enforces any of it; the only local checks are required-field presence
//! before a request goes out.
//!
//! # Example
//!
//! ```rust,ignore
//! use smart_invoice_client::{ApiClient, ApiConfig};
//!
//! let config = ApiConfig::from_env()?;
//! let client = ApiClient::new(&config)?;
//!
//! client.login("admin", "hunter2-but-longer").await?;
//! let invoices = client.list_invoices().await?;
//! let pdf = client.invoice_pdf(invoices[0].id).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod api;
pub mod config;
mod error;
pub mod types;

pub use api::ApiClient;
pub use config::{ApiConfig, ConfigError, Credentials};
pub use error::ApiError;
