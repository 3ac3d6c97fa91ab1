//! CSV export commands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use smart_invoice_client::ApiConfig;
use smart_invoice_client::types::{ClientExportFilter, InvoiceExportFilter};
use smart_invoice_core::ClientId;

use super::{CliError, client_with_session, write_text_output};

/// What to export.
#[derive(Subcommand)]
pub enum ExportTarget {
    /// Export invoices as CSV
    Invoices {
        /// Only invoices issued on or after this date (YYYY-MM-DD)
        #[arg(long)]
        issue_date: Option<NaiveDate>,

        /// Only invoices issued on or before this date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<NaiveDate>,

        /// Only invoices for this client
        #[arg(long)]
        client_id: Option<ClientId>,

        /// Only paid (true) or unpaid (false) invoices
        #[arg(long)]
        is_paid: Option<bool>,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Export clients as CSV
    Clients {
        /// Filter on contact name
        #[arg(long)]
        name: Option<String>,

        /// Filter on company name
        #[arg(long)]
        company_name: Option<String>,

        /// Filter on city
        #[arg(long)]
        city: Option<String>,

        /// Filter on country
        #[arg(long)]
        country: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Dispatch an export.
pub async fn run(config: &ApiConfig, target: ExportTarget) -> Result<(), CliError> {
    let client = client_with_session(config)?;

    match target {
        ExportTarget::Invoices {
            issue_date,
            due_date,
            client_id,
            is_paid,
            out,
        } => {
            let filter = InvoiceExportFilter {
                issue_date,
                due_date,
                client_id,
                is_paid,
            };
            let csv = client.export_invoices_csv(&filter).await?;
            write_text_output(&csv, out.as_deref())
        }
        ExportTarget::Clients {
            name,
            company_name,
            city,
            country,
            out,
        } => {
            let filter = ClientExportFilter {
                name,
                company_name,
                city,
                country,
            };
            let csv = client.export_clients_csv(&filter).await?;
            write_text_output(&csv, out.as_deref())
        }
    }
}
