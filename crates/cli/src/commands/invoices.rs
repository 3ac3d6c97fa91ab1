//! Invoice commands.

use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::Subcommand;
use rust_decimal::Decimal;
use smart_invoice_client::ApiConfig;
use smart_invoice_client::types::{InvoiceInput, InvoiceItem};
use smart_invoice_core::{ClientId, InvoiceId, ProductId};

use super::{CliError, client_with_session, print_json};

/// Actions on invoices.
#[derive(Subcommand)]
pub enum InvoiceAction {
    /// List all invoices
    List,
    /// Show one invoice
    Get {
        /// Invoice ID
        id: InvoiceId,
    },
    /// Create an invoice from line items
    Create {
        /// Client to bill
        #[arg(long)]
        client_id: ClientId,

        /// Invoice number
        #[arg(long)]
        number: String,

        /// Issue date (YYYY-MM-DD)
        #[arg(long)]
        issue_date: NaiveDate,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<NaiveDate>,

        /// Mark as already paid
        #[arg(long)]
        paid: bool,

        /// Line item as PRODUCT_ID:QTY:PRICE (repeatable)
        #[arg(long = "item", required = true)]
        items: Vec<ItemSpec>,
    },
    /// Delete an invoice
    Delete {
        /// Invoice ID
        id: InvoiceId,
    },
    /// Mark an invoice as paid
    MarkPaid {
        /// Invoice ID
        id: InvoiceId,
    },
    /// Email the invoice PDF to its client
    Email {
        /// Invoice ID
        id: InvoiceId,
    },
    /// Download the invoice PDF
    Pdf {
        /// Invoice ID
        id: InvoiceId,

        /// Output file (default: invoice-<id>.pdf)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// One `--item PRODUCT_ID:QTY:PRICE` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpec {
    product_id: ProductId,
    quantity: u32,
    price: Decimal,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(id), Some(qty), Some(price)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("expected PRODUCT_ID:QTY:PRICE, got {s:?}"));
        };

        let product_id = id
            .parse::<ProductId>()
            .map_err(|e| format!("bad product id {id:?}: {e}"))?;
        let quantity = qty
            .parse::<u32>()
            .map_err(|e| format!("bad quantity {qty:?}: {e}"))?;
        let price = price
            .parse::<Decimal>()
            .map_err(|e| format!("bad price {price:?}: {e}"))?;

        Ok(Self {
            product_id,
            quantity,
            price,
        })
    }
}

impl From<ItemSpec> for InvoiceItem {
    fn from(spec: ItemSpec) -> Self {
        Self {
            product_id: spec.product_id,
            quantity: spec.quantity,
            price: spec.price,
        }
    }
}

/// Dispatch an invoice action.
pub async fn run(config: &ApiConfig, action: InvoiceAction) -> Result<(), CliError> {
    let client = client_with_session(config)?;

    match action {
        InvoiceAction::List => {
            let invoices = client.list_invoices().await?;
            print_json(&invoices)
        }
        InvoiceAction::Get { id } => {
            let invoice = client.get_invoice(id).await?;
            print_json(&invoice)
        }
        InvoiceAction::Create {
            client_id,
            number,
            issue_date,
            due_date,
            paid,
            items,
        } => {
            let input = InvoiceInput {
                client_id,
                invoice_number: number,
                issue_date,
                due_date,
                is_paid: paid,
                products: items.into_iter().map(Into::into).collect(),
            };
            let invoice = client.create_invoice(&input).await?;
            tracing::info!(
                "Created invoice {} ({}) total {}",
                invoice.id,
                invoice.invoice_number,
                invoice.total_amount
            );
            print_json(&invoice)
        }
        InvoiceAction::Delete { id } => {
            client.delete_invoice(id).await?;
            tracing::info!("Deleted invoice {id}");
            Ok(())
        }
        InvoiceAction::MarkPaid { id } => {
            let invoice = client.mark_invoice_paid(id).await?;
            print_json(&invoice)
        }
        InvoiceAction::Email { id } => {
            client.email_invoice(id).await?;
            tracing::info!("Invoice {id} emailed to its client");
            Ok(())
        }
        InvoiceAction::Pdf { id, out } => {
            let pdf = client.invoice_pdf(id).await?;
            let path = out.unwrap_or_else(|| PathBuf::from(format!("invoice-{id}.pdf")));
            std::fs::write(&path, &pdf)?;
            tracing::info!("Wrote {} bytes to {}", pdf.len(), path.display());
            Ok(())
        }
    }
}
