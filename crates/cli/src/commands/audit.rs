//! Audit trail commands.

use clap::Subcommand;
use smart_invoice_client::ApiConfig;
use smart_invoice_client::types::AuditLogFilter;

use super::{CliError, client_with_session, print_json};

/// Actions on the audit trail.
#[derive(Subcommand)]
pub enum AuditAction {
    /// List audit entries, newest first
    List {
        /// Restrict to one action (CREATE, UPDATE, DELETE, EMAIL_SENT)
        #[arg(long)]
        action: Option<String>,

        /// Restrict to one entity kind (Client, Product, Invoice)
        #[arg(long)]
        entity: Option<String>,
    },
}

/// Dispatch an audit action.
pub async fn run(config: &ApiConfig, action: AuditAction) -> Result<(), CliError> {
    let client = client_with_session(config)?;

    match action {
        AuditAction::List { action, entity } => {
            let filter = AuditLogFilter { action, entity };
            let entries = client.list_audit_logs(&filter).await?;
            print_json(&entries)
        }
    }
}
