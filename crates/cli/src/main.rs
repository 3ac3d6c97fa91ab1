//! Smart Invoice CLI - headless front end for the invoicing backend.
//!
//! # Usage
//!
//! ```bash
//! # Start a session (credentials from flags or SMART_INVOICE_USERNAME/PASSWORD)
//! si-cli login -u admin
//!
//! # Browse data
//! si-cli client list --keyword acme --sort-by name
//! si-cli invoice list
//!
//! # Act on an invoice
//! si-cli invoice create --client-id 1 --number INV-2026-001 \
//!     --issue-date 2026-08-01 --item 4:2:120.00
//! si-cli invoice mark-paid 12
//! si-cli invoice pdf 12 --out invoice-12.pdf
//!
//! # Exports
//! si-cli export invoices --is-paid false --out invoices.csv
//! ```
//!
//! The session cookie is persisted in `SMART_INVOICE_SESSION_FILE`
//! (default `~/.si-session`) so commands work across invocations until
//! `si-cli logout` or the server expires the session.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use smart_invoice_client::ApiConfig;

mod commands;
mod session;

use commands::CliError;

#[derive(Parser)]
#[command(name = "si-cli")]
#[command(author, version, about = "Smart Invoice CLI")]
struct Cli {
    /// Override the backend base URL (default from SMART_INVOICE_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session cookie
    Login {
        /// Username (falls back to SMART_INVOICE_USERNAME)
        #[arg(short, long)]
        username: Option<String>,

        /// Password (falls back to SMART_INVOICE_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// End the session and remove the persisted cookie
    Logout,
    /// Show the currently logged-in user
    Whoami,
    /// Manage clients
    Client {
        #[command(subcommand)]
        action: commands::clients::ClientAction,
    },
    /// Manage products
    Product {
        #[command(subcommand)]
        action: commands::products::ProductAction,
    },
    /// Manage invoices
    Invoice {
        #[command(subcommand)]
        action: commands::invoices::InvoiceAction,
    },
    /// Export CSV reports
    Export {
        #[command(subcommand)]
        target: commands::export::ExportTarget,
    },
    /// Inspect the audit trail
    Audit {
        #[command(subcommand)]
        action: commands::audit::AuditAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        if e.is_unauthorized() {
            tracing::error!("Not logged in (or session expired). Run `si-cli login` first.");
        } else {
            tracing::error!("Command failed: {e}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // `--api-base` overrides only the URL; credentials, session file and
    // timeout still come from the environment.
    let mut config = ApiConfig::from_env()?;
    if let Some(base) = cli.api_base.as_deref() {
        config.set_base_url(base)?;
    }

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&config, username, password).await?;
        }
        Commands::Logout => commands::auth::logout(&config).await?,
        Commands::Whoami => commands::auth::whoami(&config).await?,
        Commands::Client { action } => commands::clients::run(&config, action).await?,
        Commands::Product { action } => commands::products::run(&config, action).await?,
        Commands::Invoice { action } => commands::invoices::run(&config, action).await?,
        Commands::Export { target } => commands::export::run(&config, target).await?,
        Commands::Audit { action } => commands::audit::run(&config, action).await?,
    }
    Ok(())
}
