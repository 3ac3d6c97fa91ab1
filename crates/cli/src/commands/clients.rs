//! Client management commands.

use clap::Subcommand;
use smart_invoice_client::ApiConfig;
use smart_invoice_client::types::{ClientFilter, ClientInput};
use smart_invoice_core::ClientId;

use super::{CliError, client_with_session, print_json};

/// Actions on the client collection.
#[derive(Subcommand)]
pub enum ClientAction {
    /// List clients, optionally filtered and sorted
    List {
        /// Substring match on name or company
        #[arg(long)]
        keyword: Option<String>,

        /// Exact city match
        #[arg(long)]
        city: Option<String>,

        /// Exact country match
        #[arg(long)]
        country: Option<String>,

        /// Sort key (e.g. name, -name)
        #[arg(long)]
        sort_by: Option<String>,
    },
    /// Show one client
    Get {
        /// Client ID
        id: ClientId,
    },
    /// Create a client
    Create {
        #[command(flatten)]
        fields: ClientFields,
    },
    /// Update a client
    Update {
        /// Client ID
        id: ClientId,

        #[command(flatten)]
        fields: ClientFields,
    },
    /// Delete a client
    Delete {
        /// Client ID
        id: ClientId,
    },
}

/// Shared create/update field flags.
#[derive(clap::Args)]
pub struct ClientFields {
    /// Contact name
    #[arg(long)]
    pub name: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    /// Company name
    #[arg(long)]
    pub company_name: Option<String>,

    /// Street address
    #[arg(long)]
    pub address: Option<String>,

    /// City
    #[arg(long)]
    pub city: Option<String>,

    /// Country
    #[arg(long)]
    pub country: Option<String>,

    /// Postal code
    #[arg(long)]
    pub postcode: Option<String>,
}

impl From<ClientFields> for ClientInput {
    fn from(fields: ClientFields) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            company_name: fields.company_name,
            address: fields.address,
            city: fields.city,
            country: fields.country,
            postcode: fields.postcode,
        }
    }
}

/// Dispatch a client action.
pub async fn run(config: &ApiConfig, action: ClientAction) -> Result<(), CliError> {
    let client = client_with_session(config)?;

    match action {
        ClientAction::List {
            keyword,
            city,
            country,
            sort_by,
        } => {
            let filter = ClientFilter {
                keyword,
                city,
                country,
                sort_by,
            };
            let clients = client.filter_clients(&filter).await?;
            print_json(&clients)
        }
        ClientAction::Get { id } => {
            let record = client.get_client(id).await?;
            print_json(&record)
        }
        ClientAction::Create { fields } => {
            let record = client.create_client(&fields.into()).await?;
            tracing::info!("Created client {}", record.id);
            print_json(&record)
        }
        ClientAction::Update { id, fields } => {
            let record = client.update_client(id, &fields.into()).await?;
            tracing::info!("Updated client {}", record.id);
            print_json(&record)
        }
        ClientAction::Delete { id } => {
            client.delete_client(id).await?;
            tracing::info!("Deleted client {id}");
            Ok(())
        }
    }
}
