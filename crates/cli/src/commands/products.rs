//! Product management commands.

use clap::Subcommand;
use rust_decimal::Decimal;
use smart_invoice_client::ApiConfig;
use smart_invoice_client::types::{ProductFilter, ProductInput};
use smart_invoice_core::{CurrencyCode, ProductId};

use super::{CliError, client_with_session, print_json};

/// Actions on the product catalog.
#[derive(Subcommand)]
pub enum ProductAction {
    /// List products, optionally filtered and sorted
    List {
        /// Substring match on the product name
        #[arg(long)]
        keyword: Option<String>,

        /// Sort key: name, -name, price, -price
        #[arg(long)]
        sort_by: Option<String>,
    },
    /// Show one product
    Get {
        /// Product ID
        id: ProductId,
    },
    /// Create a product
    Create {
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Update a product
    Update {
        /// Product ID
        id: ProductId,

        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: ProductId,
    },
}

/// Shared create/update field flags.
#[derive(clap::Args)]
pub struct ProductFields {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,

    /// Unit price (e.g. 120.00)
    #[arg(long)]
    pub price: Decimal,

    /// ISO 4217 currency code
    #[arg(long, default_value = "USD")]
    pub currency: CurrencyCode,

    /// Stocked quantity
    #[arg(long, default_value_t = 0)]
    pub quantity: u32,
}

impl From<ProductFields> for ProductInput {
    fn from(fields: ProductFields) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            currency: fields.currency,
            quantity: fields.quantity,
        }
    }
}

/// Dispatch a product action.
pub async fn run(config: &ApiConfig, action: ProductAction) -> Result<(), CliError> {
    let client = client_with_session(config)?;

    match action {
        ProductAction::List { keyword, sort_by } => {
            let filter = ProductFilter { keyword, sort_by };
            let products = client.filter_products(&filter).await?;
            print_json(&products)
        }
        ProductAction::Get { id } => {
            let product = client.get_product(id).await?;
            print_json(&product)
        }
        ProductAction::Create { fields } => {
            let product = client.create_product(&fields.into()).await?;
            tracing::info!("Created product {}", product.id);
            print_json(&product)
        }
        ProductAction::Update { id, fields } => {
            let product = client.update_product(id, &fields.into()).await?;
            tracing::info!("Updated product {}", product.id);
            print_json(&product)
        }
        ProductAction::Delete { id } => {
            client.delete_product(id).await?;
            tracing::info!("Deleted product {id}");
            Ok(())
        }
    }
}
