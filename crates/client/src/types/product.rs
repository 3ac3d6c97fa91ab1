//! Product wire types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smart_invoice_core::{CurrencyCode, ProductId};

use crate::error::ApiError;

/// A product as returned by the backend.
///
/// Prices are JSON numbers on the wire; `Decimal` keeps them exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend-assigned identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Price currency.
    #[serde(default)]
    pub currency: CurrencyCode,
    /// Stocked quantity.
    pub quantity: u32,
}

/// Payload for creating or updating a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Product name (required).
    pub name: String,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price, non-negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Price currency.
    pub currency: CurrencyCode,
    /// Stocked quantity.
    pub quantity: u32,
}

impl ProductInput {
    /// Required-field check applied before the request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if `name` is empty or `price`
    /// is negative.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("product name is required".to_owned()));
        }
        if self.price.is_sign_negative() {
            return Err(ApiError::Validation(
                "product price must be non-negative".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Query parameters for `GET /api/products/filter`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Substring match on the product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Sort key: `name`, `-name`, `price`, `-price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}
