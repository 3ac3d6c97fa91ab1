//! Product management operations.

use smart_invoice_core::ProductId;
use tracing::instrument;

use super::{ApiClient, check, parse_json};
use crate::error::ApiError;
use crate::types::{Product, ProductFilter, ProductInput};

impl ApiClient {
    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.http().get(self.url("/api/products")).send().await?;
        parse_json(check(response).await?).await
    }

    /// List products matching a keyword, optionally sorted.
    ///
    /// Accepted sort keys are `name`, `-name`, `price` and `-price`;
    /// the backend ignores anything else.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self))]
    pub async fn filter_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        let response = self
            .http()
            .get(self.url("/api/products/filter"))
            .query(filter)
            .send()
            .await?;
        parse_json(check(response).await?).await
    }

    /// Get a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the product does not exist.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let response = self
            .http()
            .get(self.url(&format!("/api/products/{id}")))
            .send()
            .await?;
        parse_json(check(response).await?).await
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] before any request if required
    /// fields are missing or the price is negative.
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        input.validate()?;
        let response = self
            .http()
            .post(self.url("/api/products"))
            .json(input)
            .send()
            .await?;
        parse_json(check(response).await?).await
    }

    /// Update an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for bad input or
    /// [`ApiError::NotFound`] if the product does not exist.
    #[instrument(skip(self, input), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        input.validate()?;
        let response = self
            .http()
            .put(self.url(&format!("/api/products/{id}")))
            .json(input)
            .send()
            .await?;
        parse_json(check(response).await?).await
    }

    /// Delete a product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the product does not exist.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let response = self
            .http()
            .delete(self.url(&format!("/api/products/{id}")))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}
