//! Client (customer) management operations.

use smart_invoice_core::ClientId;
use tracing::instrument;

use super::{ApiClient, check, parse_json};
use crate::error::ApiError;
use crate::types::{ClientFilter, ClientInput, ClientRecord};

impl ApiClient {
    /// List all clients.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self))]
    pub async fn list_clients(&self) -> Result<Vec<ClientRecord>, ApiError> {
        let response = self.http().get(self.url("/api/clients")).send().await?;
        parse_json(check(response).await?).await
    }

    /// List clients matching a filter, optionally sorted.
    ///
    /// Unset filter fields are omitted from the query string.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is invalid.
    #[instrument(skip(self))]
    pub async fn filter_clients(
        &self,
        filter: &ClientFilter,
    ) -> Result<Vec<ClientRecord>, ApiError> {
        let response = self
            .http()
            .get(self.url("/api/clients/filter"))
            .query(filter)
            .send()
            .await?;
        parse_json(check(response).await?).await
    }

    /// Get a single client by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the client does not exist.
    #[instrument(skip(self), fields(client_id = %id))]
    pub async fn get_client(&self, id: ClientId) -> Result<ClientRecord, ApiError> {
        let response = self
            .http()
            .get(self.url(&format!("/api/clients/{id}")))
            .send()
            .await?;
        parse_json(check(response).await?).await
    }

    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] before any request if required
    /// fields are missing, otherwise the usual request errors.
    #[instrument(skip(self, input))]
    pub async fn create_client(&self, input: &ClientInput) -> Result<ClientRecord, ApiError> {
        input.validate()?;
        let response = self
            .http()
            .post(self.url("/api/clients"))
            .json(input)
            .send()
            .await?;
        parse_json(check(response).await?).await
    }

    /// Update an existing client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for missing required fields or
    /// [`ApiError::NotFound`] if the client does not exist.
    #[instrument(skip(self, input), fields(client_id = %id))]
    pub async fn update_client(
        &self,
        id: ClientId,
        input: &ClientInput,
    ) -> Result<ClientRecord, ApiError> {
        input.validate()?;
        let response = self
            .http()
            .put(self.url(&format!("/api/clients/{id}")))
            .json(input)
            .send()
            .await?;
        parse_json(check(response).await?).await
    }

    /// Delete a client by ID.
    ///
    /// The backend answers 204 with no body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the client does not exist.
    #[instrument(skip(self), fields(client_id = %id))]
    pub async fn delete_client(&self, id: ClientId) -> Result<(), ApiError> {
        let response = self
            .http()
            .delete(self.url(&format!("/api/clients/{id}")))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}
