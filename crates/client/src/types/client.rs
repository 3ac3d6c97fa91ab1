//! Client (customer) wire types.

use serde::{Deserialize, Serialize};
use smart_invoice_core::{ClientId, Email};

use crate::error::ApiError;

/// A client as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Backend-assigned identifier.
    pub id: ClientId,
    /// Contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Company name, if any.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub postcode: Option<String>,
}

/// Payload for creating or updating a client.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInput {
    /// Contact name (required).
    pub name: String,
    /// Contact email (required).
    pub email: String,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

impl ClientInput {
    /// Required-field check applied before the request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if `name` is empty or `email` is
    /// structurally invalid.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("client name is required".to_owned()));
        }
        Email::parse(&self.email)
            .map_err(|e| ApiError::Validation(format!("client email: {e}")))?;
        Ok(())
    }
}

/// Query parameters for `GET /api/clients/filter`.
///
/// Unset fields are omitted from the query string entirely.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFilter {
    /// Substring match on name or company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Exact city match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Exact country match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Sort key (e.g. `name`, `-name`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

/// Query parameters for `GET /api/export/clients/csv`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientExportFilter {
    /// Filter on contact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Filter on company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Filter on city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Filter on country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ClientInput {
        ClientInput {
            name: "Acme GmbH".to_owned(),
            email: "billing@acme.example".to_owned(),
            ..ClientInput::default()
        }
    }

    #[test]
    fn test_validate_accepts_minimal_input() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let input = ClientInput {
            name: "   ".to_owned(),
            ..valid_input()
        };
        assert!(matches!(input.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let input = ClientInput {
            email: "not-an-email".to_owned(),
            ..valid_input()
        };
        assert!(matches!(input.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_input_skips_unset_fields() {
        let json = serde_json::to_value(valid_input()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"name": "Acme GmbH", "email": "billing@acme.example"})
        );
    }

    #[test]
    fn test_filter_query_omits_unset_params() {
        let filter = ClientFilter {
            keyword: Some("acme".to_owned()),
            sort_by: Some("name".to_owned()),
            ..ClientFilter::default()
        };
        let query = serde_urlencoded::to_string(&filter).expect("encode");
        assert_eq!(query, "keyword=acme&sortBy=name");
    }

    #[test]
    fn test_record_deserializes_backend_shape() {
        let record: ClientRecord = serde_json::from_str(
            r#"{
                "id": 3,
                "name": "Acme GmbH",
                "email": "billing@acme.example",
                "companyName": "Acme",
                "address": "1 Main St",
                "city": "Berlin",
                "country": "DE",
                "postcode": "10115"
            }"#,
        )
        .expect("deserialize");
        assert_eq!(record.id, ClientId::new(3));
        assert_eq!(record.company_name.as_deref(), Some("Acme"));
    }
}
