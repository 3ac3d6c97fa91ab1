//! Invoice payment status.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Payment state of an invoice, as reported by the backend.
///
/// The backend owns all status transitions (paying, overdue detection); the
/// client only ever reads this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    /// Not yet due.
    #[default]
    Pending,
    /// Payment received.
    Paid,
    /// Past due date.
    Overdue,
    /// Partially settled.
    PartiallyPaid,
}

impl InvoiceStatus {
    /// Wire name of the status, as the backend spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Overdue => "OVERDUE",
            Self::PartiallyPaid => "PARTIALLY_PAID",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for InvoiceStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            "OVERDUE" => Ok(Self::Overdue),
            "PARTIALLY_PAID" => Ok(Self::PartiallyPaid),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an unknown invoice status.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown invoice status: {0}")]
pub struct ParseStatusError(pub String);
