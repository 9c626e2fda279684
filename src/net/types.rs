//! Wire DTOs and response-envelope normalization for the loyalty API.
//!
//! DESIGN
//! ======
//! The backend wraps most payloads as `{"data": T}`, but some routes
//! return `T` bare, and the token and error fields drift the same way.
//! Rather than probing fields ad hoc at call sites, the normalizers here
//! accept both shapes and fail loudly with [`MalformedResponse`] when
//! neither matches.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response body matched none of the accepted envelope shapes.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("response body did not match the expected shape")]
pub struct MalformedResponse;

/// Account summary backing the customer dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub owner_name: String,
    pub balance: i64,
    pub total_earned: i64,
    pub total_spent: i64,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Ledger entry direction as reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Issue,
    Redeem,
    TransferIn,
    TransferOut,
}

impl TransactionKind {
    /// Short human label for the history table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Issue => "Earned",
            Self::Redeem => "Redeemed",
            Self::TransferIn => "Received",
            Self::TransferOut => "Sent",
        }
    }

    /// True when the entry increases the balance.
    pub fn is_credit(self) -> bool {
        matches!(self, Self::Issue | Self::TransferIn)
    }
}

/// Ledger row for the transaction-history table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: i64,
    pub description: String,
    pub timestamp: String,
}

/// Unwrap a `{"data": T}` envelope, accepting bare `T` as well.
///
/// # Errors
///
/// Returns [`MalformedResponse`] when neither shape deserializes.
pub fn unwrap_data<T: DeserializeOwned>(body: &serde_json::Value) -> Result<T, MalformedResponse> {
    if let Some(inner) = body.get("data") {
        if let Ok(value) = serde_json::from_value(inner.clone()) {
            return Ok(value);
        }
    }
    serde_json::from_value(body.clone()).map_err(|_| MalformedResponse)
}

/// Extract the bearer token from `{"data":{"token":..}}` or `{"token":..}`.
///
/// # Errors
///
/// Returns [`MalformedResponse`] when no non-empty token string is found
/// under either shape.
pub fn extract_token(body: &serde_json::Value) -> Result<String, MalformedResponse> {
    body.pointer("/data/token")
        .or_else(|| body.pointer("/token"))
        .and_then(serde_json::Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .ok_or(MalformedResponse)
}

/// Error message from a non-2xx body, checked under `Error`, `error`,
/// then `message`, in that priority order.
pub fn error_message(body: &serde_json::Value) -> Option<String> {
    ["Error", "error", "message"]
        .into_iter()
        .find_map(|key| body.get(key).and_then(serde_json::Value::as_str))
        .map(str::to_owned)
}
