use serde::{Deserialize, Serialize};

/// Classification of a transaction's effect on the settlement total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Purchase,
    Refund,
    /// Any type string the service does not recognize. Contributes zero
    /// to the settlement but stays in the record set.
    #[serde(other)]
    Other,
}

impl TransactionKind {
    /// Classify an upstream `type` string. Unknown values map to `Other`.
    pub fn from_upstream(value: &str) -> Self {
        match value {
            "PURCHASE" => TransactionKind::Purchase,
            "REFUND" => TransactionKind::Refund,
            _ => TransactionKind::Other,
        }
    }
}

/// One transaction as returned by the upstream payments API.
///
/// The amount keeps its raw upstream representation and is non-negative
/// there; sign is applied during aggregation, never in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: String,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: impl Into<String>) -> Self {
        Self {
            kind,
            amount: amount.into(),
        }
    }
}
