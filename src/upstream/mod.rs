//! Upstream payments API abstraction for fetching transaction records.

use crate::domain::TransactionRecord;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

pub mod acme;
pub mod mock;

pub use acme::AcmeTransactionSource;
pub use mock::MockTransactionSource;

/// Source of per-merchant transaction records.
///
/// Implementations own retry/backoff; callers see a single settled outcome.
#[async_trait]
pub trait TransactionSource: Send + Sync + fmt::Debug {
    /// Fetch all transactions for a merchant within a single calendar day.
    ///
    /// An empty vector means the merchant is valid but had no transactions
    /// that day; an unknown merchant is an error, not an empty result.
    async fn fetch_transactions(
        &self,
        merchant_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<TransactionRecord>, FetchError>;
}

/// Error type for transaction fetch operations.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The upstream rejected the merchant id. Permanent; never retried.
    #[error("invalid merchant id: {0}")]
    InvalidMerchant(String),
    /// Non-2xx upstream status outside the recognized 400/404 cases.
    #[error("upstream returned HTTP {status}")]
    UpstreamStatus { status: u16 },
    /// Connection failure, DNS failure, or per-call timeout.
    #[error("network error: {0}")]
    Network(String),
    /// Upstream body was not the expected shape.
    #[error("unparseable upstream response: {0}")]
    Parse(String),
    /// All retry attempts were spent on transient failures.
    #[error("fetch failed after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: Box<FetchError>,
    },
}

impl FetchError {
    /// Transient errors are eligible for retry; everything else is permanent.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            FetchError::UpstreamStatus { .. } | FetchError::Network(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::InvalidMerchant("m1".to_string());
        assert_eq!(err.to_string(), "invalid merchant id: m1");

        let err = FetchError::UpstreamStatus { status: 503 };
        assert_eq!(err.to_string(), "upstream returned HTTP 503");

        let err = FetchError::Network("connection timeout".to_string());
        assert_eq!(err.to_string(), "network error: connection timeout");

        let err = FetchError::Exhausted {
            attempts: 3,
            source: Box::new(FetchError::UpstreamStatus { status: 500 }),
        };
        assert_eq!(
            err.to_string(),
            "fetch failed after 3 attempts: upstream returned HTTP 500"
        );
    }

    #[test]
    fn test_transient_classification() {
        assert!(FetchError::UpstreamStatus { status: 500 }.is_transient());
        assert!(FetchError::Network("timeout".to_string()).is_transient());

        assert!(!FetchError::InvalidMerchant("m1".to_string()).is_transient());
        assert!(!FetchError::Parse("bad json".to_string()).is_transient());
        assert!(!FetchError::Exhausted {
            attempts: 3,
            source: Box::new(FetchError::Network("timeout".to_string())),
        }
        .is_transient());
    }
}
