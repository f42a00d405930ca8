//! Mock transaction source for testing without network calls.

use super::{FetchError, TransactionSource};
use crate::domain::TransactionRecord;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Mock source returning predefined records keyed by merchant and day.
#[derive(Debug, Clone, Default)]
pub struct MockTransactionSource {
    records: HashMap<(String, NaiveDate), Vec<TransactionRecord>>,
    error: Option<FetchError>,
}

impl MockTransactionSource {
    /// Create a new mock source with no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register records for a merchant/day pair.
    pub fn with_transactions(
        mut self,
        merchant_id: &str,
        date: NaiveDate,
        records: Vec<TransactionRecord>,
    ) -> Self {
        self.records.insert((merchant_id.to_string(), date), records);
        self
    }

    /// Make every fetch fail with the given error.
    pub fn with_error(mut self, error: FetchError) -> Self {
        self.error = Some(error);
        self
    }
}

#[async_trait]
impl TransactionSource for MockTransactionSource {
    async fn fetch_transactions(
        &self,
        merchant_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<TransactionRecord>, FetchError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        Ok(self
            .records
            .get(&(merchant_id.to_string(), date))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[tokio::test]
    async fn test_mock_returns_registered_records() {
        let record = TransactionRecord::new(TransactionKind::Purchase, "100");
        let mock = MockTransactionSource::new().with_transactions("m1", day(), vec![record.clone()]);

        let records = mock.fetch_transactions("m1", day()).await.unwrap();
        assert_eq!(records, vec![record]);
    }

    #[tokio::test]
    async fn test_mock_returns_empty_for_unknown_merchant() {
        let mock = MockTransactionSource::new().with_transactions(
            "m1",
            day(),
            vec![TransactionRecord::new(TransactionKind::Purchase, "100")],
        );

        let records = mock.fetch_transactions("m2", day()).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_mock_returns_configured_error() {
        let mock = MockTransactionSource::new()
            .with_error(FetchError::InvalidMerchant("m1".to_string()));

        let result = mock.fetch_transactions("m1", day()).await;
        assert!(matches!(result, Err(FetchError::InvalidMerchant(_))));
    }
}
