//! ACME payments API client implementation.

use super::{FetchError, TransactionSource};
use crate::domain::{DayWindow, TransactionKind, TransactionRecord};
use async_trait::async_trait;
use backoff::backoff::Backoff;
use backoff::future::retry_notify;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

const CALL_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Fixed-delay retry schedule bounded by a total attempt count. No jitter.
#[derive(Debug, Clone)]
struct FixedDelay {
    retries_left: u32,
}

impl FixedDelay {
    fn new() -> Self {
        Self {
            retries_left: MAX_ATTEMPTS - 1,
        }
    }
}

impl Backoff for FixedDelay {
    fn next_backoff(&mut self) -> Option<Duration> {
        if self.retries_left == 0 {
            return None;
        }
        self.retries_left -= 1;
        Some(RETRY_DELAY)
    }

    fn reset(&mut self) {
        self.retries_left = MAX_ATTEMPTS - 1;
    }
}

/// Transaction source backed by the ACME payments HTTP API.
#[derive(Debug, Clone)]
pub struct AcmeTransactionSource {
    client: Client,
    base_url: String,
}

impl AcmeTransactionSource {
    /// Create a new source with a 5 second per-call timeout.
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(CALL_TIMEOUT).build()?;
        Ok(Self { client, base_url })
    }

    async fn attempt(
        &self,
        merchant_id: &str,
        window: &DayWindow,
    ) -> Result<Vec<TransactionRecord>, FetchError> {
        let url = format!("{}/transactions/", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("merchant", merchant_id),
                ("created_at__gte", &window.start_param()),
                ("created_at__lt", &window.end_param()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let body: serde_json::Value = response
                .json()
                .await
                .map_err(|e| FetchError::Parse(e.to_string()))?;
            // A populated `merchant` field in the error body means the
            // merchant id itself was rejected.
            if body.get("merchant").is_some_and(non_empty_error_field) {
                return Err(FetchError::InvalidMerchant(merchant_id.to_string()));
            }
            return Err(FetchError::UpstreamStatus { status: 400 });
        }
        if status == StatusCode::NOT_FOUND {
            // Merchant valid, no transactions that day.
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;
        match body.get("results") {
            None | Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(serde_json::Value::Array(items)) => items.iter().map(parse_record).collect(),
            Some(other) => Err(FetchError::Parse(format!(
                "expected results array, got {}",
                other
            ))),
        }
    }
}

#[async_trait]
impl TransactionSource for AcmeTransactionSource {
    async fn fetch_transactions(
        &self,
        merchant_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<TransactionRecord>, FetchError> {
        let window = DayWindow::for_date(date);
        debug!(
            "Fetching transactions for merchant={}, window={}..{}",
            merchant_id,
            window.start_param(),
            window.end_param()
        );

        let result = retry_notify(
            FixedDelay::new(),
            || async {
                self.attempt(merchant_id, &window).await.map_err(|e| {
                    if e.is_transient() {
                        backoff::Error::transient(e)
                    } else {
                        backoff::Error::permanent(e)
                    }
                })
            },
            |e, delay| {
                warn!(
                    "Transient upstream failure, retrying in {:?}: {}",
                    delay, e
                )
            },
        )
        .await;

        result.map_err(|e| {
            if e.is_transient() {
                FetchError::Exhausted {
                    attempts: MAX_ATTEMPTS,
                    source: Box::new(e),
                }
            } else {
                e
            }
        })
    }
}

/// Truthiness of an error-body field: present and non-empty.
fn non_empty_error_field(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Array(items) => !items.is_empty(),
        serde_json::Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn parse_record(value: &serde_json::Value) -> Result<TransactionRecord, FetchError> {
    let kind = value
        .get("type")
        .and_then(|v| v.as_str())
        .map(TransactionKind::from_upstream)
        .ok_or_else(|| FetchError::Parse("missing type field".to_string()))?;

    let amount = match value.get("amount") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => return Err(FetchError::Parse("missing amount field".to_string())),
    };

    Ok(TransactionRecord::new(kind, amount))
}
