//! Pure settlement computation over fetched transaction records.
//!
//! The fold is deterministic over a locally-owned, immutable record list,
//! so retries stay at the I/O boundary in [`crate::upstream`].

use crate::domain::{TransactionKind, TransactionRecord};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Error type for settlement computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A record's amount was not a decimal number.
    #[error("malformed transaction amount: {0:?}")]
    MalformedAmount(String),
}

/// Net settlement over a day's records.
///
/// Purchases add, refunds subtract, unrecognized kinds contribute zero but
/// still have their amounts validated. An empty list settles to zero.
pub fn compute_settlement(transactions: &[TransactionRecord]) -> Result<Decimal, CalcError> {
    let mut total = Decimal::ZERO;
    for txn in transactions {
        let amount = Decimal::from_str(txn.amount.trim())
            .map_err(|_| CalcError::MalformedAmount(txn.amount.clone()))?;
        match txn.kind {
            TransactionKind::Purchase => total += amount,
            TransactionKind::Refund => total -= amount,
            TransactionKind::Other => {}
        }
    }
    Ok(total)
}
