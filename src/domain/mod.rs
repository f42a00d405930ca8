//! Core domain types for the settlement pipeline.

pub mod transaction;
pub mod window;

pub use transaction::{TransactionKind, TransactionRecord};
pub use window::DayWindow;
