pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod settlement;
pub mod upstream;

pub use config::Config;
pub use domain::{DayWindow, TransactionKind, TransactionRecord};
pub use error::AppError;
pub use settlement::{compute_settlement, CalcError};
pub use upstream::{AcmeTransactionSource, FetchError, MockTransactionSource, TransactionSource};
