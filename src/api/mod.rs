pub mod health;
pub mod settlement;
pub mod transactions;

use crate::domain::TransactionRecord;
use crate::error::AppError;
use crate::upstream::{FetchError, TransactionSource};
use axum::{
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn TransactionSource>,
}

/// Request body shared by the settlement and transactions endpoints.
#[derive(Debug, Deserialize)]
pub struct SettlementRequest {
    pub merchant_id: String,
    pub transactions_date: NaiveDate,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/settlement", post(settlement::post_settlement))
        .route("/transactions", post(transactions::post_transactions))
        .layer(cors)
        .with_state(state)
}

/// Fetch the day's records for a request, translating fetch failures into
/// transport-level errors.
pub(crate) async fn fetch_for_request(
    state: &AppState,
    request: &SettlementRequest,
) -> Result<Vec<TransactionRecord>, AppError> {
    if request.merchant_id.trim().is_empty() {
        return Err(AppError::BadRequest(
            "merchant_id must not be empty".to_string(),
        ));
    }

    state
        .source
        .fetch_transactions(&request.merchant_id, request.transactions_date)
        .await
        .map_err(|e| match e {
            FetchError::InvalidMerchant(id) => {
                AppError::NotFound(format!("Merchant not found: {}", id))
            }
            FetchError::Exhausted { source, .. } => AppError::Upstream(format!(
                "Failed to retrieve transactions after multiple attempts: {}",
                source
            )),
            other => AppError::Upstream(format!("Failed to retrieve transactions: {}", other)),
        })
}
