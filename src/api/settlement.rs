use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{fetch_for_request, AppState, SettlementRequest};
use crate::error::AppError;
use crate::settlement::compute_settlement;

/// Computed settlement for one merchant and day. Request-scoped, never
/// persisted.
#[derive(Debug, Serialize)]
pub struct SettlementResponse {
    pub merchant_id: String,
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub settlement_amount: Decimal,
}

pub async fn post_settlement(
    State(state): State<AppState>,
    Json(request): Json<SettlementRequest>,
) -> Result<Json<SettlementResponse>, AppError> {
    let transactions = fetch_for_request(&state, &request).await?;
    if transactions.is_empty() {
        return Err(AppError::NotFound("No transactions found.".to_string()));
    }

    let settlement_amount = compute_settlement(&transactions).map_err(|e| {
        AppError::Upstream(format!("Failed to process settlement. Please retry. {}", e))
    })?;

    Ok(Json(SettlementResponse {
        merchant_id: request.merchant_id,
        date: request.transactions_date,
        settlement_amount,
    }))
}
