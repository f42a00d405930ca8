use axum::extract::State;
use axum::Json;

use super::{fetch_for_request, AppState, SettlementRequest};
use crate::domain::TransactionRecord;
use crate::error::AppError;

pub async fn post_transactions(
    State(state): State<AppState>,
    Json(request): Json<SettlementRequest>,
) -> Result<Json<Vec<TransactionRecord>>, AppError> {
    let transactions = fetch_for_request(&state, &request).await?;
    if transactions.is_empty() {
        return Err(AppError::NotFound(format!(
            "No transactions found for the date {}.",
            request.transactions_date
        )));
    }
    Ok(Json(transactions))
}
