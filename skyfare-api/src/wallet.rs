use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use skyfare_store::wallet_repo::WalletRepository;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct WalletResponse {
    balance_cents: i64,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/wallet", get(get_wallet))
}

async fn get_wallet(State(state): State<AppState>) -> Result<Json<WalletResponse>, AppError> {
    let balance_cents = WalletRepository::balance(&state.db.pool)
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .ok_or_else(|| AppError::NotFound("wallet not found".to_string()))?;

    Ok(Json(WalletResponse { balance_cents }))
}
