//! Tip Ledger API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::TipCreate;
use crate::db::repository::TipRepository;
use crate::utils::{AppError, AppResult};

#[derive(Serialize)]
pub struct RecordResponse {
    ok: bool,
}

/// Append a ledger entry for a collected tip
pub async fn record(
    State(state): State<ServerState>,
    Json(payload): Json<TipCreate>,
) -> AppResult<Json<RecordResponse>> {
    let token = payload
        .token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("token and amount are required".to_string()))?;
    let amount = payload
        .amount
        .ok_or_else(|| AppError::Validation("token and amount are required".to_string()))?;

    let repo = TipRepository::new(state.store.clone(), state.ids.clone());
    repo.record(token, amount)?;

    Ok(Json(RecordResponse { ok: true }))
}
