//! Checkout API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::core::ServerState;
use crate::services::payment::CheckoutSession;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct CheckoutCreate {
    pub token: Option<String>,
    pub amount: Option<f64>,
    pub note: Option<String>,
}

/// Create a payment session for a tip
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutCreate>,
) -> AppResult<Json<CheckoutSession>> {
    let session = state
        .checkout
        .create_session(payload.token, payload.amount, payload.note)
        .await?;
    Ok(Json(session))
}
