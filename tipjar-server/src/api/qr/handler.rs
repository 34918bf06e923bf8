//! QR Token API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{MintOutcome, QrMint, ResolvedQr};
use crate::db::repository::QrRepository;
use crate::utils::AppResult;

/// Mint a token binding a staff member to a point
pub async fn mint(
    State(state): State<ServerState>,
    Json(payload): Json<QrMint>,
) -> AppResult<Json<MintOutcome>> {
    let repo = QrRepository::new(state.store.clone(), state.ids.clone());
    let outcome = repo.mint(payload, &state.config.public_base_url)?;
    Ok(Json(outcome))
}

/// Resolve a token back to its staff/point context
pub async fn resolve(
    State(state): State<ServerState>,
    Path(token): Path<String>,
) -> AppResult<Json<ResolvedQr>> {
    let repo = QrRepository::new(state.store.clone(), state.ids.clone());
    let resolved = repo.resolve(&token)?;
    Ok(Json(resolved))
}
