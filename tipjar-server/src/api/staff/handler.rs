//! Staff API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{StaffCreate, StaffMember};
use crate::db::repository::StaffRepository;
use crate::utils::AppResult;

/// Register a new staff member
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<StaffMember>> {
    let repo = StaffRepository::new(state.store.clone(), state.ids.clone());
    let member = repo.register(payload)?;
    Ok(Json(member))
}
