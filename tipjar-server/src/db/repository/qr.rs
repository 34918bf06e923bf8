//! QR Token Repository

use std::sync::Arc;

use chrono::Utc;

use super::{RepoError, RepoResult};
use crate::db::models::{
    DEFAULT_POINT_LABEL, DEFAULT_POINT_TYPE, MintOutcome, QrBinding, QrMint, ResolvedQr,
};
use crate::db::store::TipStore;
use crate::utils::IdGenerator;

/// Path segment under the public base address that resolves a token
const TOKEN_PATH: &str = "/t/";

#[derive(Clone)]
pub struct QrRepository {
    store: TipStore,
    ids: Arc<dyn IdGenerator>,
}

impl QrRepository {
    pub fn new(store: TipStore, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Mint a token binding a staff member to a physical point
    ///
    /// Fails NotFound before anything is appended when `staff_id` does not
    /// resolve. `point_type` defaults to `"Table"`, `point_label` to `"1"`.
    pub fn mint(&self, data: QrMint, base_url: &str) -> RepoResult<MintOutcome> {
        let staff_id = data
            .staff_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RepoError::Validation("staffId is required".to_string()))?
            .to_string();

        // Staff records are immutable and never deleted, so the existence
        // check can precede the append without a membership race.
        let snapshot = self.store.load()?;
        if !snapshot.staff.iter().any(|m| m.id == staff_id) {
            return Err(RepoError::NotFound(format!("staff {} not found", staff_id)));
        }

        let record = QrBinding {
            token: self.ids.token(),
            staff_id,
            point_type: data.point_type.unwrap_or_else(|| DEFAULT_POINT_TYPE.to_string()),
            point_label: data.point_label.unwrap_or_else(|| DEFAULT_POINT_LABEL.to_string()),
            created_at: Utc::now(),
        };

        self.store.update(|s| s.qr.push(record.clone()))?;

        let url = format!("{}{}{}", base_url.trim_end_matches('/'), TOKEN_PATH, record.token);
        Ok(MintOutcome {
            token: record.token.clone(),
            url,
            record,
        })
    }

    /// Resolve a token back to its staff/point context
    ///
    /// Unknown tokens fail NotFound. A binding whose staff record is
    /// missing resolves with `staff: None` instead of failing.
    pub fn resolve(&self, token: &str) -> RepoResult<ResolvedQr> {
        let snapshot = self.store.load()?;
        let binding = snapshot
            .qr
            .iter()
            .find(|b| b.token == token)
            .ok_or_else(|| RepoError::NotFound(format!("token {} not found", token)))?;

        let staff = snapshot.staff.iter().find(|m| m.id == binding.staff_id).cloned();

        Ok(ResolvedQr {
            token: binding.token.clone(),
            staff,
            point_type: binding.point_type.clone(),
            point_label: binding.point_label.clone(),
        })
    }

    /// Existence check used by the tip ledger
    pub fn find_binding(&self, token: &str) -> RepoResult<Option<QrBinding>> {
        let snapshot = self.store.load()?;
        Ok(snapshot.qr.into_iter().find(|b| b.token == token))
    }
}
