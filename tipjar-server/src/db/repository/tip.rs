//! Tip Ledger Repository

use std::sync::Arc;

use chrono::Utc;

use super::{QrRepository, RepoError, RepoResult};
use crate::db::models::TipRecord;
use crate::db::store::TipStore;
use crate::utils::IdGenerator;

#[derive(Clone)]
pub struct TipRepository {
    store: TipStore,
    ids: Arc<dyn IdGenerator>,
}

impl TipRepository {
    pub fn new(store: TipStore, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Append a ledger entry for a collected tip
    ///
    /// Fails NotFound (tips untouched) when the token does not resolve.
    /// There is no deduplication: recording twice for the same payment
    /// appends two entries. A production-grade ledger must key appends on
    /// a processor-issued payment id delivered server-side via webhook,
    /// never on client-supplied values; webhook reconciliation is outside
    /// this service's scope.
    pub fn record(&self, token: &str, amount: f64) -> RepoResult<TipRecord> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(RepoError::Validation(
                "amount must be a positive number".to_string(),
            ));
        }

        // Bindings are immutable and never deleted; see QrRepository::mint
        let qr = QrRepository::new(self.store.clone(), self.ids.clone());
        if qr.find_binding(token)?.is_none() {
            return Err(RepoError::NotFound(format!("token {} not found", token)));
        }

        let record = TipRecord {
            id: self.ids.record_id(),
            token: token.to_string(),
            amount,
            recorded_at: Utc::now(),
        };

        self.store.update(|s| s.tips.push(record.clone()))?;
        Ok(record)
    }
}
