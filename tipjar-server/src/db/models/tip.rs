//! Tip Record Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ledger entry for a collected tip (append-only)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipRecord {
    pub id: String,
    /// Token of the QR binding the tip was collected through
    pub token: String,
    pub amount: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Record payload
#[derive(Debug, Clone, Deserialize)]
pub struct TipCreate {
    pub token: Option<String>,
    pub amount: Option<f64>,
}
