//! QR Binding Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StaffMember;

/// Default point type when minting omits one
pub const DEFAULT_POINT_TYPE: &str = "Table";
/// Default point label when minting omits one
pub const DEFAULT_POINT_LABEL: &str = "1";

/// Token binding a physical point to a staff member
///
/// Immutable after minting; tokens never expire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrBinding {
    pub token: String,
    pub staff_id: String,
    pub point_type: String,
    pub point_label: String,
    pub created_at: DateTime<Utc>,
}

/// Mint payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrMint {
    pub staff_id: Option<String>,
    pub point_type: Option<String>,
    pub point_label: Option<String>,
}

/// Mint result: the token, its scannable URL and the stored record
#[derive(Debug, Clone, Serialize)]
pub struct MintOutcome {
    pub token: String,
    pub url: String,
    pub record: QrBinding,
}

/// Resolved token context
///
/// `staff` is `null` when the bound staff record no longer resolves;
/// resolution never fails on a dangling staff reference.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedQr {
    pub token: String,
    pub staff: Option<StaffMember>,
    pub point_type: String,
    pub point_label: String,
}
