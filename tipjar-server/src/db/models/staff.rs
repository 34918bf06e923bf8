//! Staff Member Model

use serde::{Deserialize, Serialize};

/// Default role assigned when registration omits one
pub const DEFAULT_ROLE: &str = "Staff";

/// Registered staff member
///
/// Immutable after registration; there is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// Create staff payload
///
/// Field presence is validated in the registry, not by the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffCreate {
    pub name: Option<String>,
    pub role: Option<String>,
}
