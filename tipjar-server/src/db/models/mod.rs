//! Data models for the shared document
//!
//! Wire casing is camelCase (`staffId`, `pointType`, `createdAt`) on every
//! serialized type.

pub mod qr_binding;
pub mod staff;
pub mod tip;

pub use qr_binding::{DEFAULT_POINT_LABEL, DEFAULT_POINT_TYPE, MintOutcome, QrBinding, QrMint, ResolvedQr};
pub use staff::{DEFAULT_ROLE, StaffCreate, StaffMember};
pub use tip::{TipCreate, TipRecord};
