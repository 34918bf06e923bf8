//! Repository Module
//!
//! Domain operations over the shared document store. Each repository
//! borrows a [`TipStore`](crate::db::store::TipStore) handle plus the id
//! generator and funnels its mutations through `TipStore::update`.

pub mod qr;
pub mod staff;
pub mod tip;

pub use qr::QrRepository;
pub use staff::StaffRepository;
pub use tip::TipRepository;

use thiserror::Error;

use crate::db::store::StoreError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
