//! Database Module
//!
//! Single-document persistence over redb plus the repositories that
//! operate on it.

pub mod models;
pub mod repository;
pub mod store;

pub use store::{Snapshot, StoreError, StoreResult, TipStore};
