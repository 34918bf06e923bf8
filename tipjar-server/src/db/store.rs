//! redb-based document store
//!
//! The whole data set is one JSON document holding three collections:
//!
//! | Collection | Contents |
//! |------------|----------|
//! | `staff` | registered staff members |
//! | `qr` | minted token bindings |
//! | `tips` | append-only tip ledger |
//!
//! Every write replaces the document in full; there is no partial-field
//! update. [`TipStore::update`] performs the read-modify-write inside a
//! single redb write transaction. redb admits exactly one write
//! transaction at a time, which makes `update` the single-writer
//! serialization point for all mutations: two concurrent appends can
//! never overwrite each other.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` using copy-on-write and an
//! atomic pointer swap, so the file is always in a consistent state even
//! across power loss.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::models::{QrBinding, StaffMember, TipRecord};

/// Single-document table: key = "snapshot", value = JSON-serialized [`Snapshot`]
const STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("state");

const STATE_KEY: &str = "snapshot";

/// Full contents of the document store
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub staff: Vec<StaffMember>,
    pub qr: Vec<QrBinding>,
    pub tips: Vec<TipRecord>,
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Document store backed by redb
#[derive(Clone)]
pub struct TipStore {
    db: Arc<Database>,
}

impl TipStore {
    /// Open or create the database at the given path
    ///
    /// An empty document is written on first open; subsequent opens leave
    /// the existing document untouched.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        let store = Self { db: Arc::new(db) };
        store.init_document()?;
        Ok(store)
    }

    /// Open an in-memory database (tests and ephemeral runs)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let store = Self { db: Arc::new(db) };
        store.init_document()?;
        Ok(store)
    }

    /// Seed the empty document if none exists yet
    fn init_document(&self) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(STATE_TABLE)?;
            if table.get(STATE_KEY)?.is_none() {
                let empty = serde_json::to_vec(&Snapshot::default())?;
                table.insert(STATE_KEY, empty.as_slice())?;
            }
        }
        txn.commit()?;
        Ok(())
    }

    /// Read the current full snapshot
    pub fn load(&self) -> StoreResult<Snapshot> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;

        match table.get(STATE_KEY)? {
            Some(value) => Ok(serde_json::from_slice(value.value())?),
            // init_document ran at open; an absent key means a fresh
            // in-flight database, which maps to the empty document
            None => Ok(Snapshot::default()),
        }
    }

    /// Replace the document in full
    pub fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(STATE_TABLE)?;
            let bytes = serde_json::to_vec(snapshot)?;
            table.insert(STATE_KEY, bytes.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Read-modify-write under a single write transaction
    ///
    /// All mutations go through here. A bare `load` + `save` pair would
    /// let two concurrent requests interleave and lose one of the writes;
    /// running the closure between the read and the write of one
    /// transaction serializes them instead. Returns the post-mutation
    /// snapshot.
    pub fn update<F>(&self, f: F) -> StoreResult<Snapshot>
    where
        F: FnOnce(&mut Snapshot),
    {
        let txn = self.db.begin_write()?;
        let snapshot = {
            let mut table = txn.open_table(STATE_TABLE)?;
            let mut snapshot: Snapshot = match table.get(STATE_KEY)? {
                Some(value) => serde_json::from_slice(value.value())?,
                None => Snapshot::default(),
            };
            f(&mut snapshot);
            let bytes = serde_json::to_vec(&snapshot)?;
            table.insert(STATE_KEY, bytes.as_slice())?;
            snapshot
        };
        txn.commit()?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::StaffMember;

    fn staff(id: &str, name: &str) -> StaffMember {
        StaffMember {
            id: id.to_string(),
            name: name.to_string(),
            role: "Staff".to_string(),
        }
    }

    #[test]
    fn test_open_initializes_empty_document() {
        let store = TipStore::open_in_memory().unwrap();
        let snapshot = store.load().unwrap();
        assert!(snapshot.staff.is_empty());
        assert!(snapshot.qr.is_empty());
        assert!(snapshot.tips.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = TipStore::open_in_memory().unwrap();

        let mut snapshot = store.load().unwrap();
        snapshot.staff.push(staff("s-1", "Alice"));
        store.save(&snapshot).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.staff.len(), 1);
        assert_eq!(loaded.staff[0].name, "Alice");
    }

    #[test]
    fn test_update_returns_post_mutation_snapshot() {
        let store = TipStore::open_in_memory().unwrap();

        let snapshot = store
            .update(|s| s.staff.push(staff("s-1", "Alice")))
            .unwrap();
        assert_eq!(snapshot.staff.len(), 1);

        let snapshot = store.update(|s| s.staff.push(staff("s-2", "Bob"))).unwrap();
        assert_eq!(snapshot.staff.len(), 2);
    }

    #[test]
    fn test_file_backend_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tipjar.redb");

        {
            let store = TipStore::open(&path).unwrap();
            store
                .update(|s| s.staff.push(staff("s-1", "Alice")))
                .unwrap();
        }

        // Reopen must keep the existing document, not reinitialize it
        let store = TipStore::open(&path).unwrap();
        let snapshot = store.load().unwrap();
        assert_eq!(snapshot.staff.len(), 1);
        assert_eq!(snapshot.staff[0].id, "s-1");
    }
}
