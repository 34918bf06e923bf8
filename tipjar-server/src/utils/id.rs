//! Identifier generation
//!
//! Record ids and QR tokens come from an [`IdGenerator`] capability so that
//! tests can substitute deterministic values. The production generator is
//! UUID v4: hyphenated for record ids, simple (32 hex chars, 122 random
//! bits) for tokens that end up inside scannable URLs.

use uuid::Uuid;

/// Id generation capability
pub trait IdGenerator: Send + Sync {
    /// Unique id for a stored record
    fn record_id(&self) -> String;

    /// Opaque, unguessable QR token
    fn token(&self) -> String;
}

/// UUID v4 generator (production)
#[derive(Debug, Default, Clone)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn record_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn token(&self) -> String {
        Uuid::new_v4().as_simple().to_string()
    }
}

#[cfg(test)]
pub mod testing {
    use super::IdGenerator;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Deterministic generator for tests: `id-1`, `id-2`, ... / `tok-1`, ...
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        counter: AtomicU64,
    }

    impl IdGenerator for SequentialIds {
        fn record_id(&self) -> String {
            format!("id-{}", self.counter.fetch_add(1, Ordering::SeqCst) + 1)
        }

        fn token(&self) -> String {
            format!("tok-{}", self.counter.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }
}
