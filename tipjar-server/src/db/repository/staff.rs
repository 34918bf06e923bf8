//! Staff Repository

use std::sync::Arc;

use super::{RepoError, RepoResult};
use crate::db::models::{DEFAULT_ROLE, StaffCreate, StaffMember};
use crate::db::store::TipStore;
use crate::utils::IdGenerator;

#[derive(Clone)]
pub struct StaffRepository {
    store: TipStore,
    ids: Arc<dyn IdGenerator>,
}

impl StaffRepository {
    pub fn new(store: TipStore, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Register a new staff member
    ///
    /// `role` defaults to `"Staff"`. The stored record is immutable; no
    /// update or delete operation exists.
    pub fn register(&self, data: StaffCreate) -> RepoResult<StaffMember> {
        let name = data
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| RepoError::Validation("name is required".to_string()))?
            .to_string();

        let member = StaffMember {
            id: self.ids.record_id(),
            name,
            role: data.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        };

        self.store.update(|s| s.staff.push(member.clone()))?;
        Ok(member)
    }

    /// Find a staff member by id
    pub fn find_by_id(&self, id: &str) -> RepoResult<Option<StaffMember>> {
        let snapshot = self.store.load()?;
        Ok(snapshot.staff.into_iter().find(|m| m.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::UuidGenerator;

    fn repo() -> StaffRepository {
        StaffRepository::new(TipStore::open_in_memory().unwrap(), Arc::new(UuidGenerator))
    }

    #[test]
    fn test_register_defaults_role() {
        let repo = repo();
        let member = repo
            .register(StaffCreate {
                name: Some("Alice".to_string()),
                role: None,
            })
            .unwrap();

        assert_eq!(member.name, "Alice");
        assert_eq!(member.role, "Staff");
        assert!(!member.id.is_empty());

        let found = repo.find_by_id(&member.id).unwrap();
        assert_eq!(found.unwrap().name, "Alice");
    }

    #[test]
    fn test_register_keeps_explicit_role() {
        let repo = repo();
        let member = repo
            .register(StaffCreate {
                name: Some("Bob".to_string()),
                role: Some("Driver".to_string()),
            })
            .unwrap();
        assert_eq!(member.role, "Driver");
    }

    #[test]
    fn test_register_rejects_missing_or_empty_name() {
        let repo = repo();

        let err = repo
            .register(StaffCreate {
                name: None,
                role: None,
            })
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        let err = repo
            .register(StaffCreate {
                name: Some("   ".to_string()),
                role: None,
            })
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }
}
