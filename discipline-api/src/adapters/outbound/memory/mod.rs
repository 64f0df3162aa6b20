//! In-memory implementation of the RecordRepository port.
//!
//! Records live for the lifetime of the process and are lost on restart.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::{
    models::{Violation, ViolationId, Violator, ViolatorId},
    ports::outbound::{RecordRepository, RecordSnapshot},
    seed, RecordError,
};

#[derive(Debug, Default)]
struct Store {
    violators: Vec<Violator>,
    violations: Vec<Violation>,
}

/// Record store backed by two vectors behind a single lock.
///
/// One lock covers both collections so the violator check and the append
/// in `insert_violation` cannot interleave with another writer.
#[derive(Clone, Default)]
pub struct InMemoryRecordRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given records, stored in the order given.
    pub fn with_records(violators: Vec<Violator>, violations: Vec<Violation>) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                violators,
                violations,
            })),
        }
    }

    /// Start with the two demo violators and their two violations.
    pub fn with_demo_data() -> Self {
        let violators = seed::demo_violators();
        let violations = seed::demo_violations(&violators);
        Self::with_records(violators, violations)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>, RecordError> {
        self.store
            .read()
            .map_err(|_| RecordError::Storage("record store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, RecordError> {
        self.store
            .write()
            .map_err(|_| RecordError::Storage("record store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn violators(&self) -> Result<Vec<Violator>, RecordError> {
        Ok(self.read()?.violators.clone())
    }

    async fn violations(&self) -> Result<Vec<Violation>, RecordError> {
        Ok(self.read()?.violations.clone())
    }

    async fn find_violator(&self, id: &ViolatorId) -> Result<Option<Violator>, RecordError> {
        Ok(self.read()?.violators.iter().find(|v| &v.id == id).cloned())
    }

    async fn snapshot(&self) -> Result<RecordSnapshot, RecordError> {
        let store = self.read()?;

        Ok(RecordSnapshot {
            violators: store.violators.clone(),
            violations: store.violations.clone(),
        })
    }

    async fn find_violation(&self, id: &ViolationId) -> Result<Option<Violation>, RecordError> {
        Ok(self.read()?.violations.iter().find(|v| &v.id == id).cloned())
    }

    async fn insert_violator(&self, violator: Violator) -> Result<(), RecordError> {
        let mut store = self.write()?;

        if store.violators.iter().any(|v| v.id == violator.id) {
            return Err(RecordError::DuplicateId(violator.id.to_string()));
        }

        store.violators.push(violator);
        Ok(())
    }

    async fn insert_violation(&self, violation: Violation) -> Result<(), RecordError> {
        let mut store = self.write()?;

        if !store.violators.iter().any(|v| v.id == violation.violator_id) {
            return Err(RecordError::ViolatorNotFound(violation.violator_id));
        }
        if store.violations.iter().any(|v| v.id == violation.id) {
            return Err(RecordError::DuplicateId(violation.id.to_string()));
        }

        store.violations.push(violation);
        Ok(())
    }
}
