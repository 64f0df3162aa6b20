//! Record storage port (outbound).
//!
//! Defines the append-only interface over the violator and violation
//! collections.

use async_trait::async_trait;

use crate::domain::{
    models::{Violation, ViolationId, Violator, ViolatorId},
    RecordError,
};

/// Violators and violations as of a single point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSnapshot {
    pub violators: Vec<Violator>,
    pub violations: Vec<Violation>,
}

/// Outbound port for record storage.
///
/// Collections are append-only: there is no update or delete. Both lists
/// are returned in insertion order.
#[async_trait]
pub trait RecordRepository: Send + Sync + 'static {
    /// All violators, oldest first.
    async fn violators(&self) -> Result<Vec<Violator>, RecordError>;

    /// All violations, oldest first.
    async fn violations(&self) -> Result<Vec<Violation>, RecordError>;

    /// Both collections, read together so no write lands in between.
    async fn snapshot(&self) -> Result<RecordSnapshot, RecordError>;

    async fn find_violator(&self, id: &ViolatorId) -> Result<Option<Violator>, RecordError>;

    async fn find_violation(&self, id: &ViolationId) -> Result<Option<Violation>, RecordError>;

    /// Append a violator.
    ///
    /// Fails with `DuplicateId` if the id is taken.
    async fn insert_violator(&self, violator: Violator) -> Result<(), RecordError>;

    /// Append a violation.
    ///
    /// Fails with `ViolatorNotFound` if the referenced violator is not stored,
    /// or `DuplicateId` if the id is taken. Nothing is written on failure.
    async fn insert_violation(&self, violation: Violation) -> Result<(), RecordError>;
}
