use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::domain::{
    models::{
        Dashboard, ImportSummary, NewViolation, NewViolator, RecordEvent, RecordStats,
        SheetRecords, Violation, Violator,
    },
    RecordError,
};

/// Inbound port for record keeping.
///
/// This trait defines the use cases that HTTP handlers can invoke.
/// It orchestrates the record repository and the spreadsheet source.
#[async_trait]
pub trait RecordService: Send + Sync + 'static {
    // ========================================================================
    // Creation
    // ========================================================================

    /// Register a new violator.
    ///
    /// All four fields must be non-empty; the store is untouched otherwise.
    async fn add_violator(&self, input: NewViolator) -> Result<Violator, RecordError>;

    /// Record a violation against an existing violator.
    ///
    /// Snapshots the violator's current name and starts the violation as active.
    async fn add_violation(&self, input: NewViolation) -> Result<Violation, RecordError>;

    // ========================================================================
    // Reads
    // ========================================================================

    async fn list_violators(&self) -> Result<Vec<Violator>, RecordError>;

    async fn list_violations(&self) -> Result<Vec<Violation>, RecordError>;

    /// Counters over the current records, recomputed on every call.
    async fn stats(&self) -> Result<RecordStats, RecordError>;

    async fn dashboard(&self) -> Result<Dashboard, RecordError>;

    // ========================================================================
    // Spreadsheet
    // ========================================================================

    /// Fetch and parse the spreadsheet without importing it.
    async fn sheet_snapshot(&self) -> Result<SheetRecords, RecordError>;

    /// Fetch the spreadsheet and append whatever is not stored yet.
    ///
    /// Sheet violation ids are positional, so a row inserted mid-sheet reuses
    /// the id of an already imported incident. Those rows are reported as
    /// `id_conflicts` and left out rather than overwriting stored records.
    async fn import_sheet(&self) -> Result<ImportSummary, RecordError>;

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Subscribe to changes published after each successful write.
    fn subscribe(&self) -> broadcast::Receiver<RecordEvent>;
}
