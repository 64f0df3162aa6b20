//! Spreadsheet port (outbound).

use async_trait::async_trait;

use crate::domain::{models::SheetRecords, RecordError};

/// Used when no spreadsheet is configured.
#[async_trait]
impl SheetSource for () {
    async fn fetch_records(&self) -> Result<SheetRecords, RecordError> {
        Err(RecordError::SheetNotConfigured)
    }
}

/// Outbound port for the shared spreadsheet that mirrors the roster.
#[async_trait]
pub trait SheetSource: Send + Sync + 'static {
    /// Download and parse the current sheet contents.
    async fn fetch_records(&self) -> Result<SheetRecords, RecordError>;
}
