//! Spreadsheet adapter implementing the SheetSource port.

mod conversions;
#[cfg(test)]
mod mock;

#[cfg(test)]
pub use mock::MockSheetSource;

use async_trait::async_trait;

use crate::domain::{models::SheetRecords, ports::outbound::SheetSource, RecordError};

use self::conversions::to_domain_records;

/// Adapter that wraps the sheet export client to implement the SheetSource port.
pub struct SheetsAdapter {
    client: sheets_sync::SheetClient,
}

impl SheetsAdapter {
    pub fn new(sheet: sheets_sync::SheetRef) -> Self {
        Self {
            client: sheets_sync::SheetClient::new(sheet),
        }
    }
}

#[async_trait]
impl SheetSource for SheetsAdapter {
    async fn fetch_records(&self) -> Result<SheetRecords, RecordError> {
        let snapshot = self
            .client
            .fetch_snapshot()
            .await
            .map_err(map_sync_error)?;

        Ok(to_domain_records(snapshot))
    }
}

fn map_sync_error(e: sheets_sync::SheetSyncError) -> RecordError {
    tracing::warn!("sheet fetch failed: {}", e);
    RecordError::SheetUnavailable(e.to_string())
}
