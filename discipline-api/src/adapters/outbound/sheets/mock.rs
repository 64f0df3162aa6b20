//! Mock sheet source for testing.

use async_trait::async_trait;

use crate::domain::{models::SheetRecords, ports::outbound::SheetSource, RecordError};

/// Sheet source that returns canned records, or a canned failure.
#[derive(Clone, Default)]
pub struct MockSheetSource {
    records: SheetRecords,
    failure: Option<String>,
}

impl MockSheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, records: SheetRecords) -> Self {
        self.records = records;
        self
    }

    /// Make every fetch fail as if the sheet were unreachable.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

#[async_trait]
impl SheetSource for MockSheetSource {
    async fn fetch_records(&self) -> Result<SheetRecords, RecordError> {
        match &self.failure {
            Some(message) => Err(RecordError::SheetUnavailable(message.clone())),
            None => Ok(self.records.clone()),
        }
    }
}
