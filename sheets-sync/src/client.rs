use thiserror::Error;

use crate::{
    domain::{self, SheetSnapshot},
    SheetRef,
};

pub struct SheetClient {
    sheet: SheetRef,
    http: reqwest::Client,
}

impl SheetClient {
    pub fn new(sheet: SheetRef) -> Self {
        Self {
            sheet,
            http: reqwest::Client::new(),
        }
    }

    pub fn sheet(&self) -> &SheetRef {
        &self.sheet
    }

    /// Download the raw CSV export of the sheet.
    pub async fn fetch_csv(&self) -> Result<String, SheetSyncError> {
        let url = self
            .sheet
            .export_url()
            .map_err(|e| SheetSyncError::InvalidSheet(e.to_string()))?;

        tracing::debug!("fetching sheet export from {}", url);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SheetSyncError::RequestError(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SheetSyncError::UnexpectedStatus(status.as_u16()));
        }

        resp.text()
            .await
            .map_err(|e| SheetSyncError::BodyError(format!("Failed to read sheet export: {}", e)))
    }

    /// Download and parse the sheet.
    pub async fn fetch_snapshot(&self) -> Result<SheetSnapshot, SheetSyncError> {
        let csv = self.fetch_csv().await?;
        let snapshot = domain::parse_snapshot(&csv);

        tracing::info!(
            "parsed sheet {}: {} violators, {} violations",
            self.sheet.spreadsheet_id,
            snapshot.violators.len(),
            snapshot.violations.len()
        );

        Ok(snapshot)
    }
}

#[derive(Error, Debug)]
pub enum SheetSyncError {
    #[error("InvalidSheet: {0}")]
    InvalidSheet(String),
    #[error("RequestError: {0}")]
    RequestError(String),
    #[error("UnexpectedStatus: {0}")]
    UnexpectedStatus(u16),
    #[error("BodyError: {0}")]
    BodyError(String),
}
