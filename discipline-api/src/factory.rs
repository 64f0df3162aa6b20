//! Composition root: the only place that picks concrete outbound adapters.

use std::sync::Arc;

use crate::{
    adapters::outbound::{memory::InMemoryRecordRepository, sheets::SheetsAdapter},
    config::Settings,
    domain::{ports::inbound::RecordService, services::RecordServiceImpl},
};

/// Build the record service described by `settings`.
pub fn record_service(settings: &Settings) -> Arc<dyn RecordService> {
    let repository = if settings.application.seed_demo_data {
        tracing::info!("seeding record store with demo data");
        InMemoryRecordRepository::with_demo_data()
    } else {
        InMemoryRecordRepository::new()
    };
    let repository = Arc::new(repository);

    match settings.sheets.sheet_ref() {
        Some(sheet) => {
            tracing::info!(
                "sheet sync enabled for spreadsheet {} (gid {})",
                sheet.spreadsheet_id,
                sheet.gid
            );
            Arc::new(RecordServiceImpl::new(
                repository,
                Arc::new(SheetsAdapter::new(sheet)),
            ))
        }
        None => {
            tracing::info!("sheet sync disabled");
            Arc::new(RecordServiceImpl::new(repository, Arc::new(())))
        }
    }
}
