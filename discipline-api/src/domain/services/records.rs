use std::sync::Arc;

use async_trait::async_trait;
use itertools::Itertools;
use tokio::sync::broadcast;

use crate::domain::{
    models::{
        Dashboard, IdGenerator, ImportSummary, NewViolation, NewViolator, RecordEvent,
        RecordStats, SheetRecords, Violation, Violator,
    },
    ports::{
        inbound::RecordService,
        outbound::{RecordRepository, SheetSource},
    },
    RecordError,
};

/// Buffered events per subscriber before the slowest one starts lagging.
const EVENT_CAPACITY: usize = 64;

/// Implementation of the RecordService inbound port.
///
/// Validation happens here before anything reaches the repository, so a
/// rejected submission never touches the stored collections.
pub struct RecordServiceImpl<R, S>
where
    R: RecordRepository,
    S: SheetSource,
{
    repository: Arc<R>,
    sheet_source: Arc<S>,
    ids: IdGenerator,
    events: broadcast::Sender<RecordEvent>,
}

impl<R, S> RecordServiceImpl<R, S>
where
    R: RecordRepository,
    S: SheetSource,
{
    pub fn new(repository: Arc<R>, sheet_source: Arc<S>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            repository,
            sheet_source,
            ids: IdGenerator::new(),
            events,
        }
    }

    fn publish(&self, event: RecordEvent) {
        // Sending only fails when nobody is subscribed.
        if self.events.send(event).is_err() {
            tracing::trace!("no subscribers for record event");
        }
    }

    async fn import_violators(
        &self,
        records: &SheetRecords,
        summary: &mut ImportSummary,
    ) -> Result<(), RecordError> {
        for imported in records.violators.iter().unique_by(|v| v.id.clone()) {
            if let Err(err) = imported.details.validate() {
                tracing::warn!("skipping sheet violator '{}': {}", imported.id, err);
                summary.skipped += 1;
                continue;
            }

            let violator = Violator::new(imported.id.clone(), imported.details.clone());
            match self.repository.insert_violator(violator).await {
                Ok(()) => summary.violators_added += 1,
                Err(RecordError::DuplicateId(_)) => summary.already_present += 1,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    async fn import_violations(
        &self,
        records: SheetRecords,
        summary: &mut ImportSummary,
    ) -> Result<(), RecordError> {
        for imported in records.violations {
            if let Some(existing) = self.repository.find_violation(&imported.id).await? {
                match imported.validate() {
                    Ok(draft) if existing.matches(&draft) => summary.already_present += 1,
                    _ => {
                        tracing::warn!(
                            "sheet violation '{}' differs from the stored one, rows may have moved",
                            imported.id
                        );
                        summary.id_conflicts += 1;
                    }
                }
                continue;
            }

            let draft = match imported.validate() {
                Ok(draft) => draft,
                Err(err) => {
                    tracing::warn!("skipping sheet violation '{}': {}", imported.id, err);
                    summary.skipped += 1;
                    continue;
                }
            };

            let Some(violator) = self.repository.find_violator(&draft.violator_id).await? else {
                tracing::warn!(
                    "skipping sheet violation '{}': violator '{}' not found",
                    imported.id,
                    draft.violator_id
                );
                summary.skipped += 1;
                continue;
            };

            let status = imported.status();
            let violation = Violation::record(imported.id, &violator, draft).with_status(status);
            match self.repository.insert_violation(violation).await {
                Ok(()) => summary.violations_added += 1,
                Err(RecordError::DuplicateId(_)) => summary.already_present += 1,
                Err(RecordError::ViolatorNotFound(_)) => summary.skipped += 1,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<R, S> RecordService for RecordServiceImpl<R, S>
where
    R: RecordRepository,
    S: SheetSource,
{
    async fn add_violator(&self, input: NewViolator) -> Result<Violator, RecordError> {
        input.validate()?;

        let violator = Violator::new(self.ids.next_violator_id(), input);
        self.repository.insert_violator(violator.clone()).await?;

        tracing::info!("added violator {} ({})", violator.id, violator.employee_id);
        self.publish(RecordEvent::ViolatorAdded(violator.clone()));

        Ok(violator)
    }

    async fn add_violation(&self, input: NewViolation) -> Result<Violation, RecordError> {
        let draft = input.validate()?;

        let violator = self
            .repository
            .find_violator(&draft.violator_id)
            .await?
            .ok_or_else(|| RecordError::ViolatorNotFound(draft.violator_id.clone()))?;

        let violation = Violation::record(self.ids.next_violation_id(), &violator, draft);
        self.repository.insert_violation(violation.clone()).await?;

        tracing::info!(
            "recorded violation {} for violator {}: {} / {}",
            violation.id,
            violation.violator_id,
            violation.violation_type,
            violation.penalty
        );
        self.publish(RecordEvent::ViolationAdded(violation.clone()));

        Ok(violation)
    }

    async fn list_violators(&self) -> Result<Vec<Violator>, RecordError> {
        self.repository.violators().await
    }

    async fn list_violations(&self) -> Result<Vec<Violation>, RecordError> {
        self.repository.violations().await
    }

    async fn stats(&self) -> Result<RecordStats, RecordError> {
        let records = self.repository.snapshot().await?;

        Ok(RecordStats::compute(&records.violators, &records.violations))
    }

    async fn dashboard(&self) -> Result<Dashboard, RecordError> {
        let records = self.repository.snapshot().await?;

        Ok(Dashboard::build(&records.violators, &records.violations))
    }

    async fn sheet_snapshot(&self) -> Result<SheetRecords, RecordError> {
        self.sheet_source.fetch_records().await
    }

    async fn import_sheet(&self) -> Result<ImportSummary, RecordError> {
        let records = self.sheet_source.fetch_records().await?;
        let mut summary = ImportSummary::default();

        // Violators first so violations in the same sheet can resolve them.
        self.import_violators(&records, &mut summary).await?;
        self.import_violations(records, &mut summary).await?;

        tracing::info!(
            "sheet import: {} violators and {} violations added, {} already present, \
             {} id conflicts, {} skipped",
            summary.violators_added,
            summary.violations_added,
            summary.already_present,
            summary.id_conflicts,
            summary.skipped
        );
        if summary.added() > 0 {
            self.publish(RecordEvent::SheetImported(summary));
        }

        Ok(summary)
    }

    fn subscribe(&self) -> broadcast::Receiver<RecordEvent> {
        self.events.subscribe()
    }
}
