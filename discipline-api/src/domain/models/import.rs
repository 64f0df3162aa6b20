use serde::Serialize;
use time::{macros::format_description, Date};

use super::{
    NewViolation, NewViolator, ViolationDraft, ViolationId, ViolationStatus, ViolatorId,
};
use crate::domain::RecordError;

/// A violator as supplied by an external roster, carrying its own id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedViolator {
    pub id: ViolatorId,
    pub details: NewViolator,
}

/// A violation as supplied by an external roster, carrying its own id.
///
/// Cells are kept as written so the roster can be shown unchanged. On import
/// the stored violator's name is snapshotted instead of `violator_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedViolation {
    pub id: ViolationId,
    pub details: NewViolation,
    pub violator_name: String,
    pub status: String,
}

impl ImportedViolation {
    /// Validate like a submitted form, also accepting hand-typed `DD.MM.YYYY` dates.
    pub fn validate(&self) -> Result<ViolationDraft, RecordError> {
        let mut details = self.details.clone();
        details.date = normalize_sheet_date(&details.date);
        details.validate()
    }

    /// Status for the stored record; unknown text reads as active.
    pub fn status(&self) -> ViolationStatus {
        ViolationStatus::from_str_lossy(&self.status)
    }
}

/// Rewrite `DD.MM.YYYY` as ISO. Anything else is passed through and left to
/// validation.
fn normalize_sheet_date(raw: &str) -> String {
    match Date::parse(raw, format_description!("[day].[month].[year]")) {
        Ok(date) => date
            .format(format_description!("[year]-[month]-[day]"))
            .unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

/// Parsed content of the shared spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRecords {
    pub violators: Vec<ImportedViolator>,
    pub violations: Vec<ImportedViolation>,
}

/// Outcome of importing [`SheetRecords`] into the store.
///
/// Sheet violation ids are positional (`{employee}_{row}`), so a row inserted
/// in the middle of the sheet shifts the ids of every later row. Such rows
/// land in `id_conflicts` instead of being stored twice or overwritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub violators_added: usize,
    pub violations_added: usize,
    /// Records whose id was already in the store with the same content.
    pub already_present: usize,
    /// Violations whose id is stored but with different content.
    pub id_conflicts: usize,
    /// Records rejected by validation or with an unknown violator.
    pub skipped: usize,
}

impl ImportSummary {
    pub fn added(&self) -> usize {
        self.violators_added + self.violations_added
    }
}
