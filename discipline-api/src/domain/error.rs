use thiserror::Error;

use super::models::ViolatorId;

/// Errors that can occur during record keeping operations.
///
/// None of these leave a partial write behind; the caller can fix the input
/// and submit again.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("unknown penalty: {0}")]
    UnknownPenalty(String),
    #[error("violator not found: {0}")]
    ViolatorNotFound(ViolatorId),
    #[error("duplicate id: {0}")]
    DuplicateId(String),
    #[error("sheet sync is not configured")]
    SheetNotConfigured,
    #[error("sheet unavailable: {0}")]
    SheetUnavailable(String),
    #[error("{0}")]
    Storage(String),
}

impl RecordError {
    /// True for errors caused by the submitted form fields themselves.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::InvalidDate(_) | Self::UnknownPenalty(_)
        )
    }
}
