use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use time::{macros::format_description, Date};

use super::{Penalty, ViolationId, ViolationStatus, ViolationType, Violator, ViolatorId};
use crate::domain::RecordError;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A recorded disciplinary incident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub id: ViolationId,
    pub violator_id: ViolatorId,
    /// The violator's full name as it was when the violation was recorded.
    pub violator_name: String,
    pub violation_type: ViolationType,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub description: String,
    pub penalty: Penalty,
    pub status: ViolationStatus,
}

impl Violation {
    /// Record a new violation against `violator`.
    ///
    /// The name is copied, not referenced, so later lookups never rewrite
    /// historical records.
    pub fn record(id: impl Into<ViolationId>, violator: &Violator, draft: ViolationDraft) -> Self {
        Self {
            id: id.into(),
            violator_id: violator.id.clone(),
            violator_name: violator.full_name.clone(),
            violation_type: draft.violation_type,
            date: draft.date,
            description: draft.description,
            penalty: draft.penalty,
            status: ViolationStatus::Active,
        }
    }

    pub fn with_status(mut self, status: ViolationStatus) -> Self {
        self.status = status;
        self
    }

    /// True when `draft` describes this same incident.
    pub fn matches(&self, draft: &ViolationDraft) -> bool {
        self.violator_id == draft.violator_id
            && self.violation_type == draft.violation_type
            && self.date == draft.date
            && self.description == draft.description
            && self.penalty == draft.penalty
    }
}

/// Input of the "assign penalty" form, as submitted. `null` reads as blank.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewViolation {
    #[serde_as(as = "DefaultOnNull")]
    pub violator_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub violation_type: String,
    /// Incident date as `YYYY-MM-DD`.
    #[serde_as(as = "DefaultOnNull")]
    pub date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    pub penalty: String,
}

impl NewViolation {
    pub fn new(
        violator_id: impl Into<String>,
        violation_type: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
        penalty: impl Into<String>,
    ) -> Self {
        Self {
            violator_id: violator_id.into(),
            violation_type: violation_type.into(),
            date: date.into(),
            description: description.into(),
            penalty: penalty.into(),
        }
    }

    /// Check presence of every field, then parse the typed ones.
    ///
    /// Whether the violator exists is decided by the store, not here.
    pub fn validate(self) -> Result<ViolationDraft, RecordError> {
        let fields = [
            ("violatorId", &self.violator_id),
            ("violationType", &self.violation_type),
            ("date", &self.date),
            ("description", &self.description),
            ("penalty", &self.penalty),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(RecordError::MissingField(*name));
        }

        let date = Date::parse(&self.date, format_description!("[year]-[month]-[day]"))
            .map_err(|_| RecordError::InvalidDate(self.date.clone()))?;
        let penalty = self
            .penalty
            .parse::<Penalty>()
            .map_err(|_| RecordError::UnknownPenalty(self.penalty.clone()))?;

        Ok(ViolationDraft {
            violator_id: ViolatorId::from(self.violator_id),
            violation_type: ViolationType::from(self.violation_type),
            date,
            description: self.description,
            penalty,
        })
    }
}

/// A violation whose fields are present and well-formed but whose violator
/// has not been resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationDraft {
    pub violator_id: ViolatorId,
    pub violation_type: ViolationType,
    pub date: Date,
    pub description: String,
    pub penalty: Penalty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NewViolator;
    use time::macros::date;

    fn complete() -> NewViolation {
        NewViolation::new(
            "1",
            "Опоздание",
            "2024-01-15",
            "Опоздание на работу на 30 минут",
            "Замечание",
        )
    }

    #[test]
    fn complete_input_produces_draft() {
        let draft = complete().validate().unwrap();

        assert_eq!(draft.violator_id, ViolatorId::new("1"));
        assert_eq!(draft.violation_type, ViolationType::Tardiness);
        assert_eq!(draft.date, date!(2024 - 01 - 15));
        assert_eq!(draft.penalty, Penalty::Notice);
    }

    #[test]
    fn missing_fields_are_reported_before_parsing() {
        let input = NewViolation {
            description: String::new(),
            date: "not a date".to_string(),
            ..complete()
        };

        assert_eq!(input.validate(), Err(RecordError::MissingField("description")));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let input = NewViolation {
            date: "15.01.2024".to_string(),
            ..complete()
        };

        assert_eq!(
            input.validate(),
            Err(RecordError::InvalidDate("15.01.2024".to_string()))
        );
    }

    #[test]
    fn unknown_penalty_is_rejected() {
        let input = NewViolation {
            penalty: "Штраф".to_string(),
            ..complete()
        };

        assert_eq!(
            input.validate(),
            Err(RecordError::UnknownPenalty("Штраф".to_string()))
        );
    }

    #[test]
    fn null_json_field_is_reported_as_missing() {
        let input: NewViolation = serde_json::from_str(
            r#"{"violatorId":"1","violationType":null,"date":"2024-01-15","penalty":"Замечание"}"#,
        )
        .unwrap();

        assert_eq!(
            input.validate(),
            Err(RecordError::MissingField("violationType"))
        );
    }

    #[test]
    fn recorded_violation_snapshots_name_and_starts_active() {
        let violator = Violator::new(
            "7",
            NewViolator::new("Орлов Олег", "Водитель", "Гараж", "EMP007"),
        );
        let draft = NewViolation {
            violator_id: "7".to_string(),
            ..complete()
        }
        .validate()
        .unwrap();

        let violation = Violation::record("100", &violator, draft);

        assert_eq!(violation.violator_name, "Орлов Олег");
        assert_eq!(violation.status, ViolationStatus::Active);
    }

    #[test]
    fn matches_compares_incident_fields() {
        let violator = Violator::new(
            "1",
            NewViolator::new("Иванов", "Специалист", "Продажи", "EMP001"),
        );
        let violation = Violation::record("5", &violator, complete().validate().unwrap());

        assert!(violation.matches(&complete().validate().unwrap()));

        let moved = NewViolation {
            date: "2024-01-16".to_string(),
            ..complete()
        };
        assert!(!violation.matches(&moved.validate().unwrap()));
    }

    #[test]
    fn violation_serializes_date_as_iso() {
        let violator = Violator::new(
            "1",
            NewViolator::new("Иванов", "Специалист", "Продажи", "EMP001"),
        );
        let violation = Violation::record("5", &violator, complete().validate().unwrap());

        let json = serde_json::to_value(&violation).unwrap();

        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["violatorName"], "Иванов");
        assert_eq!(json["violationType"], "Опоздание");
        assert_eq!(json["penalty"], "Замечание");
        assert_eq!(json["status"], "active");
    }
}
