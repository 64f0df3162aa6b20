use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::ViolatorId;
use crate::domain::RecordError;

/// An employee that violations can be recorded against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violator {
    pub id: ViolatorId,
    pub full_name: String,
    pub position: String,
    pub department: String,
    pub employee_id: String,
}

impl Violator {
    pub fn new(id: impl Into<ViolatorId>, details: NewViolator) -> Self {
        Self {
            id: id.into(),
            full_name: details.full_name,
            position: details.position,
            department: details.department,
            employee_id: details.employee_id,
        }
    }
}

/// Input of the "add violator" form.
///
/// Absent and `null` fields deserialize as empty strings so they are reported
/// through [`NewViolator::validate`] like any other blank field.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewViolator {
    #[serde_as(as = "DefaultOnNull")]
    pub full_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub position: String,
    #[serde_as(as = "DefaultOnNull")]
    pub department: String,
    #[serde_as(as = "DefaultOnNull")]
    pub employee_id: String,
}

impl NewViolator {
    pub fn new(
        full_name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
        employee_id: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            position: position.into(),
            department: department.into(),
            employee_id: employee_id.into(),
        }
    }

    /// Check that every field is filled in.
    ///
    /// Only emptiness is checked; a whitespace-only value is accepted.
    pub fn validate(&self) -> Result<(), RecordError> {
        let fields = [
            ("fullName", &self.full_name),
            ("position", &self.position),
            ("department", &self.department),
            ("employeeId", &self.employee_id),
        ];

        match fields.iter().find(|(_, value)| value.is_empty()) {
            Some((name, _)) => Err(RecordError::MissingField(*name)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_input_is_valid() {
        let input = NewViolator::new("Сидоров Пётр", "Инженер", "Цех №1", "EMP003");

        assert_eq!(input.validate(), Ok(()));
    }

    #[test]
    fn first_empty_field_is_reported() {
        let input = NewViolator::new("Сидоров Пётр", "", "", "EMP003");

        assert_eq!(input.validate(), Err(RecordError::MissingField("position")));
    }

    #[test]
    fn whitespace_only_field_passes_presence_check() {
        let input = NewViolator::new(" ", "Инженер", "Цех №1", "EMP003");

        assert!(input.validate().is_ok());
    }

    #[test]
    fn absent_json_fields_become_empty() {
        let input: NewViolator =
            serde_json::from_str(r#"{"fullName":"Сидоров Пётр","position":"Инженер"}"#).unwrap();

        assert_eq!(input.department, "");
        assert_eq!(input.validate(), Err(RecordError::MissingField("department")));
    }

    #[test]
    fn null_json_fields_become_empty() {
        let input: NewViolator = serde_json::from_str(
            r#"{"fullName":"Сидоров Пётр","position":null,"department":"Цех","employeeId":"E3"}"#,
        )
        .unwrap();

        assert_eq!(input.validate(), Err(RecordError::MissingField("position")));
    }
}
