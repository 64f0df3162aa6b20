//! HTTP response types for record keeping endpoints.
//!
//! These types serialize to the JSON format expected by the frontend.

use serde::Serialize;

use crate::domain::models::{
    Notice, Penalty, SheetRecords, StatusBadge, Violation, ViolationStatus, ViolationType,
    Violator,
};

/// Response for a created violator: the record plus the toast to show.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddViolatorResponse {
    pub violator: Violator,
    pub notice: Notice,
}

impl From<Violator> for AddViolatorResponse {
    fn from(violator: Violator) -> Self {
        Self {
            violator,
            notice: Notice::VIOLATOR_ADDED,
        }
    }
}

/// Response for a recorded violation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddViolationResponse {
    pub violation: Violation,
    pub notice: Notice,
}

impl From<Violation> for AddViolationResponse {
    fn from(violation: Violation) -> Self {
        Self {
            violation,
            notice: Notice::VIOLATION_ADDED,
        }
    }
}

/// Parsed spreadsheet content as `{violators, violations, total}`, every cell
/// as written in the sheet.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetSnapshotResponse {
    pub violators: Vec<SheetViolatorResponse>,
    pub violations: Vec<SheetViolationResponse>,
    /// Number of violator rows, duplicates included.
    pub total: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetViolatorResponse {
    pub id: String,
    pub full_name: String,
    pub position: String,
    pub department: String,
    pub employee_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetViolationResponse {
    pub id: String,
    pub violator_id: String,
    pub violator_name: String,
    pub violation_type: String,
    pub date: String,
    pub description: String,
    pub penalty: String,
    pub status: String,
}

impl From<SheetRecords> for SheetSnapshotResponse {
    fn from(records: SheetRecords) -> Self {
        let violators: Vec<_> = records
            .violators
            .into_iter()
            .map(|v| SheetViolatorResponse {
                id: v.id.to_string(),
                full_name: v.details.full_name,
                position: v.details.position,
                department: v.details.department,
                employee_id: v.details.employee_id,
            })
            .collect();

        let violations = records
            .violations
            .into_iter()
            .map(|v| SheetViolationResponse {
                id: v.id.to_string(),
                violator_id: v.details.violator_id,
                violator_name: v.violator_name,
                violation_type: v.details.violation_type,
                date: v.details.date,
                description: v.details.description,
                penalty: v.details.penalty,
                status: v.status,
            })
            .collect();

        Self {
            total: violators.len(),
            violators,
            violations,
        }
    }
}

/// The closed sets behind the form selects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub violation_types: Vec<String>,
    pub penalties: Vec<String>,
    pub statuses: Vec<StatusBadge>,
}

impl CatalogResponse {
    pub fn current() -> Self {
        Self {
            violation_types: ViolationType::known()
                .into_iter()
                .map(String::from)
                .collect(),
            penalties: Penalty::all().iter().map(ToString::to_string).collect(),
            statuses: ViolationStatus::all()
                .into_iter()
                .map(ViolationStatus::badge)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{BadgeVariant, ImportedViolator, NewViolator, ViolatorId};

    #[test]
    fn catalog_lists_form_options_in_order() {
        let catalog = CatalogResponse::current();

        assert_eq!(catalog.violation_types.len(), 6);
        assert_eq!(catalog.violation_types[0], "Опоздание");
        assert_eq!(catalog.violation_types[5], "Другое");
        assert_eq!(
            catalog.penalties,
            ["Замечание", "Выговор", "Строгий выговор", "Увольнение"]
        );
        assert_eq!(catalog.statuses[2].label, "Under review");
        assert_eq!(catalog.statuses[2].variant, BadgeVariant::Outline);
    }

    #[test]
    fn snapshot_total_counts_violator_rows() {
        let row = ImportedViolator {
            id: ViolatorId::new("EMP001"),
            details: NewViolator::new("Иванов", "Специалист", "Продажи", "EMP001"),
        };
        let records = SheetRecords {
            violators: vec![row.clone(), row],
            violations: vec![],
        };

        let response = SheetSnapshotResponse::from(records);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["total"], 2);
        assert_eq!(json["violators"][0]["fullName"], "Иванов");
        assert_eq!(json["violators"][0]["employeeId"], "EMP001");
    }

    #[test]
    fn created_violator_carries_success_notice() {
        let violator = Violator::new(
            "1",
            NewViolator::new("Иванов", "Специалист", "Продажи", "EMP001"),
        );

        let json = serde_json::to_value(AddViolatorResponse::from(violator)).unwrap();

        assert_eq!(json["notice"]["title"], "Успешно");
        assert_eq!(json["notice"]["description"], "Нарушитель добавлен в систему");
        assert_eq!(json["violator"]["id"], "1");
    }
}
