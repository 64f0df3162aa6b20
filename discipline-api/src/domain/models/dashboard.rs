use serde::Serialize;
use time::macros::format_description;

use super::{RecordStats, StatusBadge, Violation, Violator};

/// Read-only projection of the store as the dashboard renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: RecordStats,
    pub violators: Vec<ViolatorRow>,
    pub violations: Vec<ViolationCard>,
}

/// One line of the violator table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolatorRow {
    pub id: String,
    pub full_name: String,
    pub position: String,
    pub department: String,
}

/// One card of the violation feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationCard {
    pub id: String,
    pub violator_name: String,
    pub violation_type: String,
    pub description: String,
    /// Date as `DD.MM.YYYY`.
    pub date: String,
    pub penalty: String,
    pub status: StatusBadge,
}

impl Dashboard {
    pub fn build(violators: &[Violator], violations: &[Violation]) -> Self {
        Self {
            stats: RecordStats::compute(violators, violations),
            violators: violators.iter().map(ViolatorRow::from).collect(),
            violations: violations.iter().map(ViolationCard::from).collect(),
        }
    }
}

impl From<&Violator> for ViolatorRow {
    fn from(violator: &Violator) -> Self {
        Self {
            id: violator.id.to_string(),
            full_name: violator.full_name.clone(),
            position: violator.position.clone(),
            department: violator.department.clone(),
        }
    }
}

impl From<&Violation> for ViolationCard {
    fn from(violation: &Violation) -> Self {
        Self {
            id: violation.id.to_string(),
            violator_name: violation.violator_name.clone(),
            violation_type: violation.violation_type.label().to_string(),
            description: violation.description.clone(),
            date: format_display_date(violation.date),
            penalty: violation.penalty.to_string(),
            status: violation.status.badge(),
        }
    }
}

/// Render a date the way `ru-RU` locales print it.
pub fn format_display_date(date: time::Date) -> String {
    date.format(format_description!("[day].[month].[year]"))
        .unwrap_or_else(|_| date.to_string())
}
