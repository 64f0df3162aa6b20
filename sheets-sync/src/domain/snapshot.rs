use serde::Serialize;

/// An employee row as it appears in the sheet.
///
/// The sheet has no separate record id, so the employee number doubles as `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetViolator {
    pub id: String,
    pub full_name: String,
    pub position: String,
    pub department: String,
    pub employee_id: String,
}

/// A violation attached to a sheet row. All fields are raw cell text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetViolation {
    pub id: String,
    pub violator_id: String,
    pub violator_name: String,
    pub violation_type: String,
    pub date: String,
    pub description: String,
    pub penalty: String,
    pub status: String,
}

/// Everything parsed out of one sheet export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SheetSnapshot {
    pub violators: Vec<SheetViolator>,
    pub violations: Vec<SheetViolation>,
    pub total: usize,
}

impl SheetSnapshot {
    pub fn is_empty(&self) -> bool {
        self.violators.is_empty() && self.violations.is_empty()
    }
}
