use crate::domain::models::{
    ImportedViolation, ImportedViolator, NewViolation, NewViolator, SheetRecords, ViolationId,
    ViolatorId,
};

/// Convert a parsed sheet export to domain import records.
pub fn to_domain_records(snapshot: sheets_sync::SheetSnapshot) -> SheetRecords {
    SheetRecords {
        violators: snapshot
            .violators
            .into_iter()
            .map(to_domain_violator)
            .collect(),
        violations: snapshot
            .violations
            .into_iter()
            .map(to_domain_violation)
            .collect(),
    }
}

/// Convert a sheet row to an imported violator keyed by its employee number.
pub fn to_domain_violator(row: sheets_sync::SheetViolator) -> ImportedViolator {
    ImportedViolator {
        id: ViolatorId::new(row.id),
        details: NewViolator::new(row.full_name, row.position, row.department, row.employee_id),
    }
}

/// Convert a sheet violation to an imported violation, cells unchanged.
pub fn to_domain_violation(row: sheets_sync::SheetViolation) -> ImportedViolation {
    ImportedViolation {
        id: ViolationId::new(row.id),
        details: NewViolation::new(
            row.violator_id,
            row.violation_type,
            row.date,
            row.description,
            row.penalty,
        ),
        violator_name: row.violator_name,
        status: row.status,
    }
}
