use serde::Serialize;

use super::{Violation, ViolationStatus, Violator};

/// Summary counters shown at the top of the dashboard.
///
/// Always computed from the current records; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordStats {
    pub total_violators: usize,
    pub total_violations: usize,
    pub active_violations: usize,
    pub closed_violations: usize,
    pub under_review_violations: usize,
}

impl RecordStats {
    pub fn compute(violators: &[Violator], violations: &[Violation]) -> Self {
        let mut stats = Self {
            total_violators: violators.len(),
            total_violations: violations.len(),
            ..Self::default()
        };

        for violation in violations {
            match violation.status {
                ViolationStatus::Active => stats.active_violations += 1,
                ViolationStatus::Closed => stats.closed_violations += 1,
                ViolationStatus::UnderReview => stats.under_review_violations += 1,
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{NewViolation, NewViolator};

    fn violation(violator: &Violator, id: &str, status: ViolationStatus) -> Violation {
        let draft = NewViolation::new(
            violator.id.to_string(),
            "Прогул",
            "2024-02-01",
            "Отсутствие без причины",
            "Выговор",
        )
        .validate()
        .unwrap();

        Violation::record(id, violator, draft).with_status(status)
    }

    #[test]
    fn empty_store_has_zero_counters() {
        assert_eq!(RecordStats::compute(&[], &[]), RecordStats::default());
    }

    #[test]
    fn counters_partition_violations_by_status() {
        let violator = Violator::new(
            "1",
            NewViolator::new("Иванов", "Специалист", "Продажи", "EMP001"),
        );
        let violations = vec![
            violation(&violator, "1", ViolationStatus::Active),
            violation(&violator, "2", ViolationStatus::Closed),
            violation(&violator, "3", ViolationStatus::UnderReview),
            violation(&violator, "4", ViolationStatus::Active),
        ];

        let stats = RecordStats::compute(&[violator], &violations);

        assert_eq!(stats.total_violators, 1);
        assert_eq!(stats.total_violations, 4);
        assert_eq!(stats.active_violations, 2);
        assert_eq!(stats.closed_violations, 1);
        assert_eq!(
            stats.active_violations + stats.closed_violations + stats.under_review_violations,
            stats.total_violations
        );
    }
}
