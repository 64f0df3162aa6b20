//! Demo records the dashboard starts with when seeding is enabled.

use super::models::{NewViolation, NewViolator, Violation, ViolationStatus, Violator};

pub const IVANOV_ID: &str = "1";
pub const PETROVA_ID: &str = "2";

pub fn demo_violators() -> Vec<Violator> {
    vec![
        Violator::new(
            IVANOV_ID,
            NewViolator::new(
                "Иванов Иван Иванович",
                "Специалист",
                "Отдел продаж",
                "EMP001",
            ),
        ),
        Violator::new(
            PETROVA_ID,
            NewViolator::new(
                "Петрова Мария Сергеевна",
                "Менеджер",
                "Отдел маркетинга",
                "EMP002",
            ),
        ),
    ]
}

/// Two violations for the demo violators: one active, one closed.
pub fn demo_violations(violators: &[Violator]) -> Vec<Violation> {
    let drafts = [
        (
            "1",
            NewViolation::new(
                IVANOV_ID,
                "Опоздание",
                "2024-01-15",
                "Опоздание на работу на 30 минут без уважительной причины",
                "Замечание",
            ),
            ViolationStatus::Active,
        ),
        (
            "2",
            NewViolation::new(
                PETROVA_ID,
                "Нарушение дресс-кода",
                "2024-01-10",
                "Несоответствие корпоративному дресс-коду",
                "Выговор",
            ),
            ViolationStatus::Closed,
        ),
    ];

    drafts
        .into_iter()
        .filter_map(|(id, input, status)| {
            let draft = input.validate().ok()?;
            let violator = violators.iter().find(|v| v.id == draft.violator_id)?;
            Some(Violation::record(id, violator, draft).with_status(status))
        })
        .collect()
}
