//! Parser for the CSV export of the violations sheet.
//!
//! Expected column order (header names are free-form):
//! employee id, full name, position, department, violation type, date,
//! description, penalty.

use super::{SheetSnapshot, SheetViolation, SheetViolator};

const MIN_ROW_CELLS: usize = 4;
const INITIAL_STATUS: &str = "active";

/// Parse a CSV export into violators and violations.
///
/// Every accepted row produces a violator, so an employee listed on several
/// rows shows up several times. Deduplication is left to the consumer.
pub fn parse_snapshot(csv: &str) -> SheetSnapshot {
    let mut lines = csv.trim().lines();

    let header_width = match lines.next() {
        Some(header) if !header.trim().is_empty() => split_row(header).len(),
        _ => return SheetSnapshot::default(),
    };

    let mut snapshot = SheetSnapshot::default();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let values = split_row(line);
        if values.len() < MIN_ROW_CELLS {
            continue;
        }

        // Cells past the header width are dropped, missing ones read as empty.
        let cell = |index: usize| -> String {
            if index < header_width {
                values.get(index).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        };

        let employee_id = cell(0);
        if employee_id.is_empty() {
            continue;
        }

        snapshot.violators.push(SheetViolator {
            id: employee_id.clone(),
            full_name: cell(1),
            position: cell(2),
            department: cell(3),
            employee_id: employee_id.clone(),
        });

        let violation_type = cell(4);
        if values.len() > MIN_ROW_CELLS && !violation_type.is_empty() {
            let id = format!("{}_{}", employee_id, snapshot.violations.len());
            snapshot.violations.push(SheetViolation {
                id,
                violator_id: employee_id,
                violator_name: cell(1),
                violation_type,
                date: cell(5),
                description: cell(6),
                penalty: cell(7),
                status: INITIAL_STATUS.to_string(),
            });
        }
    }

    snapshot.total = snapshot.violators.len();
    snapshot
}

/// Split one CSV line on commas that are outside double quotes.
///
/// Quotes only toggle the quoted state and are not kept. Cells are trimmed,
/// which also drops the `\r` of CRLF exports.
fn split_row(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    values.push(current.trim().to_string());

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Табельный номер,ФИО,Должность,Отдел,Тип нарушения,Дата,Описание,Взыскание";

    #[test]
    fn empty_document_yields_empty_snapshot() {
        assert_eq!(parse_snapshot(""), SheetSnapshot::default());
        assert_eq!(parse_snapshot("\n\n"), SheetSnapshot::default());
        assert!(parse_snapshot(HEADER).is_empty());
    }

    #[test]
    fn row_with_violation_yields_violator_and_violation() {
        let csv = format!(
            "{HEADER}\nEMP001,Иванов Иван Иванович,Специалист,Отдел продаж,\
             Опоздание,2024-01-15,Опоздание на 30 минут,Замечание\n"
        );

        let snapshot = parse_snapshot(&csv);

        assert_eq!(snapshot.total, 1);
        assert_eq!(
            snapshot.violators,
            vec![SheetViolator {
                id: "EMP001".to_string(),
                full_name: "Иванов Иван Иванович".to_string(),
                position: "Специалист".to_string(),
                department: "Отдел продаж".to_string(),
                employee_id: "EMP001".to_string(),
            }]
        );

        let violation = &snapshot.violations[0];
        assert_eq!(violation.id, "EMP001_0");
        assert_eq!(violation.violator_id, "EMP001");
        assert_eq!(violation.violator_name, "Иванов Иван Иванович");
        assert_eq!(violation.violation_type, "Опоздание");
        assert_eq!(violation.date, "2024-01-15");
        assert_eq!(violation.penalty, "Замечание");
        assert_eq!(violation.status, "active");
    }

    #[test]
    fn quoted_commas_stay_in_one_cell() {
        let csv = format!(
            "{HEADER}\r\nEMP002,\"Петрова, Мария\",Менеджер,Отдел маркетинга,\
             Прогул,2024-02-01,\"Не вышла, не предупредила\",Выговор\r\n"
        );

        let snapshot = parse_snapshot(&csv);

        assert_eq!(snapshot.violators[0].full_name, "Петрова, Мария");
        assert_eq!(snapshot.violations[0].description, "Не вышла, не предупредила");
        assert_eq!(snapshot.violations[0].penalty, "Выговор");
    }

    #[test]
    fn short_rows_and_rows_without_id_are_skipped() {
        let csv = format!(
            "{HEADER}\nEMP003,Сидоров,Инженер\n,Без номера,Инженер,Цех\n\n\
             EMP004,Козлов,Инженер,Цех\n"
        );

        let snapshot = parse_snapshot(&csv);

        assert_eq!(snapshot.total, 1);
        assert_eq!(snapshot.violators[0].id, "EMP004");
        assert!(snapshot.violations.is_empty());
    }

    #[test]
    fn violation_ids_count_across_rows() {
        let csv = format!(
            "{HEADER}\n\
             EMP001,Иванов,Специалист,Продажи,Опоздание,2024-01-15,Поздно,Замечание\n\
             EMP001,Иванов,Специалист,Продажи,Прогул,2024-01-20,Не пришёл,Выговор\n\
             EMP005,Орлов,Водитель,Гараж\n\
             EMP006,Лебедев,Кладовщик,Склад,Другое,2024-03-01,Прочее,Замечание\n"
        );

        let snapshot = parse_snapshot(&csv);

        let ids: Vec<_> = snapshot.violations.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["EMP001_0", "EMP001_1", "EMP006_2"]);
        // One violator per accepted row, duplicates included.
        assert_eq!(snapshot.total, 4);
    }

    #[test]
    fn cells_beyond_header_width_are_ignored() {
        let csv = "id,name,position,department,type\n\
                   EMP007,Смирнов,Повар,Кухня,Опоздание,2024-04-01,Поздно,Замечание\n";

        let snapshot = parse_snapshot(csv);

        let violation = &snapshot.violations[0];
        assert_eq!(violation.violation_type, "Опоздание");
        assert_eq!(violation.date, "");
        assert_eq!(violation.penalty, "");
    }

    #[test]
    fn snapshot_serializes_in_camel_case() {
        let csv = format!("{HEADER}\nEMP001,Иванов,Специалист,Продажи\n");

        let json = serde_json::to_value(parse_snapshot(&csv)).unwrap();

        assert_eq!(json["total"], 1);
        assert_eq!(json["violators"][0]["fullName"], "Иванов");
        assert_eq!(json["violators"][0]["employeeId"], "EMP001");
    }
}
