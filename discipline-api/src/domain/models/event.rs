use serde::Serialize;

use super::{ImportSummary, Violation, Violator};

/// A change to the store, published to subscribers after it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum RecordEvent {
    ViolatorAdded(Violator),
    ViolationAdded(Violation),
    SheetImported(ImportSummary),
}

impl RecordEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ViolatorAdded(_) => "violatorAdded",
            Self::ViolationAdded(_) => "violationAdded",
            Self::SheetImported(_) => "sheetImported",
        }
    }
}

/// User-facing confirmation or error shown after a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NoticeVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

impl Notice {
    pub const VIOLATOR_ADDED: Notice = Notice::success("Нарушитель добавлен в систему");
    pub const VIOLATION_ADDED: Notice = Notice::success("Взыскание назначено");
    pub const MISSING_FIELDS: Notice = Notice::error("Заполните все поля");

    const fn success(description: &'static str) -> Self {
        Self {
            title: "Успешно",
            description,
            variant: NoticeVariant::Default,
        }
    }

    const fn error(description: &'static str) -> Self {
        Self {
            title: "Ошибка",
            description,
            variant: NoticeVariant::Destructive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_is_tagged_with_its_type() {
        let event = RecordEvent::SheetImported(ImportSummary {
            violators_added: 2,
            ..ImportSummary::default()
        });

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], event.name());
        assert_eq!(json["data"]["violatorsAdded"], 2);
    }
}
