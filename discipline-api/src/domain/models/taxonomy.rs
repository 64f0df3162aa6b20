use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Category of a violation.
///
/// The form offers a fixed list; sheet imports may carry any text, which
/// lands in `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ViolationType {
    Tardiness,
    Absence,
    DressCode,
    SafetyRules,
    DutyFailure,
    Miscellaneous,
    Other(String),
}

impl ViolationType {
    /// The categories offered by the creation form, in display order.
    pub fn known() -> Vec<Self> {
        vec![
            Self::Tardiness,
            Self::Absence,
            Self::DressCode,
            Self::SafetyRules,
            Self::DutyFailure,
            Self::Miscellaneous,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Tardiness => "Опоздание",
            Self::Absence => "Прогул",
            Self::DressCode => "Нарушение дресс-кода",
            Self::SafetyRules => "Несоблюдение техники безопасности",
            Self::DutyFailure => "Невыполнение обязанностей",
            Self::Miscellaneous => "Другое",
            Self::Other(label) => label,
        }
    }
}

impl From<ViolationType> for String {
    fn from(value: ViolationType) -> Self {
        match value {
            ViolationType::Other(other) => other,
            known => known.label().to_string(),
        }
    }
}

impl From<String> for ViolationType {
    fn from(value: String) -> Self {
        Self::known()
            .into_iter()
            .find(|known| known.label() == value)
            .unwrap_or(Self::Other(value))
    }
}

impl From<&str> for ViolationType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl std::fmt::Display for ViolationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sanction attached to a violation, from mildest to harshest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum Penalty {
    #[strum(serialize = "Замечание")]
    Notice,
    #[strum(serialize = "Выговор")]
    Reprimand,
    #[strum(serialize = "Строгий выговор")]
    SevereReprimand,
    #[strum(serialize = "Увольнение")]
    Dismissal,
}

impl Penalty {
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// Lifecycle tag of a violation.
///
/// New violations are always `Active`; nothing moves them between states.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViolationStatus {
    #[default]
    Active,
    Closed,
    UnderReview,
}

impl ViolationStatus {
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Parse a raw status, treating anything unrecognised as `Active`.
    pub fn from_str_lossy(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Closed => "Closed",
            Self::UnderReview => "Under review",
        }
    }

    pub fn badge(self) -> StatusBadge {
        let variant = match self {
            Self::Active => BadgeVariant::Default,
            Self::Closed => BadgeVariant::Secondary,
            Self::UnderReview => BadgeVariant::Outline,
        };

        StatusBadge {
            status: self,
            label: self.label(),
            variant,
        }
    }
}

/// How a status is rendered in the violation feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBadge {
    pub status: ViolationStatus,
    pub label: &'static str,
    pub variant: BadgeVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}
