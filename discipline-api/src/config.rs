use std::str::FromStr;

use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub sheets: SheetsSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub app_url: String,
    /// Start with the two demo violators and their violations.
    pub seed_demo_data: bool,
}

/// The shared Google Sheet mirrored by `/sheets` routes.
#[derive(Deserialize, Clone, Debug)]
pub struct SheetsSettings {
    pub enabled: bool,
    pub spreadsheet_id: String,
    pub gid: String,
}

impl SheetsSettings {
    /// The configured sheet, or `None` when sync is disabled or incomplete.
    pub fn sheet_ref(&self) -> Option<sheets_sync::SheetRef> {
        if !self.enabled || self.spreadsheet_id.is_empty() || self.gid.is_empty() {
            return None;
        }

        Some(sheets_sync::SheetRef::new(&self.spreadsheet_id, &self.gid))
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|e| config::ConfigError::Message(format!("Failed to parse APP_ENVIRONMENT: {}", e)))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("DISCIPLINE")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString, PartialEq, Eq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheets(enabled: bool, spreadsheet_id: &str) -> SheetsSettings {
        SheetsSettings {
            enabled,
            spreadsheet_id: spreadsheet_id.to_string(),
            gid: "0".to_string(),
        }
    }

    #[test]
    fn environment_names_are_case_insensitive() {
        assert_eq!(Environment::from_str("Production").unwrap(), Environment::Production);
        assert_eq!(Environment::Local.to_string(), "local");
        assert!(Environment::from_str("staging").is_err());
    }

    #[test]
    fn sheet_is_only_used_when_enabled_and_complete() {
        assert!(sheets(false, "abc").sheet_ref().is_none());
        assert!(sheets(true, "").sheet_ref().is_none());

        let sheet = sheets(true, "abc").sheet_ref().unwrap();
        assert_eq!(sheet.spreadsheet_id, "abc");
        assert_eq!(sheet.gid, "0");
    }
}
