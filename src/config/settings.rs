//! User settings for bookfees
//!
//! Stored as JSON. Every field has a default, so a partial or missing file
//! is fine.

use serde::{Deserialize, Serialize};

use super::paths::ConfigPaths;
use crate::error::FeesError;
use crate::models::checkout::CHECKOUT_DATE_PATTERN;
use crate::models::{DateFormat, Money};
use crate::reports::{OutputOrder, ReportSettings, DEFAULT_DAILY_RATE};

/// User settings for bookfees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Fee charged per day late, in cents
    #[serde(default = "default_daily_rate")]
    pub daily_rate: Money,

    /// Date format of checkout records (strftime format)
    #[serde(default = "default_checkout_date_format")]
    pub checkout_date_format: String,

    /// Row order of the fees report
    #[serde(default)]
    pub output_order: OutputOrder,
}

fn default_schema_version() -> u32 {
    1
}

fn default_daily_rate() -> Money {
    DEFAULT_DAILY_RATE
}

fn default_checkout_date_format() -> String {
    CHECKOUT_DATE_PATTERN.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            daily_rate: default_daily_rate(),
            checkout_date_format: default_checkout_date_format(),
            output_order: OutputOrder::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &ConfigPaths) -> Result<Self, FeesError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(settings_path).map_err(|e| {
            FeesError::Io(format!(
                "Failed to read settings file {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            FeesError::Config(format!(
                "Failed to parse settings file {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), FeesError> {
        if !self.daily_rate.is_positive() {
            return Err(FeesError::Validation(format!(
                "daily_rate must be positive, got {}",
                self.daily_rate.to_decimal_string()
            )));
        }
        if self.checkout_date_format.trim().is_empty() {
            return Err(FeesError::Validation(
                "checkout_date_format must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Parameters for a fees report run
    pub fn report_settings(&self) -> ReportSettings {
        let date_format = if self.checkout_date_format == CHECKOUT_DATE_PATTERN {
            DateFormat::checkout()
        } else {
            DateFormat::custom(self.checkout_date_format.clone())
        };

        ReportSettings {
            daily_rate: self.daily_rate,
            date_format,
            order: self.output_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.daily_rate.cents(), 25);
        assert_eq!(settings.checkout_date_format, "%m/%d/%Y");
        assert_eq!(settings.output_order, OutputOrder::FirstSeen);
        assert_eq!(settings.report_settings(), ReportSettings::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_settings_file(temp_dir.path().join("config.json"));

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let settings = Settings {
            daily_rate: Money::from_cents(50),
            output_order: OutputOrder::PatronId,
            ..Settings::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        let paths = ConfigPaths::with_settings_file(path);

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.report_settings().order, OutputOrder::PatronId);
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_order": "patron_id"}"#).unwrap();

        let loaded = Settings::load_or_default(&ConfigPaths::with_settings_file(path)).unwrap();
        assert_eq!(loaded.output_order, OutputOrder::PatronId);
        assert_eq!(loaded.daily_rate, DEFAULT_DAILY_RATE);
    }

    #[test]
    fn test_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        std::fs::write(&path, "not json").unwrap();
        let err = Settings::load_or_default(&ConfigPaths::with_settings_file(path.clone()))
            .unwrap_err();
        assert!(matches!(err, FeesError::Config(_)));

        std::fs::write(&path, r#"{"daily_rate": 0}"#).unwrap();
        let err =
            Settings::load_or_default(&ConfigPaths::with_settings_file(path)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_custom_date_format() {
        let settings = Settings {
            checkout_date_format: "%Y-%m-%d".into(),
            ..Settings::default()
        };
        let report_settings = settings.report_settings();
        assert_eq!(report_settings.date_format.pattern, "%Y-%m-%d");
        assert_eq!(report_settings.date_format.label, "configured");
    }
}
