//! Configuration management module.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::OTP_CODE;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub ui: UiConfig,
    pub notifications: NotificationPrefs,
    pub clinic: ClinicInfo,
    pub logging: LoggingConfig,
}

/// Sign-in flow settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated delay for ordinary submissions, in milliseconds.
    pub submit_delay_ms: u64,
    /// Simulated delay for verification-code checks, in milliseconds.
    pub verify_delay_ms: u64,
    /// Code accepted by the development verifier.
    pub verification_code: String,
}

/// UI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub dark_mode: bool,
    pub language: String,
    pub timezone: String,
}

/// Which notification sections are raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPrefs {
    pub appointments: bool,
    pub patients: bool,
    pub treatments: bool,
    pub system: bool,
}

/// Clinic information shown in settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub hours: String,
    pub timezone: String,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Directory for daily log files. Console only when unset.
    pub directory: Option<PathBuf>,
}

pub const LANGUAGES: [(&str, &str); 4] = [
    ("en-us", "English (US)"),
    ("en-gb", "English (UK)"),
    ("es", "Spanish"),
    ("fr", "French"),
];

pub const TIMEZONES: [(&str, &str); 4] = [
    ("utc-5", "Eastern Time (UTC-5)"),
    ("utc-6", "Central Time (UTC-6)"),
    ("utc-7", "Mountain Time (UTC-7)"),
    ("utc-8", "Pacific Time (UTC-8)"),
];

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl AppConfig {
    /// Per-user config file location, or `config.toml` in the working
    /// directory when no home directory can be resolved.
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("com", "PhysioHMS", "physio-console")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.submit_delay_ms > 10_000 || self.auth.verify_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "Simulated delays cannot exceed 10000 ms".to_string(),
            ));
        }
        if !OTP_CODE.is_match(&self.auth.verification_code) {
            return Err(ConfigError::Validation(
                "Verification code must be 6 digits".to_string(),
            ));
        }
        if !LANGUAGES.iter().any(|(code, _)| *code == self.ui.language) {
            return Err(ConfigError::Validation(format!("Unknown language: {}", self.ui.language)));
        }
        if !TIMEZONES.iter().any(|(code, _)| *code == self.ui.timezone) {
            return Err(ConfigError::Validation(format!("Unknown timezone: {}", self.ui.timezone)));
        }
        if self.clinic.name.trim().is_empty() {
            return Err(ConfigError::Validation("Clinic name cannot be empty".to_string()));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!("Unknown log level: {}", self.logging.level)));
        }
        Ok(())
    }

    /// Save configuration to file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl AuthConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn verify_delay(&self) -> Duration {
        Duration::from_millis(self.verify_delay_ms)
    }
}

impl NotificationPrefs {
    /// Whether notifications for `section` should be raised.
    ///
    /// Sections without a preference of their own count as system.
    pub fn allows(&self, section: &str) -> bool {
        match section {
            "appointments" => self.appointments,
            "patients" => self.patients,
            "treatments" => self.treatments,
            _ => self.system,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            verify_delay_ms: 1000,
            verification_code: "123456".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: "en-us".to_string(),
            timezone: "utc-5".to_string(),
        }
    }
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            appointments: true,
            patients: true,
            treatments: false,
            system: true,
        }
    }
}

impl Default for ClinicInfo {
    fn default() -> Self {
        Self {
            name: "PhysioHMS Clinic".to_string(),
            email: "admin@physiohms.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Health Street, Medical District, City 12345".to_string(),
            hours: "9:00 AM - 6:00 PM".to_string(),
            timezone: "UTC-5".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_verification_code() {
        let mut config = AppConfig::default();
        config.auth.verification_code = "12345".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_language() {
        let mut config = AppConfig::default();
        config.ui.language = "de".to_string();
        assert!(config.validate().is_err());

        config.ui.language = "fr".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_delay_bounds() {
        let mut config = AppConfig::default();
        config.auth.submit_delay_ms = 60_000;
        assert!(config.validate().is_err());

        config.auth.submit_delay_ms = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_notification_prefs_route_sections() {
        let prefs = NotificationPrefs::default();
        assert!(prefs.allows("patients"));
        assert!(prefs.allows("appointments"));
        assert!(!prefs.allows("treatments"));
        assert!(prefs.allows("physiotherapists"));

        let quiet = NotificationPrefs {
            system: false,
            ..prefs
        };
        assert!(!quiet.allows("staff"));
        assert!(quiet.allows("patients"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            AppConfig::try_load(&dir.path().join("config.toml")),
            ConfigLoadResult::Missing
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.ui.dark_mode = true;
        config.notifications.treatments = true;
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded, config),
            other => panic!("expected loaded config, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndark_mode = true\n").unwrap();

        let ConfigLoadResult::Loaded(config) = AppConfig::try_load(&path) else {
            panic!("expected loaded config");
        };
        assert!(config.ui.dark_mode);
        assert_eq!(config.ui.language, "en-us");
        assert_eq!(config.auth.verification_code, "123456");
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[auth]\nsubmit_delay_ms = \"soon\"\n").unwrap();
        assert!(matches!(
            AppConfig::try_load(&path),
            ConfigLoadResult::Invalid(ConfigError::Parse(_))
        ));
    }
}
