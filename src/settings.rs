use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FinHealthError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default)]
    pub default_industry: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_output")]
    pub output: OutputFormat,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_output() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            default_industry: None,
            log_level: default_log_level(),
            output: default_output(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("finhealth")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Missing or unreadable settings fall back to defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let content = std::fs::read_to_string(path).unwrap_or_default();
    serde_json::from_str(&content).unwrap_or_default()
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(&settings_path(), settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| FinHealthError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("finhealth").join("settings.json");
        let settings = Settings {
            default_locale: "hi".to_string(),
            default_industry: Some("retail".to_string()),
            log_level: "debug".to_string(),
            output: OutputFormat::Json,
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_settings_from(&dir.path().join("settings.json")), Settings::default());
    }

    #[test]
    fn test_load_corrupt_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.default_locale, "en");
        assert_eq!(s.log_level, "warn");
        assert_eq!(s.output, OutputFormat::Table);
        assert!(s.default_industry.is_none());
    }

    #[test]
    fn test_load_merges_with_defaults() {
        let json = r#"{"default_locale": "hi", "output": "json"}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.default_locale, "hi");
        assert_eq!(s.output, OutputFormat::Json);
        assert_eq!(s.log_level, "warn");
    }
}
