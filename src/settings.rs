use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CollectorError, Result};
use crate::locator::StatementSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub reports_dir: String,
    pub reports_extension: String,
    pub output_path: String,
    pub header_rows: usize,
    pub skip_short_statements: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reports_dir: "reports".to_string(),
            reports_extension: "csv".to_string(),
            output_path: "output.csv".to_string(),
            header_rows: 15,
            skip_short_statements: false,
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("budget-collector")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Load settings from `path`; a missing file means defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| CollectorError::Settings(format!("{}: {e}", path.display())))
}

pub fn load_settings() -> Result<Settings> {
    load_settings_from(&settings_path())
}

impl Settings {
    pub fn statement_source(&self) -> StatementSource {
        StatementSource {
            dir: PathBuf::from(&self.reports_dir),
            extension: self.reports_extension.clone(),
            header_rows: self.header_rows,
            skip_short: self.skip_short_statements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.reports_dir, "reports");
        assert_eq!(s.reports_extension, "csv");
        assert_eq!(s.output_path, "output.csv");
        assert_eq!(s.header_rows, 15);
        assert!(!s.skip_short_statements);
    }

    #[test]
    fn test_load_returns_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let s = load_settings_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_load_merges_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let json = r#"{"reports_dir": "/data/statements", "skip_short_statements": true}"#;
        std::fs::write(&path, json).unwrap();
        let s = load_settings_from(&path).unwrap();
        assert_eq!(s.reports_dir, "/data/statements");
        assert!(s.skip_short_statements);
        assert_eq!(s.output_path, "output.csv");
        assert_eq!(s.header_rows, 15);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            reports_dir: "bank".to_string(),
            reports_extension: "txt".to_string(),
            output_path: "budget/may.csv".to_string(),
            header_rows: 20,
            skip_short_statements: true,
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_malformed_settings_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_settings_from(&path), Err(CollectorError::Settings(_))));
    }

    #[test]
    fn test_statement_source_from_settings() {
        let src = Settings::default().statement_source();
        assert_eq!(src.dir, PathBuf::from("reports"));
        assert_eq!(src.extension, "csv");
        assert_eq!(src.header_rows, 15);
        assert!(!src.skip_short);
    }
}
