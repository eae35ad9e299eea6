//! Matcher configuration.
//!
//! The runner's transcript format is a fixed external contract, so every field
//! defaults to the marker the runner prints. A JSON file may override single
//! markers; absent fields keep their defaults.
//!
//! ```json
//! { "markers": { "announcement": "Running test", "verdict": "Verdict:" } }
//! ```

use crate::error::MatcherError;
use common::config::AppConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Literal substrings that classify transcript lines.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TranscriptMarkers {
    /// Marks the start of a test, e.g. `Running test (1/2): examples/a.omtt`.
    #[serde(default = "default_announcement")]
    pub announcement: String,

    /// Prefix of the outcome keyword, e.g. `Verdict: PASS`.
    #[serde(default = "default_verdict")]
    pub verdict: String,

    /// Header naming the program under test, e.g. `Testing: /bin/cat`.
    #[serde(default = "default_sut_header")]
    pub sut_header: String,

    /// Opens one cause block after a verdict.
    #[serde(default = "default_cause")]
    pub cause: String,

    /// Printed before the cause marker; not part of the cause text.
    #[serde(default = "default_cause_divider")]
    pub cause_divider: String,

    /// Separates consecutive tests and precedes the statistics line.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Pattern of the run summary; capture groups 1 to 3 hold the total,
    /// passed and failed counts.
    #[serde(default = "default_statistics")]
    pub statistics: String,
}

impl Default for TranscriptMarkers {
    fn default() -> Self {
        Self {
            announcement: default_announcement(),
            verdict: default_verdict(),
            sut_header: default_sut_header(),
            cause: default_cause(),
            cause_divider: default_cause_divider(),
            separator: default_separator(),
            statistics: default_statistics(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MatcherConfig {
    #[serde(default)]
    pub markers: TranscriptMarkers,
}

impl MatcherConfig {
    pub fn default_config() -> Self {
        MatcherConfig {
            markers: TranscriptMarkers::default(),
        }
    }

    /// Reads a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, MatcherError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            MatcherError::IoError(format!("Failed to read config file at {path:?}: {e}"))
        })?;

        serde_json::from_str(&contents)
            .map_err(|e| MatcherError::InvalidJson(format!("Invalid config JSON format: {e}")))
    }

    /// Uses the file named by `MATCHER_CONFIG` when set, the defaults otherwise.
    pub fn load() -> Result<Self, MatcherError> {
        let path = AppConfig::global().matcher_config.clone();
        match path {
            Some(p) => {
                debug!("loading matcher config from {p}");
                Self::from_file(Path::new(&p))
            }
            None => Ok(Self::default_config()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), MatcherError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MatcherError::IoError(format!("Failed to create config directory: {e:?}"))
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MatcherError::InvalidJson(format!("Failed to serialize config: {e}")))?;

        fs::write(path, json)
            .map_err(|e| MatcherError::IoError(format!("Failed to write config file: {e:?}")))
    }
}

//Default Functions

fn default_announcement() -> String {
    "Running test".to_string()
}

fn default_verdict() -> String {
    "Verdict:".to_string()
}

fn default_sut_header() -> String {
    "Testing:".to_string()
}

fn default_cause() -> String {
    "=> Cause:".to_string()
}

fn default_cause_divider() -> String {
    "--------------------".to_string()
}

fn default_separator() -> String {
    "====================".to_string()
}

fn default_statistics() -> String {
    r"(\d+) tests total, (\d+) passed, (\d+) failed".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("markers.json");
        fs::write(&path, r#"{ "markers": { "verdict": "Result:" } }"#).unwrap();

        let cfg = MatcherConfig::from_file(&path).unwrap();
        assert_eq!(cfg.markers.verdict, "Result:");
        assert_eq!(cfg.markers.announcement, "Running test");
        assert_eq!(cfg.markers.separator, "====================");
        assert_eq!(cfg.markers.statistics, default_statistics());
    }

    #[test]
    fn empty_object_is_default_config() {
        let cfg: MatcherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, MatcherConfig::default_config());
    }

    #[test]
    fn save_then_load_preserves_overrides() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("config").join("config.json");
        let mut cfg = MatcherConfig::default_config();
        cfg.markers.announcement = "Executing".to_string();

        cfg.save(&path).unwrap();
        assert_eq!(MatcherConfig::from_file(&path).unwrap(), cfg);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = MatcherConfig::from_file(Path::new("/nonexistent/markers.json")).unwrap_err();
        assert!(matches!(err, MatcherError::IoError(_)));
        assert_eq!(err.kind(), FailureKind::Config);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("bad.json");
        fs::write(&path, "{ markers: ").unwrap();
        assert!(matches!(
            MatcherConfig::from_file(&path),
            Err(MatcherError::InvalidJson(_))
        ));
    }

    #[test]
    #[serial]
    fn load_follows_app_config_path() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("markers.json");
        fs::write(&path, r#"{ "markers": { "announcement": "Starting" } }"#).unwrap();

        AppConfig::set_matcher_config(Some(path.to_string_lossy().into_owned()));
        let cfg = MatcherConfig::load().unwrap();
        assert_eq!(cfg.markers.announcement, "Starting");

        AppConfig::set_matcher_config(None);
        assert_eq!(MatcherConfig::load().unwrap(), MatcherConfig::default_config());
    }
}
