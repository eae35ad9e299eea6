//! Environment-backed configuration shared by the workspace.
//!
//! `AppConfig` is a lazily initialized singleton loaded from `.env` and the
//! process environment. Tests may override individual fields through the
//! setters and restore the environment view with [`AppConfig::reset`].

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::env;
use std::sync::{RwLock, RwLockReadGuard};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    /// Optional path to a JSON file overriding the transcript markers.
    pub matcher_config: Option<String>,
}

static CONFIG: OnceCell<RwLock<AppConfig>> = OnceCell::new();

impl AppConfig {
    /// Reads `.env` (if present) and the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "transcript-matcher".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "logs/matcher.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            matcher_config: env::var("MATCHER_CONFIG").ok().filter(|p| !p.is_empty()),
        }
    }

    /// Shared read access to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Reloads the configuration from the environment, dropping overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG.get() {
            let mut guard = lock.write().expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_matcher_config(value: Option<String>) {
        AppConfig::set_field(|cfg| cfg.matcher_config = value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const MUT_VARS: &[&str] = &["PROJECT_NAME", "LOG_LEVEL", "LOG_TO_STDOUT", "MATCHER_CONFIG"];

    fn clear_mut_vars() {
        for k in MUT_VARS {
            unsafe { env::remove_var(k) };
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_env_is_empty() {
        clear_mut_vars();
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.project_name, "transcript-matcher");
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.log_to_stdout);
        assert!(cfg.matcher_config.is_none());
    }

    #[test]
    #[serial]
    fn env_values_are_picked_up() {
        clear_mut_vars();
        unsafe {
            env::set_var("LOG_LEVEL", "debug");
            env::set_var("LOG_TO_STDOUT", "true");
            env::set_var("MATCHER_CONFIG", "/tmp/markers.json");
        }
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.log_level, "debug");
        assert!(cfg.log_to_stdout);
        assert_eq!(cfg.matcher_config.as_deref(), Some("/tmp/markers.json"));
        clear_mut_vars();
    }

    #[test]
    #[serial]
    fn setters_override_until_reset() {
        clear_mut_vars();
        AppConfig::reset();
        AppConfig::set_log_level("trace");
        assert_eq!(AppConfig::global().log_level, "trace");

        AppConfig::reset();
        assert_eq!(AppConfig::global().log_level, "info");
    }
}
