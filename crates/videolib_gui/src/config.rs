//! Runtime configuration resolved from environment variables.
//!
//! # Invariants
//! - `log_dir` is always absolute.
//! - Unset variables fall back to defaults; malformed values are errors.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use videolib_core::LogLevel;

pub const DB_PATH_VAR: &str = "VIDEOLIB_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "VIDEOLIB_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "VIDEOLIB_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "video_library.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: LogLevel,
    pub log_dir: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { key: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => write!(f, "invalid {key}: {message}"),
        }
    }
}

impl Error for ConfigError {}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir());
        Self::from_lookup(|key| std::env::var(key).ok(), &cwd)
    }

    /// Resolves configuration from `lookup`; relative paths resolve against `cwd`.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        cwd: &Path,
    ) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let db_path = value(DB_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME));

        let log_level = match value(LOG_LEVEL_VAR) {
            Some(level) => LogLevel::parse(&level).map_err(|err| ConfigError::InvalidValue {
                key: LOG_LEVEL_VAR,
                message: err.to_string(),
            })?,
            None => LogLevel::build_default(),
        };

        let log_dir = match value(LOG_DIR_VAR) {
            Some(dir) => cwd.join(dir.trim()),
            None => default_log_dir(cwd),
        };

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }
}

fn default_log_dir(cwd: &Path) -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("videolib").join("logs"))
        .unwrap_or_else(|| cwd.join("logs"))
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, DB_PATH_VAR, LOG_DIR_VAR, LOG_LEVEL_VAR};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use videolib_core::LogLevel;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]), Path::new("/work")).unwrap();

        assert_eq!(config.db_path, PathBuf::from("video_library.db"));
        assert_eq!(config.log_level, LogLevel::build_default());
        assert!(config.log_dir.is_absolute());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(
            lookup(&[
                (DB_PATH_VAR, "/data/shop.db"),
                (LOG_LEVEL_VAR, "WARN"),
                (LOG_DIR_VAR, "logs"),
            ]),
            Path::new("/work"),
        )
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/data/shop.db"));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.log_dir, PathBuf::from("/work/logs"));
    }

    #[test]
    fn malformed_level_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "chatty")]), Path::new("/work"))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key, .. } if key == LOG_LEVEL_VAR
        ));
    }
}
