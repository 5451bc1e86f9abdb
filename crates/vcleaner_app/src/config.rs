//! Environment-driven settings for the binary.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use log::LevelFilter;

pub(crate) const LOG_LEVEL_VAR: &str = "VCLEANER_LOG";
pub(crate) const LOG_FILE_VAR: &str = "VCLEANER_LOG_FILE";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Where log records go. Stdout is reserved for reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LogDestination {
    /// Stderr only.
    Terminal,
    /// Stderr and the given file.
    Both(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppConfig {
    pub(crate) log_level: LevelFilter,
    pub(crate) log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            log_destination: LogDestination::Terminal,
        }
    }
}

impl AppConfig {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            let raw = raw.to_string_lossy();
            match raw.trim().parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                // The logger is not up yet.
                Err(_) => eprintln!(
                    "Warning: ignoring {LOG_LEVEL_VAR}={raw:?}, using {DEFAULT_LOG_LEVEL}"
                ),
            }
        }

        if let Some(path) = lookup(LOG_FILE_VAR).filter(|path| !path.is_empty()) {
            config.log_destination = LogDestination::Both(PathBuf::from(path));
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn reads_level_case_insensitively() {
        let config = AppConfig::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, " DEBUG ")]));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn invalid_level_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "loud")]));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn log_file_enables_both_destinations() {
        let config = AppConfig::from_lookup(lookup_from(&[(LOG_FILE_VAR, "run.log")]));
        assert_eq!(
            config.log_destination,
            LogDestination::Both(PathBuf::from("run.log"))
        );

        let config = AppConfig::from_lookup(lookup_from(&[(LOG_FILE_VAR, "")]));
        assert_eq!(config.log_destination, LogDestination::Terminal);
    }
}
