use std::path::PathBuf;

/// Journal path used when neither `--file` nor the environment names one.
pub const DEFAULT_JOURNAL_FILE: &str = "macro_journal.json";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "macro_tracker_rs=info,macro_tracker=info";

pub const JOURNAL_FILE_ENV: &str = "MACRO_TRACKER_FILE";

/// Runtime settings resolved from CLI flags and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub journal_path: PathBuf,
    pub log_filter: String,
    pub json_logs: bool,
}

impl AppConfig {
    /// Resolve settings from the process environment.
    pub fn from_env(cli_file: Option<&str>) -> Self {
        Self::from_lookup(cli_file, |key| std::env::var(key).ok())
    }

    /// Resolve settings with an explicit variable lookup.
    ///
    /// `--file` wins over `MACRO_TRACKER_FILE`, which wins over the default.
    pub fn from_lookup<F>(cli_file: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let journal_path = cli_file
            .map(str::to_string)
            .or_else(|| lookup(JOURNAL_FILE_ENV).filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_JOURNAL_FILE.to_string());

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let json_logs = lookup("LOG_FORMAT").map(|v| v == "json").unwrap_or(false);

        Self {
            journal_path: PathBuf::from(journal_path),
            log_filter,
            json_logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(None, lookup(&[]));
        assert_eq!(config.journal_path, PathBuf::from(DEFAULT_JOURNAL_FILE));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_cli_file_wins_over_env() {
        let vars = [(JOURNAL_FILE_ENV, "env.json")];
        let config = AppConfig::from_lookup(Some("cli.json"), lookup(&vars));
        assert_eq!(config.journal_path, PathBuf::from("cli.json"));

        let config = AppConfig::from_lookup(None, lookup(&vars));
        assert_eq!(config.journal_path, PathBuf::from("env.json"));
    }

    #[test]
    fn test_logging_from_env() {
        let vars = [("RUST_LOG", "debug"), ("LOG_FORMAT", "json")];
        let config = AppConfig::from_lookup(None, lookup(&vars));
        assert_eq!(config.log_filter, "debug");
        assert!(config.json_logs);
    }
}
