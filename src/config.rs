//! Runtime settings read from the environment (and `.env`).

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::stats::{DEFAULT_REFERENCE_YEAR, StatsSettings};

pub const DATA_DIR_VAR: &str = "BIKESHARE_DATA_DIR";
pub const REFERENCE_YEAR_VAR: &str = "BIKESHARE_REFERENCE_YEAR";
pub const LOG_FILE_VAR: &str = "LOG_FILE_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding `chicago.csv`, `new_york_city.csv` and `washington.csv`.
    pub data_dir: PathBuf,
    pub reference_year: i32,
    pub log_file_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            reference_year: DEFAULT_REFERENCE_YEAR,
            log_file_path: PathBuf::from("logs/bikeshare_explorer.log"),
        }
    }
}

impl Settings {
    /// Reads settings from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let reference_year = match lookup(REFERENCE_YEAR_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{REFERENCE_YEAR_VAR} must be a year, got '{raw}'"))?,
            None => defaults.reference_year,
        };

        Ok(Self {
            data_dir: lookup(DATA_DIR_VAR).map_or(defaults.data_dir, PathBuf::from),
            reference_year,
            log_file_path: lookup(LOG_FILE_VAR).map_or(defaults.log_file_path, PathBuf::from),
        })
    }

    pub fn stats(&self) -> StatsSettings {
        StatsSettings {
            reference_year: self.reference_year,
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.stats().reference_year, 2018);
    }

    #[test]
    fn test_values_from_environment() {
        let settings = Settings::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/srv/bikeshare"),
            (REFERENCE_YEAR_VAR, " 2024 "),
            (LOG_FILE_VAR, "/tmp/explorer.log"),
        ]))
        .unwrap();

        assert_eq!(settings.data_dir, PathBuf::from("/srv/bikeshare"));
        assert_eq!(settings.reference_year, 2024);
        assert_eq!(settings.log_file_path, PathBuf::from("/tmp/explorer.log"));
    }

    #[test]
    fn test_bad_reference_year() {
        let err = Settings::from_lookup(lookup(&[(REFERENCE_YEAR_VAR, "last year")])).unwrap_err();
        assert!(err.to_string().contains(REFERENCE_YEAR_VAR));
    }
}
