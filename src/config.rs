//! Application configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use trip::consts::{FilterType, SortType};

pub const DEFAULT_SORT_VAR: &str = "TRIP_DEFAULT_SORT";
pub const FILTER_VAR: &str = "TRIP_FILTER";
pub const POINTS_FILE_VAR: &str = "TRIP_POINTS_FILE";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },
    #[error("no points file; pass --points or set {POINTS_FILE_VAR}")]
    MissingPointsFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub default_sort: SortType,
    pub filter: FilterType,
    pub points_file: Option<PathBuf>,
}

impl AppConfig {
    /// Build config from environment variables. All are optional:
    /// - `TRIP_DEFAULT_SORT`: `day` (default), `time` or `price`
    /// - `TRIP_FILTER`: `everything` (default), `future`, `present` or `past`
    /// - `TRIP_POINTS_FILE`: path to the trip JSON
    pub fn from_env() -> Result<Self, ConfigError> {
        let default_sort = match std::env::var(DEFAULT_SORT_VAR) {
            Ok(raw) => parse_sort(&raw)?,
            Err(_) => SortType::default(),
        };
        let filter = match std::env::var(FILTER_VAR) {
            Ok(raw) => parse_filter(&raw)?,
            Err(_) => FilterType::default(),
        };
        let points_file = std::env::var(POINTS_FILE_VAR).ok().map(PathBuf::from);
        Ok(Self { default_sort, filter, points_file })
    }

    /// Path to load points from.
    pub fn require_points_file(&self) -> Result<&PathBuf, ConfigError> {
        self.points_file.as_ref().ok_or(ConfigError::MissingPointsFile)
    }
}

pub fn parse_sort(raw: &str) -> Result<SortType, ConfigError> {
    raw.parse().map_err(|e: trip::sort::SortError| ConfigError::Invalid { var: DEFAULT_SORT_VAR, message: e.to_string() })
}

pub fn parse_filter(raw: &str) -> Result<FilterType, ConfigError> {
    raw.parse().map_err(|e: trip::consts::FilterError| ConfigError::Invalid { var: FILTER_VAR, message: e.to_string() })
}
