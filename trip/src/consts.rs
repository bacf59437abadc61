//! Tags shared across the crate: sort criteria, update severities, user
//! actions and filter types.

#[cfg(test)]
#[path = "consts_test.rs"]
mod consts_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sort::SortError;

/// Sort type used when nothing else has been chosen.
pub const DEFAULT_SORT_TYPE: SortType = SortType::Day;

// ── Sorting ─────────────────────────────────────────────────────

/// Criterion controlling the display order of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// Start date, earliest first.
    #[default]
    Day,
    /// Duration, longest first.
    Time,
    /// Base price, most expensive first.
    Price,
}

impl SortType {
    /// Every supported sort type, in sort-control order.
    pub const ALL: [SortType; 3] = [SortType::Day, SortType::Time, SortType::Price];

    /// Lowercase name used in markup and configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Time => "time",
            Self::Price => "price",
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortType {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "time" => Ok(Self::Time),
            "price" => Ok(Self::Price),
            other => Err(SortError::Unsupported(other.to_string())),
        }
    }
}

// ── Model notifications ─────────────────────────────────────────

/// How much of the view a model change invalidates.
///
/// Variants are ordered by increasing scope of the required re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateType {
    /// One point changed in place; only its presenter re-renders.
    Patch,
    /// List membership changed; rebuild the list, keep the sort type.
    Minor,
    /// Scope changed; rebuild the list and reset the sort type.
    Major,
}

/// Which model mutation a user interaction requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    UpdatePoint,
    AddPoint,
    DeletePoint,
}

// ── Filters ─────────────────────────────────────────────────────

/// Filter context the list is shown under. Selects the empty-state message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    Everything,
    Future,
    Present,
    Past,
}

impl FilterType {
    /// Message shown when no points are visible under this filter.
    #[must_use]
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Everything => "Click New Event to create your first point",
            Self::Future => "There are no future events now",
            Self::Present => "There are no present events now",
            Self::Past => "There are no past events now",
        }
    }
}

/// Error returned when a filter name cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// The name does not map to a [`FilterType`].
    #[error("unsupported filter type: {0:?}")]
    Unsupported(String),
}

impl FromStr for FilterType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "everything" => Ok(Self::Everything),
            "future" => Ok(Self::Future),
            "present" => Ok(Self::Present),
            "past" => Ok(Self::Past),
            other => Err(FilterError::Unsupported(other.to_string())),
        }
    }
}
