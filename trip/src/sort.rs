//! Sort policy: maps a [`SortType`] to a comparator over points.
//!
//! Every comparator breaks ties by point id, so the resulting order depends
//! only on the set of points and never on the order they arrive in.

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

use std::cmp::Ordering;

use crate::consts::SortType;
use crate::point::Point;

/// Error returned when a sort criterion cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The name does not map to a supported [`SortType`].
    #[error("unsupported sort type: {0:?}")]
    Unsupported(String),
}

/// Total order over points for one sort criterion.
pub type Comparator = fn(&Point, &Point) -> Ordering;

/// Comparator for `sort_type`.
#[must_use]
pub fn comparator(sort_type: SortType) -> Comparator {
    match sort_type {
        SortType::Day => by_day,
        SortType::Time => by_time,
        SortType::Price => by_price,
    }
}

/// Return a new vector holding `points` in `sort_type` order. The input is
/// left untouched.
#[must_use]
pub fn sort_points(sort_type: SortType, points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_by(comparator(sort_type));
    sorted
}

fn by_day(a: &Point, b: &Point) -> Ordering {
    a.date_from.cmp(&b.date_from).then_with(|| a.id.cmp(&b.id))
}

// Longest first.
fn by_time(a: &Point, b: &Point) -> Ordering {
    b.duration().cmp(&a.duration()).then_with(|| a.id.cmp(&b.id))
}

// Most expensive first.
fn by_price(a: &Point, b: &Point) -> Ordering {
    b.base_price.cmp(&a.base_price).then_with(|| a.id.cmp(&b.id))
}
