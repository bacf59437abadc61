//! Point model: itinerary entries and the reference data they point at.
//!
//! `Point` is the record the list displays and edits. `Offer` and
//! `Destination` are read-only reference data looked up by identifier when a
//! point is rendered. All types round-trip through the trip JSON format, which
//! uses camelCase field names and RFC 3339 timestamps.

#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

/// Identifier of an offer.
pub type OfferId = String;

/// Identifier of a destination.
pub type DestinationId = String;

/// Unique identifier of a point.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(String);

impl PointId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is blank (a point that has not been assigned one yet).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PointId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PointId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Kind of travel or activity a point represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointType {
    Taxi,
    Bus,
    Train,
    Ship,
    Drive,
    #[default]
    Flight,
    CheckIn,
    Sightseeing,
    Restaurant,
}

impl PointType {
    pub const ALL: [PointType; 9] = [
        PointType::Taxi,
        PointType::Bus,
        PointType::Train,
        PointType::Ship,
        PointType::Drive,
        PointType::Flight,
        PointType::CheckIn,
        PointType::Sightseeing,
        PointType::Restaurant,
    ];

    /// Name used in markup (`check-in`, `sightseeing`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Taxi => "taxi",
            Self::Bus => "bus",
            Self::Train => "train",
            Self::Ship => "ship",
            Self::Drive => "drive",
            Self::Flight => "flight",
            Self::CheckIn => "check-in",
            Self::Sightseeing => "sightseeing",
            Self::Restaurant => "restaurant",
        }
    }

    /// Human-readable label with a leading capital (`Check-in`).
    #[must_use]
    pub fn label(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// A single itinerary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    /// Unique identifier. Blank for a point not yet added to the model.
    pub id: PointId,
    /// Start of the point.
    #[serde(with = "time::serde::rfc3339")]
    pub date_from: OffsetDateTime,
    /// End of the point.
    #[serde(with = "time::serde::rfc3339")]
    pub date_to: OffsetDateTime,
    /// Travel or activity kind.
    #[serde(rename = "type")]
    pub kind: PointType,
    /// Price before offers.
    pub base_price: u32,
    /// Offers selected for this point.
    #[serde(default)]
    pub offers: Vec<OfferId>,
    /// Destination this point refers to.
    pub destination: DestinationId,
    /// Whether the point is marked as favorite.
    #[serde(default)]
    pub is_favorite: bool,
}

impl Point {
    /// Time between start and end. Negative when the range is inverted.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.date_to - self.date_from
    }

    /// Copy of this point with the favorite flag flipped.
    #[must_use]
    pub fn with_favorite_toggled(&self) -> Self {
        Self { is_favorite: !self.is_favorite, ..self.clone() }
    }
}

/// An optional extra that can be attached to a point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    pub price: u32,
}

/// Offers available for one point type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffersByType {
    #[serde(rename = "type")]
    pub kind: PointType,
    pub offers: Vec<Offer>,
}

/// Photo attached to a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub src: String,
    pub description: String,
}

/// A place a point can refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pictures: Vec<Picture>,
}
