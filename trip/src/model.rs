//! Models: the observable points collection and read-only reference data.
//!
//! DESIGN
//! ======
//! `PointsModel` owns the canonical list of points. Observers register
//! explicitly and receive every change as a [`ModelEvent`] on their own
//! unbounded channel; registration returns an [`ObserverId`] that is the only
//! handle for unsubscribing. Sending never blocks and never re-enters the
//! observer, so a presenter may call a mutation from inside its own handler
//! and pick the resulting event up on its next drain.
//!
//! Each accepted mutation emits exactly one event tagged with the caller's
//! [`UpdateType`]. A rejected mutation emits nothing.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::cell::{Cell, RefCell};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

use crate::consts::UpdateType;
use crate::point::{Destination, Offer, OffersByType, Point, PointId, PointType};

/// Error returned when the points model refuses a mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Update or delete referenced a point the model does not hold.
    #[error("point {0} not found")]
    PointNotFound(PointId),
    /// Add referenced an id the model already holds.
    #[error("point {0} already exists")]
    DuplicatePoint(PointId),
}

/// Notification delivered to observers after an accepted mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEvent {
    pub update_type: UpdateType,
    pub point: Point,
}

/// Receiving end of an observer registration.
pub type ModelEvents = mpsc::UnboundedReceiver<ModelEvent>;

/// Registration handle returned by [`PointsModel::add_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

// =============================================================================
// POINTS
// =============================================================================

/// Observable, in-memory collection of points.
#[derive(Default)]
pub struct PointsModel {
    points: RefCell<Vec<Point>>,
    observers: RefCell<Vec<(ObserverId, mpsc::UnboundedSender<ModelEvent>)>>,
    next_observer: Cell<u64>,
}

impl PointsModel {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points: RefCell::new(points), ..Self::default() }
    }

    /// Snapshot of the current points, in storage order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.points.borrow().clone()
    }

    /// Point with `id`, if present.
    #[must_use]
    pub fn point(&self, id: &PointId) -> Option<Point> {
        self.points.borrow().iter().find(|p| &p.id == id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.borrow().is_empty()
    }

    /// Register an observer. Every later change is delivered on the returned
    /// receiver until [`remove_observer`](Self::remove_observer) is called or
    /// the receiver is dropped.
    pub fn add_observer(&self) -> (ObserverId, ModelEvents) {
        let id = ObserverId(self.next_observer.get());
        self.next_observer.set(id.0 + 1);
        let (tx, rx) = mpsc::unbounded_channel();
        self.observers.borrow_mut().push((id, tx));
        debug!(observer = id.0, "observer registered");
        (id, rx)
    }

    /// Unregister an observer. Returns `false` if it was not registered.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(observer, _)| *observer != id);
        before != observers.len()
    }

    /// Number of live observer registrations.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Replace the point with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::PointNotFound`] if no point has `update.id`.
    pub fn update_point(&self, update_type: UpdateType, update: Point) -> Result<(), ModelError> {
        {
            let mut points = self.points.borrow_mut();
            let slot = points
                .iter_mut()
                .find(|p| p.id == update.id)
                .ok_or_else(|| ModelError::PointNotFound(update.id.clone()))?;
            *slot = update.clone();
        }
        self.notify(update_type, update);
        Ok(())
    }

    /// Add a point at the front of the collection. A blank id is replaced with
    /// a fresh UUID before storing.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicatePoint`] if the id is already present.
    pub fn add_point(&self, update_type: UpdateType, mut update: Point) -> Result<(), ModelError> {
        if update.id.is_empty() {
            update.id = PointId::new(Uuid::new_v4().to_string());
        }
        {
            let mut points = self.points.borrow_mut();
            if points.iter().any(|p| p.id == update.id) {
                return Err(ModelError::DuplicatePoint(update.id));
            }
            points.insert(0, update.clone());
        }
        self.notify(update_type, update);
        Ok(())
    }

    /// Remove the point with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::PointNotFound`] if no point has `update.id`.
    pub fn delete_point(&self, update_type: UpdateType, update: Point) -> Result<(), ModelError> {
        let removed = {
            let mut points = self.points.borrow_mut();
            let index = points
                .iter()
                .position(|p| p.id == update.id)
                .ok_or_else(|| ModelError::PointNotFound(update.id.clone()))?;
            points.remove(index)
        };
        self.notify(update_type, removed);
        Ok(())
    }

    fn notify(&self, update_type: UpdateType, point: Point) {
        debug!(?update_type, point_id = %point.id, "notifying observers");
        self.observers.borrow_mut().retain(|(id, tx)| match tx.send(ModelEvent { update_type, point: point.clone() }) {
            Ok(()) => true,
            Err(_) => {
                debug!(observer = id.0, "observer receiver dropped; unregistering");
                false
            }
        });
    }
}

// =============================================================================
// REFERENCE DATA
// =============================================================================

/// Offers available per point type.
#[derive(Debug, Clone, Default)]
pub struct OffersModel {
    offers: Vec<OffersByType>,
}

impl OffersModel {
    #[must_use]
    pub fn new(offers: Vec<OffersByType>) -> Self {
        Self { offers }
    }

    /// All offers available for `kind`. Empty when the type has none.
    #[must_use]
    pub fn offers_for(&self, kind: PointType) -> &[Offer] {
        match self.offers.iter().find(|group| group.kind == kind) {
            Some(group) => &group.offers,
            None => &[],
        }
    }

    /// Offers of `point`'s type that the point has selected, in catalog order.
    #[must_use]
    pub fn selected_for(&self, point: &Point) -> Vec<Offer> {
        self.offers_for(point.kind).iter().filter(|offer| point.offers.contains(&offer.id)).cloned().collect()
    }
}

/// Destinations by id.
#[derive(Debug, Clone, Default)]
pub struct DestinationsModel {
    destinations: Vec<Destination>,
}

impl DestinationsModel {
    #[must_use]
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn all(&self) -> &[Destination] {
        &self.destinations
    }
}

// =============================================================================
// TRIP DATA
// =============================================================================

/// Everything a trip page loads: points plus the reference data they use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripData {
    #[serde(default)]
    pub points: Vec<Point>,
    #[serde(default)]
    pub offers: Vec<OffersByType>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

impl TripData {
    /// Parse trip JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
