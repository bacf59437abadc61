//! Item presenter contract: what the coordination presenter hands to each
//! per-point presenter, and what it expects back.
//!
//! DESIGN
//! ======
//! An item presenter never calls into its owner. It reports through an
//! [`IntentSender`] captured at construction; the owner drains the queue after
//! the presenter returns. This keeps the owner free to borrow its registry
//! mutably while an item handles input, and gives the "report upward" and
//! "entered edit mode" callbacks a single ordered channel.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::rc::Rc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::consts::{UpdateType, UserAction};
use crate::dom::{Document, DomError, NodeId};
use crate::model::{DestinationsModel, OffersModel};
use crate::point::{Point, PointId};

/// Which of its two views an item presenter is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Display,
    Edit,
}

/// Something an item presenter reports to its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemIntent {
    /// The user asked for a model mutation.
    DataChange { action: UserAction, update_type: UpdateType, point: Point },
    /// The presenter for this point switched to edit mode.
    EditModeEntered(PointId),
}

/// Receiving end of the intent channel, held by the owner.
pub type ItemIntents = mpsc::UnboundedReceiver<ItemIntent>;

/// Sending end of the intent channel, cloned into every item context.
#[derive(Debug, Clone)]
pub struct IntentSender {
    tx: mpsc::UnboundedSender<ItemIntent>,
}

impl IntentSender {
    /// Create a connected sender/receiver pair.
    #[must_use]
    pub fn channel() -> (Self, ItemIntents) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Report a requested model mutation.
    pub fn data_change(&self, action: UserAction, update_type: UpdateType, point: Point) {
        self.send(ItemIntent::DataChange { action, update_type, point });
    }

    /// Report that `id` has switched to edit mode.
    pub fn edit_mode_entered(&self, id: PointId) {
        self.send(ItemIntent::EditModeEntered(id));
    }

    fn send(&self, intent: ItemIntent) {
        if let Err(e) = self.tx.send(intent) {
            debug!(intent = ?e.0, "intent dropped; owner is gone");
        }
    }
}

/// User input an item presenter understands.
#[derive(Debug, Clone, PartialEq)]
pub enum PointInput {
    /// Rollup button on the card.
    OpenEditor,
    /// Rollup button on the form.
    CloseEditor,
    /// Escape key while editing.
    Escape,
    /// Favorite star on the card.
    ToggleFavorite,
    /// Form submitted with the edited point.
    Submit(Point),
    /// Delete button on the form.
    Delete,
}

/// Everything an item presenter receives at construction.
#[derive(Debug, Clone)]
pub struct ItemContext {
    pub document: Document,
    /// List node the presenter renders into.
    pub container: NodeId,
    pub offers: Rc<OffersModel>,
    pub destinations: Rc<DestinationsModel>,
    pub intents: IntentSender,
}

/// A presenter for one point.
pub trait ItemPresenter {
    /// Render `point`, or re-render in place if already rendered. Keeps the
    /// current display mode.
    ///
    /// # Errors
    ///
    /// Propagates document errors.
    fn init(&mut self, point: Point) -> Result<(), DomError>;

    /// Return to display mode. A no-op when already there.
    ///
    /// # Errors
    ///
    /// Propagates document errors.
    fn reset_view(&mut self) -> Result<(), DomError>;

    /// Remove everything this presenter rendered.
    ///
    /// # Errors
    ///
    /// Propagates document errors.
    fn destroy(&mut self) -> Result<(), DomError>;

    /// Handle one user input.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotRendered`] before `init`, or a document error.
    fn handle_input(&mut self, input: PointInput) -> Result<(), DomError>;

    /// Current display mode.
    fn mode(&self) -> DisplayMode;
}

/// Builds item presenters for the coordination presenter.
pub trait ItemPresenterFactory {
    type Presenter: ItemPresenter;

    fn create(&self, ctx: ItemContext) -> Self::Presenter;
}
