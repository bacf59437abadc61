//! Coordination presenter for the trip list.
//!
//! DESIGN
//! ======
//! `TripPresenter` sits between the points model and one item presenter per
//! visible point. It owns the current sort type, the registry of item
//! presenters, and the sort, list and empty-state views it renders.
//!
//! Two queues feed it: model events (registered once at construction) and item
//! intents (one sender cloned into every item context). Handlers never call
//! back into themselves; anything they trigger lands on a queue and is handled
//! by [`TripPresenter::process_pending`], which every input entry point runs
//! before returning. Each entry point therefore runs to completion before the
//! next one starts.
//!
//! Model events map to three rebuild scopes:
//!
//! | Update | Action |
//! |--------|--------|
//! | `Patch` | Re-init the one presenter for the event's point |
//! | `Minor` | Clear the list, keep the sort type, rebuild |
//! | `Major` | Clear the list, reset the sort type, rebuild |
//!
//! A `Patch` for a point with no presenter is a model/view desync and is
//! returned as [`PresenterError::UnknownPoint`].
//!
//! Mutations made on the model directly, outside any presenter entry point,
//! only queue their events. Until the host calls
//! [`TripPresenter::process_pending`] from its event loop the registry and the
//! rendered list still show the previous model state.

#[cfg(test)]
#[path = "presenter_test.rs"]
mod presenter_test;

use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::consts::{DEFAULT_SORT_TYPE, FilterType, SortType, UpdateType, UserAction};
use crate::dom::{Document, DomError, NodeId, RenderPosition};
use crate::item::{DisplayMode, IntentSender, ItemContext, ItemIntent, ItemIntents, ItemPresenter, ItemPresenterFactory, PointInput};
use crate::model::{DestinationsModel, ModelEvent, ModelEvents, ObserverId, OffersModel, PointsModel};
use crate::point::{Point, PointId};
use crate::sort::sort_points;
use crate::view::{NoPointsView, SortView, TripView};

/// Error returned by [`TripPresenter`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresenterError {
    /// An event or input referenced a point with no registered presenter.
    #[error("no presenter registered for point {0}")]
    UnknownPoint(PointId),
    /// `init` was called a second time.
    #[error("trip presenter already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Options for [`TripPresenter::clear_trip`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearOptions {
    /// Return the sort type to the default.
    pub reset_sort_type: bool,
}

/// Collaborators a [`TripPresenter`] is constructed with.
pub struct TripContext {
    pub document: Document,
    /// Node the sort control and list render into.
    pub container: NodeId,
    pub points_model: Rc<PointsModel>,
    pub offers_model: Rc<OffersModel>,
    pub destinations_model: Rc<DestinationsModel>,
}

pub struct TripPresenter<F: ItemPresenterFactory> {
    document: Document,
    container: NodeId,
    points_model: Rc<PointsModel>,
    offers_model: Rc<OffersModel>,
    destinations_model: Rc<DestinationsModel>,
    factory: F,

    filter_type: FilterType,
    default_sort_type: SortType,
    current_sort_type: SortType,
    point_presenters: BTreeMap<PointId, F::Presenter>,

    sort_node: Option<NodeId>,
    trip_node: Option<NodeId>,
    no_points_node: Option<NodeId>,

    observer: Option<ObserverId>,
    model_events: ModelEvents,
    intent_sender: IntentSender,
    intents: ItemIntents,
    initialized: bool,
}

impl<F: ItemPresenterFactory> TripPresenter<F> {
    /// Create a presenter and subscribe it to the points model. Nothing is
    /// rendered until [`init`](Self::init).
    pub fn new(ctx: TripContext, factory: F) -> Self {
        let (observer, model_events) = ctx.points_model.add_observer();
        let (intent_sender, intents) = IntentSender::channel();
        Self {
            document: ctx.document,
            container: ctx.container,
            points_model: ctx.points_model,
            offers_model: ctx.offers_model,
            destinations_model: ctx.destinations_model,
            factory,
            filter_type: FilterType::default(),
            default_sort_type: DEFAULT_SORT_TYPE,
            current_sort_type: DEFAULT_SORT_TYPE,
            point_presenters: BTreeMap::new(),
            sort_node: None,
            trip_node: None,
            no_points_node: None,
            observer: Some(observer),
            model_events,
            intent_sender,
            intents,
            initialized: false,
        }
    }

    /// Use `sort_type` as the default (and initial) sort type.
    #[must_use]
    pub fn with_default_sort(mut self, sort_type: SortType) -> Self {
        self.default_sort_type = sort_type;
        self.current_sort_type = sort_type;
        self
    }

    /// Filter context; selects the empty-state message.
    #[must_use]
    pub fn with_filter(mut self, filter_type: FilterType) -> Self {
        self.filter_type = filter_type;
        self
    }

    // --- Queries ---

    /// Model points in the current sort order, recomputed on every call.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        sort_points(self.current_sort_type, &self.points_model.points())
    }

    #[must_use]
    pub fn current_sort_type(&self) -> SortType {
        self.current_sort_type
    }

    #[must_use]
    pub fn default_sort_type(&self) -> SortType {
        self.default_sort_type
    }

    /// Ids with a registered item presenter.
    #[must_use]
    pub fn registered_ids(&self) -> Vec<PointId> {
        self.point_presenters.keys().cloned().collect()
    }

    /// Registered presenter for `id`.
    #[must_use]
    pub fn presenter(&self, id: &PointId) -> Option<&F::Presenter> {
        self.point_presenters.get(id)
    }

    /// Ids whose presenter is in edit mode. At most one after any entry point returns.
    #[must_use]
    pub fn editing(&self) -> Vec<PointId> {
        self.point_presenters
            .iter()
            .filter(|(_, presenter)| presenter.mode() == DisplayMode::Edit)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Whether the empty-state message is currently rendered.
    #[must_use]
    pub fn shows_empty_state(&self) -> bool {
        self.no_points_node.is_some()
    }

    /// List container node, once rendered.
    #[must_use]
    pub fn list_node(&self) -> Option<NodeId> {
        self.trip_node
    }

    /// Sort control node, once rendered.
    #[must_use]
    pub fn sort_node(&self) -> Option<NodeId> {
        self.sort_node
    }

    // --- Entry points ---

    /// Render the sort control and the list. Call exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`PresenterError::AlreadyInitialized`] on a second call, or a
    /// rendering error.
    pub fn init(&mut self) -> Result<(), PresenterError> {
        if self.initialized {
            return Err(PresenterError::AlreadyInitialized);
        }
        self.initialized = true;
        self.render_sort()?;
        self.render_trip()?;
        info!(
            points = self.points_model.len(),
            rendered = self.point_presenters.len(),
            sort = %self.current_sort_type,
            "trip rendered"
        );
        Ok(())
    }

    /// Route a user input to the presenter for `id`, then drain the queues.
    ///
    /// # Errors
    ///
    /// Returns [`PresenterError::UnknownPoint`] if `id` has no presenter, or
    /// any error raised while handling the resulting intents and events.
    pub fn dispatch(&mut self, id: &PointId, input: PointInput) -> Result<(), PresenterError> {
        let presenter = self.point_presenters.get_mut(id).ok_or_else(|| PresenterError::UnknownPoint(id.clone()))?;
        debug!(point_id = %id, ?input, "dispatching input");
        presenter.handle_input(input)?;
        self.process_pending()
    }

    /// Sort control click: change the sort type, then drain the queues.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors.
    pub fn click_sort(&mut self, sort_type: SortType) -> Result<(), PresenterError> {
        self.handle_sort_type_change(sort_type)?;
        self.process_pending()
    }

    /// Handle queued item intents and model events until both queues are empty.
    /// Intents go first so a mutation's notification is seen after the intent
    /// that caused it.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first handler error.
    pub fn process_pending(&mut self) -> Result<(), PresenterError> {
        loop {
            if let Ok(intent) = self.intents.try_recv() {
                self.handle_intent(intent)?;
                continue;
            }
            match self.model_events.try_recv() {
                Ok(event) => self.handle_model_event(event)?,
                Err(_) => return Ok(()),
            }
        }
    }

    // --- Handlers ---

    /// Forward a user intent to the matching model mutation. No local state
    /// changes; a rejected mutation is logged and leaves the view as it is.
    pub fn handle_view_action(&self, action: UserAction, update_type: UpdateType, update: Point) {
        debug!(?action, ?update_type, point_id = %update.id, "view action");
        let point_id = update.id.clone();
        let result = match action {
            UserAction::UpdatePoint => self.points_model.update_point(update_type, update),
            UserAction::AddPoint => self.points_model.add_point(update_type, update),
            UserAction::DeletePoint => self.points_model.delete_point(update_type, update),
        };
        if let Err(e) = result {
            warn!(error = %e, ?action, %point_id, "model rejected mutation");
        }
    }

    /// React to a model change at the scope its update type names.
    ///
    /// # Errors
    ///
    /// Returns [`PresenterError::UnknownPoint`] for a `Patch` on a point with
    /// no presenter, or a rendering error.
    pub fn handle_model_event(&mut self, event: ModelEvent) -> Result<(), PresenterError> {
        let ModelEvent { update_type, point } = event;
        debug!(?update_type, point_id = %point.id, "model event");
        match update_type {
            UpdateType::Patch => {
                let presenter = self
                    .point_presenters
                    .get_mut(&point.id)
                    .ok_or_else(|| PresenterError::UnknownPoint(point.id.clone()))?;
                presenter.init(point)?;
            }
            UpdateType::Minor => {
                self.clear_trip(ClearOptions::default())?;
                self.render_trip()?;
            }
            UpdateType::Major => {
                self.clear_trip(ClearOptions { reset_sort_type: true })?;
                self.render_sort()?;
                self.render_trip()?;
            }
        }
        Ok(())
    }

    /// Put every presenter except `active` back into display mode.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors.
    pub fn handle_display_mode_change(&mut self, active: Option<&PointId>) -> Result<(), PresenterError> {
        for (id, presenter) in &mut self.point_presenters {
            if Some(id) == active {
                continue;
            }
            presenter.reset_view()?;
        }
        Ok(())
    }

    /// Re-sort and rebuild the list under `sort_type`. A no-op when it is
    /// already the current sort type.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors.
    pub fn handle_sort_type_change(&mut self, sort_type: SortType) -> Result<(), PresenterError> {
        if self.current_sort_type == sort_type {
            return Ok(());
        }
        debug!(from = %self.current_sort_type, to = %sort_type, "sort type changed");
        self.current_sort_type = sort_type;
        self.render_sort()?;
        self.clear_trip(ClearOptions::default())?;
        self.render_trip()?;
        Ok(())
    }

    // --- Child lifecycle ---

    /// Destroy every item presenter and the empty-state view. The only path
    /// that tears item presenters down.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors.
    pub fn clear_trip(&mut self, options: ClearOptions) -> Result<(), PresenterError> {
        for (_, mut presenter) in std::mem::take(&mut self.point_presenters) {
            presenter.destroy()?;
        }
        if let Some(node) = self.no_points_node.take() {
            self.document.remove(node)?;
        }
        if options.reset_sort_type {
            self.current_sort_type = self.default_sort_type;
        }
        Ok(())
    }

    /// Tear down everything this presenter rendered and unsubscribe from the
    /// model. Safe to call more than once; also runs on drop.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors.
    pub fn destroy(&mut self) -> Result<(), PresenterError> {
        if let Some(observer) = self.observer.take() {
            self.points_model.remove_observer(observer);
        }
        self.clear_trip(ClearOptions::default())?;
        for node in [self.trip_node.take(), self.sort_node.take()].into_iter().flatten() {
            self.document.remove(node)?;
        }
        Ok(())
    }

    fn handle_intent(&mut self, intent: ItemIntent) -> Result<(), PresenterError> {
        match intent {
            ItemIntent::DataChange { action, update_type, point } => {
                self.handle_view_action(action, update_type, point);
                Ok(())
            }
            ItemIntent::EditModeEntered(id) => self.handle_display_mode_change(Some(&id)),
        }
    }

    // --- Rendering ---

    fn render_sort(&mut self) -> Result<(), DomError> {
        let view = SortView { current: self.current_sort_type };
        let node = match self.sort_node {
            Some(prev) => self.document.replace(&view, prev)?,
            None => self.document.render(&view, self.container, RenderPosition::AfterBegin)?,
        };
        self.sort_node = Some(node);
        Ok(())
    }

    fn render_trip(&mut self) -> Result<(), DomError> {
        let list = match self.trip_node {
            Some(node) => node,
            None => {
                let node = self.document.render(&TripView, self.container, RenderPosition::BeforeEnd)?;
                self.trip_node = Some(node);
                node
            }
        };

        if self.points_model.is_empty() {
            self.render_no_points(list)?;
            return Ok(());
        }
        for point in self.points() {
            self.render_point(list, point)?;
        }
        Ok(())
    }

    fn render_point(&mut self, list: NodeId, point: Point) -> Result<(), DomError> {
        let ctx = ItemContext {
            document: self.document.clone(),
            container: list,
            offers: Rc::clone(&self.offers_model),
            destinations: Rc::clone(&self.destinations_model),
            intents: self.intent_sender.clone(),
        };
        let mut presenter = self.factory.create(ctx);
        let id = point.id.clone();
        presenter.init(point)?;
        if let Some(mut stale) = self.point_presenters.insert(id.clone(), presenter) {
            warn!(point_id = %id, "duplicate point id in model; replacing presenter");
            stale.destroy()?;
        }
        Ok(())
    }

    fn render_no_points(&mut self, list: NodeId) -> Result<(), DomError> {
        let node = self.document.render(&NoPointsView { filter: self.filter_type }, list, RenderPosition::BeforeEnd)?;
        self.no_points_node = Some(node);
        Ok(())
    }
}

impl<F: ItemPresenterFactory> Drop for TripPresenter<F> {
    fn drop(&mut self) {
        if let Err(e) = self.destroy() {
            warn!(error = %e, "trip presenter teardown failed");
        }
    }
}
