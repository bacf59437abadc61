//! Default item presenter: one point card that can open into an edit form.
//!
//! The presenter owns exactly one node in the list at a time: the card in
//! [`DisplayMode::Display`], the form in [`DisplayMode::Edit`]. Switching
//! modes replaces that node in place so the list order is untouched.

#[cfg(test)]
#[path = "point_presenter_test.rs"]
mod point_presenter_test;

use tracing::debug;

use crate::consts::{UpdateType, UserAction};
use crate::dom::{DomError, NodeId, RenderPosition};
use crate::item::{DisplayMode, ItemContext, ItemPresenter, ItemPresenterFactory, PointInput};
use crate::point::Point;
use crate::view::{EditPointView, PointView};

pub struct PointPresenter {
    ctx: ItemContext,
    point: Option<Point>,
    node: Option<NodeId>,
    mode: DisplayMode,
}

impl PointPresenter {
    #[must_use]
    pub fn new(ctx: ItemContext) -> Self {
        Self { ctx, point: None, node: None, mode: DisplayMode::Display }
    }

    /// Point currently shown, if initialized.
    #[must_use]
    pub fn point(&self) -> Option<&Point> {
        self.point.as_ref()
    }

    /// Node currently rendered, if any.
    #[must_use]
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    fn point_view(&self, point: &Point) -> PointView {
        PointView {
            point: point.clone(),
            destination: self.ctx.destinations.get(&point.destination).cloned(),
            offers: self.ctx.offers.selected_for(point),
        }
    }

    fn edit_view(&self, point: &Point) -> EditPointView {
        EditPointView {
            point: point.clone(),
            destination: self.ctx.destinations.get(&point.destination).cloned(),
            available_offers: self.ctx.offers.offers_for(point.kind).to_vec(),
            destinations: self.ctx.destinations.all().to_vec(),
        }
    }

    /// Render the view for `mode`, replacing the current node if there is one.
    fn show(&mut self, mode: DisplayMode) -> Result<(), DomError> {
        let point = self.point.as_ref().ok_or(DomError::NotRendered)?;
        let document = &self.ctx.document;
        let node = match (mode, self.node) {
            (DisplayMode::Display, Some(old)) => document.replace(&self.point_view(point), old)?,
            (DisplayMode::Edit, Some(old)) => document.replace(&self.edit_view(point), old)?,
            (DisplayMode::Display, None) => {
                document.render(&self.point_view(point), self.ctx.container, RenderPosition::BeforeEnd)?
            }
            (DisplayMode::Edit, None) => {
                document.render(&self.edit_view(point), self.ctx.container, RenderPosition::BeforeEnd)?
            }
        };
        self.node = Some(node);
        self.mode = mode;
        Ok(())
    }

    fn open_editor(&mut self) -> Result<(), DomError> {
        if self.mode == DisplayMode::Edit {
            return Ok(());
        }
        self.show(DisplayMode::Edit)?;
        if let Some(point) = &self.point {
            debug!(point_id = %point.id, "editor opened");
            self.ctx.intents.edit_mode_entered(point.id.clone());
        }
        Ok(())
    }
}

impl ItemPresenter for PointPresenter {
    fn init(&mut self, point: Point) -> Result<(), DomError> {
        self.point = Some(point);
        self.show(self.mode)
    }

    fn reset_view(&mut self) -> Result<(), DomError> {
        if self.mode == DisplayMode::Display {
            return Ok(());
        }
        self.show(DisplayMode::Display)
    }

    fn destroy(&mut self) -> Result<(), DomError> {
        if let Some(node) = self.node.take() {
            self.ctx.document.remove(node)?;
        }
        self.mode = DisplayMode::Display;
        Ok(())
    }

    fn handle_input(&mut self, input: PointInput) -> Result<(), DomError> {
        let point = self.point.clone().ok_or(DomError::NotRendered)?;
        match input {
            PointInput::OpenEditor => self.open_editor()?,
            PointInput::CloseEditor | PointInput::Escape => self.reset_view()?,
            PointInput::ToggleFavorite => {
                self.ctx.intents.data_change(UserAction::UpdatePoint, UpdateType::Minor, point.with_favorite_toggled());
            }
            PointInput::Submit(update) => {
                self.reset_view()?;
                self.ctx.intents.data_change(UserAction::UpdatePoint, UpdateType::Minor, update);
            }
            PointInput::Delete => {
                self.ctx.intents.data_change(UserAction::DeletePoint, UpdateType::Minor, point);
            }
        }
        Ok(())
    }

    fn mode(&self) -> DisplayMode {
        self.mode
    }
}

/// Factory producing [`PointPresenter`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointPresenterFactory;

impl ItemPresenterFactory for PointPresenterFactory {
    type Presenter = PointPresenter;

    fn create(&self, ctx: ItemContext) -> PointPresenter {
        PointPresenter::new(ctx)
    }
}
