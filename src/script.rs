//! Scripted sessions: a JSON list of user steps replayed against a presenter.
//!
//! ```json
//! [
//!   { "op": "open", "id": "p1" },
//!   { "op": "favorite", "id": "p2" },
//!   { "op": "sort", "sort": "price" },
//!   { "op": "delete", "id": "p1" }
//! ]
//! ```

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use serde::Deserialize;
use tracing::info;
use trip::consts::{SortType, UpdateType, UserAction};
use trip::item::{ItemPresenterFactory, PointInput};
use trip::point::{Point, PointId};
use trip::presenter::{PresenterError, TripPresenter};

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Open the editor for a point.
    Open { id: PointId },
    /// Close the editor with the rollup button.
    Close { id: PointId },
    /// Press Escape in the editor.
    Escape { id: PointId },
    /// Toggle the favorite star.
    Favorite { id: PointId },
    /// Submit the edit form with a replacement point.
    Submit { point: Point },
    /// Delete a point from its edit form.
    Delete { id: PointId },
    /// Create a new point.
    Add { point: Point },
    /// Click a sort column.
    Sort { sort: SortType },
}

/// Parse a script.
pub fn parse(raw: &str) -> Result<Vec<Step>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Apply one step and drain the resulting intents and model events.
pub fn apply<F: ItemPresenterFactory>(presenter: &mut TripPresenter<F>, step: Step) -> Result<(), PresenterError> {
    info!(?step, "applying step");
    match step {
        Step::Open { id } => presenter.dispatch(&id, PointInput::OpenEditor),
        Step::Close { id } => presenter.dispatch(&id, PointInput::CloseEditor),
        Step::Escape { id } => presenter.dispatch(&id, PointInput::Escape),
        Step::Favorite { id } => presenter.dispatch(&id, PointInput::ToggleFavorite),
        Step::Submit { point } => {
            let id = point.id.clone();
            presenter.dispatch(&id, PointInput::Submit(point))
        }
        Step::Delete { id } => presenter.dispatch(&id, PointInput::Delete),
        Step::Add { point } => {
            presenter.handle_view_action(UserAction::AddPoint, UpdateType::Minor, point);
            presenter.process_pending()
        }
        Step::Sort { sort } => presenter.click_sort(sort),
    }
}
