//! Trip list coordination for the Big Trip itinerary page.
//!
//! This crate owns everything between the points model and the rendered list
//! of trip points: ordering the points by the active sort criterion, creating
//! and tearing down one item presenter per point, translating user intent into
//! model mutations, and deciding how much of the page to rebuild when the
//! model reports a change. Rendering targets an in-memory node tree
//! ([`dom::Document`]) so the whole flow runs and tests without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`presenter`] | Coordination presenter ([`presenter::TripPresenter`]) |
//! | [`item`] | Item presenter contract: context, intents, inputs, factory |
//! | [`point_presenter`] | Default item presenter (display / edit modes) |
//! | [`model`] | Observable points model plus offers and destinations reference data |
//! | [`point`] | Point, offer and destination types |
//! | [`sort`] | Sort policy |
//! | [`view`] | Stateless view templates |
//! | [`dom`] | Node tree with `render` / `replace` / `remove` |
//! | [`consts`] | Sort, update, action and filter tags |

pub mod consts;
pub mod dom;
pub mod item;
pub mod model;
pub mod point;
pub mod point_presenter;
pub mod presenter;
pub mod sort;
pub mod view;
