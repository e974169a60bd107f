//! Swimlane Spatial Navigation
//!
//! Moves focus across a 2-D grid of tiles with four directional inputs and
//! slides scroll containers so the newly focused tile is on screen.
//!
//! Flow of one key press:
//! - [`NavigationController`] drops the key if the input throttle is armed
//! - [`ranker`] picks the nearest tile strictly ahead in that direction
//! - the tile is focused through the [`LayoutProvider`]
//! - [`scroller`] slides the tile's scroll container if the tile is off screen

mod controller;
mod direction;
mod provider;
pub mod ranker;
pub mod scroller;

pub use controller::{KeyOutcome, NavigationController, NavigationOutcome, ThrottleState, THROTTLE_WINDOW};
pub use direction::{Axis, Direction};
pub use provider::{LayoutProvider, Margins, StructuralTag};
pub use ranker::{Candidate, Point, Selection};
pub use scroller::{bring_into_view, ScrollOutcome};

/// Navigation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Nothing on the page can take focus, so there is nowhere to start
    #[error("No focusable element to establish initial focus")]
    NoFocusableOnBootstrap,

    /// The layout lacks a structural ancestor the scroller needs
    #[error("No {tag} ancestor for element {element}")]
    MissingAncestor { tag: StructuralTag, element: String },
}
