//! Swimlane Layout Engine
//!
//! Box model, flow layout, and the client-rect query that accounts for
//! translated scroll containers.

mod box_model;
mod client;
mod flow;

pub use box_model::BoxDimensions;
pub use client::{accumulated_translation, client_rect};
pub use flow::{layout_document, Viewport};
