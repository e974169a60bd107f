//! Swimlane DOM - Document Object Model
//!
//! Arena-backed element tree read by layout and navigation.

mod classlist;
mod document;
mod geometry;
mod node;
mod style;
mod tree;

pub use classlist::ClassList;
pub use document::{Document, FocusEvent};
pub use geometry::{DOMRect, ElementGeometry};
pub use node::{ElementData, Node, NodeData};
pub use style::InlineStyle;
pub use tree::DomTree;

use std::fmt;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Position in the arena
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// DOM error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("Node {child} cannot be appended to {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}
