//! Document
//!
//! Owns the tree plus the single focused element. Focus changes are queued
//! as events so observers (tile previews and the like) can react to them
//! without the navigation code knowing they exist.

use crate::{DomError, DomTree, ElementData, NodeId};

/// Focus transition observed on an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    Focus(NodeId),
    Blur(NodeId),
}

/// A document: tree + focus state
#[derive(Debug, Default)]
pub struct Document {
    tree: DomTree,
    focused: Option<NodeId>,
    focus_events: Vec<FocusEvent>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Create a detached element with the given classes
    pub fn create_element(&mut self, tag: &str, classes: &[&str]) -> NodeId {
        let id = self.tree.create_element(tag);
        if let Some(el) = self.tree.element_mut(id) {
            for class in classes {
                el.classes.add(class);
            }
        }
        id
    }

    /// Create an element and append it to `parent`
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        classes: &[&str],
    ) -> Result<NodeId, DomError> {
        let id = self.create_element(tag, classes);
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    /// Create a text node and append it to `parent`
    pub fn append_text(&mut self, parent: NodeId, content: &str) -> Result<NodeId, DomError> {
        let id = self.tree.create_text(content);
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.element(id)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.tree.element_mut(id)
    }

    /// Element with the given id attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|&n| self.element(n).and_then(|e| e.id.as_deref()) == Some(id))
    }

    /// All elements in document order
    pub fn elements(&self) -> Vec<NodeId> {
        self.tree
            .descendants(NodeId::ROOT)
            .into_iter()
            .filter(|&n| self.tree.element(n).is_some())
            .collect()
    }

    /// Elements whose tag is one of `tags`, in document order
    pub fn elements_by_tags(&self, tags: &[&str]) -> Vec<NodeId> {
        self.elements()
            .into_iter()
            .filter(|&n| {
                self.element(n)
                    .is_some_and(|e| tags.iter().any(|t| t.eq_ignore_ascii_case(&e.tag)))
            })
            .collect()
    }

    /// Nearest element carrying `class`, walking up from `id`.
    ///
    /// `inclusive` decides whether `id` itself may match.
    pub fn closest_with_class(&self, id: NodeId, class: &str, inclusive: bool) -> Option<NodeId> {
        let start = inclusive.then_some(id);
        start
            .into_iter()
            .chain(self.tree.ancestors(id))
            .find(|&n| self.element(n).is_some_and(|e| e.has_class(class)))
    }

    /// Currently focused element
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    /// Move focus to an element, blurring the previous one
    pub fn focus(&mut self, id: NodeId) -> Result<(), DomError> {
        if self.tree.get(id).is_none() {
            return Err(DomError::UnknownNode(id));
        }
        if self.tree.element(id).is_none() {
            return Err(DomError::NotAnElement(id));
        }
        if self.focused == Some(id) {
            return Ok(());
        }

        self.blur();
        self.focused = Some(id);
        self.focus_events.push(FocusEvent::Focus(id));
        tracing::trace!(node = %id, "focus");
        Ok(())
    }

    /// Drop focus entirely
    pub fn blur(&mut self) {
        if let Some(old) = self.focused.take() {
            self.focus_events.push(FocusEvent::Blur(old));
        }
    }

    /// Take the focus events queued since the last call
    pub fn drain_focus_events(&mut self) -> Vec<FocusEvent> {
        std::mem::take(&mut self.focus_events)
    }
}
