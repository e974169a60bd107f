//! Flow layout
//!
//! Block elements stack their children and fill the available width. Row
//! elements put children side by side; a row is allowed to overflow the
//! viewport, which is what makes it a horizontal scroll container.

use swim_css::{Display, StyleResolver};
use swim_dom::{DOMRect, Document, NodeId};

use crate::BoxDimensions;

/// Visible window size in px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Lay out every element of the document, writing each element's geometry.
///
/// Coordinates are document coordinates; translations are not applied here.
pub fn layout_document(doc: &mut Document, resolver: &StyleResolver, viewport: Viewport) {
    let roots = doc.tree().children(NodeId::ROOT).to_vec();
    let mut y = 0.0;
    for child in roots {
        if doc.element(child).is_some() {
            y += layout_element(doc, resolver, child, 0.0, y, viewport.width).height;
        }
    }
    tracing::debug!(height = y, width = viewport.width, "layout done");
}

/// Returns the margin box of the laid-out element.
fn layout_element(
    doc: &mut Document,
    resolver: &StyleResolver,
    id: NodeId,
    x: f64,
    y: f64,
    available_width: f64,
) -> DOMRect {
    let Some(style) = doc.element(id).map(|e| resolver.resolve(&e.classes)) else {
        return DOMRect::from_xywh(x, y, 0.0, 0.0);
    };

    let mut dims = BoxDimensions {
        margin: style.margin,
        ..Default::default()
    };

    if style.display != Display::None {
        let content_x = x + style.margin.left;
        let content_y = y + style.margin.top;
        let width = style
            .width
            .unwrap_or(available_width - style.margin.left - style.margin.right)
            .max(0.0);

        let children: Vec<NodeId> = doc
            .tree()
            .children(id)
            .iter()
            .copied()
            .filter(|&c| doc.element(c).is_some())
            .collect();

        let mut content_height: f64 = 0.0;
        match style.display {
            Display::Row => {
                let mut cx = content_x;
                for child in children {
                    let child_box = layout_element(doc, resolver, child, cx, content_y, width);
                    cx += child_box.width;
                    content_height = content_height.max(child_box.height);
                }
            }
            _ => {
                let mut cy = content_y;
                for child in children {
                    cy += layout_element(doc, resolver, child, content_x, cy, width).height;
                }
                content_height = cy - content_y;
            }
        }

        dims.content = DOMRect::from_xywh(
            content_x,
            content_y,
            width,
            style.height.unwrap_or(content_height),
        );
    } else {
        dims.content = DOMRect::from_xywh(x, y, 0.0, 0.0);
        dims.margin = Default::default();
    }

    if let Some(el) = doc.element_mut(id) {
        el.geometry = dims.to_geometry();
    }
    dims.margin_box()
}
