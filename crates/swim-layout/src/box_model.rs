//! CSS Box Model

use swim_css::Edges;
use swim_dom::{DOMRect, ElementGeometry};

/// Box dimensions (no padding or borders in this engine)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxDimensions {
    pub content: DOMRect,
    pub margin: Edges,
}

impl BoxDimensions {
    /// Get the area covered by content + margin
    pub fn margin_box(&self) -> DOMRect {
        DOMRect {
            x: self.content.x - self.margin.left,
            y: self.content.y - self.margin.top,
            width: self.content.width + self.margin.left + self.margin.right,
            height: self.content.height + self.margin.top + self.margin.bottom,
        }
    }

    /// What the element keeps after layout
    pub fn to_geometry(&self) -> ElementGeometry {
        ElementGeometry {
            offset_left: self.content.x,
            offset_top: self.content.y,
            offset_width: self.content.width,
            offset_height: self.content.height,
            margin_top: self.margin.top,
            margin_right: self.margin.right,
            margin_bottom: self.margin.bottom,
            margin_left: self.margin.left,
        }
    }
}
