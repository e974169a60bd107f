//! Client rects
//!
//! What `getBoundingClientRect` reports: the laid-out box moved by every
//! translation on the element and its ancestors. Computed on each call;
//! the result goes stale as soon as any container slides.

use swim_css::{read_translation, Translate3d};
use swim_dom::{DOMRect, Document, NodeId};

/// Sum of the translations applied to `id` and its ancestors
pub fn accumulated_translation(doc: &Document, id: NodeId) -> Translate3d {
    std::iter::once(id)
        .chain(doc.tree().ancestors(id))
        .filter_map(|n| doc.element(n))
        .map(|e| read_translation(&e.style))
        .fold(Translate3d::ZERO, |acc, t| {
            Translate3d::new(acc.x + t.x, acc.y + t.y, acc.z + t.z)
        })
}

/// Viewport-relative box of an element, or None if `id` is not an element
pub fn client_rect(doc: &Document, id: NodeId) -> Option<DOMRect> {
    let geometry = doc.element(id)?.geometry;
    let shift = accumulated_translation(doc, id);
    Some(geometry.offset_rect().translated(shift.x, shift.y))
}
