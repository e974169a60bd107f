//! Viewport scroller
//!
//! Scroll containers never scroll natively. They are translated, and the
//! translation only ever moves by whole element spans: a target hanging
//! off the leading edge slides the container forward one span (never past
//! the origin), a target off the trailing edge slides it back one span.
//!
//! Translations stay at or below zero on the leading side. The trailing
//! side is not clamped against the content extent, so a short row can be
//! slid into empty space.

use crate::{Axis, Direction, LayoutProvider, Margins, NavError, StructuralTag};

/// Result of bringing an element into view
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    /// Already fully inside the viewport, nothing written
    Visible,
    /// Container translation changed along the navigation axis
    Slid { from: f64, to: f64 },
    /// Neither inside nor off either edge; nothing written
    Unreachable,
}

/// The decision for one axis, before anything is written
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slide {
    Visible,
    Leading(f64),
    Trailing(f64),
    Unreachable,
}

/// Decide how a container translated by `current` must move so the span
/// `[start, end]` (plus margins) is visible in a viewport of `viewport` px.
///
/// `start` and `end` are viewport-relative, i.e. already translated.
pub fn plan_slide(current: f64, viewport: f64, start: f64, end: f64, margins: Margins) -> Slide {
    let scrolled = current.abs();
    let viewport_min = scrolled;
    let viewport_max = scrolled + viewport;

    let elem_min = start - margins.start;
    let elem_max = end + margins.end;
    let elem_span = margins.start + (end - start) + margins.end;

    if elem_min + scrolled >= viewport_min && elem_max + scrolled <= viewport_max {
        Slide::Visible
    } else if elem_min + scrolled < viewport_min {
        Slide::Leading((current + elem_span).min(0.0))
    } else if elem_max + scrolled > viewport_max {
        Slide::Trailing(current - elem_span)
    } else {
        Slide::Unreachable
    }
}

/// Slide the scroll container of `target` so it becomes visible.
///
/// Left/right measure the target itself inside its nearest `scrollable-x`
/// ancestor. Up/down measure the target's focus group (so the row header
/// comes along) inside the nearest `scrollable-y` ancestor of the target.
pub fn bring_into_view<P: LayoutProvider>(
    provider: &mut P,
    target: P::Element,
    direction: Direction,
) -> Result<ScrollOutcome, NavError> {
    let axis = direction.axis();
    let (measured, container) = match axis {
        Axis::Horizontal => (target, ancestor(provider, target, StructuralTag::ScrollableX, false)?),
        Axis::Vertical => (
            ancestor(provider, target, StructuralTag::FocusGroup, true)?,
            ancestor(provider, target, StructuralTag::ScrollableY, false)?,
        ),
    };

    let rect = provider.bounding_box(measured);
    let margins = provider.margins(measured, axis);
    let current = axis.component(provider.translation(container));
    let (start, end) = match axis {
        Axis::Horizontal => (rect.left(), rect.right()),
        Axis::Vertical => (rect.top(), rect.bottom()),
    };

    let to = match plan_slide(current, provider.viewport_size(axis), start, end, margins) {
        Slide::Visible => return Ok(ScrollOutcome::Visible),
        Slide::Leading(to) | Slide::Trailing(to) => to,
        Slide::Unreachable => {
            tracing::error!(?target, %direction, start, end, current, "navigation failed");
            return Ok(ScrollOutcome::Unreachable);
        }
    };

    provider.set_translation(container, axis.translation(to));
    tracing::debug!(?container, from = current, to, "slid scroll container");
    Ok(ScrollOutcome::Slid { from: current, to })
}

fn ancestor<P: LayoutProvider>(
    provider: &P,
    element: P::Element,
    tag: StructuralTag,
    inclusive: bool,
) -> Result<P::Element, NavError> {
    provider
        .nearest_ancestor_with_tag(element, tag, inclusive)
        .ok_or_else(|| NavError::MissingAncestor {
            tag,
            element: format!("{element:?}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: Margins = Margins { start: 8.0, end: 8.0 };

    #[test]
    fn test_visible_is_untouched() {
        assert_eq!(plan_slide(0.0, 1280.0, 8.0, 327.0, TILE), Slide::Visible);
        assert_eq!(plan_slide(-335.0, 1280.0, 8.0, 327.0, TILE), Slide::Visible);
        // touching both edges exactly still counts as visible
        assert_eq!(plan_slide(0.0, 335.0, 8.0, 327.0, TILE), Slide::Visible);
    }

    #[test]
    fn test_trailing_edge_slides_back_one_span() {
        // right edge at 1332 + 8 margin > 1280
        assert_eq!(plan_slide(0.0, 1280.0, 1013.0, 1332.0, TILE), Slide::Trailing(-335.0));
        assert_eq!(plan_slide(-335.0, 1280.0, 1013.0, 1332.0, TILE), Slide::Trailing(-670.0));
    }

    #[test]
    fn test_leading_edge_slides_forward_one_span() {
        assert_eq!(plan_slide(-670.0, 1280.0, -327.0, -8.0, TILE), Slide::Leading(-335.0));
    }

    #[test]
    fn test_leading_edge_clamps_at_origin() {
        // span 335 from -100 would reach +235
        assert_eq!(plan_slide(-100.0, 1280.0, -50.0, 269.0, TILE), Slide::Leading(0.0));
        for current in [-1000.0, -335.0, -1.0, 0.0] {
            match plan_slide(current, 1280.0, -400.0, -81.0, TILE) {
                Slide::Leading(to) => assert!(to <= 0.0),
                other => panic!("expected leading slide, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_nan_geometry_is_unreachable() {
        assert_eq!(plan_slide(0.0, 1280.0, f64::NAN, f64::NAN, TILE), Slide::Unreachable);
    }
}
