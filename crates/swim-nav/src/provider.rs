//! Layout provider
//!
//! The navigation code never owns elements. It asks the page for live
//! geometry on every call and writes back only focus and the translation
//! of scroll containers.

use std::fmt;

use swim_css::Translate3d;
use swim_dom::DOMRect;

use crate::Axis;

/// Structural class tags the scroller looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralTag {
    /// Container slid horizontally (a swimlane's item strip)
    ScrollableX,
    /// Container slid vertically (the page body)
    ScrollableY,
    /// A row together with its header
    FocusGroup,
}

impl StructuralTag {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::ScrollableX => "scrollable-x",
            Self::ScrollableY => "scrollable-y",
            Self::FocusGroup => "focus-group",
        }
    }
}

impl fmt::Display for StructuralTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Margins along one axis: (left, right) or (top, bottom)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    pub start: f64,
    pub end: f64,
}

impl Margins {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Read-mostly view of a rendered page
pub trait LayoutProvider {
    /// Opaque element handle
    type Element: Copy + Eq + fmt::Debug;

    /// Every focusable element, in document order
    fn focusable(&self) -> Vec<Self::Element>;

    /// Current viewport-relative box, including applied translations
    fn bounding_box(&self, element: Self::Element) -> DOMRect;

    /// Computed margins of an element along an axis
    fn margins(&self, element: Self::Element, axis: Axis) -> Margins;

    /// Nearest element tagged `tag` walking up from `element`.
    ///
    /// With `inclusive` the element itself may match.
    fn nearest_ancestor_with_tag(
        &self,
        element: Self::Element,
        tag: StructuralTag,
        inclusive: bool,
    ) -> Option<Self::Element>;

    fn focused(&self) -> Option<Self::Element>;

    fn focus(&mut self, element: Self::Element);

    /// Window width (horizontal) or height (vertical)
    fn viewport_size(&self, axis: Axis) -> f64;

    /// Current translation of a scroll container
    fn translation(&self, container: Self::Element) -> Translate3d;

    /// Replace the translation of a scroll container
    fn set_translation(&mut self, container: Self::Element, translation: Translate3d);
}
