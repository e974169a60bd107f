//! Candidate filter and distance ranker
//!
//! The focused tile contributes the edge point nearest the direction of
//! travel. Every candidate contributes its top-left corner, whatever the
//! direction. The nearest corner by straight-line distance wins.

use swim_dom::DOMRect;

use crate::Direction;

/// A point in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// An element with the box it had when the request started
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<E> {
    pub element: E,
    pub rect: DOMRect,
}

impl<E> Candidate<E> {
    pub fn new(element: E, rect: DOMRect) -> Self {
        Self { element, rect }
    }

    /// The point ranked against the reference point
    pub fn projected_point(&self) -> Point {
        Point::new(self.rect.left(), self.rect.top())
    }
}

/// What `navigate` decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<E> {
    /// Nothing was focused; this is the first element in document order
    Initial(E),
    /// Nearest element ahead of the focused one
    Directional(E),
}

impl<E: Copy> Selection<E> {
    pub fn element(&self) -> E {
        match *self {
            Self::Initial(e) | Self::Directional(e) => e,
        }
    }
}

/// Point on the focused box that distances are measured from
pub fn reference_point(direction: Direction, focused: &DOMRect) -> Point {
    match direction {
        Direction::Up => Point::new(focused.left(), focused.top()),
        Direction::Down => Point::new(focused.left(), focused.bottom()),
        Direction::Left => Point::new(focused.left(), focused.vertical_center()),
        Direction::Right => Point::new(focused.right(), focused.vertical_center()),
    }
}

/// Whether `candidate` lies strictly further in `direction` than `focused`
pub fn is_ahead(direction: Direction, focused: &DOMRect, candidate: &DOMRect) -> bool {
    match direction {
        Direction::Up => candidate.top() < focused.top(),
        Direction::Down => candidate.bottom() > focused.bottom(),
        Direction::Left => candidate.left() < focused.left(),
        Direction::Right => candidate.right() > focused.right(),
    }
}

/// Nearest candidate ahead of `focused`, or None if nothing is ahead.
///
/// The focused element is never a candidate. Exact ties go to the earlier
/// candidate.
pub fn select_target<E: Copy + Eq>(
    direction: Direction,
    focused: &Candidate<E>,
    candidates: &[Candidate<E>],
) -> Option<E> {
    let origin = reference_point(direction, &focused.rect);

    candidates
        .iter()
        .filter(|c| c.element != focused.element)
        .filter(|c| is_ahead(direction, &focused.rect, &c.rect))
        .map(|c| (c.element, origin.distance(c.projected_point())))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(element, _)| element)
}

/// Pick the next element to focus.
///
/// With nothing focused this ignores geometry and returns the first
/// element of `universe`.
pub fn navigate<E: Copy + Eq>(
    direction: Direction,
    focused: Option<&Candidate<E>>,
    universe: &[Candidate<E>],
) -> Option<Selection<E>> {
    match focused {
        None => universe.first().map(|c| Selection::Initial(c.element)),
        Some(focused) => select_target(direction, focused, universe).map(Selection::Directional),
    }
}
