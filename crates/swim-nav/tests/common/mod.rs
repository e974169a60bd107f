//! In-memory layout used by the navigation tests

#![allow(dead_code)]

use swim_css::Translate3d;
use swim_dom::DOMRect;
use swim_nav::{Axis, LayoutProvider, Margins, StructuralTag};

#[derive(Debug, Clone)]
pub struct MockNode {
    pub parent: Option<usize>,
    /// Untranslated box
    pub rect: DOMRect,
    pub tags: Vec<StructuralTag>,
    /// top, right, bottom, left
    pub margins: [f64; 4],
    pub translation: Translate3d,
    pub focusable: bool,
}

#[derive(Debug, Default)]
pub struct MockLayout {
    pub nodes: Vec<MockNode>,
    pub focused: Option<usize>,
    pub width: f64,
    pub height: f64,
    pub translation_writes: usize,
}

impl MockLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn add(
        &mut self,
        parent: Option<usize>,
        rect: DOMRect,
        tags: &[StructuralTag],
        focusable: bool,
    ) -> usize {
        self.nodes.push(MockNode {
            parent,
            rect,
            tags: tags.to_vec(),
            margins: [0.0; 4],
            translation: Translate3d::ZERO,
            focusable,
        });
        self.nodes.len() - 1
    }

    /// A focusable tile with no structure around it
    pub fn tile(&mut self, left: f64, top: f64, right: f64, bottom: f64) -> usize {
        self.add(None, DOMRect::from_edges(left, top, right, bottom), &[], true)
    }

    pub fn set_margins(&mut self, id: usize, margins: [f64; 4]) {
        self.nodes[id].margins = margins;
    }

    fn ancestors_inclusive(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(id), move |&n| self.nodes[n].parent)
    }
}

impl LayoutProvider for MockLayout {
    type Element = usize;

    fn focusable(&self) -> Vec<usize> {
        (0..self.nodes.len()).filter(|&i| self.nodes[i].focusable).collect()
    }

    fn bounding_box(&self, element: usize) -> DOMRect {
        let (dx, dy) = self
            .ancestors_inclusive(element)
            .map(|n| self.nodes[n].translation)
            .fold((0.0, 0.0), |(x, y), t| (x + t.x, y + t.y));
        self.nodes[element].rect.translated(dx, dy)
    }

    fn margins(&self, element: usize, axis: Axis) -> Margins {
        let [top, right, bottom, left] = self.nodes[element].margins;
        match axis {
            Axis::Horizontal => Margins::new(left, right),
            Axis::Vertical => Margins::new(top, bottom),
        }
    }

    fn nearest_ancestor_with_tag(
        &self,
        element: usize,
        tag: StructuralTag,
        inclusive: bool,
    ) -> Option<usize> {
        self.ancestors_inclusive(element)
            .skip(if inclusive { 0 } else { 1 })
            .find(|&n| self.nodes[n].tags.contains(&tag))
    }

    fn focused(&self) -> Option<usize> {
        self.focused
    }

    fn focus(&mut self, element: usize) {
        self.focused = Some(element);
    }

    fn viewport_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    fn translation(&self, container: usize) -> Translate3d {
        self.nodes[container].translation
    }

    fn set_translation(&mut self, container: usize, translation: Translate3d) {
        self.translation_writes += 1;
        self.nodes[container].translation = translation;
    }
}

/// Swimlane page: a `scrollable-y` body holding rows, each row a
/// `focus-group` with a 40px header and a `scrollable-x` strip of
/// 100x50 tiles spaced by 10px side margins. Rows have a 20px bottom
/// margin, so each row takes 110px vertically and each tile 120px
/// horizontally.
pub struct Grid {
    pub layout: MockLayout,
    pub body: usize,
    pub groups: Vec<usize>,
    pub strips: Vec<usize>,
    pub tiles: Vec<Vec<usize>>,
}

pub fn grid(rows: usize, cols: usize, width: f64, height: f64) -> Grid {
    let mut layout = MockLayout::new(width, height);
    let body = layout.add(
        None,
        DOMRect::from_xywh(0.0, 0.0, width, rows as f64 * 110.0),
        &[StructuralTag::ScrollableY],
        false,
    );

    let mut groups = Vec::new();
    let mut strips = Vec::new();
    let mut tiles = Vec::new();
    for r in 0..rows {
        let top = r as f64 * 110.0;
        let group = layout.add(
            Some(body),
            DOMRect::from_xywh(0.0, top, width, 90.0),
            &[StructuralTag::FocusGroup],
            false,
        );
        layout.set_margins(group, [0.0, 0.0, 20.0, 0.0]);
        let strip = layout.add(
            Some(group),
            DOMRect::from_xywh(0.0, top + 40.0, width, 50.0),
            &[StructuralTag::ScrollableX],
            false,
        );

        let row = (0..cols)
            .map(|c| {
                let tile = layout.add(
                    Some(strip),
                    DOMRect::from_xywh(10.0 + c as f64 * 120.0, top + 40.0, 100.0, 50.0),
                    &[],
                    true,
                );
                layout.set_margins(tile, [0.0, 10.0, 0.0, 10.0]);
                tile
            })
            .collect();

        groups.push(group);
        strips.push(strip);
        tiles.push(row);
    }

    Grid {
        layout,
        body,
        groups,
        strips,
        tiles,
    }
}
