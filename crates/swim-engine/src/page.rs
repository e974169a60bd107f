//! Home page
//!
//! A rendered home page: the document built from the catalog, laid out
//! once. Afterwards only focus and container translations change, and
//! bounding boxes are recomputed from those on every query.

use std::collections::HashMap;

use swim_catalog::{resolve_sets, CatalogSource, CuratedSet, Item};
use swim_css::{read_translation, write_translation, StyleResolver, Stylesheet, Translate3d};
use swim_dom::{DOMRect, Document, FocusEvent, NodeId};
use swim_layout::{client_rect, layout_document, Viewport};
use swim_nav::{Axis, LayoutProvider, Margins, StructuralTag};

use crate::swimlane::{append_swimlane, Lane};
use crate::{Config, EngineError, DEFAULT_STYLESHEET};

/// A rendered home page
#[derive(Debug)]
pub struct HomePage {
    document: Document,
    viewport: Viewport,
    focusable_tags: Vec<String>,
    app_root: NodeId,
    lanes: Vec<Lane>,
    items: HashMap<NodeId, Item>,
}

impl HomePage {
    /// Load the catalog from `source` and render it
    pub fn render(source: &dyn CatalogSource, config: &Config) -> Result<Self, EngineError> {
        let sets = resolve_sets(source)?;
        Self::from_sets(&sets, config)
    }

    /// Render already-resolved sets, one lane each, in order
    pub fn from_sets(sets: &[CuratedSet], config: &Config) -> Result<Self, EngineError> {
        let css = config.stylesheet.as_deref().unwrap_or(DEFAULT_STYLESHEET);
        let resolver = StyleResolver::new(Stylesheet::parse(css)?);

        let mut document = Document::new();
        let app_root = document.append_element(NodeId::ROOT, "div", &["scrollable-y"])?;
        if let Some(el) = document.element_mut(app_root) {
            el.set_attr("id", "app-root");
        }

        let mut lanes = Vec::with_capacity(sets.len());
        let mut items = HashMap::new();
        for set in sets {
            let (lane, tiles) = append_swimlane(&mut document, app_root, set)?;
            items.extend(tiles);
            lanes.push(lane);
        }

        let viewport = config.viewport();
        layout_document(&mut document, &resolver, viewport);
        tracing::info!(lanes = lanes.len(), tiles = items.len(), "home page rendered");

        Ok(Self {
            document,
            viewport,
            focusable_tags: config.focusable_tags.clone(),
            app_root,
            lanes,
            items,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The vertically scrolled page body
    pub fn app_root(&self) -> NodeId {
        self.app_root
    }

    /// Lanes in render order
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Catalog item shown by a tile
    pub fn item(&self, tile: NodeId) -> Option<&Item> {
        self.items.get(&tile)
    }

    pub fn focused_item(&self) -> Option<&Item> {
        self.document.active_element().and_then(|n| self.item(n))
    }

    pub fn focused_title(&self) -> Option<String> {
        self.focused_item().map(Item::title)
    }

    /// Focus and blur events since the last call
    pub fn drain_focus_events(&mut self) -> Vec<FocusEvent> {
        self.document.drain_focus_events()
    }
}

impl LayoutProvider for HomePage {
    type Element = NodeId;

    fn focusable(&self) -> Vec<NodeId> {
        let tags: Vec<&str> = self.focusable_tags.iter().map(String::as_str).collect();
        self.document.elements_by_tags(&tags)
    }

    fn bounding_box(&self, element: NodeId) -> DOMRect {
        client_rect(&self.document, element).unwrap_or_default()
    }

    fn margins(&self, element: NodeId, axis: Axis) -> Margins {
        let Some(el) = self.document.element(element) else {
            return Margins::default();
        };
        let g = el.geometry;
        match axis {
            Axis::Horizontal => Margins::new(g.margin_left, g.margin_right),
            Axis::Vertical => Margins::new(g.margin_top, g.margin_bottom),
        }
    }

    fn nearest_ancestor_with_tag(
        &self,
        element: NodeId,
        tag: StructuralTag,
        inclusive: bool,
    ) -> Option<NodeId> {
        self.document.closest_with_class(element, tag.class_name(), inclusive)
    }

    fn focused(&self) -> Option<NodeId> {
        self.document.active_element()
    }

    fn focus(&mut self, element: NodeId) {
        if let Err(e) = self.document.focus(element) {
            tracing::warn!(error = %e, "focus rejected");
        }
    }

    fn viewport_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.viewport.width,
            Axis::Vertical => self.viewport.height,
        }
    }

    fn translation(&self, container: NodeId) -> Translate3d {
        self.document
            .element(container)
            .map(|el| read_translation(&el.style))
            .unwrap_or(Translate3d::ZERO)
    }

    fn set_translation(&mut self, container: NodeId, translation: Translate3d) {
        if let Some(el) = self.document.element_mut(container) {
            write_translation(&mut el.style, translation);
        }
    }
}
