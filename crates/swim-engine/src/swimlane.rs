//! Swimlane factory
//!
//! One lane per set:
//!
//! ```text
//! div.swimlane.focus-group
//!   div
//!     div.swimlane-header        set title
//!   div.swimlane-items.scrollable-x
//!     a.swimlane-item            one per item
//! ```

use swim_catalog::{CuratedSet, Item};
use swim_dom::{DomError, Document, NodeId};

/// Node handles of one rendered lane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub title: String,
    /// The focus group
    pub group: NodeId,
    /// The horizontally scrolled item strip
    pub strip: NodeId,
    pub tiles: Vec<NodeId>,
}

/// Append a lane for `set` under `parent`. Returns the lane and its tiles
/// paired with the items they show.
pub(crate) fn append_swimlane(
    doc: &mut Document,
    parent: NodeId,
    set: &CuratedSet,
) -> Result<(Lane, Vec<(NodeId, Item)>), DomError> {
    let title = set.title();
    let group = doc.append_element(parent, "div", &["swimlane", "focus-group"])?;

    let heading = doc.append_element(group, "div", &[])?;
    let header = doc.append_element(heading, "div", &["swimlane-header"])?;
    doc.append_text(header, &title)?;

    let strip = doc.append_element(group, "div", &["swimlane-items", "scrollable-x"])?;
    let mut tiles = Vec::with_capacity(set.items.len());
    for item in &set.items {
        let tile = append_tile(doc, strip, item)?;
        tiles.push((tile, item.clone()));
    }

    tracing::debug!(title = %title, tiles = tiles.len(), "swimlane built");
    let lane = Lane {
        title,
        group,
        strip,
        tiles: tiles.iter().map(|(node, _)| *node).collect(),
    };
    Ok((lane, tiles))
}

fn append_tile(doc: &mut Document, strip: NodeId, item: &Item) -> Result<NodeId, DomError> {
    let tile = doc.append_element(strip, "a", &["swimlane-item"])?;
    if let Some(el) = doc.element_mut(tile) {
        el.set_attr("href", item.detail_url());
        el.set_attr("data-image", item.image_url());
        if let Some(video) = item.video_url() {
            el.set_attr("data-video", video);
        }
    }
    let title = item.title();
    if !title.is_empty() {
        doc.append_text(tile, &title)?;
    }
    Ok(tile)
}
