//! Catalog sources
//!
//! Catalogs are read from a directory ([`DirectorySource`]) or fetched
//! over HTTP ([`HttpSource`](crate::HttpSource)); both share the same
//! layout of `home.json` plus `sets/<refId>.json`.
//!
//! The home document lists page blocks under
//! `data.StandardCollection.containers[].set`. Referenced sets live in their
//! own documents, keyed by set type under `data`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::model::{first_value, CuratedSet, PageBlock, SetRecord};
use crate::CatalogError;

/// Where catalog documents come from
pub trait CatalogSource {
    /// Page blocks of the home page, in page order
    fn home_page_blocks(&self) -> Result<Vec<PageBlock>, CatalogError>;

    /// The set a `SetRef` block points at
    fn ref_set(&self, ref_id: &str) -> Result<CuratedSet, CatalogError>;
}

/// Catalog stored on disk as `home.json` plus `sets/<refId>.json`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, path: PathBuf) -> Result<String, CatalogError> {
        tracing::debug!(path = %path.display(), "reading catalog document");
        fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
    }
}

impl CatalogSource for DirectorySource {
    fn home_page_blocks(&self) -> Result<Vec<PageBlock>, CatalogError> {
        parse_home(&self.read(self.root.join("home.json"))?)
    }

    fn ref_set(&self, ref_id: &str) -> Result<CuratedSet, CatalogError> {
        check_ref_id(ref_id)?;
        let path = self.root.join("sets").join(format!("{ref_id}.json"));
        parse_ref_set(&self.read(path)?)
    }
}

/// Open a catalog location: `http://` and `https://` locations are fetched
/// over the network, anything else is a directory path.
pub fn open_source(location: &str) -> Result<Box<dyn CatalogSource>, CatalogError> {
    let scheme = location.split_once("://").map(|(scheme, _)| scheme.to_ascii_lowercase());
    match scheme.as_deref() {
        Some("http" | "https") => Ok(Box::new(crate::HttpSource::new(location)?)),
        _ => Ok(Box::new(DirectorySource::new(location))),
    }
}

/// Ref ids become file names and URL path segments
pub(crate) fn check_ref_id(ref_id: &str) -> Result<(), CatalogError> {
    let valid = !ref_id.is_empty()
        && ref_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CatalogError::InvalidRefId(ref_id.to_string()))
    }
}

#[derive(Deserialize)]
struct HomeDocument {
    data: HomeData,
}

#[derive(Deserialize)]
struct HomeData {
    #[serde(rename = "StandardCollection")]
    standard_collection: StandardCollection,
}

#[derive(Deserialize)]
struct StandardCollection {
    #[serde(default)]
    containers: Vec<PageBlock>,
}

/// Parse the home document into its page blocks
pub fn parse_home(json: &str) -> Result<Vec<PageBlock>, CatalogError> {
    let doc: HomeDocument = serde_json::from_str(json)?;
    Ok(doc.data.standard_collection.containers)
}

/// Parse a referenced set document. The set sits under the first key of `data`.
pub fn parse_ref_set(json: &str) -> Result<CuratedSet, CatalogError> {
    let doc: Value = serde_json::from_str(json)?;
    let set = doc
        .get("data")
        .and_then(first_value)
        .ok_or(CatalogError::EmptyRefSet)?;
    Ok(CuratedSet::deserialize(set)?)
}

/// Resolve the home page into displayable sets, in block order.
///
/// A referenced set that fails to load is skipped; the home document failing
/// is an error.
pub fn resolve_sets(source: &dyn CatalogSource) -> Result<Vec<CuratedSet>, CatalogError> {
    let blocks = source.home_page_blocks()?;
    let mut sets = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block.set {
            SetRecord::CuratedSet(set) => sets.push(set),
            SetRecord::SetRef(reference) => match source.ref_set(&reference.ref_id) {
                Ok(mut set) => {
                    if set.title().is_empty() {
                        set.text = reference.text;
                    }
                    sets.push(set);
                }
                Err(e) => {
                    tracing::warn!(ref_id = %reference.ref_id, error = %e, "skipping ref set");
                }
            },
            SetRecord::Unsupported => {
                tracing::debug!("skipping unsupported set type");
            }
        }
    }

    tracing::info!(sets = sets.len(), "catalog resolved");
    Ok(sets)
}
