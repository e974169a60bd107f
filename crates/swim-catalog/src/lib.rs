//! Swimlane Catalog
//!
//! The content behind the home page: page blocks, the sets they point at,
//! and the items inside each set. Catalog documents are deep, loosely
//! shaped JSON, so items stay as JSON values and typed accessors pull out
//! the few fields the page shows.

mod http;
mod model;
mod source;

pub use http::{HttpSource, DEFAULT_BASE_URL};
pub use model::{CuratedSet, Item, PageBlock, SetRecord, SetRef};
pub use source::{
    open_source, parse_home, parse_ref_set, resolve_sets, CatalogSource, DirectorySource,
};

use std::path::PathBuf;

/// Catalog error
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ref set document has no data")]
    EmptyRefSet,

    #[error("Invalid ref id {0:?}")]
    InvalidRefId(String),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported catalog URL scheme {0:?}")]
    UnsupportedScheme(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },
}
