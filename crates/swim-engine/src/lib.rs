//! Swimlane Engine
//!
//! Turns a catalog into a navigable home page.
//!
//! # Example
//! ```rust,ignore
//! use swim_catalog::DirectorySource;
//! use swim_engine::{Config, HomePage};
//! use swim_nav::NavigationController;
//!
//! let config = Config::default();
//! let mut page = HomePage::render(&DirectorySource::new("catalog"), &config)?;
//! let mut controller = NavigationController::with_window(config.throttle_window());
//! controller.initialize(&mut page)?;
//! ```

mod config;
mod page;
mod style;
mod swimlane;

pub use config::Config;
pub use page::HomePage;
pub use style::DEFAULT_STYLESHEET;
pub use swimlane::Lane;

use std::path::PathBuf;

use swim_catalog::CatalogError;
use swim_css::CssError;
use swim_dom::DomError;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine error
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Stylesheet error: {0}")]
    Css(#[from] CssError),

    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
