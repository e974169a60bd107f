//! Engine Configuration

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use swim_layout::Viewport;

use crate::EngineError;

/// Engine configuration options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window width in px
    pub viewport_width: f64,

    /// Window height in px
    pub viewport_height: f64,

    /// Input throttle after each accepted key
    pub throttle_ms: u64,

    /// Tag names that can take focus
    pub focusable_tags: Vec<String>,

    /// Replaces the built-in stylesheet
    pub stylesheet: Option<String>,

    /// Catalog loaded when none is named on the command line: a base URL
    /// or a directory
    pub catalog_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_width: 1920.0,
            viewport_height: 1080.0,
            throttle_ms: 500,
            focusable_tags: vec!["a".to_string(), "button".to_string()],
            stylesheet: None,
            catalog_url: swim_catalog::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Parse a JSON config; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    pub fn throttle_window(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.viewport(), Viewport::new(1920.0, 1080.0));
        assert_eq!(config.throttle_window(), Duration::from_millis(500));
        assert_eq!(config.focusable_tags, ["a", "button"]);
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json(r#"{ "viewport_width": 1280, "throttle_ms": 250 }"#).unwrap();
        assert_eq!(config.viewport_width, 1280.0);
        assert_eq!(config.viewport_height, 1080.0);
        assert_eq!(config.throttle_ms, 250);
        assert!(config.stylesheet.is_none());
        assert_eq!(config.catalog_url, swim_catalog::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_catalog_url() {
        let config = Config::from_json(r#"{ "catalog_url": "http://localhost:8080/catalog/" }"#).unwrap();
        assert_eq!(config.catalog_url, "http://localhost:8080/catalog/");
        assert_eq!(Config::default().catalog_url, "https://cd-static.bamgrid.com/dp-117731241344/");
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Config::from_json(r#"{ "throttle_ms": "soon" }"#),
            Err(EngineError::Config(_))
        ));
    }
}
