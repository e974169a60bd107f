//! Swimlane CSS
//!
//! The small slice of CSS the swimlane browser needs: translation state
//! stored in inline `transform` styles, and class stylesheets (parsed by
//! lightningcss) that feed the layout pass.

mod stylesheet;
mod transform;

pub use stylesheet::{ComputedStyle, Declaration, Display, Edges, Rule, StyleResolver, Stylesheet};
pub use transform::{parse_transform, read_translation, try_parse_transform, write_translation, Translate3d};

/// Parse a class stylesheet
pub fn parse_stylesheet(css: &str) -> Result<Stylesheet, CssError> {
    Stylesheet::parse(css)
}

/// CSS parsing error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CssError {
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: u32, message: String },

    #[error("Unsupported transform: {0:?}")]
    InvalidTransform(String),
}
