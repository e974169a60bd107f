//! Built-in page styles
//!
//! Tiles are 319x179 with 8px side margins, so each step along a row is
//! 335px. A lane is its header block plus the tile row.

pub const DEFAULT_STYLESHEET: &str = r#"
.swimlane {
    margin-bottom: 24px;
}

.swimlane-header {
    height: 40px;
    margin: 0 0 8px 8px;
}

.swimlane-items {
    display: flex;
}

.swimlane-item {
    width: 319px;
    height: 179px;
    margin: 0 8px;
}
"#;
