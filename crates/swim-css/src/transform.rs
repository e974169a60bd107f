//! Translation state
//!
//! Scroll containers are moved with `translate3d` on their inline style and
//! the style string is the only record of where they are. Everything that
//! touches that string goes through `read_translation`/`write_translation`.

use std::fmt;

use swim_dom::InlineStyle;

use crate::CssError;

/// A 3-D translation in px
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Translate3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Translate3d {
    pub const ZERO: Translate3d = Translate3d { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Translation along x only
    pub fn horizontal(x: f64) -> Self {
        Self { x, ..Self::ZERO }
    }

    /// Translation along y only
    pub fn vertical(y: f64) -> Self {
        Self { y, ..Self::ZERO }
    }
}

impl fmt::Display for Translate3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // +0.0 folds -0 so it never serializes as "-0px"
        write!(
            f,
            "translate3d({}px, {}px, {}px)",
            self.x + 0.0,
            self.y + 0.0,
            self.z + 0.0
        )
    }
}

/// Parse `translate3d(<x>px, <y>px, <z>px)`.
///
/// Components are positional. Spacing after commas is optional and a bare
/// `0` is accepted for any component.
pub fn try_parse_transform(value: &str) -> Result<Translate3d, CssError> {
    let invalid = || CssError::InvalidTransform(value.to_string());

    let args = value
        .trim()
        .strip_prefix("translate3d(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let mut components = [0.0; 3];
    let mut parts = args.split(',');
    for slot in components.iter_mut() {
        let part = parts.next().ok_or_else(invalid)?.trim();
        let number = part
            .strip_suffix("px")
            .or_else(|| part.strip_suffix("PX"))
            .unwrap_or(part);
        *slot = number
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(invalid)?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(Translate3d::new(components[0], components[1], components[2]))
}

/// Parse a transform string, falling back to the zero translation when it
/// is absent or not a `translate3d`.
pub fn parse_transform(value: Option<&str>) -> Translate3d {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Translate3d::ZERO,
        Some(v) => try_parse_transform(v).unwrap_or_else(|err| {
            tracing::debug!(%err, "treating transform as untranslated");
            Translate3d::ZERO
        }),
    }
}

/// Current translation of an element
pub fn read_translation(style: &InlineStyle) -> Translate3d {
    parse_transform(style.transform())
}

/// Replace the translation of an element
pub fn write_translation(style: &mut InlineStyle, translation: Translate3d) {
    style.set_property("transform", translation.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        let t = try_parse_transform("translate3d(0px, 100px, 0px)").unwrap();
        assert_eq!(t, Translate3d::new(0.0, 100.0, 0.0));
    }

    #[test]
    fn test_parse_compact() {
        let t = try_parse_transform("translate3d(-335px,0,0)").unwrap();
        assert_eq!(t, Translate3d::horizontal(-335.0));
    }

    #[test]
    fn test_parse_fractional() {
        let t = parse_transform(Some("translate3d(-12.5px, -0.25px, 3px)"));
        assert_eq!(t, Translate3d::new(-12.5, -0.25, 3.0));
    }

    #[test]
    fn test_malformed_is_zero() {
        assert_eq!(parse_transform(None), Translate3d::ZERO);
        assert_eq!(parse_transform(Some("")), Translate3d::ZERO);
        assert_eq!(parse_transform(Some("none")), Translate3d::ZERO);
        assert_eq!(parse_transform(Some("translate3d(1px, 2px)")), Translate3d::ZERO);
        assert_eq!(parse_transform(Some("translate3d(1px, 2px, 3px, 4px)")), Translate3d::ZERO);
        assert_eq!(parse_transform(Some("translate3d(apx, 0, 0)")), Translate3d::ZERO);
        assert_eq!(parse_transform(Some("translateX(10px)")), Translate3d::ZERO);
    }

    #[test]
    fn test_write_then_read() {
        let mut style = InlineStyle::new();
        write_translation(&mut style, Translate3d::vertical(-259.0));
        assert_eq!(style.transform(), Some("translate3d(0px, -259px, 0px)"));
        assert_eq!(read_translation(&style), Translate3d::vertical(-259.0));
    }

    #[test]
    fn test_negative_zero_serializes_plain() {
        assert_eq!(
            Translate3d::new(-0.0, 0.0, -0.0).to_string(),
            "translate3d(0px, 0px, 0px)"
        );
    }
}
