//! Class stylesheets
//!
//! CSS is parsed by lightningcss, then reduced to what layout consumes:
//! rules with single-class selectors (`.swimlane-item`) and their
//! `display`, `width`, `height` and margin declarations. `display: flex`
//! lays children out in a row.

use swim_dom::ClassList;

use crate::CssError;

/// How an element lays out its children
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    /// Children stack vertically
    #[default]
    Block,
    /// Children sit side by side and may overflow horizontally
    Row,
    /// Not laid out
    None,
}

/// Top/right/bottom/left lengths in px
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn all(v: f64) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }
}

/// A parsed declaration
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Display(Display),
    Width(f64),
    Height(f64),
    Margin(Edges),
    MarginTop(f64),
    MarginRight(f64),
    MarginBottom(f64),
    MarginLeft(f64),
}

/// `.class { declarations }`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rule {
    pub class: String,
    pub declarations: Vec<Declaration>,
    /// `!important` declarations, applied after every normal one
    pub important: Vec<Declaration>,
}

/// Parsed stylesheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parse CSS with lightningcss, keeping style rules whose selectors are
    /// a single class. Other rules (`@media`, compound selectors) are skipped.
    pub fn parse(css: &str) -> Result<Self, CssError> {
        use lightningcss::stylesheet::{ParserOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default()).map_err(|e| {
            CssError::ParseError {
                line: e.loc.as_ref().map_or(0, |loc| loc.line + 1),
                message: e.kind.to_string(),
            }
        })?;

        let mut sheet = Stylesheet::new();
        for rule in stylesheet.rules.0.iter() {
            sheet.rules.extend(convert_rule(rule)?);
        }
        Ok(sheet)
    }
}

fn convert_rule(rule: &lightningcss::rules::CssRule) -> Result<Vec<Rule>, CssError> {
    use lightningcss::rules::CssRule;
    use lightningcss::stylesheet::PrinterOptions;
    use lightningcss::traits::ToCss;

    let CssRule::Style(style_rule) = rule else {
        tracing::debug!("skipping non-style rule");
        return Ok(Vec::new());
    };

    let selectors = style_rule
        .selectors
        .to_css_string(PrinterOptions::default())
        .map_err(|e| CssError::ParseError {
            line: style_rule.loc.line + 1,
            message: e.to_string(),
        })?;
    let declarations = convert_declarations(&style_rule.declarations.declarations);
    let important = convert_declarations(&style_rule.declarations.important_declarations);

    Ok(selectors
        .split(',')
        .filter_map(|selector| {
            let class = class_selector(selector.trim());
            if class.is_none() {
                tracing::debug!(selector = selector.trim(), "skipping non-class selector");
            }
            class
        })
        .map(|class| Rule {
            class: class.to_string(),
            declarations: declarations.clone(),
            important: important.clone(),
        })
        .collect())
}

fn class_selector(selector: &str) -> Option<&str> {
    let class = selector.strip_prefix('.')?;
    let valid = !class.is_empty()
        && class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then_some(class)
}

fn convert_declarations(properties: &[lightningcss::properties::Property]) -> Vec<Declaration> {
    properties.iter().filter_map(convert_declaration).collect()
}

fn convert_declaration(property: &lightningcss::properties::Property) -> Option<Declaration> {
    use lightningcss::properties::Property;

    let declaration = match property {
        Property::Display(display) => Declaration::Display(convert_display(display)),
        Property::Width(size) => Declaration::Width(size_px(size)?),
        Property::Height(size) => Declaration::Height(size_px(size)?),
        Property::Margin(margin) => Declaration::Margin(Edges {
            top: margin_px(&margin.top),
            right: margin_px(&margin.right),
            bottom: margin_px(&margin.bottom),
            left: margin_px(&margin.left),
        }),
        Property::MarginTop(v) => Declaration::MarginTop(margin_px(v)),
        Property::MarginRight(v) => Declaration::MarginRight(margin_px(v)),
        Property::MarginBottom(v) => Declaration::MarginBottom(margin_px(v)),
        Property::MarginLeft(v) => Declaration::MarginLeft(margin_px(v)),
        other => {
            tracing::trace!(property = ?other.property_id(), "skipping unsupported property");
            return None;
        }
    };
    Some(declaration)
}

fn convert_display(display: &lightningcss::properties::display::Display) -> Display {
    use lightningcss::properties::display::{
        Display as CssDisplay, DisplayInside, DisplayKeyword, DisplayPair,
    };

    match display {
        CssDisplay::Keyword(DisplayKeyword::None) => Display::None,
        CssDisplay::Pair(DisplayPair { inside: DisplayInside::Flex(..), .. }) => Display::Row,
        CssDisplay::Pair(_) => Display::Block,
        other => {
            tracing::debug!(display = ?other, "unsupported display, using block");
            Display::Block
        }
    }
}

/// Absolute lengths only; percentages and `calc()` have no box to resolve against
fn length_px(value: &lightningcss::values::length::LengthPercentage) -> Option<f64> {
    use lightningcss::values::length::LengthPercentage;

    match value {
        LengthPercentage::Dimension(length) => length.to_px().map(f64::from),
        other => {
            tracing::debug!(length = ?other, "skipping relative length");
            None
        }
    }
}

fn size_px(size: &lightningcss::properties::size::Size) -> Option<f64> {
    use lightningcss::properties::size::Size;

    match size {
        Size::LengthPercentage(value) => length_px(value),
        _ => None,
    }
}

/// `auto` and unresolvable margins collapse to zero
fn margin_px(value: &lightningcss::values::length::LengthPercentageOrAuto) -> f64 {
    use lightningcss::values::length::LengthPercentageOrAuto;

    match value {
        LengthPercentageOrAuto::LengthPercentage(value) => length_px(value).unwrap_or(0.0),
        LengthPercentageOrAuto::Auto => 0.0,
    }
}

/// Styles after the cascade, as layout reads them
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComputedStyle {
    pub display: Display,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Edges,
}

impl ComputedStyle {
    fn apply(&mut self, declaration: &Declaration) {
        match *declaration {
            Declaration::Display(d) => self.display = d,
            Declaration::Width(w) => self.width = Some(w),
            Declaration::Height(h) => self.height = Some(h),
            Declaration::Margin(m) => self.margin = m,
            Declaration::MarginTop(v) => self.margin.top = v,
            Declaration::MarginRight(v) => self.margin.right = v,
            Declaration::MarginBottom(v) => self.margin.bottom = v,
            Declaration::MarginLeft(v) => self.margin.left = v,
        }
    }
}

/// Resolves the computed style of an element from its classes.
///
/// Rules apply in source order and later rules win. `!important`
/// declarations are applied after all normal ones.
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    stylesheet: Stylesheet,
}

impl StyleResolver {
    pub fn new(stylesheet: Stylesheet) -> Self {
        Self { stylesheet }
    }

    pub fn resolve(&self, classes: &ClassList) -> ComputedStyle {
        let mut style = ComputedStyle::default();
        let matching: Vec<&Rule> = self
            .stylesheet
            .rules
            .iter()
            .filter(|r| classes.contains(&r.class))
            .collect();
        for declaration in matching.iter().flat_map(|r| &r.declarations) {
            style.apply(declaration);
        }
        for declaration in matching.iter().flat_map(|r| &r.important) {
            style.apply(declaration);
        }
        style
    }
}
