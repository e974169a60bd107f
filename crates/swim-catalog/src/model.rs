//! Catalog model
//!
//! Field lookups mirror the catalog's nesting, e.g. a set title lives at
//! `text.title.full.set.default.content`. A missing field yields an empty
//! string (or `#` for links) instead of an error.

use serde::Deserialize;
use serde_json::Value;
use url::Url;

const SITE: &str = "https://www.disneyplus.com/";

/// One block of the home page
#[derive(Debug, Clone, Deserialize)]
pub struct PageBlock {
    pub set: SetRecord,
}

/// A set as it appears in a page block
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum SetRecord {
    /// Items are inline
    CuratedSet(CuratedSet),
    /// Items must be fetched by `refId`
    SetRef(SetRef),
    #[serde(other)]
    Unsupported,
}

/// A set with its items
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CuratedSet {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub text: Value,
}

/// Pointer to a set stored elsewhere
#[derive(Debug, Clone, Deserialize)]
pub struct SetRef {
    #[serde(rename = "refId")]
    pub ref_id: String,
    #[serde(default)]
    pub text: Value,
}

impl CuratedSet {
    /// Swimlane header text
    pub fn title(&self) -> String {
        string_at(&self.text, "/title/full/set/default/content")
    }
}

impl SetRef {
    pub fn title(&self) -> String {
        string_at(&self.text, "/title/full/set/default/content")
    }
}

/// A program, series or collection tile
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Item(pub Value);

impl Item {
    /// Display title, taken from whichever title variant comes first
    pub fn title(&self) -> String {
        self.0
            .pointer("/text/title/full")
            .and_then(first_value)
            .map(|v| string_at(v, "/default/content"))
            .unwrap_or_default()
    }

    /// Title as it appears in detail-page URLs: lowercase, dashes for spaces
    pub fn url_title(&self) -> String {
        self.title().replace(' ', "-").to_lowercase()
    }

    /// Tile artwork at 1.78 aspect ratio
    pub fn image_url(&self) -> String {
        self.0
            .pointer("/image/tile/1.78")
            .and_then(first_value)
            .map(|v| string_at(v, "/default/url"))
            .unwrap_or_default()
    }

    /// First video preview, if the item has one
    pub fn video_url(&self) -> Option<String> {
        self.0
            .pointer("/videoArt/0/mediaMetadata/urls/0/url")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Detail page link, `#` when the item type has none
    pub fn detail_url(&self) -> String {
        self.detail_path()
            .and_then(|path| Url::parse(SITE).ok()?.join(&path).ok())
            .map(String::from)
            .unwrap_or_else(|| "#".to_string())
    }

    fn detail_path(&self) -> Option<String> {
        let item = &self.0;
        if item.get("seriesId").is_some_and(|v| !v.is_null()) {
            let slug = item.pointer("/text/title/slug/series/default/content")?.as_str()?;
            let id = item.get("encodedSeriesId")?.as_str()?;
            return Some(format!("series/{slug}/{id}"));
        }
        if item.get("programType").and_then(Value::as_str) == Some("movie") {
            let id = item.pointer("/family/encodedFamilyId")?.as_str()?;
            return Some(format!("movies/{}/{id}", self.url_title()));
        }
        if item.get("type").and_then(Value::as_str) == Some("StandardCollection") {
            return Some(format!("franchise/{}", self.url_title()));
        }
        None
    }
}

/// First value of a JSON object, in document order
pub(crate) fn first_value(value: &Value) -> Option<&Value> {
    value.as_object()?.values().next()
}

fn string_at(value: &Value, pointer: &str) -> String {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
