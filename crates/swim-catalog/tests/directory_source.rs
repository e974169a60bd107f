//! Loading the fixture catalog from disk

use std::cell::RefCell;
use std::path::PathBuf;

use swim_catalog::{
    resolve_sets, CatalogError, CatalogSource, CuratedSet, DirectorySource, PageBlock,
};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog")
}

#[test]
fn test_resolve_fixture_catalog() {
    let source = DirectorySource::new(fixture_dir());
    let sets = resolve_sets(&source).unwrap();

    // the missing ref set and the unsupported block are skipped
    let titles: Vec<String> = sets.iter().map(CuratedSet::title).collect();
    assert_eq!(titles, ["New to Disney+", "Trending"]);

    let new = &sets[0];
    assert_eq!(new.items[0].title(), "Lost on Everest");
    assert_eq!(new.items[1].title(), "The Right Stuff");
    assert_eq!(
        new.items[1].video_url().as_deref(),
        Some("https://vid.example/the-right-stuff.mp4")
    );

    let trending = &sets[1];
    assert_eq!(trending.items.len(), 2);
    assert_eq!(
        trending.items[0].detail_url(),
        "https://www.disneyplus.com/franchise/the-lion-king"
    );
    assert_eq!(trending.items[0].image_url(), "https://img.example/the-lion-king.jpg");
    assert_eq!(trending.items[1].detail_url(), "#");
}

#[test]
fn test_missing_home_is_an_error() {
    let source = DirectorySource::new(fixture_dir().join("sets"));
    assert!(matches!(
        resolve_sets(&source),
        Err(CatalogError::Io { .. })
    ));
}

/// Records which ref sets were requested
struct RecordingSource {
    inner: DirectorySource,
    requested: RefCell<Vec<String>>,
}

impl CatalogSource for RecordingSource {
    fn home_page_blocks(&self) -> Result<Vec<PageBlock>, CatalogError> {
        self.inner.home_page_blocks()
    }

    fn ref_set(&self, ref_id: &str) -> Result<CuratedSet, CatalogError> {
        self.requested.borrow_mut().push(ref_id.to_string());
        self.inner.ref_set(ref_id)
    }
}

#[test]
fn test_ref_sets_fetched_in_block_order() {
    let source = RecordingSource {
        inner: DirectorySource::new(fixture_dir()),
        requested: RefCell::new(Vec::new()),
    };
    resolve_sets(&source).unwrap();
    assert_eq!(*source.requested.borrow(), ["trending", "missing"]);
}
