//! End-to-end navigation over the fixture catalog
//!
//! Default styles: tiles step 335px along a row, lanes step 251px down the
//! page, viewport 1920x1080.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use swim_catalog::DirectorySource;
use swim_css::Translate3d;
use swim_dom::{FocusEvent, NodeId};
use swim_engine::{Config, HomePage};
use swim_nav::{
    Direction, KeyOutcome, LayoutProvider, NavigationController, NavigationOutcome, ScrollOutcome,
};

fn render() -> HomePage {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog");
    HomePage::render(&DirectorySource::new(dir), &Config::default()).unwrap()
}

fn step(page: &mut HomePage, direction: Direction) -> (NodeId, Option<ScrollOutcome>) {
    match NavigationController::new().navigate(page, direction).unwrap() {
        NavigationOutcome::Moved { target, scroll } => (target, scroll),
        other => panic!("{direction}: expected a move, got {other:?}"),
    }
}

fn transform(page: &HomePage, node: NodeId) -> Option<String> {
    page.document()
        .element(node)
        .and_then(|el| el.style.transform())
        .map(str::to_string)
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_lanes_follow_page_blocks() {
    let page = render();
    let titles: Vec<&str> = page.lanes().iter().map(|l| l.title.as_str()).collect();

    // the "missing" ref set is skipped
    assert_eq!(titles, ["New to Disney+", "Trending", "Collections", "Originals", "Classics"]);
    let counts: Vec<usize> = page.lanes().iter().map(|l| l.tiles.len()).collect();
    assert_eq!(counts, [7, 7, 3, 6, 6]);
}

#[test]
fn test_initialize_focuses_first_tile() {
    let mut page = render();
    let mut controller = NavigationController::new();

    let outcome = controller.initialize(&mut page).unwrap();

    assert_eq!(outcome, NavigationOutcome::Initial(page.lanes()[0].tiles[0]));
    assert_eq!(page.focused_title().as_deref(), Some("Lost on Everest"));
    assert_eq!(transform(&page, page.app_root()), None);
}

// ============================================================================
// HORIZONTAL
// ============================================================================

#[test]
fn test_right_walk_slides_row_by_one_tile() {
    let mut page = render();
    let lane = page.lanes()[0].clone();
    NavigationController::new().initialize(&mut page).unwrap();

    for c in 1..5 {
        let (target, scroll) = step(&mut page, Direction::Right);
        assert_eq!(target, lane.tiles[c]);
        assert_eq!(scroll, Some(ScrollOutcome::Visible), "tile {c}");
    }

    let (target, scroll) = step(&mut page, Direction::Right);
    assert_eq!(target, lane.tiles[5]);
    assert_eq!(scroll, Some(ScrollOutcome::Slid { from: 0.0, to: -335.0 }));
    assert_eq!(transform(&page, lane.strip).as_deref(), Some("translate3d(-335px, 0px, 0px)"));
    assert_eq!(page.focused_title().as_deref(), Some("Timmy Failure"));

    // other rows stay put
    assert_eq!(page.translation(page.lanes()[1].strip), Translate3d::ZERO);
}

#[test]
fn test_left_walk_returns_row_to_origin() {
    let mut page = render();
    let lane = page.lanes()[0].clone();
    NavigationController::new().initialize(&mut page).unwrap();
    for _ in 0..5 {
        step(&mut page, Direction::Right);
    }

    for c in (1..5).rev() {
        let (target, scroll) = step(&mut page, Direction::Left);
        assert_eq!(target, lane.tiles[c]);
        assert_eq!(scroll, Some(ScrollOutcome::Visible), "tile {c}");
    }
    let (target, scroll) = step(&mut page, Direction::Left);
    assert_eq!(target, lane.tiles[0]);
    assert_eq!(scroll, Some(ScrollOutcome::Slid { from: -335.0, to: 0.0 }));
    assert_eq!(page.translation(lane.strip), Translate3d::ZERO);

    assert_eq!(
        NavigationController::new().navigate(&mut page, Direction::Left).unwrap(),
        NavigationOutcome::NoCandidate
    );
}

// ============================================================================
// VERTICAL
// ============================================================================

#[test]
fn test_down_walk_slides_page_by_one_lane() {
    let mut page = render();
    NavigationController::new().initialize(&mut page).unwrap();

    for l in 1..4 {
        let (target, scroll) = step(&mut page, Direction::Down);
        assert_eq!(target, page.lanes()[l].tiles[0]);
        assert_eq!(scroll, Some(ScrollOutcome::Visible), "lane {l}");
    }

    let (target, scroll) = step(&mut page, Direction::Down);
    assert_eq!(target, page.lanes()[4].tiles[0]);
    assert_eq!(scroll, Some(ScrollOutcome::Slid { from: 0.0, to: -251.0 }));
    assert_eq!(
        transform(&page, page.app_root()).as_deref(),
        Some("translate3d(0px, -251px, 0px)")
    );
    let group = page.lanes()[4].group;
    assert_eq!(page.bounding_box(group).top(), 753.0);
    assert_eq!(page.focused_title().as_deref(), Some("Bambi"));
}

#[test]
fn test_up_walk_returns_page_to_origin() {
    let mut page = render();
    NavigationController::new().initialize(&mut page).unwrap();
    for _ in 0..4 {
        step(&mut page, Direction::Down);
    }

    for l in (1..4).rev() {
        let (target, scroll) = step(&mut page, Direction::Up);
        assert_eq!(target, page.lanes()[l].tiles[0]);
        assert_eq!(scroll, Some(ScrollOutcome::Visible), "lane {l}");
    }
    let (target, scroll) = step(&mut page, Direction::Up);
    assert_eq!(target, page.lanes()[0].tiles[0]);
    assert_eq!(scroll, Some(ScrollOutcome::Slid { from: -251.0, to: 0.0 }));
    assert_eq!(page.translation(page.app_root()), Translate3d::ZERO);
}

// ============================================================================
// KEYS AND FOCUS
// ============================================================================

#[test]
fn test_keys_drive_focus_through_throttle() {
    let mut page = render();
    let mut controller = NavigationController::with_window(Config::default().throttle_window());
    controller.initialize(&mut page).unwrap();
    let t0 = Instant::now();

    let keys = [
        ("ArrowDown", 0, true),
        ("ArrowDown", 200, false),
        ("ArrowDown", 600, true),
        ("ArrowDown", 1100, true),
        ("ArrowRight", 1700, true),
    ];
    for (code, at, accepted) in keys {
        let outcome = controller
            .key_down(&mut page, code, t0 + Duration::from_millis(at))
            .unwrap();
        assert_eq!(outcome != KeyOutcome::Throttled, accepted, "{code} at {at}ms");
    }

    let originals = &page.lanes()[3];
    assert_eq!(page.focused(), Some(originals.tiles[1]));
    assert_eq!(page.focused_title().as_deref(), Some("The Right Stuff"));
    let item = page.focused_item().unwrap();
    assert_eq!(item.detail_url(), "https://www.disneyplus.com/series/the-right-stuff/S1x");
    assert_eq!(
        page.document()
            .element(originals.tiles[1])
            .and_then(|el| el.get_attr("data-video")),
        Some("https://vid.example/the-right-stuff.mp4")
    );
}

#[test]
fn test_focus_events_record_moves() {
    let mut page = render();
    let tiles = page.lanes()[0].tiles.clone();
    NavigationController::new().initialize(&mut page).unwrap();
    step(&mut page, Direction::Right);

    assert_eq!(
        page.drain_focus_events(),
        [FocusEvent::Focus(tiles[0]), FocusEvent::Blur(tiles[0]), FocusEvent::Focus(tiles[1])]
    );
    assert!(page.drain_focus_events().is_empty());
}

#[test]
fn test_empty_catalog_cannot_bootstrap() {
    let mut page = HomePage::from_sets(&[], &Config::default()).unwrap();
    assert!(NavigationController::new().initialize(&mut page).is_err());
}
