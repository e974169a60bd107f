//! Swimlane Browser - Main Entry Point
//!
//! Usage: `swim-browser [catalog-dir | catalog-url] [config.json]`
//!
//! Without a catalog argument the config's `catalog_url` is loaded.
//!
//! Key codes (`ArrowUp`, `ArrowDown`, `ArrowLeft`, `ArrowRight`) are read
//! from stdin, one per line, and fed to the navigation controller as they
//! arrive. Blank lines are ignored; `quit` or end of input ends the session.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use swim_catalog::open_source;
use swim_engine::{Config, HomePage};
use swim_nav::{KeyOutcome, NavigationController, NavigationOutcome, ScrollOutcome};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting swimlane browser {}", swim_engine::VERSION);

    let mut args = std::env::args().skip(1);
    let catalog = args.next();
    let config = match args.next() {
        Some(path) => Config::load(Path::new(&path))
            .with_context(|| format!("loading config {path}"))?,
        None => Config::default(),
    };

    let location = catalog.unwrap_or_else(|| config.catalog_url.clone());
    let source = open_source(&location).with_context(|| format!("opening catalog {location}"))?;
    let mut page = HomePage::render(&*source, &config)
        .with_context(|| format!("rendering catalog {location}"))?;

    let mut controller = NavigationController::with_window(config.throttle_window());
    controller
        .initialize(&mut page)
        .context("establishing initial focus")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report_focus(&mut out, &mut page)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading key codes")?;
        let code = match read_input(&line) {
            Input::Blank => continue,
            Input::Quit => break,
            Input::Key(code) => code,
        };

        match controller.key_down(&mut page, code, Instant::now())? {
            KeyOutcome::Throttled => tracing::debug!(code, "key dropped by throttle"),
            KeyOutcome::Unmapped => tracing::debug!(code, "not a navigation key"),
            KeyOutcome::Navigated(NavigationOutcome::NoCandidate) => {
                tracing::debug!(code, "nothing in that direction");
            }
            KeyOutcome::Navigated(NavigationOutcome::Moved {
                scroll: Some(ScrollOutcome::Slid { to, .. }),
                ..
            }) => {
                tracing::debug!(code, to, "container slid");
                report_focus(&mut out, &mut page)?;
            }
            KeyOutcome::Navigated(_) => report_focus(&mut out, &mut page)?,
        }
    }

    Ok(())
}

/// One line of stdin
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Blank,
    Quit,
    Key(&'a str),
}

fn read_input(line: &str) -> Input<'_> {
    match line.trim() {
        "" => Input::Blank,
        "quit" => Input::Quit,
        code => Input::Key(code),
    }
}

/// Print the focused tile as `title<TAB>link`
fn report_focus(out: &mut impl Write, page: &mut HomePage) -> Result<()> {
    for event in page.drain_focus_events() {
        tracing::trace!(?event, "focus event");
    }

    let Some(item) = page.focused_item() else {
        return Ok(());
    };
    if let Some(video) = item.video_url() {
        tracing::debug!(%video, "tile has a preview");
    }
    writeln!(out, "{}\t{}", item.title(), item.detail_url())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_do_not_end_the_session() {
        assert_eq!(read_input(""), Input::Blank);
        assert_eq!(read_input("   \t"), Input::Blank);
        assert_eq!(read_input(" ArrowRight \r"), Input::Key("ArrowRight"));
        assert_eq!(read_input("quit"), Input::Quit);
        assert_eq!(read_input("Escape"), Input::Key("Escape"));
    }
}
