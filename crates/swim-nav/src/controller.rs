//! Navigation controller
//!
//! Two states. `Idle` accepts a key, runs navigation synchronously and arms
//! the throttle. `Throttled` drops every key until the window has elapsed.
//! Time is passed in by the caller, so the timer is just a deadline that
//! expires either through [`NavigationController::timer_expired`] or when
//! a key arrives after it.

use std::time::{Duration, Instant};

use crate::ranker::{self, Candidate, Selection};
use crate::{bring_into_view, Direction, LayoutProvider, NavError, ScrollOutcome};

/// Input is ignored for this long after any accepted key press
pub const THROTTLE_WINDOW: Duration = Duration::from_millis(500);

/// Throttle state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThrottleState {
    #[default]
    Idle,
    Throttled { until: Instant },
}

/// Result of one navigation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationOutcome<E> {
    /// Nothing was focused; the first focusable element got focus
    Initial(E),
    /// Focus moved. `scroll` is None when the target had no scroll container.
    Moved { target: E, scroll: Option<ScrollOutcome> },
    /// Nothing lies in that direction; focus unchanged
    NoCandidate,
}

/// Result of one key press
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyOutcome<E> {
    /// Dropped because the throttle window is open
    Throttled,
    /// Accepted but not an arrow key
    Unmapped,
    Navigated(NavigationOutcome<E>),
}

/// Dispatches key presses to directional navigation
#[derive(Debug, Clone)]
pub struct NavigationController {
    state: ThrottleState,
    window: Duration,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self::with_window(THROTTLE_WINDOW)
    }

    /// Controller with a custom throttle window
    pub fn with_window(window: Duration) -> Self {
        Self {
            state: ThrottleState::Idle,
            window,
        }
    }

    pub fn state(&self) -> ThrottleState {
        self.state
    }

    pub fn is_throttled(&self) -> bool {
        matches!(self.state, ThrottleState::Throttled { .. })
    }

    /// Establish initial focus.
    ///
    /// Runs one "down" navigation, which on a page with nothing focused
    /// focuses the first focusable element. Fails when the page has no
    /// focusable element at all.
    pub fn initialize<P: LayoutProvider>(
        &mut self,
        provider: &mut P,
    ) -> Result<NavigationOutcome<P::Element>, NavError> {
        let outcome = self.navigate(provider, Direction::Down)?;
        tracing::info!(?outcome, "spatial navigation initialized");
        Ok(outcome)
    }

    /// Timer signal: the throttle window has elapsed
    pub fn timer_expired(&mut self) {
        self.state = ThrottleState::Idle;
    }

    /// Keyboard signal.
    ///
    /// Any accepted key arms the throttle, including keys that do not map
    /// to a direction.
    pub fn key_down<P: LayoutProvider>(
        &mut self,
        provider: &mut P,
        code: &str,
        now: Instant,
    ) -> Result<KeyOutcome<P::Element>, NavError> {
        if let ThrottleState::Throttled { until } = self.state {
            if now < until {
                tracing::trace!(code, "input throttled");
                return Ok(KeyOutcome::Throttled);
            }
            self.timer_expired();
        }

        self.state = ThrottleState::Throttled {
            until: now + self.window,
        };

        match Direction::from_key_code(code) {
            Some(direction) => self.navigate(provider, direction).map(KeyOutcome::Navigated),
            None => Ok(KeyOutcome::Unmapped),
        }
    }

    /// Filter, rank, focus, then scroll, against live geometry.
    pub fn navigate<P: LayoutProvider>(
        &self,
        provider: &mut P,
        direction: Direction,
    ) -> Result<NavigationOutcome<P::Element>, NavError> {
        let universe: Vec<Candidate<P::Element>> = provider
            .focusable()
            .into_iter()
            .map(|e| Candidate::new(e, provider.bounding_box(e)))
            .collect();
        let focused = provider
            .focused()
            .map(|e| Candidate::new(e, provider.bounding_box(e)));

        match ranker::navigate(direction, focused.as_ref(), &universe) {
            Some(Selection::Initial(first)) => {
                provider.focus(first);
                Ok(NavigationOutcome::Initial(first))
            }
            Some(Selection::Directional(target)) => {
                provider.focus(target);
                let scroll = match bring_into_view(provider, target, direction) {
                    Ok(outcome) => Some(outcome),
                    Err(err) => {
                        tracing::warn!(%err, "focused element left where it is");
                        None
                    }
                };
                Ok(NavigationOutcome::Moved { target, scroll })
            }
            None if focused.is_none() => Err(NavError::NoFocusableOnBootstrap),
            None => {
                tracing::debug!(%direction, "no candidate");
                Ok(NavigationOutcome::NoCandidate)
            }
        }
    }
}
