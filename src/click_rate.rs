//! Clicks-per-second measurement
//!
//! Each mouse button keeps a queue of expiry timestamps. A click at time `t`
//! stays in the queue until `t + 1000ms`; the rate is whatever is left after
//! evicting expired entries.
//!
//! Timestamps are wall-clock milliseconds. A backwards clock adjustment keeps
//! clicks alive longer than a second and a forwards one drops them early;
//! this is accepted rather than papered over with a monotonic clock.
//!
//! # Example
//!
//! ```rust
//! use keystroke_hud::click_rate::{ClickRateTracker, MouseSide};
//!
//! let mut tracker = ClickRateTracker::new();
//! tracker.record_click_at(MouseSide::Left, 0);
//! tracker.record_click_at(MouseSide::Left, 500);
//!
//! assert_eq!(tracker.rate_at(MouseSide::Left, 600), 2);
//! assert_eq!(tracker.rate_at(MouseSide::Left, 1600), 0);
//! ```

use std::collections::VecDeque;

/// How long a click counts towards the rate, in milliseconds.
pub const CLICK_WINDOW_MS: i64 = 1000;

/// Source of "now" for time-windowed state.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_millis(&self) -> i64;
}

/// Wall-clock time via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// The two tracked mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseSide {
    Left,
    Right,
}

impl MouseSide {
    /// Short label shown on mouse widgets.
    pub fn label(self) -> &'static str {
        match self {
            MouseSide::Left => "LMB",
            MouseSide::Right => "RMB",
        }
    }
}

/// Sliding one-second window of click expiry times for one button.
#[derive(Debug, Clone, Default)]
struct ClickWindow {
    expiries: VecDeque<i64>,
}

impl ClickWindow {
    fn record(&mut self, now: i64) {
        self.expiries.push_back(now + CLICK_WINDOW_MS);
    }

    fn rate(&mut self, now: i64) -> u32 {
        while self.expiries.front().is_some_and(|&expiry| expiry <= now) {
            self.expiries.pop_front();
        }
        self.expiries.len() as u32
    }
}

/// Tracks clicks-per-second for the left and right mouse buttons.
///
/// The two buttons share no state. Callers must only record the transition
/// into "pressed" (see [`crate::input_system::PressTracker`]), never holds,
/// repeats or releases.
pub struct ClickRateTracker<C: Clock = SystemClock> {
    clock: C,
    left: ClickWindow,
    right: ClickWindow,
}

impl ClickRateTracker<SystemClock> {
    /// Creates a tracker driven by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ClickRateTracker<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ClickRateTracker<C> {
    pub fn with_clock(clock: C) -> Self {
        ClickRateTracker {
            clock,
            left: ClickWindow::default(),
            right: ClickWindow::default(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Records a click on `side` at the current time.
    pub fn record_click(&mut self, side: MouseSide) {
        let now = self.clock.now_millis();
        self.record_click_at(side, now);
    }

    /// Returns the number of clicks on `side` within the last second.
    pub fn rate(&mut self, side: MouseSide) -> u32 {
        let now = self.clock.now_millis();
        self.rate_at(side, now)
    }

    pub fn record_click_at(&mut self, side: MouseSide, now: i64) {
        self.window_mut(side).record(now);
    }

    /// Evicts every click whose expiry is `<= now`, then counts the rest.
    pub fn rate_at(&mut self, side: MouseSide, now: i64) -> u32 {
        self.window_mut(side).rate(now)
    }

    fn window_mut(&mut self, side: MouseSide) -> &mut ClickWindow {
        match side {
            MouseSide::Left => &mut self.left,
            MouseSide::Right => &mut self.right,
        }
    }
}
