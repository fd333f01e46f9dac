//! Activity classification for host notifications.
//!
//! The host delivers a stream of category-tagged notifications (markers
//! changed, track added, track state toggled, track event edited). Genuine
//! user interaction is bursty and category-mixed; automated churn such as a
//! playhead firing track-event updates produces long single-category runs.
//! The classifier suppresses those runs so they cannot keep the session
//! "active" forever.

use std::time::{Duration, Instant};

/// Category attached to a host activity notification.
///
/// Categories are only compared against each other inside the repetition
/// window; they carry no per-category handling logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    None,
    Markers,
    Track,
    TrackState,
    TrackEvent,
}

/// Rolling window length for repetition detection.
const WINDOW_SECONDS: u64 = 60;

/// Same-category events at or above this count within one window are
/// suppressed.
const MONOTONIC_THRESHOLD: u32 = 5;

/// Sliding-window monotonic-repetition filter.
///
/// Tracks a single window of `(category, start, count)`. An event qualifies
/// as genuine activity unless it is the Nth (N >= 5) consecutive event of
/// the same category within a 60-second window.
#[derive(Debug)]
pub struct ActivityWindow {
    window_start: Option<Instant>,
    last_category: ActivityCategory,
    count_in_window: u32,
}

impl ActivityWindow {
    pub fn new() -> Self {
        Self {
            window_start: None,
            last_category: ActivityCategory::None,
            count_in_window: 0,
        }
    }

    /// Classifies one notification.
    ///
    /// Returns `true` when the event counts as qualifying activity and
    /// should reset the idle clock.
    pub fn classify(&mut self, category: ActivityCategory, now: Instant) -> bool {
        let window_expired = match self.window_start {
            Some(start) => now.duration_since(start) > Duration::from_secs(WINDOW_SECONDS),
            None => true,
        };

        if window_expired {
            self.window_start = Some(now);
            self.last_category = category;
            self.count_in_window = 1;
            return true;
        }

        if category == self.last_category {
            self.count_in_window += 1;
            // Monotonic flood inside the window: suppress from the 5th on.
            if self.count_in_window >= MONOTONIC_THRESHOLD {
                return false;
            }
        } else {
            self.last_category = category;
            self.count_in_window = 1;
        }

        true
    }

    /// Forgets the current window so the next event starts a fresh one.
    ///
    /// Called when a render finishes: whatever pattern the host emitted
    /// before the render says nothing about what the user does after it.
    pub fn reset(&mut self) {
        self.window_start = None;
        self.last_category = ActivityCategory::None;
        self.count_in_window = 0;
    }
}

impl Default for ActivityWindow {
    fn default() -> Self {
        Self::new()
    }
}
