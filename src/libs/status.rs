//! Tracker status surface consumed by presentation layers.

use std::fmt;
use std::time::Duration;

/// Coarse indicator behind the current status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Active,
    Idle,
    Rendering,
    Error,
}

/// A status update: the kind plus a human-readable line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerStatus {
    pub kind: StatusKind,
    pub text: String,
}

impl TrackerStatus {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    pub fn timing() -> Self {
        Self::new(StatusKind::Active, "Timing")
    }

    pub fn idle() -> Self {
        Self::new(StatusKind::Idle, "Idle paused")
    }

    pub fn rendering() -> Self {
        Self::new(StatusKind::Rendering, "Rendering")
    }

    pub fn reported(delta_seconds: u64) -> Self {
        Self::new(StatusKind::Active, format!("Report sent: {} s", delta_seconds))
    }

    pub fn report_failed(reason: &str) -> Self {
        Self::new(StatusKind::Error, format!("Report failed: {}", reason))
    }

    pub fn waiting() -> Self {
        Self::new(StatusKind::Active, "Waiting for sync")
    }
}

impl fmt::Display for TrackerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Seam between the tracker core and whatever renders it.
///
/// Implementations must be cheap and non-blocking: callbacks fire from the
/// tracker's timer task while no internal lock is held, but a slow observer
/// still delays the tick loop.
pub trait TrackerObserver: Send + Sync {
    /// The total active duration changed (fires on every idle-check tick).
    fn time_updated(&self, total: Duration);

    /// The status line changed.
    fn status_changed(&self, status: &TrackerStatus);
}

/// Observer that ignores everything. Useful for tests and headless runs.
pub struct NullObserver;

impl TrackerObserver for NullObserver {
    fn time_updated(&self, _total: Duration) {}
    fn status_changed(&self, _status: &TrackerStatus) {}
}
