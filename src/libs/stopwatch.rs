//! Resumable monotonic duration counter.

use std::time::{Duration, Instant};

/// A start/stop/elapsed accumulator over caller-supplied instants.
///
/// All operations take `now` explicitly instead of reading the clock, which
/// keeps the tracker engine deterministic under test: timers and host
/// callbacks pass `Instant::now()`, tests pass synthetic instants.
#[derive(Debug, Default)]
pub struct Stopwatch {
    accumulated: Duration,
    started_at: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes accumulation from where it left off. No-op while running.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Freezes the counter. No-op while stopped.
    pub fn stop(&mut self, now: Instant) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += now.duration_since(started_at);
        }
    }

    /// Clears the counter and starts it running from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.accumulated = Duration::ZERO;
        self.started_at = Some(now);
    }

    /// Accumulated duration as of `now`, without side effects.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => self.accumulated + now.duration_since(started_at),
            None => self.accumulated,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}
