//! Tracking state machine and duration accounting.
//!
//! `TrackerEngine` owns the three tracker states (Active, Idle, Rendering),
//! the duration accumulators and the report cursors. It is deliberately pure:
//! every entry point takes `now: Instant` and performs only in-memory state
//! changes, so the whole state machine is deterministic under test and can be
//! driven from one mutual-exclusion domain by the async runtime in
//! [`crate::libs::tracker`].
//!
//! Exactly one entry point exists per trigger source: host activity, render
//! start/finish, the idle-check tick and the report tick. The runtime holds
//! the engine behind a single mutex, so transitions and their accumulator
//! side effects are applied as one atomic step.

use super::activity::{ActivityCategory, ActivityWindow};
use super::status::{StatusKind, TrackerStatus};
use super::stopwatch::Stopwatch;
use std::time::{Duration, Instant};

/// Seconds without qualifying activity before the tracker goes idle.
pub const IDLE_THRESHOLD_SECONDS: u64 = 10;

/// Online report deltas outside this window are skipped (cursor untouched).
pub const REPORT_MIN_SECONDS: u64 = 60;
pub const REPORT_MAX_SECONDS: u64 = 3600;

/// Current tracker state. Exactly one is current at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Active,
    /// Reachable only from `Active`, left on qualifying activity.
    Idle,
    /// Entered from either state; `was_idle` restores the prior one on finish.
    Rendering { was_idle: bool },
}

/// What the report tick should do this cycle.
///
/// `snapshot` is the total-elapsed value the delta was computed against; the
/// matching commit call advances the live cursor to it only after the write
/// or transmission succeeded, so a failed cycle retries with a grown delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDecision {
    /// Offline: add `delta_seconds` to the persisted total, then commit.
    SaveOffline { delta_seconds: u64, snapshot: Duration },
    /// Online: transmit `delta_seconds`, then commit.
    Transmit { delta_seconds: u64, snapshot: Duration },
    /// Nothing to do this cycle.
    Skip,
}

/// Result of an idle-check tick.
#[derive(Debug)]
pub struct IdleTick {
    /// Total active duration as of the tick, for `time_updated` observers.
    pub total: Duration,
    /// Status to publish if the tick changed state.
    pub status: Option<TrackerStatus>,
}

pub struct TrackerEngine {
    window: ActivityWindow,
    state: TrackerState,
    total: Stopwatch,
    render: Stopwatch,
    idle: Stopwatch,
    offline: bool,
    last_reported: Duration,
    last_offline_recorded: Duration,
    status: TrackerStatus,
}

impl TrackerEngine {
    pub fn new(offline: bool) -> Self {
        Self {
            window: ActivityWindow::new(),
            state: TrackerState::Active,
            total: Stopwatch::new(),
            render: Stopwatch::new(),
            idle: Stopwatch::new(),
            offline,
            last_reported: Duration::ZERO,
            last_offline_recorded: Duration::ZERO,
            status: TrackerStatus::waiting(),
        }
    }

    /// Starts the accumulators. Called once when the tracker starts.
    pub fn start(&mut self, now: Instant) -> TrackerStatus {
        self.total.start(now);
        self.idle.start(now);
        self.set_status(TrackerStatus::timing())
    }

    /// Freezes every accumulator. Called once when the tracker stops.
    pub fn stop(&mut self, now: Instant) {
        self.total.stop(now);
        self.render.stop(now);
        self.idle.stop(now);
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_rendering(&self) -> bool {
        matches!(self.state, TrackerState::Rendering { .. })
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    pub fn status(&self) -> &TrackerStatus {
        &self.status
    }

    /// Total active duration, excluding all time spent idle or rendering.
    pub fn total_time(&self, now: Instant) -> Duration {
        self.total.elapsed(now)
    }

    /// Duration of the current (or last) rendering episode.
    pub fn render_time(&self, now: Instant) -> Duration {
        self.render.elapsed(now)
    }

    /// Handles a host activity notification.
    ///
    /// Suppressed events (monotonic floods) change nothing. Qualifying
    /// events reset the idle clock and, when idle, resume timing.
    pub fn on_activity(&mut self, category: ActivityCategory, now: Instant) -> Option<TrackerStatus> {
        if !self.window.classify(category, now) {
            return None;
        }

        self.idle.restart(now);

        match self.state {
            TrackerState::Idle => {
                self.state = TrackerState::Active;
                self.total.start(now);
                Some(self.set_status(TrackerStatus::timing()))
            }
            TrackerState::Rendering { was_idle: true } => {
                // The user came back mid-render; finishing should resume timing.
                self.state = TrackerState::Rendering { was_idle: false };
                None
            }
            _ => None,
        }
    }

    /// Enters the rendering state, pausing the active counter.
    pub fn on_render_start(&mut self, now: Instant) -> Option<TrackerStatus> {
        if let TrackerState::Rendering { .. } = self.state {
            // Host re-announced an in-progress render; start a fresh episode.
            self.render.restart(now);
            return None;
        }

        let was_idle = self.state == TrackerState::Idle;
        self.state = TrackerState::Rendering { was_idle };
        self.total.stop(now);
        self.render.restart(now);
        Some(self.set_status(TrackerStatus::rendering()))
    }

    /// Leaves the rendering state, restoring whatever preceded it.
    pub fn on_render_finish(&mut self, now: Instant) -> Option<TrackerStatus> {
        let TrackerState::Rendering { was_idle } = self.state else {
            return None;
        };

        self.render.stop(now);
        self.idle.restart(now);
        self.window.reset();

        if was_idle {
            self.state = TrackerState::Idle;
            Some(self.set_status(TrackerStatus::idle()))
        } else {
            self.state = TrackerState::Active;
            self.total.start(now);
            Some(self.set_status(TrackerStatus::timing()))
        }
    }

    /// The 1-second idle-check tick.
    ///
    /// Detects idleness past the threshold and self-heals a stopped total
    /// counter after a missed resume transition.
    pub fn on_idle_tick(&mut self, now: Instant) -> IdleTick {
        let mut status = None;

        if self.state == TrackerState::Active {
            if !self.total.is_running() {
                self.total.start(now);
            }

            if self.idle.elapsed(now) >= Duration::from_secs(IDLE_THRESHOLD_SECONDS) {
                self.state = TrackerState::Idle;
                self.total.stop(now);
                status = Some(self.set_status(TrackerStatus::idle()));
            }
        }

        IdleTick {
            total: self.total.elapsed(now),
            status,
        }
    }

    /// Decides what this report cycle should do. Pure; commits are separate.
    pub fn report_decision(&self, now: Instant) -> ReportDecision {
        let snapshot = self.total.elapsed(now);

        if self.offline {
            let delta_seconds = delta_seconds(snapshot, self.last_offline_recorded);
            if delta_seconds > 0 {
                ReportDecision::SaveOffline { delta_seconds, snapshot }
            } else {
                ReportDecision::Skip
            }
        } else {
            let delta_seconds = delta_seconds(snapshot, self.last_reported);
            if (REPORT_MIN_SECONDS..=REPORT_MAX_SECONDS).contains(&delta_seconds) {
                ReportDecision::Transmit { delta_seconds, snapshot }
            } else {
                if delta_seconds > REPORT_MAX_SECONDS {
                    tracing::warn!(delta_seconds, "report delta above validity window, skipping cycle");
                }
                ReportDecision::Skip
            }
        }
    }

    /// Advances the offline cursor after the persisted total was written.
    pub fn commit_offline(&mut self, snapshot: Duration) {
        self.last_offline_recorded = snapshot;
    }

    /// Advances the online cursor after the service acknowledged the delta.
    pub fn commit_online(&mut self, snapshot: Duration, delta_seconds: u64) -> TrackerStatus {
        self.last_reported = snapshot;
        self.set_status(TrackerStatus::reported(delta_seconds))
    }

    /// Records a failed transmission. The cursor stays put so the grown
    /// delta is retried next cycle.
    pub fn report_failed(&mut self, reason: &str) -> TrackerStatus {
        self.set_status(TrackerStatus::report_failed(reason))
    }

    /// Switches between offline and online accounting.
    ///
    /// The caller flushes any pending offline delta *before* switching to
    /// online (see [`Self::report_decision`]); this method only transfers
    /// the baseline so no interval is double-counted or dropped.
    pub fn apply_mode(&mut self, offline: bool, now: Instant) {
        if self.offline == offline {
            return;
        }

        let current = self.total.elapsed(now);
        if offline {
            // Resume offline accounting from whichever baseline is later, so
            // a just-reported interval is not recorded twice.
            self.last_offline_recorded = self.last_reported.max(current);
        } else {
            self.last_reported = current;
        }
        self.offline = offline;
    }

    /// Persisted offline total plus the live not-yet-saved delta.
    ///
    /// While online the persisted value is authoritative and returned
    /// verbatim.
    pub fn offline_total_seconds(&self, persisted: u64, now: Instant) -> u64 {
        if !self.offline {
            return persisted;
        }
        let current = self.total.elapsed(now);
        persisted + delta_seconds(current, self.last_offline_recorded)
    }

    /// Recomputes the ongoing status line from the current state. Used to
    /// revert the transient "report sent" line.
    pub fn refresh_status(&mut self) -> TrackerStatus {
        let status = match self.state {
            TrackerState::Active => TrackerStatus::timing(),
            TrackerState::Idle => TrackerStatus::idle(),
            TrackerState::Rendering { .. } => TrackerStatus::rendering(),
        };
        self.set_status(status)
    }

    pub fn status_kind(&self) -> StatusKind {
        self.status.kind
    }

    fn set_status(&mut self, status: TrackerStatus) -> TrackerStatus {
        self.status = status.clone();
        status
    }
}

/// Whole elapsed seconds between a snapshot and a cursor, clamped at zero.
fn delta_seconds(snapshot: Duration, cursor: Duration) -> u64 {
    snapshot.checked_sub(cursor).unwrap_or(Duration::ZERO).as_secs()
}
