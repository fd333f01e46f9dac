//! Async tracker runtime.
//!
//! Wires the pure [`TrackerEngine`] to the outside world: the 1-second
//! idle-check tick, the report-interval tick, host-delivered activity and
//! render notifications, the ranking client and config persistence.
//!
//! All three trigger sources funnel into one `parking_lot::Mutex` around the
//! engine, so state transitions and their accumulator side effects are
//! applied atomically. The report transmission is the only blocking I/O and
//! runs with no lock held; its outcome is re-applied under the lock before
//! any cursor moves. Where both the config and the engine are locked, the
//! config lock is always taken first.

use crate::api::RankingClient;
use crate::libs::activity::ActivityCategory;
use crate::libs::config::Config;
use crate::libs::engine::{ReportDecision, TrackerEngine};
use crate::libs::status::{StatusKind, TrackerObserver, TrackerStatus};
use anyhow::Result;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Notify;
use tokio::time::MissedTickBehavior;

const IDLE_CHECK_INTERVAL: Duration = Duration::from_secs(1);
const STATUS_REVERT_DELAY: Duration = Duration::from_secs(2);
const FINAL_FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

struct Shared {
    config: Mutex<Config>,
    engine: Mutex<TrackerEngine>,
    observer: Arc<dyn TrackerObserver>,
    shutdown: Notify,
    stopped: AtomicBool,
}

impl Shared {
    fn publish(&self, status: Option<TrackerStatus>) {
        if let Some(status) = status {
            self.observer.status_changed(&status);
        }
    }
}

/// An owned tracker instance: created at session start, run once, stopped
/// exactly once at session end.
pub struct Tracker {
    shared: Arc<Shared>,
    client: Option<Arc<RankingClient>>,
}

impl Tracker {
    pub fn new(config: Config, observer: Arc<dyn TrackerObserver>) -> Self {
        let client = config
            .server
            .as_ref()
            .filter(|server| server.is_configured())
            .map(|server| Arc::new(RankingClient::new(server)));

        // Without a configured server and a bound session code, online
        // reporting is impossible regardless of the configured mode.
        let offline = !config.can_report_online();

        let shared = Arc::new(Shared {
            config: Mutex::new(config),
            engine: Mutex::new(TrackerEngine::new(offline)),
            observer,
            shutdown: Notify::new(),
            stopped: AtomicBool::new(false),
        });

        Self { shared, client }
    }

    /// Handle for host callbacks and UI queries. Cheap to clone.
    pub fn handle(&self) -> TrackerHandle {
        TrackerHandle {
            shared: self.shared.clone(),
        }
    }

    /// Runs the tracker until [`TrackerHandle::stop`] is called.
    ///
    /// On shutdown the outstanding delta gets one bounded best-effort flush
    /// (offline: persist; online: report, failure swallowed) before the
    /// accumulators are frozen.
    pub async fn run(&self) -> Result<()> {
        {
            let mut engine = self.shared.engine.lock();
            let status = engine.start(Instant::now());
            drop(engine);
            self.shared.publish(Some(status));
        }

        let mut idle_tick = tokio::time::interval(IDLE_CHECK_INTERVAL);
        idle_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut next_report = tokio::time::Instant::now() + self.report_interval();

        loop {
            tokio::select! {
                _ = idle_tick.tick() => self.idle_tick(),
                _ = tokio::time::sleep_until(next_report) => {
                    self.report_cycle().await;
                    // Re-read the interval so a mode switch takes effect on
                    // the next cycle.
                    next_report = tokio::time::Instant::now() + self.report_interval();
                }
                _ = self.shared.shutdown.notified() => break,
            }
        }

        self.shared.stopped.store(true, Ordering::SeqCst);
        let _ = tokio::time::timeout(FINAL_FLUSH_TIMEOUT, self.report_cycle()).await;
        self.shared.engine.lock().stop(Instant::now());
        Ok(())
    }

    fn report_interval(&self) -> Duration {
        Duration::from_secs(self.shared.config.lock().report_interval_seconds())
    }

    fn idle_tick(&self) {
        let tick = self.shared.engine.lock().on_idle_tick(Instant::now());
        self.shared.observer.time_updated(tick.total);
        self.shared.publish(tick.status);
    }

    async fn report_cycle(&self) {
        let decision = self.shared.engine.lock().report_decision(Instant::now());
        match decision {
            ReportDecision::Skip => {}
            ReportDecision::SaveOffline { delta_seconds, snapshot } => {
                save_offline(&self.shared, delta_seconds, snapshot);
            }
            ReportDecision::Transmit { delta_seconds, snapshot } => {
                self.transmit(delta_seconds, snapshot).await;
            }
        }
    }

    async fn transmit(&self, delta_seconds: u64, snapshot: Duration) {
        let (client, session_code) = {
            let config = self.shared.config.lock();
            match (&self.client, config.account.session_code.clone()) {
                (Some(client), Some(code)) => (client.clone(), code),
                _ => return,
            }
        };

        // Network I/O with no lock held.
        let outcome = client.report_duration(&session_code, delta_seconds).await;

        let status = {
            let mut engine = self.shared.engine.lock();
            match outcome {
                Ok(response) if response.success => engine.commit_online(snapshot, delta_seconds),
                Ok(response) => {
                    tracing::warn!(message = %response.message, "service rejected duration report");
                    engine.report_failed(&response.message)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "duration report transmission failed");
                    engine.report_failed(&err.to_string())
                }
            }
        };

        let reported = status.kind == StatusKind::Active;
        self.shared.publish(Some(status));

        if reported {
            // Revert the transient "report sent" line to the ongoing state.
            let shared = self.shared.clone();
            tokio::spawn(async move {
                tokio::time::sleep(STATUS_REVERT_DELAY).await;
                let status = shared.engine.lock().refresh_status();
                shared.publish(Some(status));
            });
        }
    }
}

/// Persists a positive offline delta; the engine cursor moves only after
/// the config write succeeded, otherwise the delta stays pending.
fn save_offline(shared: &Shared, delta_seconds: u64, snapshot: Duration) {
    let mut config = shared.config.lock();
    config.account.offline_total_seconds += delta_seconds;
    match config.save() {
        Ok(()) => {
            shared.engine.lock().commit_offline(snapshot);
            tracing::debug!(delta_seconds, total = config.account.offline_total_seconds, "offline total saved");
        }
        Err(err) => {
            config.account.offline_total_seconds -= delta_seconds;
            tracing::warn!(error = %err, "failed to persist offline total, delta stays pending");
        }
    }
}

/// Host- and UI-facing handle to a running tracker.
#[derive(Clone)]
pub struct TrackerHandle {
    shared: Arc<Shared>,
}

impl TrackerHandle {
    /// Delivers a host activity notification.
    pub fn activity(&self, category: ActivityCategory) {
        if self.shared.stopped.load(Ordering::SeqCst) {
            return;
        }
        let status = self.shared.engine.lock().on_activity(category, Instant::now());
        self.shared.publish(status);
    }

    /// The host started a long-running background render.
    pub fn render_started(&self) {
        if self.shared.stopped.load(Ordering::SeqCst) {
            return;
        }
        let status = self.shared.engine.lock().on_render_start(Instant::now());
        self.shared.publish(status);
    }

    /// The render completed; the pre-render state is restored.
    pub fn render_finished(&self) {
        if self.shared.stopped.load(Ordering::SeqCst) {
            return;
        }
        let status = self.shared.engine.lock().on_render_finish(Instant::now());
        self.shared.publish(status);
    }

    /// Total active duration so far.
    pub fn total_time(&self) -> Duration {
        self.shared.engine.lock().total_time(Instant::now())
    }

    /// Duration of the current or most recent render episode.
    pub fn render_time(&self) -> Duration {
        self.shared.engine.lock().render_time(Instant::now())
    }

    pub fn is_rendering(&self) -> bool {
        self.shared.engine.lock().is_rendering()
    }

    pub fn status(&self) -> TrackerStatus {
        self.shared.engine.lock().status().clone()
    }

    /// Re-emits the ongoing status line for the current state.
    pub fn refresh_status(&self) {
        let status = self.shared.engine.lock().refresh_status();
        self.shared.publish(Some(status));
    }

    /// Persisted offline total plus the live not-yet-saved delta.
    pub fn offline_total_seconds(&self) -> u64 {
        let config = self.shared.config.lock();
        let persisted = config.account.offline_total_seconds;
        self.shared.engine.lock().offline_total_seconds(persisted, Instant::now())
    }

    /// Switches between offline and online duration accounting.
    ///
    /// Going online flushes the pending offline delta first; going offline
    /// resumes local accounting from the later of the two baselines. The
    /// mode change is persisted to the config.
    pub fn set_offline(&self, offline: bool) {
        let now = Instant::now();
        let mut config = self.shared.config.lock();
        let mut engine = self.shared.engine.lock();

        if engine.is_offline() == offline {
            return;
        }

        if !offline {
            if let ReportDecision::SaveOffline { delta_seconds, snapshot } = engine.report_decision(now) {
                config.account.offline_total_seconds += delta_seconds;
                if config.save().is_ok() {
                    engine.commit_offline(snapshot);
                } else {
                    config.account.offline_total_seconds -= delta_seconds;
                    tracing::warn!("failed to flush offline total during mode switch");
                }
            }
        }

        engine.apply_mode(offline, now);
        config.account.offline = offline;
        if let Err(err) = config.save() {
            tracing::warn!(error = %err, "failed to persist mode switch");
        }
    }

    /// Requests shutdown; [`Tracker::run`] performs the final flush.
    pub fn stop(&self) {
        // notify_one stores a permit, so a stop issued before the run loop
        // reaches its select is not lost.
        self.shared.shutdown.notify_one();
    }
}
