//! Foreground tracking command.
//!
//! Runs the tracker with keyboard/mouse input as the activity source: input
//! events are mapped onto activity categories and fed through the same
//! classifier a host application would use. High-frequency single-category
//! streams (e.g. continuous mouse movement) are suppressed by the
//! monotonic-repetition filter exactly like automated host churn.

use crate::libs::activity::ActivityCategory;
use crate::libs::config::Config;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::status::{TrackerObserver, TrackerStatus};
use crate::libs::tracker::Tracker;
use crate::{msg_info, msg_print};
use anyhow::Result;
use rdev::{listen, Event, EventType};
use std::sync::Arc;
use std::time::Duration;

/// Prints status transitions; time updates only show up in debug mode to
/// keep the console quiet during normal runs.
struct ConsoleObserver;

impl TrackerObserver for ConsoleObserver {
    fn time_updated(&self, total: Duration) {
        crate::msg_debug!(format!("active time: {}", format_duration(&total)));
    }

    fn status_changed(&self, status: &TrackerStatus) {
        msg_print!(Message::TrackerStatusLine(status.text.clone()));
    }
}

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    if config.account.offline {
        msg_info!(Message::AccountOfflineMode);
    }

    let tracker = Tracker::new(config, Arc::new(ConsoleObserver));
    let handle = tracker.handle();

    // Input listener on its own thread; rdev::listen blocks. Restarts on
    // error to keep activity detection alive.
    let input_handle = handle.clone();
    std::thread::spawn(move || loop {
        let handle = input_handle.clone();
        if let Err(e) = listen(move |event: Event| {
            let category = match event.event_type {
                EventType::KeyPress(_) => Some(ActivityCategory::TrackEvent),
                EventType::ButtonPress(_) => Some(ActivityCategory::Track),
                EventType::Wheel { .. } => Some(ActivityCategory::TrackState),
                EventType::MouseMove { .. } => Some(ActivityCategory::Markers),
                _ => None,
            };
            if let Some(category) = category {
                handle.activity(category);
            }
        }) {
            tracing::warn!(error = ?e, "input listener failed, retrying in 1 second");
            std::thread::sleep(Duration::from_secs(1));
        } else {
            break;
        }
    });

    let stop_handle = handle.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        stop_handle.stop();
    });

    msg_print!(Message::TrackerStarted);
    tracker.run().await?;

    msg_print!(Message::TrackerTotalTime(format_duration(&handle.total_time())));
    msg_print!(Message::TrackerStopped);
    Ok(())
}
