#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};
    use stint::libs::activity::ActivityCategory;
    use stint::libs::engine::{ReportDecision, TrackerEngine, TrackerState};
    use stint::libs::status::StatusKind;

    fn at(base: Instant, s: u64) -> Instant {
        base + Duration::from_secs(s)
    }

    /// Drives the 1-second idle check from `from` to `to` inclusive and
    /// returns the second at which the engine went idle, if any.
    fn tick_until_idle(engine: &mut TrackerEngine, base: Instant, from: u64, to: u64) -> Option<u64> {
        for s in from..=to {
            let tick = engine.on_idle_tick(at(base, s));
            if tick.status.map(|status| status.kind) == Some(StatusKind::Idle) {
                return Some(s);
            }
        }
        None
    }

    #[test]
    fn suppressed_flood_does_not_keep_the_session_active() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        // A playhead hammering the same category: the first four events
        // qualify, everything after is suppressed.
        for s in [0, 5, 10, 15, 20] {
            engine.on_activity(ActivityCategory::TrackEvent, at(base, s));
        }

        // Last qualifying event was at t=15, so idleness lands at t=25.
        let went_idle = tick_until_idle(&mut engine, base, 16, 60);
        assert_eq!(went_idle, Some(25));
        assert_eq!(engine.state(), TrackerState::Idle);
        assert_eq!(engine.total_time(at(base, 60)), Duration::from_secs(25));
    }

    #[test]
    fn mixed_category_activity_keeps_the_session_active() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        let categories = [
            ActivityCategory::TrackEvent,
            ActivityCategory::Markers,
            ActivityCategory::Track,
            ActivityCategory::TrackState,
        ];
        for s in 0..8 {
            engine.on_activity(categories[(s % 4) as usize], at(base, s * 5));
            assert!(tick_until_idle(&mut engine, base, s * 5, s * 5 + 4).is_none());
        }
        assert_eq!(engine.state(), TrackerState::Active);
    }

    #[test]
    fn total_counts_only_active_time() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        // Idle from t=10 to t=30, active again afterwards.
        assert_eq!(tick_until_idle(&mut engine, base, 1, 60), Some(10));
        engine.on_activity(ActivityCategory::Markers, at(base, 30));

        assert_eq!(engine.total_time(at(base, 45)), Duration::from_secs(25));
    }

    #[test]
    fn render_pauses_the_total_and_restores_active() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        let status = engine.on_render_start(at(base, 5)).unwrap();
        assert_eq!(status.kind, StatusKind::Rendering);
        assert!(engine.is_rendering());

        // The idle check never fires during a render, however long it takes.
        assert!(tick_until_idle(&mut engine, base, 6, 100).is_none());

        let status = engine.on_render_finish(at(base, 120)).unwrap();
        assert_eq!(status.kind, StatusKind::Active);
        assert_eq!(engine.render_time(at(base, 120)), Duration::from_secs(115));

        // 5 seconds before the render plus 10 after it.
        assert_eq!(engine.total_time(at(base, 130)), Duration::from_secs(15));
    }

    #[test]
    fn render_finish_restores_idle_when_it_interrupted_idle() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        assert_eq!(tick_until_idle(&mut engine, base, 1, 60), Some(10));
        engine.on_render_start(at(base, 15));
        let status = engine.on_render_finish(at(base, 40)).unwrap();

        assert_eq!(status.kind, StatusKind::Idle);
        assert_eq!(engine.state(), TrackerState::Idle);
        assert_eq!(engine.total_time(at(base, 50)), Duration::from_secs(10));
    }

    #[test]
    fn activity_during_render_resumes_active_on_finish() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        engine.on_idle_tick(at(base, 10));
        assert_eq!(engine.state(), TrackerState::Idle);

        engine.on_render_start(at(base, 15));
        // The user came back mid-render.
        engine.on_activity(ActivityCategory::Markers, at(base, 20));

        let status = engine.on_render_finish(at(base, 30)).unwrap();
        assert_eq!(status.kind, StatusKind::Active);
        assert_eq!(engine.state(), TrackerState::Active);
    }

    #[test]
    fn repeated_render_start_begins_a_fresh_episode() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        engine.on_render_start(at(base, 5));
        assert!(engine.on_render_start(at(base, 20)).is_none());
        assert_eq!(engine.render_time(at(base, 30)), Duration::from_secs(10));
    }

    #[test]
    fn render_finish_without_render_is_ignored() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);
        assert!(engine.on_render_finish(at(base, 5)).is_none());
        assert_eq!(engine.state(), TrackerState::Active);
    }

    #[test]
    fn online_deltas_below_one_minute_are_skipped() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        assert_eq!(engine.report_decision(at(base, 45)), ReportDecision::Skip);

        let decision = engine.report_decision(at(base, 65));
        let ReportDecision::Transmit { delta_seconds, snapshot } = decision else {
            panic!("expected a transmit, got {:?}", decision);
        };
        assert_eq!(delta_seconds, 65);

        engine.commit_online(snapshot, delta_seconds);
        // Cursor advanced; the next cycle has nothing old enough to send.
        assert_eq!(engine.report_decision(at(base, 90)), ReportDecision::Skip);
    }

    #[test]
    fn online_deltas_above_one_hour_are_skipped() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        assert_eq!(engine.report_decision(at(base, 3700)), ReportDecision::Skip);
        // The cursor stays put; a skip must not swallow the interval.
        assert!(matches!(
            engine.report_decision(at(base, 3600)),
            ReportDecision::Transmit { delta_seconds: 3600, .. }
        ));
    }

    #[test]
    fn failed_transmission_retries_with_a_grown_delta() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        assert!(matches!(
            engine.report_decision(at(base, 65)),
            ReportDecision::Transmit { delta_seconds: 65, .. }
        ));
        let status = engine.report_failed("connection refused");
        assert_eq!(status.kind, StatusKind::Error);

        // No commit happened, so the delta keeps growing.
        assert!(matches!(
            engine.report_decision(at(base, 130)),
            ReportDecision::Transmit { delta_seconds: 130, .. }
        ));
    }

    #[test]
    fn offline_saves_every_positive_delta() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(true);
        engine.start(base);

        let decision = engine.report_decision(at(base, 30));
        let ReportDecision::SaveOffline { delta_seconds, snapshot } = decision else {
            panic!("expected an offline save, got {:?}", decision);
        };
        assert_eq!(delta_seconds, 30);
        engine.commit_offline(snapshot);

        let decision = engine.report_decision(at(base, 60));
        let ReportDecision::SaveOffline { delta_seconds, snapshot } = decision else {
            panic!("expected an offline save, got {:?}", decision);
        };
        assert_eq!(delta_seconds, 30);
        engine.commit_offline(snapshot);

        // Nothing accumulated since the last save.
        assert_eq!(engine.report_decision(at(base, 60)), ReportDecision::Skip);
    }

    #[test]
    fn failed_offline_save_is_retried_next_cycle() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(true);
        engine.start(base);

        // The config write failed, so the cursor was never advanced.
        assert!(matches!(
            engine.report_decision(at(base, 30)),
            ReportDecision::SaveOffline { delta_seconds: 30, .. }
        ));
        assert!(matches!(
            engine.report_decision(at(base, 60)),
            ReportDecision::SaveOffline { delta_seconds: 60, .. }
        ));
    }

    #[test]
    fn offline_total_includes_the_unsaved_tail() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(true);
        engine.start(base);

        if let ReportDecision::SaveOffline { snapshot, .. } = engine.report_decision(at(base, 30)) {
            engine.commit_offline(snapshot);
        }

        // 30 persisted seconds plus 15 not yet saved.
        assert_eq!(engine.offline_total_seconds(30, at(base, 45)), 45);
    }

    #[test]
    fn switching_modes_does_not_double_count() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        // Report the first 65 seconds online.
        let ReportDecision::Transmit { delta_seconds, snapshot } = engine.report_decision(at(base, 65)) else {
            panic!("expected a transmit");
        };
        engine.commit_online(snapshot, delta_seconds);

        // Go offline at t=70: accounting resumes from the later baseline, so
        // the already-reported interval is not recorded again.
        engine.apply_mode(true, at(base, 70));
        assert!(matches!(
            engine.report_decision(at(base, 100)),
            ReportDecision::SaveOffline { delta_seconds: 30, .. }
        ));
        if let ReportDecision::SaveOffline { snapshot, .. } = engine.report_decision(at(base, 100)) {
            engine.commit_offline(snapshot);
        }

        // Back online at t=100: the online cursor jumps to the present.
        engine.apply_mode(false, at(base, 100));
        assert_eq!(engine.report_decision(at(base, 130)), ReportDecision::Skip);
        assert!(matches!(
            engine.report_decision(at(base, 160)),
            ReportDecision::Transmit { delta_seconds: 60, .. }
        ));
    }

    #[test]
    fn rapid_mode_flip_changes_nothing() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        engine.apply_mode(true, at(base, 100));
        engine.apply_mode(false, at(base, 100));

        assert!(!engine.is_offline());
        assert_eq!(engine.offline_total_seconds(0, at(base, 100)), 0);
        assert_eq!(engine.report_decision(at(base, 100)), ReportDecision::Skip);
    }

    #[test]
    fn applying_the_current_mode_is_a_no_op() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        engine.apply_mode(false, at(base, 100));
        // The online cursor did not move: the full interval is still owed.
        assert!(matches!(
            engine.report_decision(at(base, 100)),
            ReportDecision::Transmit { delta_seconds: 100, .. }
        ));
    }

    #[test]
    fn stop_freezes_the_total() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);
        engine.stop(at(base, 42));

        assert_eq!(engine.total_time(at(base, 300)), Duration::from_secs(42));
        // A final flush still sees the frozen interval.
        assert_eq!(engine.report_decision(at(base, 300)), ReportDecision::Skip);
    }

    #[test]
    fn refresh_status_reflects_the_current_state() {
        let base = Instant::now();
        let mut engine = TrackerEngine::new(false);
        engine.start(base);

        if let ReportDecision::Transmit { delta_seconds, snapshot } = engine.report_decision(at(base, 65)) {
            engine.commit_online(snapshot, delta_seconds);
        }
        assert_eq!(engine.status_kind(), StatusKind::Active);

        engine.on_idle_tick(at(base, 80));
        assert_eq!(engine.refresh_status().kind, StatusKind::Idle);
    }
}
