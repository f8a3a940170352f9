#[cfg(test)]
mod tests {
    use crate::core::config::GateConfig;
    use crate::core::gate::{GateError, ScrollGate};
    use crate::core::input::{FrameDeltas, InputQueue};
    use crate::core::render::{ElementId, TimerTask};
    use crate::core::state::{Direction, PauseState};
    use crate::core::testing::{FakePort, Mutation};

    fn wheel(delta: f64) -> FrameDeltas {
        FrameDeltas {
            scroll_delta: delta,
            timers: Vec::new(),
        }
    }

    fn idle() -> FrameDeltas {
        FrameDeltas::default()
    }

    /// Gate scrolled down into the pause band (line top 200 -> 110)
    fn locked_gate() -> (ScrollGate<FakePort>, FakePort) {
        let mut port = FakePort::with_gate(200.0, 4);
        let mut gate = ScrollGate::attach(&port, GateConfig::default());
        gate.tick(&mut port, &idle());

        port.scroll_line_to(110.0);
        gate.tick(&mut port, &idle());
        assert!(gate.is_locked());
        (gate, port)
    }

    // ========================================================================
    // Free scrolling
    // ========================================================================

    #[test]
    fn test_progress_outside_pause_zone() {
        let mut port = FakePort::with_gate(-200.0, 4);
        let mut gate = ScrollGate::attach(&port, GateConfig::default());
        gate.tick(&mut port, &idle());

        let coordinator = gate.coordinator().unwrap();
        assert_eq!(coordinator.state().progress, 0.6);
        assert!(!gate.is_locked());
        assert!(!port.mutations.contains(&Mutation::ScrollLocked(true)));

        // 0.6 * (1000 - 20)
        let indicator = port.styles_for(ElementId::Indicator);
        assert_eq!(
            indicator[0],
            &vec![
                ("opacity".to_string(), "1.000".to_string()),
                ("transform".to_string(), "translateY(588.00px)".to_string()),
            ]
        );
    }

    #[test]
    fn test_repeated_ticks_write_nothing() {
        let mut port = FakePort::with_gate(-200.0, 4);
        let mut gate = ScrollGate::attach(&port, GateConfig::default());
        gate.tick(&mut port, &idle());

        port.clear();
        for _ in 0..5 {
            gate.tick(&mut port, &idle());
        }
        assert!(port.mutations.is_empty());
    }

    // ========================================================================
    // Pause zone
    // ========================================================================

    #[test]
    fn test_lock_on_entering_band() {
        let (gate, port) = locked_gate();

        assert!(port.mutations.contains(&Mutation::ScrollLocked(true)));
        let state = gate.coordinator().unwrap().state();
        assert_eq!(state.pause, PauseState::Pausing);
        assert_eq!(state.entry, Some(Direction::Forward));
        assert_eq!(state.frozen_offset, 1890.0);
    }

    #[test]
    fn test_wheel_through_messages_then_release() {
        let (mut gate, mut port) = locked_gate();

        gate.tick(&mut port, &wheel(1000.0));
        assert!(gate.is_locked());
        let state = gate.coordinator().unwrap().state();
        assert_eq!(state.pause, PauseState::Locked);
        assert_eq!(state.secondary_progress, 150.0);
        assert_eq!(port.classes(ElementId::Message(1)), vec!["completed"]);
        assert_eq!(port.classes(ElementId::Message(2)), vec!["active"]);

        port.clear();
        gate.tick(&mut port, &wheel(1000.0));
        assert!(!gate.is_locked());

        let state = gate.coordinator().unwrap().state();
        assert_eq!(state.secondary_progress, 180.0);
        assert!(state.pass.forward);
        assert!(!state.pass.backward);

        let effects: Vec<_> = port
            .mutations
            .iter()
            .filter(|m| !matches!(m, Mutation::Style(..) | Mutation::Class(..)))
            .cloned()
            .collect();
        assert_eq!(
            effects,
            vec![
                Mutation::ScrollLocked(false),
                Mutation::ScrollTo(1902.0),
                Mutation::Timeout(TimerTask::RevealActionPanel, 600),
            ]
        );
        assert_eq!(port.classes(ElementId::Message(3)), vec!["active"]);
    }

    #[test]
    fn test_no_relock_right_after_release() {
        let (mut gate, mut port) = locked_gate();
        gate.tick(&mut port, &wheel(2000.0));
        assert!(!gate.is_locked());

        // The nudge moved the line to 98 -> 0.302, still inside the band
        gate.tick(&mut port, &idle());
        port.scroll_line_to(94.0);
        gate.tick(&mut port, &idle());
        assert!(!gate.is_locked());
    }

    #[test]
    fn test_small_scroll_back_after_release_stays_free() {
        let (mut gate, mut port) = locked_gate();
        gate.tick(&mut port, &wheel(2000.0));
        gate.tick(&mut port, &idle()); // line at 98 after the nudge
        port.clear();

        // 3px back up, still inside the band
        port.scroll_line_to(101.0);
        gate.tick(&mut port, &idle());
        gate.tick(&mut port, &wheel(5.0));

        assert!(!gate.is_locked());
        assert!(!port.mutations.contains(&Mutation::ScrollLocked(true)));
        assert!(
            !port
                .mutations
                .iter()
                .any(|m| matches!(m, Mutation::ScrollTo(..)))
        );
    }

    #[test]
    fn test_reverse_out_of_lock() {
        let (mut gate, mut port) = locked_gate();
        gate.tick(&mut port, &wheel(300.0)); // 45
        port.clear();

        gate.tick(&mut port, &wheel(-600.0)); // -90 -> 0
        assert!(!gate.is_locked());
        assert!(gate.coordinator().unwrap().state().pass.backward);
        assert!(port.mutations.contains(&Mutation::ScrollTo(1878.0)));
        assert!(
            !port
                .mutations
                .iter()
                .any(|m| matches!(m, Mutation::Timeout(..)))
        );
    }

    #[test]
    fn test_coalesced_touch_input() {
        let (mut gate, mut port) = locked_gate();
        let mut queue = InputQueue::new();

        queue.touch_start(500.0);
        assert!(queue.request_frame());
        queue.touch_move(290.0);
        assert!(!queue.request_frame());
        queue.touch_move(80.0);
        queue.touch_end();

        gate.tick(&mut port, &queue.drain());
        // 420px * 0.15
        let secondary = gate.coordinator().unwrap().state().secondary_progress;
        assert!((secondary - 63.0).abs() < 1e-9);
        assert_eq!(port.classes(ElementId::Message(1)), vec!["active"]);
    }

    // ========================================================================
    // Attach failures
    // ========================================================================

    #[test]
    fn test_missing_line_never_mutates() {
        let mut port = FakePort::with_gate(110.0, 4);
        port.boxes.remove(&ElementId::Line);

        let mut gate = ScrollGate::attach(&port, GateConfig::default());
        assert_eq!(
            gate.error(),
            Some(&GateError::MissingElement(ElementId::Line))
        );

        gate.tick(&mut port, &wheel(1000.0));
        port.scroll_line_to(100.0);
        gate.tick(&mut port, &wheel(-500.0));
        gate.detach(&mut port);

        assert!(port.mutations.is_empty());
        assert!(!gate.is_locked());
    }

    #[test]
    fn test_invalid_config_never_mutates() {
        let mut port = FakePort::with_gate(110.0, 2);
        let config = GateConfig {
            messages: vec!["one".to_string(), "two".to_string()],
            reset_distance: 0.01,
            ..GateConfig::default()
        };

        let mut gate = ScrollGate::attach(&port, config);
        assert!(matches!(gate.error(), Some(GateError::InvalidConfig(_))));

        gate.tick(&mut port, &idle());
        assert!(port.mutations.is_empty());
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    #[test]
    fn test_detach_cancels_pending_reveal() {
        let (mut gate, mut port) = locked_gate();
        gate.tick(&mut port, &wheel(2000.0));
        assert!(port.cancelled.borrow().is_empty());

        gate.detach(&mut port);
        assert_eq!(*port.cancelled.borrow(), vec![TimerTask::RevealActionPanel]);
        assert!(matches!(gate, ScrollGate::Detached));
    }

    #[test]
    fn test_detach_releases_held_lock() {
        let (mut gate, mut port) = locked_gate();
        port.clear();

        gate.detach(&mut port);
        assert_eq!(port.mutations, vec![Mutation::ScrollLocked(false)]);
        assert!(!gate.is_locked());

        port.clear();
        gate.tick(&mut port, &wheel(500.0));
        gate.detach(&mut port);
        assert!(port.mutations.is_empty());
    }

    #[test]
    fn test_leaving_upwards_cancels_reveal() {
        let (mut gate, mut port) = locked_gate();
        gate.tick(&mut port, &wheel(2000.0));

        port.scroll_line_to(300.0); // 0.1
        gate.tick(&mut port, &idle());
        assert_eq!(*port.cancelled.borrow(), vec![TimerTask::RevealActionPanel]);

        // A late delivery of the cancelled timer is ignored
        gate.tick(
            &mut port,
            &FrameDeltas {
                scroll_delta: 0.0,
                timers: vec![TimerTask::RevealActionPanel],
            },
        );
        assert!(!gate.coordinator().unwrap().state().action_revealed);
    }
}
