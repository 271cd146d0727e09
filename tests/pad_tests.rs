// Host-side tests for the pad glue: tracker transitions turned into effects.

use glam::Vec2;
use pad_core::*;

fn config() -> PadConfig {
    PadConfig {
        limits: ControlLimits::new(45.0).unwrap(),
        command_url: "/drive_command".into(),
        layout: PadLayout::default(),
    }
}

fn pad() -> Pad {
    // 300px surface: knob radius 30, travel 127.5
    Pad::new(&config(), 300.0).unwrap()
}

fn started_window(effects: &Effects) -> WindowId {
    match effects.as_slice() {
        [Effect::StartTimer { window, delay }] => {
            assert_eq!(*delay, THROTTLE_WINDOW);
            *window
        }
        other => panic!("expected one timer start, got {other:?}"),
    }
}

#[test]
fn new_pad_respects_minimum_size() {
    let p = Pad::new(&config(), 120.0).unwrap();
    assert_eq!(p.size(), 300.0);
    assert_eq!(p.geometry().knob_radius(), 30.0);
    assert!(!p.knob().tracking());
    assert_eq!(*p.status(), CommandStatus::Idle);
}

#[test]
fn grab_sends_stop_then_moves_are_throttled() {
    let mut p = pad();
    assert_eq!(
        p.mouse_down(Vec2::ZERO).as_slice(),
        &[Effect::Send(ControlCommand::STOP)]
    );

    let window = started_window(&p.mouse_move(Vec2::new(0.0, -100.0)));
    assert!(p.mouse_move(Vec2::new(10.0, -90.0)).is_empty());
    let last = p.mouse_move(Vec2::new(20.0, -80.0));
    assert!(last.is_empty());

    let expected = map(20.0, -80.0, 127.5, &config().limits).command();
    assert_eq!(p.timer_expired(window).as_slice(), &[Effect::Send(expected)]);
    assert_eq!(p.pending_window(), None);
}

#[test]
fn release_cancels_the_window_and_stops() {
    let mut p = pad();
    p.mouse_down(Vec2::ZERO);
    let window = started_window(&p.mouse_move(Vec2::new(0.0, -100.0)));

    assert_eq!(
        p.mouse_up().as_slice(),
        &[
            Effect::CancelTimer(window),
            Effect::Send(ControlCommand::STOP)
        ]
    );
    assert!(!p.knob().tracking());
    // the timer may still fire if the host lost the race; it must be inert
    assert!(p.timer_expired(window).is_empty());
}

#[test]
fn ignored_input_has_no_effects() {
    let mut p = pad();
    assert!(p.mouse_move(Vec2::new(0.0, -50.0)).is_empty());
    assert!(p.mouse_up().is_empty());
    assert!(p.mouse_down(Vec2::new(100.0, 100.0)).is_empty());
    assert!(p.touch_end(&[]).is_empty());
}

#[test]
fn transport_failure_acts_as_release() {
    let mut p = pad();
    p.touch_start(&[TouchPoint {
        id: 4,
        pos: Vec2::ZERO,
    }]);
    let window = started_window(&p.touch_move(&[TouchPoint {
        id: 4,
        pos: Vec2::new(0.0, -100.0),
    }]));

    let err = TransportError::Status {
        status: 500,
        body: "boom".into(),
    };
    assert_eq!(
        p.transport_failed(&err).as_slice(),
        &[
            Effect::CancelTimer(window),
            Effect::Send(ControlCommand::STOP)
        ]
    );
    assert!(!p.knob().tracking());
    assert_eq!(p.knob().active_touch(), None);
    assert_eq!(p.status().to_string(), "Error HTTP 500: boom");

    // the stop failing too must not loop
    let again = TransportError::Network("offline".into());
    assert!(p.transport_failed(&again).is_empty());
    assert_eq!(p.status().to_string(), "Error network error: offline");
}

#[test]
fn success_updates_status() {
    let mut p = pad();
    p.transport_succeeded(ControlCommand {
        pct_angle: 10,
        magnitude: 40,
    });
    assert_eq!(*p.status(), CommandStatus::SentMove);
    p.transport_succeeded(ControlCommand::STOP);
    assert_eq!(p.status().to_string(), "Sent Stop");
}

#[test]
fn resize_rebuilds_the_knob_and_stops_a_drag() {
    let mut p = pad();
    assert!(p.resize(600.0).unwrap().is_empty());
    assert_eq!(p.size(), 600.0);
    assert_eq!(p.geometry().knob_radius(), 60.0);

    p.mouse_down(Vec2::ZERO);
    p.mouse_move(Vec2::new(0.0, -200.0));
    let effects = p.resize(400.0).unwrap();
    assert_eq!(effects.last(), Some(&Effect::Send(ControlCommand::STOP)));
    assert!(!p.knob().tracking());
    assert_eq!(p.knob().position(), Vec2::ZERO);
    assert_eq!(p.geometry().max_knob_radius(), 170.0);
    assert!(p.redraw_mut().should_schedule());
}

#[test]
fn layout_with_travel_past_the_rim_is_rejected() {
    let mut cfg = config();
    cfg.layout.max_knob_radius_frac = 0.9;
    assert!(matches!(
        Pad::new(&cfg, 300.0),
        Err(ConfigError::Geometry(_))
    ));
}

#[test]
fn error_stays_visible_after_the_recovery_stop_lands() {
    let mut p = pad();
    p.mouse_down(Vec2::ZERO);
    p.mouse_move(Vec2::new(0.0, -100.0));

    let err = TransportError::Network("offline".into());
    let effects = p.transport_failed(&err);
    assert_eq!(effects.last(), Some(&Effect::Send(ControlCommand::STOP)));

    // reply to the stop sent by the release itself
    p.transport_succeeded(ControlCommand::STOP);
    assert_eq!(p.status().to_string(), "Error network error: offline");

    // the operator's next command reports normally again
    p.mouse_down(Vec2::ZERO);
    p.transport_succeeded(ControlCommand::STOP);
    assert_eq!(*p.status(), CommandStatus::SentStop);
}

#[test]
fn idle_failure_has_no_recovery_to_wait_for() {
    let mut p = pad();
    let err = TransportError::Network("offline".into());
    assert!(p.transport_failed(&err).is_empty());
    p.transport_succeeded(ControlCommand::STOP);
    assert_eq!(*p.status(), CommandStatus::SentStop);
}

#[test]
fn telemetry_failure_releases_a_drag() {
    let mut p = pad();
    p.mouse_down(Vec2::ZERO);
    let window = started_window(&p.mouse_move(Vec2::new(0.0, -100.0)));

    let err = TransportError::Status {
        status: 503,
        body: "down".into(),
    };
    assert_eq!(
        p.telemetry_failed(&err).as_slice(),
        &[
            Effect::CancelTimer(window),
            Effect::Send(ControlCommand::STOP)
        ]
    );
    assert!(!p.knob().tracking());
    assert_eq!(p.knob().position(), Vec2::ZERO);
    assert_eq!(p.status().to_string(), "Error HTTP 503: down");

    p.transport_succeeded(ControlCommand::STOP);
    assert!(p.status().to_string().starts_with("Error"));

    // nothing left to release
    assert!(p.telemetry_failed(&err).is_empty());
}
