// Host-side tests for knob ownership and touch multiplexing.

use glam::Vec2;
use pad_core::*;

fn tracker() -> PointerTracker {
    let geometry = PadGeometry::new(150.0, 30.0, 120.0).unwrap();
    PointerTracker::new(geometry, ControlLimits::new(45.0).unwrap())
}

fn touch(id: TouchId, x: f32, y: f32) -> TouchPoint {
    TouchPoint {
        id,
        pos: Vec2::new(x, y),
    }
}

const MOUSE: InputSource = InputSource::Mouse;

#[test]
fn hit_box_is_a_square_around_the_knob() {
    let t = tracker();
    assert!(t.contains(Vec2::ZERO));
    assert!(t.contains(Vec2::new(29.0, 29.0))); // outside the circle, inside the box
    assert!(!t.contains(Vec2::new(30.0, 0.0)));
    assert!(!t.contains(Vec2::new(0.0, -31.0)));
}

#[test]
fn start_outside_knob_is_ignored() {
    let mut t = tracker();
    let before = *t.state();
    assert_eq!(
        t.start(MOUSE, Vec2::new(100.0, 100.0)),
        Transition::Ignored(Ignored::OutsideKnob)
    );
    assert_eq!(*t.state(), before);
    assert!(!t.state().tracking());
}

#[test]
fn mouse_drag_start_move_end() {
    let mut t = tracker();
    assert_eq!(
        t.start(MOUSE, Vec2::ZERO),
        Transition::Command(ControlCommand::STOP)
    );
    assert!(t.state().tracking());
    assert_eq!(t.state().owner(), Some(MOUSE));
    assert_eq!(t.state().active_touch(), None);

    let moved = t.move_to(MOUSE, Vec2::new(0.0, -60.0));
    assert_eq!(
        moved,
        Transition::Command(ControlCommand {
            pct_angle: 0,
            magnitude: 50
        })
    );
    assert_eq!(t.state().position(), Vec2::new(0.0, -60.0));

    // dragging past the rim keeps the knob on it
    let far = t.move_to(MOUSE, Vec2::new(0.0, -500.0)).command().unwrap();
    assert_eq!(far.magnitude, 100);
    assert_eq!(t.state().position(), Vec2::new(0.0, -120.0));

    assert_eq!(t.end(MOUSE), Transition::Command(ControlCommand::STOP));
    assert!(!t.state().tracking());
    assert_eq!(t.state().position(), Vec2::ZERO);
    assert_eq!(t.state().pose, KnobPose::CENTER);
}

#[test]
fn move_and_end_without_tracking_are_ignored() {
    let mut t = tracker();
    assert_eq!(
        t.move_to(MOUSE, Vec2::new(0.0, -50.0)),
        Transition::Ignored(Ignored::NotTracking)
    );
    assert_eq!(t.end(MOUSE), Transition::Ignored(Ignored::NotTracking));
    assert_eq!(t.release(), Transition::Ignored(Ignored::NotTracking));
    assert_eq!(t.state().position(), Vec2::ZERO);
}

#[test]
fn hit_box_follows_the_knob() {
    let mut t = tracker();
    t.start(MOUSE, Vec2::ZERO);
    t.move_to(MOUSE, Vec2::new(0.0, -100.0));
    assert!(t.contains(Vec2::new(0.0, -100.0)));
    assert!(!t.contains(Vec2::ZERO));
}

#[test]
fn second_touch_cannot_take_over() {
    let mut t = tracker();
    assert!(t.touch_start(&[touch(1, 0.0, 0.0)]).command().is_some());
    assert_eq!(t.state().active_touch(), Some(1));

    let before = *t.state();
    assert_eq!(
        t.touch_start(&[touch(2, 0.0, 0.0)]),
        Transition::Ignored(Ignored::AlreadyTracking)
    );
    assert_eq!(*t.state(), before);
}

#[test]
fn only_the_owning_touch_moves_the_knob() {
    let mut t = tracker();
    t.touch_start(&[touch(1, 0.0, 0.0)]);

    let before = *t.state();
    assert_eq!(
        t.touch_move(&[touch(2, 0.0, -100.0)]),
        Transition::Ignored(Ignored::TouchMismatch)
    );
    assert_eq!(*t.state(), before);

    let moved = t.touch_move(&[touch(2, 0.0, -100.0), touch(1, 0.0, -60.0)]);
    assert_eq!(moved.command().map(|c| c.magnitude), Some(50));
    assert_eq!(t.state().position(), Vec2::new(0.0, -60.0));
}

#[test]
fn touch_end_clears_the_touch_id() {
    let mut t = tracker();
    t.touch_start(&[touch(7, 0.0, 0.0)]);

    assert_eq!(
        t.touch_end(&[touch(8, 0.0, 0.0)]),
        Transition::Ignored(Ignored::TouchMismatch)
    );
    assert!(t.state().tracking());

    assert_eq!(
        t.touch_end(&[touch(7, 5.0, 5.0)]),
        Transition::Command(ControlCommand::STOP)
    );
    assert!(!t.state().tracking());
    assert_eq!(t.state().active_touch(), None);

    // a new touch can now take the knob
    assert!(t.touch_start(&[touch(9, 0.0, 0.0)]).command().is_some());
    assert_eq!(t.state().active_touch(), Some(9));
}

#[test]
fn first_touch_on_the_knob_wins() {
    let mut t = tracker();
    let started = t.touch_start(&[touch(3, 100.0, 100.0), touch(4, 5.0, 5.0), touch(5, 0.0, 0.0)]);
    assert!(started.command().is_some());
    assert_eq!(t.state().active_touch(), Some(4));

    let mut t = tracker();
    assert_eq!(
        t.touch_start(&[touch(3, 100.0, 100.0)]),
        Transition::Ignored(Ignored::OutsideKnob)
    );
}

#[test]
fn mouse_and_touch_do_not_share_the_knob() {
    let mut t = tracker();
    t.touch_start(&[touch(1, 0.0, 0.0)]);
    assert_eq!(
        t.start(MOUSE, Vec2::ZERO),
        Transition::Ignored(Ignored::AlreadyTracking)
    );
    assert_eq!(
        t.move_to(MOUSE, Vec2::new(0.0, -50.0)),
        Transition::Ignored(Ignored::OtherSource)
    );
    assert_eq!(t.end(MOUSE), Transition::Ignored(Ignored::OtherSource));
    assert_eq!(t.state().active_touch(), Some(1));

    let mut t = tracker();
    t.start(MOUSE, Vec2::ZERO);
    assert_eq!(
        t.touch_start(&[touch(1, 0.0, 0.0)]),
        Transition::Ignored(Ignored::AlreadyTracking)
    );
    assert_eq!(
        t.touch_move(&[touch(1, 0.0, -50.0)]),
        Transition::Ignored(Ignored::OtherSource)
    );
}

#[test]
fn release_ends_any_owner() {
    let mut t = tracker();
    t.touch_start(&[touch(1, 0.0, 0.0)]);
    t.touch_move(&[touch(1, 0.0, -80.0)]);
    assert_eq!(t.release(), Transition::Command(ControlCommand::STOP));
    assert!(!t.state().tracking());
    assert_eq!(t.state().active_touch(), None);
    assert_eq!(t.state().position(), Vec2::ZERO);
}

#[test]
fn redraw_is_coalesced_per_frame() {
    let mut t = tracker();
    // a fresh knob needs its first draw
    assert!(t.redraw_mut().should_schedule());
    assert!(!t.redraw_mut().should_schedule());
    assert!(t.redraw_mut().begin_frame());
    assert!(!t.redraw_mut().should_schedule());

    t.start(MOUSE, Vec2::ZERO);
    t.move_to(MOUSE, Vec2::new(0.0, -10.0));
    t.move_to(MOUSE, Vec2::new(0.0, -20.0));
    assert!(t.redraw_mut().should_schedule());
    assert!(!t.redraw_mut().should_schedule());
    assert!(t.redraw_mut().begin_frame());
    assert!(!t.redraw_mut().begin_frame());

    // ignored input does not dirty the pad
    t.start(MOUSE, Vec2::new(200.0, 200.0));
    assert!(!t.redraw_mut().is_dirty());
}

#[test]
fn failed_frame_request_can_be_retried() {
    let mut t = tracker();
    assert!(t.redraw_mut().should_schedule());
    t.redraw_mut().unschedule();
    assert!(t.redraw_mut().is_dirty());
    assert!(t.redraw_mut().should_schedule());
    assert!(!t.redraw_mut().should_schedule());
}
