//! Touch session state machine: lifecycle transitions, identifier matching,
//! and the defensive no-op paths around them.

use thumbpad_core::{
    JoystickConfig, JoystickController, JoystickEvent, Offset, Point, Positioning, Rect,
};
use thumbpad_testing::{EventLog, RecordingSurface, SurfaceCommand};

fn fixed_controller() -> (JoystickController<RecordingSurface>, RecordingSurface, EventLog) {
    let surface = RecordingSurface::new(
        Rect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
        },
        Rect {
            x: 0.0,
            y: 0.0,
            width: 300.0,
            height: 300.0,
        },
    );
    let log = EventLog::new();
    let mut controller = JoystickController::with_defaults(surface.clone());
    controller.on_event(log.listener());
    (controller, surface, log)
}

#[test]
fn fixed_session_runs_press_move_release() {
    let (mut controller, surface, log) = fixed_controller();

    controller.touch_start(7, Point::new(50.0, 50.0));
    assert!(controller.is_active());
    assert!(surface.is_marked_active());
    assert_eq!(log.events(), vec![JoystickEvent::Pressed]);

    controller.touch_move(7, Point::new(100.0, 50.0));
    assert_eq!(controller.x(), 1.0);
    assert_eq!(controller.y(), 0.0);

    controller.touch_end(7);
    assert!(!controller.is_active());
    assert!(!surface.is_marked_active());
    assert_eq!(
        log.events(),
        vec![
            JoystickEvent::Pressed,
            JoystickEvent::Changed(Offset::new(1.0, 0.0)),
            JoystickEvent::Released(Offset::new(1.0, 0.0)),
        ]
    );
    // Current value resets after the release notification.
    assert_eq!(controller.x(), 0.0);
    assert_eq!(controller.y(), 0.0);
}

#[test]
fn fixed_rejects_contact_outside_zone() {
    let (mut controller, surface, log) = fixed_controller();

    controller.touch_start(1, Point::new(200.0, 200.0));
    assert!(!controller.is_active());
    assert!(log.is_empty());
    assert!(surface.commands().is_empty());
}

#[test]
fn second_touch_start_is_absorbed() {
    let (mut controller, _surface, log) = fixed_controller();

    controller.touch_start(1, Point::new(50.0, 50.0));
    controller.touch_start(2, Point::new(60.0, 60.0));

    assert_eq!(log.events(), vec![JoystickEvent::Pressed]);

    // The first contact still owns the session and its origin.
    controller.touch_move(1, Point::new(100.0, 50.0));
    assert_eq!(controller.x(), 1.0);
}

#[test]
fn non_matching_identifiers_are_ignored() {
    let (mut controller, surface, log) = fixed_controller();

    controller.touch_start(1, Point::new(50.0, 50.0));
    surface.clear_commands();
    log.clear();

    controller.touch_move(2, Point::new(100.0, 50.0));
    controller.touch_end(2);

    assert!(controller.is_active());
    assert_eq!(controller.x(), 0.0);
    assert!(log.is_empty());
    assert!(surface.commands().is_empty());
}

#[test]
fn end_without_session_is_a_no_op() {
    let (mut controller, surface, log) = fixed_controller();

    controller.touch_end(1);
    assert!(log.is_empty());
    assert!(surface.commands().is_empty());
}

#[test]
fn cancel_takes_the_end_path() {
    let (mut controller, _surface, log) = fixed_controller();

    controller.touch_start(3, Point::new(50.0, 50.0));
    controller.touch_move(3, Point::new(75.0, 50.0));
    controller.touch_cancel(3);

    assert!(!controller.is_active());
    assert_eq!(
        log.events().last(),
        Some(&JoystickEvent::Released(Offset::new(0.5, 0.0)))
    );
    assert_eq!(controller.x(), 0.0);
}

#[test]
fn fixed_release_resets_handle_and_zone() {
    let (mut controller, surface, _log) = fixed_controller();

    controller.touch_start(1, Point::new(50.0, 50.0));
    controller.touch_move(1, Point::new(80.0, 50.0));
    surface.clear_commands();
    controller.touch_end(1);

    assert_eq!(
        surface.commands(),
        vec![
            SurfaceCommand::ResetHandle,
            SurfaceCommand::ResetZone,
            SurfaceCommand::SetActive(false),
        ]
    );
}

#[test]
fn floating_release_leaves_zone_in_place() {
    let surface = RecordingSurface::new(
        Rect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
        },
        Rect {
            x: 0.0,
            y: 0.0,
            width: 300.0,
            height: 300.0,
        },
    );
    let mut controller = JoystickController::new(
        surface.clone(),
        JoystickConfig {
            positioning: Positioning::Floating,
            ..Default::default()
        },
    );

    controller.touch_start(1, Point::new(150.0, 150.0));
    assert_eq!(surface.last_zone_center(), Some(Point::new(150.0, 150.0)));
    surface.clear_commands();

    controller.touch_end(1);
    assert_eq!(
        surface.commands(),
        vec![SurfaceCommand::ResetHandle, SurfaceCommand::SetActive(false)]
    );
}

#[test]
fn floating_snaps_origin_to_contact() {
    let surface = RecordingSurface::new(
        Rect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
        },
        Rect {
            x: 0.0,
            y: 0.0,
            width: 300.0,
            height: 300.0,
        },
    );
    let mut controller = JoystickController::new(
        surface.clone(),
        JoystickConfig {
            positioning: Positioning::Floating,
            ..Default::default()
        },
    );

    controller.touch_start(1, Point::new(20.0, 20.0));
    assert_eq!(surface.last_zone_center(), Some(Point::new(20.0, 20.0)));

    // Offsets are measured from the touch-down point.
    controller.touch_move(1, Point::new(70.0, 20.0));
    assert_eq!(controller.x(), 1.0);
    assert_eq!(controller.y(), 0.0);
}

#[test]
fn page_coordinates_are_made_parent_relative() {
    let surface = RecordingSurface::new(
        Rect {
            x: 100.0,
            y: 100.0,
            width: 100.0,
            height: 100.0,
        },
        Rect {
            x: 100.0,
            y: 100.0,
            width: 300.0,
            height: 300.0,
        },
    );
    let mut controller = JoystickController::with_defaults(surface.clone());

    controller.touch_start(1, Point::new(150.0, 150.0));
    assert!(controller.is_active());

    controller.touch_move(1, Point::new(200.0, 150.0));
    assert_eq!(controller.x(), 1.0);
    assert_eq!(controller.y(), 0.0);
}

#[test]
fn mid_gesture_config_change_applies_to_next_event() {
    let (mut controller, _surface, _log) = fixed_controller();

    controller.touch_start(1, Point::new(50.0, 50.0));
    controller.touch_move(1, Point::new(50.0, 90.0));
    assert_eq!(controller.y(), 0.8);

    controller.set_invert_y(true);
    controller.touch_move(1, Point::new(50.0, 90.0));
    assert_eq!(controller.y(), -0.8);
    assert!(controller.is_active());
}

#[test]
fn removed_listener_stops_receiving() {
    let (mut controller, _surface, _log) = fixed_controller();
    let late = EventLog::new();
    let id = controller.on_event(late.listener());

    controller.touch_start(1, Point::new(50.0, 50.0));
    assert_eq!(late.len(), 1);

    assert!(controller.remove_listener(id));
    controller.touch_move(1, Point::new(60.0, 50.0));
    assert_eq!(late.len(), 1);
}

#[test]
fn value_reads_zero_whenever_inactive() {
    let (mut controller, _surface, _log) = fixed_controller();
    assert_eq!(controller.horizontal(), 0.0);
    assert_eq!(controller.vertical(), 0.0);

    controller.touch_start(1, Point::new(50.0, 50.0));
    controller.touch_move(1, Point::new(90.0, 90.0));
    controller.touch_end(1);

    assert_eq!(controller.horizontal(), 0.0);
    assert_eq!(controller.vertical(), 0.0);
}
