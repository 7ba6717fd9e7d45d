//! End-to-end observer tests driven through the layout robot.

use viewprobe_testing::{GeometryEvent, GeometryRecorder, LayoutRobot};
use viewprobe_ui::{EdgeInsets, GeometryCallbacks, Modifier, Size};

#[test]
fn appear_only_observer_sees_exactly_one_event() {
    let recorder = GeometryRecorder::new();
    let modifier = Modifier::empty().on_appear(recorder.record_appear());

    let mut robot = LayoutRobot::new(&modifier, 100.0, 200.0);
    robot.layout_pass();
    robot.layout_pass();
    robot.layout_pass();

    recorder.assert_events(&[GeometryEvent::Appeared {
        size: Size::new(100.0, 200.0),
        insets: EdgeInsets::ZERO,
    }]);
    assert_eq!(robot.pass_count(), 3);
}

#[test]
fn size_round_trip_reports_both_transitions() {
    let recorder = GeometryRecorder::new();
    let modifier = Modifier::empty()
        .on_appear(recorder.record_appear())
        .then(Modifier::empty().on_size_changed_values(recorder.record_size_change_values()));

    let mut robot = LayoutRobot::new(&modifier, 100.0, 200.0);
    robot.layout_pass();
    robot.set_viewport(100.0, 300.0);
    robot.set_viewport(100.0, 200.0);

    recorder.assert_events(&[
        GeometryEvent::Appeared {
            size: Size::new(100.0, 200.0),
            insets: EdgeInsets::ZERO,
        },
        GeometryEvent::SizeChanged {
            old: Size::new(100.0, 200.0),
            new: Size::new(100.0, 300.0),
        },
        GeometryEvent::SizeChanged {
            old: Size::new(100.0, 300.0),
            new: Size::new(100.0, 200.0),
        },
    ]);
}

#[test]
fn zero_arg_insets_only_observer_fires_once_per_change() {
    let recorder = GeometryRecorder::new();
    let modifier = Modifier::empty().on_insets_changed(recorder.record_insets_change());

    let mut robot = LayoutRobot::new(&modifier, 390.0, 844.0);
    robot.layout_pass();
    robot.set_safe_area(EdgeInsets::from_components(0.0, 0.0, 34.0, 0.0));
    robot.layout_pass();

    // One notification with no observable arguments; nothing registered on
    // the appear or size channels, so nothing else is recorded.
    recorder.assert_events(&[GeometryEvent::InsetsChangeNotified]);
}

#[test]
fn unset_channels_do_not_block_set_ones() {
    let recorder = GeometryRecorder::new();
    let modifier = Modifier::empty().observe_geometry(
        GeometryCallbacks::new().on_insets_change_values(recorder.record_insets_change_values()),
    );

    let mut robot = LayoutRobot::new(&modifier, 800.0, 600.0);
    robot.layout_pass();
    robot.set_viewport(1024.0, 768.0);

    let notch = EdgeInsets::from_components(47.0, 0.0, 0.0, 0.0);
    robot.set_safe_area(notch);

    recorder.assert_events(&[GeometryEvent::InsetsChanged {
        old: EdgeInsets::ZERO,
        new: notch,
    }]);
}

#[test]
fn full_callback_set_records_ordered_history() {
    let recorder = GeometryRecorder::new();
    let modifier = Modifier::empty().observe_geometry(recorder.all_callbacks());

    let mut robot = LayoutRobot::new(&modifier, 390.0, 844.0);
    robot.layout_pass();

    let notch = EdgeInsets::from_components(47.0, 0.0, 34.0, 0.0);
    robot.set_safe_area(notch);
    robot.set_viewport(844.0, 390.0);
    robot.layout_pass();

    recorder.assert_events(&[
        GeometryEvent::Appeared {
            size: Size::new(390.0, 844.0),
            insets: EdgeInsets::ZERO,
        },
        GeometryEvent::InsetsChanged {
            old: EdgeInsets::ZERO,
            new: notch,
        },
        GeometryEvent::SizeChanged {
            old: Size::new(390.0, 844.0),
            new: Size::new(844.0, 390.0),
        },
    ]);
}

#[test]
fn sibling_views_are_isolated() {
    let left_recorder = GeometryRecorder::new();
    let right_recorder = GeometryRecorder::new();
    let left = Modifier::empty().observe_geometry(left_recorder.all_callbacks());
    let right = Modifier::empty().observe_geometry(right_recorder.all_callbacks());

    let mut left_robot = LayoutRobot::new(&left, 100.0, 100.0);
    let mut right_robot = LayoutRobot::new(&right, 100.0, 100.0);
    left_robot.layout_pass();
    right_robot.layout_pass();

    left_robot.set_viewport(300.0, 100.0);

    assert_eq!(left_recorder.len(), 2);
    assert_eq!(
        right_recorder.events(),
        vec![GeometryEvent::Appeared {
            size: Size::new(100.0, 100.0),
            insets: EdgeInsets::ZERO,
        }]
    );
}

#[test]
fn reattaching_the_observer_replays_appear() {
    let recorder = GeometryRecorder::new();
    let modifier = Modifier::empty().on_appear(recorder.record_appear());

    let mut robot = LayoutRobot::new(&modifier, 100.0, 100.0);
    robot.layout_pass();

    robot.update_modifier(&Modifier::empty());
    robot.layout_pass();

    robot.update_modifier(&modifier);
    robot.layout_pass();

    recorder.assert_events(&[
        GeometryEvent::Appeared {
            size: Size::new(100.0, 100.0),
            insets: EdgeInsets::ZERO,
        },
        GeometryEvent::Appeared {
            size: Size::new(100.0, 100.0),
            insets: EdgeInsets::ZERO,
        },
    ]);
}

#[test]
fn robot_reports_geometry_request_from_attached_observer() {
    let modifier = Modifier::empty().on_size_changed(|| {});
    let robot = LayoutRobot::new(&modifier, 10.0, 10.0);
    assert!(robot.handle().geometry_updates_requested());
}
