//! Host-facing display queries.
//!
//! These run on machines with and without a monitor, so they only assert the
//! degrade-gracefully contract: results are well formed, never errors.

use native_display::{Displays, Point, Rect, Size};
use serial_test::serial;

fn assert_well_formed(rect: Rect) {
    assert!(rect.width >= 0.0, "negative width in {rect:?}");
    assert!(rect.height >= 0.0, "negative height in {rect:?}");
}

#[test]
#[serial]
fn size_is_never_negative() {
    let displays = Displays::new();
    for point in [
        Point::new(0.0, 0.0),
        Point::new(-10_000.0, -10_000.0),
        Point::new(1e7, 1e7),
    ] {
        let size = displays.monitor_size_from_point(point);
        assert!(size.width >= 0.0);
        assert!(size.height >= 0.0);
    }
}

#[test]
#[serial]
fn bounds_and_work_area_are_well_formed() {
    let displays = Displays::new();
    let origin = Point::default();

    let bounds = displays.monitor_bounds_from_point(origin);
    let work_area = displays.monitor_work_area_from_point(origin);
    assert_well_formed(bounds);
    assert_well_formed(work_area);

    if bounds.is_empty() {
        tracing::info!("No monitor resolved, skipping containment checks");
        assert_eq!(displays.monitor_size_from_point(origin), Size::default());
        return;
    }

    assert_eq!(displays.monitor_size_from_point(origin), bounds.size());
    assert!(work_area.width <= bounds.width);
    assert!(work_area.height <= bounds.height);
}

#[test]
#[serial]
fn off_screen_point_resolves_like_any_other() {
    let displays = Displays::new();
    let far_away = Point::new(-1e6, -1e6);

    let monitors = displays.monitors();
    let bounds = displays.monitor_bounds_from_point(far_away);

    if monitors.is_empty() {
        assert_eq!(bounds, Rect::default());
    } else {
        assert!(monitors.iter().any(|monitor| monitor.bounds == bounds));
    }
}

#[test]
#[serial]
fn cursor_position_is_stable_between_immediate_calls() {
    let displays = Displays::new();
    let first = displays.cursor_position();
    let second = displays.cursor_position();
    assert_eq!(first, second);
}

#[test]
#[serial]
fn free_functions_match_the_handle() {
    let displays = Displays::default();
    let point = Point::new(10.0, 10.0);

    assert_eq!(
        native_display::monitor_bounds_from_point(point),
        displays.monitor_bounds_from_point(point)
    );
    assert_eq!(
        native_display::monitor_work_area_from_point(point),
        displays.monitor_work_area_from_point(point)
    );
    assert_eq!(
        native_display::monitor_size_from_point(point),
        displays.monitor_size_from_point(point)
    );
    assert_eq!(native_display::monitors().len(), displays.monitors().len());
}
