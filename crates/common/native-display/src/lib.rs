pub use native_query_core::{MonitorMatch, Point, Rect, Size};

mod displays;
mod error;

pub use displays::*;

#[cfg(target_os = "macos")]
#[path = "macos/mod.rs"]
mod platform;

#[cfg(target_os = "linux")]
#[path = "linux/mod.rs"]
mod platform;

#[cfg(target_os = "windows")]
#[path = "windows/mod.rs"]
mod platform;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
#[path = "unsupported/mod.rs"]
mod platform;

/// Size of the monitor containing (or nearest to) `point`.
///
/// Returns a zero size when no monitor can be resolved.
pub fn monitor_size_from_point(point: Point) -> Size {
    Displays::new().monitor_size_from_point(point)
}

/// Full bounds of the monitor containing (or nearest to) `point`.
pub fn monitor_bounds_from_point(point: Point) -> Rect {
    Displays::new().monitor_bounds_from_point(point)
}

/// Usable area of the monitor containing (or nearest to) `point`.
pub fn monitor_work_area_from_point(point: Point) -> Rect {
    Displays::new().monitor_work_area_from_point(point)
}

/// Current pointer location, or the origin when the host cannot report it.
pub fn cursor_position() -> Point {
    Displays::new().cursor_position()
}

/// Every monitor the host enumerates.
pub fn monitors() -> Vec<MonitorMatch> {
    Displays::new().monitors()
}
