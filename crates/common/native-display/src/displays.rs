use crate::{MonitorMatch, Point, Rect, Size, platform::impl_displays::ImplDisplays};
use tracing::debug;

/// Entry point for monitor geometry and cursor queries.
///
/// Every query resolves the monitor nearest to the given point, so a point
/// outside every monitor still resolves. None of the queries fail: when the
/// host cannot answer, the result is the zero value of the return type and the
/// reason is logged at `debug`.
#[derive(Debug, Clone)]
pub struct Displays {
    impl_displays: ImplDisplays,
}

impl Displays {
    #[must_use]
    pub fn new() -> Self {
        Self {
            impl_displays: ImplDisplays::new(),
        }
    }
}

impl Default for Displays {
    fn default() -> Self {
        Self::new()
    }
}

impl Displays {
    /// Resolves the monitor containing `point`, or the one nearest to it.
    #[must_use]
    pub fn monitor_from_point(&self, point: Point) -> Option<MonitorMatch> {
        match self.impl_displays.monitor_from_point(point) {
            Ok(Some(monitor)) => Some(monitor),
            Ok(None) => {
                debug!("No monitor resolved for ({}, {})", point.x, point.y);
                None
            }
            Err(e) => {
                debug!("Failed to resolve monitor for ({}, {}): {e}", point.x, point.y);
                None
            }
        }
    }

    #[must_use]
    pub fn monitor_size_from_point(&self, point: Point) -> Size {
        self.monitor_from_point(point)
            .map(|monitor| monitor.bounds.size())
            .unwrap_or_default()
    }

    /// Full monitor bounds in virtual-desktop coordinates. Monitors left of or
    /// above the primary one have negative origins.
    #[must_use]
    pub fn monitor_bounds_from_point(&self, point: Point) -> Rect {
        self.monitor_from_point(point)
            .map(|monitor| monitor.bounds)
            .unwrap_or_default()
    }

    /// Monitor bounds minus the space the OS reserves for its own chrome
    /// (taskbar, panels, dock).
    #[must_use]
    pub fn monitor_work_area_from_point(&self, point: Point) -> Rect {
        self.monitor_from_point(point)
            .map(|monitor| monitor.work_area)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn cursor_position(&self) -> Point {
        self.impl_displays.cursor_position().unwrap_or_else(|e| {
            debug!("Failed to read cursor position: {e}");
            Point::default()
        })
    }

    #[must_use]
    pub fn monitors(&self) -> Vec<MonitorMatch> {
        self.impl_displays.monitors().unwrap_or_else(|e| {
            debug!("Failed to enumerate monitors: {e}");
            Vec::new()
        })
    }
}
