use super::utils::{
    connect_to_x11, current_workarea, pointer_position, qualify_x11_error, randr_monitors,
};
use crate::error::DisplayResult;
use native_query_core::{MonitorMatch, Point, Rect};
use tracing::debug;
use x11rb::connection::Connection;

#[derive(Debug, Clone)]
pub(crate) struct ImplDisplays {}

impl ImplDisplays {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

impl ImplDisplays {
    /// X11 has no point-to-monitor query, so this enumerates and picks the
    /// nearest monitor.
    pub(crate) fn monitor_from_point(&self, point: Point) -> DisplayResult<Option<MonitorMatch>> {
        let monitors = self.monitors()?;
        Ok(MonitorMatch::nearest(point, monitors))
    }

    pub(crate) fn monitors(&self) -> DisplayResult<Vec<MonitorMatch>> {
        enumerate_monitors().map_err(qualify_x11_error)
    }

    pub(crate) fn cursor_position(&self) -> DisplayResult<Point> {
        let (conn, screen_num) = connect_to_x11().map_err(qualify_x11_error)?;
        let root = conn.setup().roots[screen_num].root;

        let (x, y) = pointer_position(&conn, root)?;
        Ok(Point::new(x as f64, y as f64))
    }
}

fn enumerate_monitors() -> DisplayResult<Vec<MonitorMatch>> {
    let (conn, screen_num) = connect_to_x11()?;
    let screen = &conn.setup().roots[screen_num];
    let root = screen.root;

    let outputs = match randr_monitors(&conn, root) {
        Ok(outputs) if !outputs.is_empty() => outputs,
        Ok(_) => {
            debug!("RandR reported no monitors, using the root screen");
            vec![(root, screen_bounds(screen))]
        }
        Err(e) => {
            debug!("RandR monitor query failed, using the root screen: {e}");
            vec![(root, screen_bounds(screen))]
        }
    };

    let workarea = current_workarea(&conn, root).unwrap_or_else(|e| {
        debug!("Failed to read _NET_WORKAREA: {e}");
        None
    });

    Ok(outputs
        .into_iter()
        .map(|(handle, bounds)| MonitorMatch {
            handle: handle as u64,
            bounds,
            work_area: clip_to_workarea(bounds, workarea),
        })
        .collect())
}

fn screen_bounds(screen: &x11rb::protocol::xproto::Screen) -> Rect {
    Rect::from_origin_size(
        0.0,
        0.0,
        screen.width_in_pixels as f64,
        screen.height_in_pixels as f64,
    )
}

/// `_NET_WORKAREA` spans the whole virtual desktop, so each monitor gets the
/// part of it that overlaps its own bounds.
fn clip_to_workarea(bounds: Rect, workarea: Option<Rect>) -> Rect {
    workarea
        .and_then(|area| bounds.intersection(&area))
        .unwrap_or(bounds)
}
