use super::utils::visible_frames;
use crate::error::{DisplayError, DisplayResult};
use core_graphics::display::{CGDirectDisplayID, CGDisplay};
use core_graphics::event::CGEvent;
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use native_query_core::{MonitorMatch, Point, Rect};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone)]
pub(crate) struct ImplDisplays {}

impl ImplDisplays {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

impl ImplDisplays {
    pub(crate) fn monitor_from_point(&self, point: Point) -> DisplayResult<Option<MonitorMatch>> {
        let monitors = self.monitors()?;
        Ok(MonitorMatch::nearest(point, monitors))
    }

    /// Off the main thread AppKit cannot be asked for the menu bar and Dock
    /// reservations, and the work area falls back to the display bounds.
    pub(crate) fn monitors(&self) -> DisplayResult<Vec<MonitorMatch>> {
        let ids = CGDisplay::active_displays().map_err(|code| {
            DisplayError::platform(format!("CGGetActiveDisplayList failed ({code})"))
        })?;

        let frames = visible_frames().unwrap_or_else(|| {
            debug!("NSScreen unavailable off the main thread, work area = bounds");
            HashMap::new()
        });

        Ok(ids
            .into_iter()
            .map(|id| display_match(id, &frames))
            .collect())
    }

    pub(crate) fn cursor_position(&self) -> DisplayResult<Point> {
        let source = CGEventSource::new(CGEventSourceStateID::CombinedSessionState)
            .map_err(|_| DisplayError::platform("failed to create event source"))?;
        let event =
            CGEvent::new(source).map_err(|_| DisplayError::platform("failed to create event"))?;

        let location = event.location();
        Ok(Point::new(location.x, location.y))
    }
}

fn display_match(id: CGDirectDisplayID, visible: &HashMap<u32, Rect>) -> MonitorMatch {
    let bounds = CGDisplay::new(id).bounds();
    let bounds = Rect::from_origin_size(
        bounds.origin.x,
        bounds.origin.y,
        bounds.size.width,
        bounds.size.height,
    );

    let work_area = visible
        .get(&id)
        .and_then(|area| area.intersection(&bounds))
        .unwrap_or(bounds);

    MonitorMatch {
        handle: id as u64,
        bounds,
        work_area,
    }
}
