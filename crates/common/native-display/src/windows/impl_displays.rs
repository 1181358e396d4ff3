use super::utils;
use crate::error::DisplayResult;
use native_query_core::{MonitorMatch, Point};

#[derive(Debug, Clone)]
pub(crate) struct ImplDisplays {}

impl ImplDisplays {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

impl ImplDisplays {
    pub(crate) fn monitor_from_point(&self, point: Point) -> DisplayResult<Option<MonitorMatch>> {
        let Some(monitor) = utils::monitor_from_point(point.x as i32, point.y as i32) else {
            return Ok(None);
        };
        utils::monitor_info(monitor).map(Some)
    }

    pub(crate) fn monitors(&self) -> DisplayResult<Vec<MonitorMatch>> {
        utils::enumerate_monitors()?
            .into_iter()
            .map(utils::monitor_info)
            .collect()
    }

    pub(crate) fn cursor_position(&self) -> DisplayResult<Point> {
        let (x, y) = utils::cursor_pos()?;
        Ok(Point::new(x as f64, y as f64))
    }
}
