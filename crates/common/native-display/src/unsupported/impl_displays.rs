use crate::error::{DisplayError, DisplayResult};
use native_query_core::{MonitorMatch, Point};

#[derive(Debug, Clone)]
pub(crate) struct ImplDisplays {}

impl ImplDisplays {
    pub(crate) fn new() -> Self {
        Self {}
    }

    pub(crate) fn monitor_from_point(&self, _point: Point) -> DisplayResult<Option<MonitorMatch>> {
        Err(DisplayError::Unsupported)
    }

    pub(crate) fn monitors(&self) -> DisplayResult<Vec<MonitorMatch>> {
        Err(DisplayError::Unsupported)
    }

    pub(crate) fn cursor_position(&self) -> DisplayResult<Point> {
        Err(DisplayError::Unsupported)
    }
}
