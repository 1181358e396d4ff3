use crate::error::{DisplayError, DisplayResult};
use native_query_core::{MonitorMatch, Rect};
use windows_sys::Win32::{
    Foundation::{LPARAM, POINT, RECT},
    Graphics::Gdi::{
        EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITOR_DEFAULTTONEAREST,
        MONITORINFO, MonitorFromPoint,
    },
    UI::WindowsAndMessaging::GetCursorPos,
};
use windows_sys::core::BOOL;

pub(crate) fn rect_from_win32(rect: &RECT) -> Rect {
    Rect::from_edges(
        rect.left as f64,
        rect.top as f64,
        rect.right as f64,
        rect.bottom as f64,
    )
}

/// Monitor containing `(x, y)`, falling back to the nearest one.
pub(crate) fn monitor_from_point(x: i32, y: i32) -> Option<HMONITOR> {
    let monitor = unsafe { MonitorFromPoint(POINT { x, y }, MONITOR_DEFAULTTONEAREST) };
    if monitor.is_null() {
        None
    } else {
        Some(monitor)
    }
}

/// Queries bounds and work area directly from the monitor handle.
pub(crate) fn monitor_info(monitor: HMONITOR) -> DisplayResult<MonitorMatch> {
    let mut info: MONITORINFO = unsafe { std::mem::zeroed() };
    info.cbSize = std::mem::size_of::<MONITORINFO>() as u32;

    let ok = unsafe { GetMonitorInfoW(monitor, &mut info) };
    if ok == 0 {
        return Err(DisplayError::platform("GetMonitorInfoW failed"));
    }

    Ok(MonitorMatch {
        handle: monitor as usize as u64,
        bounds: rect_from_win32(&info.rcMonitor),
        work_area: rect_from_win32(&info.rcWork),
    })
}

unsafe extern "system" fn collect_monitor(
    monitor: HMONITOR,
    _device_context: HDC,
    _bounds: *mut RECT,
    data: LPARAM,
) -> BOOL {
    let handles = unsafe { &mut *(data as *mut Vec<HMONITOR>) };
    handles.push(monitor);
    1
}

pub(crate) fn enumerate_monitors() -> DisplayResult<Vec<HMONITOR>> {
    let mut handles: Vec<HMONITOR> = Vec::new();
    let ok = unsafe {
        EnumDisplayMonitors(
            std::ptr::null_mut(),
            std::ptr::null(),
            Some(collect_monitor),
            &mut handles as *mut Vec<HMONITOR> as LPARAM,
        )
    };

    if ok == 0 {
        return Err(DisplayError::platform("EnumDisplayMonitors failed"));
    }
    Ok(handles)
}

pub(crate) fn cursor_pos() -> DisplayResult<(i32, i32)> {
    let mut point = POINT { x: 0, y: 0 };
    let ok = unsafe { GetCursorPos(&mut point) };
    if ok == 0 {
        return Err(DisplayError::platform("GetCursorPos failed"));
    }
    Ok((point.x, point.y))
}
