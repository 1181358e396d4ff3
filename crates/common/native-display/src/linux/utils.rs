use crate::error::{DisplayError, DisplayResult};
use native_query_core::Rect;
use std::env::var_os;
use x11rb::{
    connection::Connection,
    protocol::{
        randr::ConnectionExt as RandrConnectionExt,
        xproto::{AtomEnum, ConnectionExt, Window},
    },
    rust_connection::RustConnection,
};

/// Checks if Wayland based on two common variables:
/// - `XDG_SESSION_TYPE` — set by the display manager, compared case-insensitively
/// - `WAYLAND_DISPLAY` — set by the compositor when a Wayland socket is available;
pub(crate) fn wayland_detect() -> bool {
    let is_wayland_session = var_os("XDG_SESSION_TYPE")
        .map(|v| v.to_string_lossy().eq_ignore_ascii_case("wayland"))
        .unwrap_or(false);

    let has_wayland_display = var_os("WAYLAND_DISPLAY")
        .map(|v| !v.is_empty())
        .unwrap_or(false);

    is_wayland_session || has_wayland_display
}

pub(crate) fn connect_to_x11() -> DisplayResult<(RustConnection, usize)> {
    RustConnection::connect(None).map_err(|e| {
        let error_str = e.to_string();
        if error_str.contains("DISPLAY")
            || error_str.contains("display")
            || error_str.contains("No such file or directory")
        {
            DisplayError::NoDisplay
        } else {
            DisplayError::platform_with_source("failed to connect to X11", e)
        }
    })
}

/// Pure Wayland sessions without XWayland cannot be queried through X11.
pub(crate) fn qualify_x11_error(err: DisplayError) -> DisplayError {
    if matches!(err, DisplayError::NoDisplay) && wayland_detect() {
        DisplayError::Unsupported
    } else {
        err
    }
}

fn get_atom<C: Connection>(conn: &C, name: &[u8]) -> DisplayResult<u32> {
    let cookie = conn
        .intern_atom(false, name)
        .map_err(|e| DisplayError::platform_with_source("failed to intern atom", e))?;

    let reply = cookie
        .reply()
        .map_err(|e| DisplayError::platform_with_source("failed to get atom reply", e))?;

    Ok(reply.atom)
}

const MAX_CARDINAL_PROPERTY_LEN: u32 = 1024;

fn read_cardinals<C: Connection>(
    conn: &C,
    window: Window,
    property: u32,
) -> DisplayResult<Vec<u32>> {
    let cookie = conn
        .get_property(
            false,
            window,
            property,
            AtomEnum::CARDINAL,
            0,
            MAX_CARDINAL_PROPERTY_LEN,
        )
        .map_err(|e| DisplayError::platform_with_source("failed to get root property", e))?;

    let reply = cookie
        .reply()
        .map_err(|e| DisplayError::platform_with_source("failed to get root property reply", e))?;

    Ok(reply.value32().map(Iterator::collect).unwrap_or_default())
}

/// Area left free by panels and docks on the current desktop, as published by
/// the window manager in `_NET_WORKAREA`. `None` when no EWMH window manager
/// is running.
pub(crate) fn current_workarea<C: Connection>(
    conn: &C,
    root: Window,
) -> DisplayResult<Option<Rect>> {
    let net_workarea = get_atom(conn, b"_NET_WORKAREA")?;
    let net_current_desktop = get_atom(conn, b"_NET_CURRENT_DESKTOP")?;

    let workareas = read_cardinals(conn, root, net_workarea)?;
    let desktop = read_cardinals(conn, root, net_current_desktop)?
        .first()
        .copied()
        .unwrap_or(0) as usize;

    let Some(area) = workareas.chunks_exact(4).nth(desktop) else {
        return Ok(None);
    };

    Ok(Some(Rect::from_origin_size(
        area[0] as i32 as f64,
        area[1] as i32 as f64,
        area[2] as f64,
        area[3] as f64,
    )))
}

/// Active RandR monitors as `(name atom, bounds)` pairs.
pub(crate) fn randr_monitors<C: Connection>(
    conn: &C,
    root: Window,
) -> DisplayResult<Vec<(u32, Rect)>> {
    let cookie = conn
        .randr_get_monitors(root, true)
        .map_err(|e| DisplayError::platform_with_source("failed to query RandR monitors", e))?;

    let reply = cookie.reply().map_err(|e| {
        DisplayError::platform_with_source("failed to get RandR monitors reply", e)
    })?;

    Ok(reply
        .monitors
        .iter()
        .map(|monitor| {
            (
                monitor.name,
                Rect::from_origin_size(
                    monitor.x as f64,
                    monitor.y as f64,
                    monitor.width as f64,
                    monitor.height as f64,
                ),
            )
        })
        .collect())
}

pub(crate) fn pointer_position<C: Connection>(
    conn: &C,
    root: Window,
) -> DisplayResult<(i16, i16)> {
    let cookie = conn
        .query_pointer(root)
        .map_err(|e| DisplayError::platform_with_source("failed to query pointer", e))?;

    let reply = cookie
        .reply()
        .map_err(|e| DisplayError::platform_with_source("failed to get pointer reply", e))?;

    Ok((reply.root_x, reply.root_y))
}
