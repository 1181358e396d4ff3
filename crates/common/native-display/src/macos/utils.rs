use native_query_core::Rect;
use objc2_app_kit::NSScreen;
use objc2_foundation::{MainThreadMarker, NSNumber, NSRect, ns_string};
use std::collections::HashMap;

/// Visible frames of every screen, keyed by `CGDirectDisplayID`, in the Core
/// Graphics global space (origin at the top-left of the primary display, y
/// growing down). The visible frame leaves out the menu bar and the Dock.
///
/// AppKit only hands out `NSScreen` on the main thread; elsewhere this
/// returns `None`.
pub(crate) fn visible_frames() -> Option<HashMap<u32, Rect>> {
    let mtm = MainThreadMarker::new()?;
    let screens = NSScreen::screens(mtm);

    // The first screen carries the menu bar and anchors the Cocoa space.
    let primary_height = screens.firstObject()?.frame().size.height;

    Some(
        screens
            .iter()
            .filter_map(|screen| {
                let id = screen_number(&screen)?;
                Some((id, flip_to_top_left(screen.visibleFrame(), primary_height)))
            })
            .collect(),
    )
}

fn screen_number(screen: &NSScreen) -> Option<u32> {
    let description = screen.deviceDescription();
    let number = description.objectForKey(ns_string!("NSScreenNumber"))?;
    number
        .downcast::<NSNumber>()
        .ok()
        .map(|number| number.unsignedIntValue())
}

/// Cocoa frames grow up from the bottom-left of the primary screen.
fn flip_to_top_left(frame: NSRect, primary_height: f64) -> Rect {
    Rect::from_origin_size(
        frame.origin.x,
        primary_height - frame.origin.y - frame.size.height,
        frame.size.width,
        frame.size.height,
    )
}
