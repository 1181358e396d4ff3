//! Prints every monitor and the one under the pointer.
//!
//! Usage: cargo run --example monitors

use native_display::Displays;

fn main() {
    tracing_subscriber::fmt::init();

    let displays = Displays::new();
    let monitors = displays.monitors();

    println!("🖥️  {} monitor(s) found", monitors.len());
    for monitor in &monitors {
        println!(
            "   #{:<10} bounds {:?}  work area {:?}",
            monitor.handle, monitor.bounds, monitor.work_area
        );
    }

    let cursor = displays.cursor_position();
    println!();
    println!("🖱️  Cursor at ({}, {})", cursor.x, cursor.y);

    let size = displays.monitor_size_from_point(cursor);
    if size.is_empty() {
        println!("   No monitor could be resolved");
    } else {
        println!("   Monitor size: {} x {}", size.width, size.height);
        println!("   Bounds:    {:?}", displays.monitor_bounds_from_point(cursor));
        println!("   Work area: {:?}", displays.monitor_work_area_from_point(cursor));
    }
}
