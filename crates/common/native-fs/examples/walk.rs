//! Walks a directory tree until it finishes or Ctrl+C is pressed.
//!
//! Usage: cargo run --example walk -- <root>

use native_fs::{CancellationSignal, walk_directory_tree};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let root = std::env::args()
        .nth(1)
        .ok_or("usage: walk <root directory>")?;

    let signal = CancellationSignal::new();
    let handler_signal = signal.clone();
    ctrlc::set_handler(move || {
        println!("\n👋 Received Ctrl+C, stopping walk...");
        handler_signal.cancel();
    })?;

    println!("🔍 Walking {root}");
    println!("   Press Ctrl+C to stop early.");
    println!();

    let started = Instant::now();
    let listing = walk_directory_tree(&root, &signal)?;

    println!("📁 Directories: {}", listing.directories.len());
    println!("📄 Files:       {}", listing.files.len());
    println!(
        "⏱️  {:?}{}",
        started.elapsed(),
        if signal.is_cancelled() { " (partial)" } else { "" }
    );

    Ok(())
}
