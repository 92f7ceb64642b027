// SPDX-License-Identifier: MPL-2.0
//! Headless demo: drives the toast overlay with a simulated clock and
//! prints the draw calls each frame would emit.
//!
//! A real host would implement `DrawSurface` over its GUI backend and call
//! `render_pass` once per frame; the recording surface stands in for that
//! backend here so the demo runs anywhere.

use iced_core::Rectangle;
use iced_toasts::notifications::style::icon;
use iced_toasts::{init_icons, DrawEvent, Notification, RecordingSurface, Stack};
use std::time::{Duration, Instant};

fn main() {
    let viewport = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 1280.0,
        height: 720.0,
    };

    let mut stack = Stack::new();
    stack.push(Notification::success("File saved to disk"));
    stack.push(Notification::warning("Disk space is running low").with_title("Storage"));
    stack.push(Notification::error("Connection lost").dismiss_after(Duration::from_millis(1500)));
    stack.push(Notification::info("3 files imported"));

    // One-time host setup: merge the icon glyphs into the font atlas.
    let mut setup = RecordingSurface::new();
    init_icons(&mut setup, icon::DEFAULT_PIXEL_SIZE);
    println!("host setup: {:?}", setup.events()[0]);

    let start = Instant::now();
    for step in 0..8 {
        let now = start + Duration::from_millis(step * 500);
        let mut surface = RecordingSurface::new();
        stack.render_pass(now, viewport, &mut surface);

        println!("\n--- t = {}ms, {} visible ---", step * 500, stack.len());
        for (anchor, texts) in surface
            .window_anchors()
            .iter()
            .zip(surface.window_texts())
        {
            println!("  toast at ({:.0}, {:.0}): {:?}", anchor.x, anchor.y, texts);
        }
        if let Some(DrawEvent::BeginWindow { bg_alpha, .. }) = surface.events().first() {
            println!("  first toast opacity: {bg_alpha:.2}");
        }
    }
}
