// SPDX-License-Identifier: MPL-2.0
//! Notification stack management and per-frame rendering.
//!
//! The `Stack` owns the active notifications in display order and drives
//! the per-frame algorithm: evict expired items, lay the survivors out
//! bottom-right-anchored growing upward, and emit their draw calls to the
//! host's [`DrawSurface`].

use super::notification::{Notification, Phase};
use super::surface::DrawSurface;
use crate::config::OverlayConfig;
use crate::error::{Error, Result};
use iced_core::{Point, Rectangle};
use std::time::Instant;

/// An ordered collection of active notifications.
///
/// Insertion order is display order: the oldest notification sits closest
/// to the anchor corner, newer ones stack further away. The stack is owned
/// by the caller and must only be used from the thread driving the host's
/// frame loop; there is no internal locking.
///
/// There is no capacity bound. Notifications leave either by expiring
/// (evicted during [`Stack::render_pass`]) or by an explicit
/// [`Stack::remove_at`].
#[derive(Debug, Default)]
pub struct Stack {
    items: Vec<Notification>,
    config: OverlayConfig,
}

impl Stack {
    /// Creates an empty stack with default layout settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stack with the given layout settings.
    #[must_use]
    pub fn with_config(config: OverlayConfig) -> Self {
        Self {
            items: Vec::new(),
            config,
        }
    }

    /// Returns the layout settings in use.
    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Appends a notification to the end of the stack.
    ///
    /// Duplicates are allowed and nothing is evicted to make room.
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Removes and returns the notification at `index`, preserving the
    /// relative order of the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is past the end.
    pub fn remove_at(&mut self, index: usize) -> Result<Notification> {
        if index >= self.items.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the active notifications in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Removes every notification.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Runs one render pass: evicts expired notifications and emits draw
    /// calls for the survivors, stacked upward from the bottom-right corner
    /// of `viewport`.
    ///
    /// `now` is snapshotted once by the caller so every phase and opacity
    /// read within the pass agrees. Call once per frame, after the rest of
    /// the frame's UI.
    pub fn render_pass(&mut self, now: Instant, viewport: Rectangle, surface: &mut dyn DrawSurface) {
        let wrap_width = viewport.width * self.config.wrap_fraction;
        let mut height = 0.0;
        let mut i = 0;

        // Eviction happens mid-iteration, so the index only advances past
        // items that survived.
        while i < self.items.len() {
            if self.items[i].phase(now) == Phase::Expired {
                self.items.remove(i);
                continue;
            }

            let toast = &self.items[i];
            let opacity = toast.fade_opacity(now);
            let mut text_color = toast.kind().color();
            text_color.a = opacity;

            let name = format!("##TOAST{i}");
            let anchor = Point::new(
                viewport.x + viewport.width - self.config.padding_x,
                viewport.y + viewport.height - self.config.padding_y - height,
            );

            surface.begin_window(&name, anchor, opacity);
            surface.push_text_wrap(wrap_width);

            let mut header_drawn = false;
            if let Some(glyph) = toast.kind().icon() {
                let mut buffer = [0u8; 4];
                surface.colored_text(text_color, glyph.encode_utf8(&mut buffer));
                header_drawn = true;
            }

            if let Some(title) = toast.effective_title() {
                if header_drawn {
                    surface.same_line();
                }
                surface.text(title);
                header_drawn = true;
            }

            let content = toast.content();
            if !content.is_empty() {
                if header_drawn {
                    surface.advance_cursor_y(self.config.header_gap);
                    if self.config.use_separator {
                        surface.separator();
                    }
                }
                surface.text(content);
            }

            surface.pop_text_wrap();
            height += surface.window_height() + self.config.stack_gap;
            surface.end_window();

            i += 1;
        }
    }
}
