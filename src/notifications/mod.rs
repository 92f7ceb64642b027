// SPDX-License-Identifier: MPL-2.0
//! Toast notification overlay.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily in the
//! bottom-right viewport corner, stacked upward, each running a
//! fade-in / wait / fade-out lifecycle before being evicted.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` value object with kinds and phases
//! - [`stack`] - `Stack` holding the active notifications and the render pass
//! - [`surface`] - `DrawSurface`, the host drawing boundary
//! - [`style`] - Presentation tokens (palette, spacing, timings, icons)
//!
//! # Usage
//!
//! ```
//! use iced_toasts::{Notification, RecordingSurface, Stack};
//! use iced_core::Rectangle;
//! use std::time::Instant;
//!
//! let mut stack = Stack::new();
//! stack.push(Notification::success("Image saved successfully"));
//!
//! // Once per frame, after the rest of the UI:
//! let viewport = Rectangle { x: 0.0, y: 0.0, width: 1280.0, height: 720.0 };
//! let mut surface = RecordingSurface::new(); // any DrawSurface backend
//! stack.render_pass(Instant::now(), viewport, &mut surface);
//! ```

mod notification;
mod stack;
mod surface;
pub mod style;

pub use notification::{Kind, Notification, Phase};
pub use stack::Stack;
pub use surface::{init_icons, DrawEvent, DrawSurface, RecordingSurface};
