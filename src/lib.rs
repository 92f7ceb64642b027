// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a transient toast-notification overlay widget for
//! immediate-mode rendering hosts.
//!
//! The crate owns the notification lifecycle (fade-in, wait, fade-out,
//! expiry) and the stacked corner layout; all drawing is delegated to the
//! host through the [`notifications::DrawSurface`] trait. See the
//! [`notifications`] module for usage.

pub mod config;
pub mod error;
pub mod notifications;

pub use config::OverlayConfig;
pub use error::{Error, Result};
pub use notifications::{
    init_icons, DrawEvent, DrawSurface, Kind, Notification, Phase, RecordingSurface, Stack,
};
