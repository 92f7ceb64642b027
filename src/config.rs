// SPDX-License-Identifier: MPL-2.0
//! Overlay layout configuration, with optional persistence to an
//! `overlay.toml` file.
//!
//! Lifecycle timings, the opacity ceiling and the message limit are
//! compile-time constants (see [`crate::notifications::style`]); only the
//! layout values a host application may reasonably want to tune are
//! configurable here.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, OverlayConfig};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.use_separator = true;
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::notifications::style::{layout, spacing};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "overlay.toml";
const APP_NAME: &str = "IcedToasts";

/// Layout settings for the toast overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Horizontal distance between the toasts and the viewport edge.
    pub padding_x: f32,
    /// Vertical distance between the first toast and the viewport edge.
    pub padding_y: f32,
    /// Vertical gap between stacked toasts.
    pub stack_gap: f32,
    /// Cursor offset between the icon/title line and the content block.
    pub header_gap: f32,
    /// Fraction of the viewport width at which toast text wraps.
    pub wrap_fraction: f32,
    /// Draw a separator line between the title line and the content.
    pub use_separator: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            padding_x: spacing::PADDING_X,
            padding_y: spacing::PADDING_Y,
            stack_gap: spacing::STACK_GAP,
            header_gap: spacing::HEADER_GAP,
            wrap_fraction: layout::WRAP_FRACTION,
            use_separator: false,
        }
    }
}

impl OverlayConfig {
    /// Replaces out-of-range or non-finite fields with their defaults.
    ///
    /// Loaded files are untrusted input; this enforces at runtime the same
    /// bounds the style tokens assert at compile time. In-range fields are
    /// kept as-is.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.padding_x.is_finite() && self.padding_x > 0.0) {
            self.padding_x = defaults.padding_x;
        }
        if !(self.padding_y.is_finite() && self.padding_y > 0.0) {
            self.padding_y = defaults.padding_y;
        }
        if !(self.stack_gap.is_finite() && self.stack_gap > 0.0) {
            self.stack_gap = defaults.stack_gap;
        }
        if !(self.header_gap.is_finite() && self.header_gap >= 0.0) {
            self.header_gap = defaults.header_gap;
        }
        if !(self.wrap_fraction.is_finite()
            && self.wrap_fraction > 0.0
            && self.wrap_fraction < 1.0)
        {
            self.wrap_fraction = defaults.wrap_fraction;
        }

        self
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<OverlayConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(OverlayConfig::default())
}

pub fn save(config: &OverlayConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<OverlayConfig> {
    let content = fs::read_to_string(path)?;
    let config: OverlayConfig = toml::from_str(&content).unwrap_or_default();
    Ok(config.sanitized())
}

pub fn save_to_path(config: &OverlayConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
