// SPDX-License-Identifier: MPL-2.0
//! Presentation tokens for the toast overlay.
//!
//! Everything the renderer treats as a constant lives here: the per-kind
//! palette, the opacity ceiling, the stacking paddings, the lifecycle
//! timings and the icon glyph set. Layout values that hosts commonly want
//! to tune are mirrored as defaults of [`crate::config::OverlayConfig`].

use iced_core::Color;

/// Per-kind text and accent colors.
pub mod palette {
    use super::Color;

    pub const NONE: Color = Color::WHITE;
    pub const SUCCESS: Color = Color::from_rgb(0.0, 1.0, 0.0);
    pub const WARNING: Color = Color::from_rgb(1.0, 1.0, 0.0);
    pub const ERROR: Color = Color::from_rgb(1.0, 0.0, 0.0);
    pub const INFO: Color = Color::from_rgb(0.0, 0.616, 1.0);
}

/// Opacity levels.
pub mod opacity {
    /// Ceiling reached at the end of the fade-in ramp and held during the
    /// wait phase.
    pub const TOAST_MAX: f32 = 0.8;
}

/// Stacking and in-toast spacing, in logical pixels.
pub mod spacing {
    /// Horizontal distance between the toast edge and the viewport edge.
    pub const PADDING_X: f32 = 20.0;

    /// Vertical distance between the first toast and the viewport edge.
    pub const PADDING_Y: f32 = 20.0;

    /// Vertical gap between stacked toasts.
    pub const STACK_GAP: f32 = 10.0;

    /// Cursor offset between the icon/title line and the content block.
    pub const HEADER_GAP: f32 = 5.0;
}

/// Lifecycle timings.
pub mod timing {
    use std::time::Duration;

    /// Length of both the fade-in and the fade-out ramp.
    pub const FADE: Duration = Duration::from_millis(150);

    /// Wait-phase length applied when no explicit dismiss duration is set.
    pub const DEFAULT_DISMISS: Duration = Duration::from_millis(3000);
}

/// Bounded-buffer limits.
pub mod limits {
    /// Maximum byte length of a toast title or content. Longer text is
    /// silently truncated at a character boundary.
    pub const MAX_MESSAGE_LEN: usize = 4096;
}

/// Layout ratios.
pub mod layout {
    /// Fraction of the viewport width at which toast text wraps.
    pub const WRAP_FRACTION: f32 = 1.0 / 3.0;
}

/// Icon glyphs, drawn from a Font Awesome 6 solid face merged into the
/// host's font atlas (see [`crate::notifications::init_icons`]).
pub mod icon {
    /// circle-check
    pub const SUCCESS: char = '\u{f058}';
    /// triangle-exclamation
    pub const WARNING: char = '\u{f071}';
    /// circle-xmark
    pub const ERROR: char = '\u{f057}';
    /// circle-info
    pub const INFO: char = '\u{f05a}';

    /// Codepoint range the host must merge into its active font.
    pub const GLYPH_RANGE: (char, char) = ('\u{e005}', '\u{f8ff}');

    /// Pixel size at which the icon face is usually merged.
    pub const DEFAULT_PIXEL_SIZE: f32 = 16.0;
}

const _: () = {
    // Spacing validation
    assert!(spacing::PADDING_X > 0.0);
    assert!(spacing::PADDING_Y > 0.0);
    assert!(spacing::STACK_GAP > 0.0);
    assert!(spacing::HEADER_GAP < spacing::STACK_GAP);

    // Opacity validation
    assert!(opacity::TOAST_MAX > 0.0 && opacity::TOAST_MAX <= 1.0);

    // Layout validation
    assert!(layout::WRAP_FRACTION > 0.0 && layout::WRAP_FRACTION < 1.0);

    // Icon range validation
    assert!((icon::GLYPH_RANGE.0 as u32) <= icon::SUCCESS as u32);
    assert!((icon::ERROR as u32) <= icon::GLYPH_RANGE.1 as u32);
    assert!(icon::DEFAULT_PIXEL_SIZE > 0.0);

    // Color validation
    assert!(palette::INFO.b >= 0.0 && palette::INFO.b <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_is_shorter_than_default_dismiss() {
        assert!(timing::FADE < timing::DEFAULT_DISMISS);
    }

    #[test]
    fn icon_glyphs_fall_inside_merge_range() {
        for glyph in [icon::SUCCESS, icon::WARNING, icon::ERROR, icon::INFO] {
            assert!(glyph >= icon::GLYPH_RANGE.0);
            assert!(glyph <= icon::GLYPH_RANGE.1);
        }
    }
}
