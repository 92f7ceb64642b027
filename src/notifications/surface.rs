// SPDX-License-Identifier: MPL-2.0
//! Host drawing boundary.
//!
//! The stack never talks to a windowing or graphics API directly. Instead
//! it emits calls against [`DrawSurface`], a narrow trait matching the
//! immediate-mode primitives the overlay needs. A host backend implements
//! the trait once; [`RecordingSurface`] is a deterministic implementation
//! used by the test suite and the headless demo, and doubles as a reference
//! for backend implementors.

use super::style::icon;
use iced_core::{Color, Point};

/// Immediate-mode drawing primitives consumed by the overlay.
///
/// Calls always arrive in window scopes: `begin_window`, content calls,
/// then `end_window`. `window_height` is queried before `end_window` and
/// must return the measured height of the window currently being built.
pub trait DrawSurface {
    /// Opens a borderless auto-sized window whose bottom-right corner sits
    /// at `anchor`, with the given background alpha.
    fn begin_window(&mut self, name: &str, anchor: Point, bg_alpha: f32);

    /// Starts wrapping subsequent text at `width` logical pixels.
    fn push_text_wrap(&mut self, width: f32);

    /// Draws a line of text in the given color.
    fn colored_text(&mut self, color: Color, text: &str);

    /// Draws a line of text in the host's default text color.
    fn text(&mut self, text: &str);

    /// Places the next draw on the same line as the previous one.
    fn same_line(&mut self);

    /// Moves the layout cursor down by `offset` logical pixels.
    fn advance_cursor_y(&mut self, offset: f32);

    /// Draws a horizontal separator line.
    fn separator(&mut self);

    /// Ends the current text-wrap scope.
    fn pop_text_wrap(&mut self);

    /// Returns the measured height of the window currently being built.
    fn window_height(&self) -> f32;

    /// Closes the current window scope.
    fn end_window(&mut self);

    /// Merges an icon glyph range into the host's active font atlas at the
    /// given pixel size. Called once at startup, never per frame.
    fn merge_icon_font(&mut self, glyph_range: (char, char), pixel_size: f32);
}

/// Registers the overlay's icon glyphs with the host font atlas.
///
/// Call once during host initialization, after the main font is loaded.
pub fn init_icons(surface: &mut dyn DrawSurface, pixel_size: f32) {
    surface.merge_icon_font(icon::GLYPH_RANGE, pixel_size);
}

/// A single recorded [`DrawSurface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    BeginWindow {
        name: String,
        anchor: Point,
        bg_alpha: f32,
    },
    PushTextWrap(f32),
    ColoredText {
        color: Color,
        text: String,
    },
    Text(String),
    SameLine,
    AdvanceCursorY(f32),
    Separator,
    PopTextWrap,
    EndWindow,
    MergeIconFont {
        glyph_range: (char, char),
        pixel_size: f32,
    },
}

/// A [`DrawSurface`] that records every call instead of drawing.
///
/// Window heights are measured with a simple deterministic model: each text
/// line (and each separator) contributes one line height unless joined to
/// the previous draw by `same_line`, and cursor advances add their offset
/// directly. Text wrapping is not simulated.
#[derive(Debug)]
pub struct RecordingSurface {
    events: Vec<DrawEvent>,
    line_height: f32,
    rows: u32,
    extra_y: f32,
    join_next: bool,
}

impl RecordingSurface {
    pub const DEFAULT_LINE_HEIGHT: f32 = 16.0;

    /// Creates a recorder with the default line height.
    #[must_use]
    pub fn new() -> Self {
        Self::with_line_height(Self::DEFAULT_LINE_HEIGHT)
    }

    /// Creates a recorder measuring `line_height` pixels per text row.
    #[must_use]
    pub fn with_line_height(line_height: f32) -> Self {
        Self {
            events: Vec::new(),
            line_height,
            rows: 0,
            extra_y: 0.0,
            join_next: false,
        }
    }

    /// Returns every recorded call, in order.
    #[must_use]
    pub fn events(&self) -> &[DrawEvent] {
        &self.events
    }

    /// Returns the anchors of all recorded windows, in order.
    #[must_use]
    pub fn window_anchors(&self) -> Vec<Point> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DrawEvent::BeginWindow { anchor, .. } => Some(*anchor),
                _ => None,
            })
            .collect()
    }

    /// Returns the texts drawn inside each recorded window, in order.
    #[must_use]
    pub fn window_texts(&self) -> Vec<Vec<String>> {
        let mut windows = Vec::new();
        let mut current: Option<Vec<String>> = None;

        for event in &self.events {
            match event {
                DrawEvent::BeginWindow { .. } => current = Some(Vec::new()),
                DrawEvent::EndWindow => {
                    if let Some(texts) = current.take() {
                        windows.push(texts);
                    }
                }
                DrawEvent::ColoredText { text, .. } | DrawEvent::Text(text) => {
                    if let Some(texts) = current.as_mut() {
                        texts.push(text.clone());
                    }
                }
                _ => {}
            }
        }

        windows
    }

    fn add_row(&mut self) {
        if self.join_next {
            self.join_next = false;
        } else {
            self.rows += 1;
        }
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_window(&mut self, name: &str, anchor: Point, bg_alpha: f32) {
        self.rows = 0;
        self.extra_y = 0.0;
        self.join_next = false;
        self.events.push(DrawEvent::BeginWindow {
            name: name.to_owned(),
            anchor,
            bg_alpha,
        });
    }

    fn push_text_wrap(&mut self, width: f32) {
        self.events.push(DrawEvent::PushTextWrap(width));
    }

    fn colored_text(&mut self, color: Color, text: &str) {
        self.add_row();
        self.events.push(DrawEvent::ColoredText {
            color,
            text: text.to_owned(),
        });
    }

    fn text(&mut self, text: &str) {
        self.add_row();
        self.events.push(DrawEvent::Text(text.to_owned()));
    }

    fn same_line(&mut self) {
        self.join_next = true;
        self.events.push(DrawEvent::SameLine);
    }

    fn advance_cursor_y(&mut self, offset: f32) {
        self.extra_y += offset;
        self.events.push(DrawEvent::AdvanceCursorY(offset));
    }

    fn separator(&mut self) {
        self.add_row();
        self.events.push(DrawEvent::Separator);
    }

    fn pop_text_wrap(&mut self) {
        self.events.push(DrawEvent::PopTextWrap);
    }

    fn window_height(&self) -> f32 {
        self.rows as f32 * self.line_height + self.extra_y
    }

    fn end_window(&mut self) {
        self.events.push(DrawEvent::EndWindow);
    }

    fn merge_icon_font(&mut self, glyph_range: (char, char), pixel_size: f32) {
        self.events.push(DrawEvent::MergeIconFont {
            glyph_range,
            pixel_size,
        });
    }
}
