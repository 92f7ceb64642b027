// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` value object together with its
//! `Kind` and lifecycle `Phase`. A notification is immutable after
//! construction; its phase and opacity are pure functions of a caller
//! supplied clock snapshot, so every read within one render pass agrees.

use super::style::{icon, limits, opacity, palette, timing};
use iced_core::Color;
use std::time::{Duration, Instant};

/// Kind of a notification, determining its default icon, color and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Plain message without icon or default title.
    #[default]
    None,
    Success,
    Warning,
    Error,
    Info,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::None => palette::NONE,
            Kind::Success => palette::SUCCESS,
            Kind::Warning => palette::WARNING,
            Kind::Error => palette::ERROR,
            Kind::Info => palette::INFO,
        }
    }

    /// Returns the icon glyph for this kind, if it has one.
    #[must_use]
    pub fn icon(&self) -> Option<char> {
        match self {
            Kind::None => None,
            Kind::Success => Some(icon::SUCCESS),
            Kind::Warning => Some(icon::WARNING),
            Kind::Error => Some(icon::ERROR),
            Kind::Info => Some(icon::INFO),
        }
    }

    /// Returns the title used when the notification carries no explicit one.
    #[must_use]
    pub fn default_title(&self) -> Option<&'static str> {
        match self {
            Kind::None => None,
            Kind::Success => Some("Success"),
            Kind::Warning => Some("Warning"),
            Kind::Error => Some("Error"),
            Kind::Info => Some("Info"),
        }
    }
}

/// Lifecycle stage of a notification.
///
/// Phases advance monotonically with elapsed time and never transition
/// backward: `FadeIn -> Wait -> FadeOut -> Expired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Opacity ramps from zero up to the ceiling.
    FadeIn,
    /// Fully visible for the configured dismiss duration.
    Wait,
    /// Opacity ramps back down to zero.
    FadeOut,
    /// No longer visible; evicted by the next render pass.
    Expired,
}

/// A transient message to be displayed by the stack.
#[derive(Debug, Clone)]
pub struct Notification {
    kind: Kind,
    title: Option<String>,
    content: String,
    dismiss: Duration,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification, capturing the current time.
    ///
    /// Content longer than the message limit is silently truncated.
    /// Formatting is the caller's responsibility; pass a pre-formatted
    /// string.
    pub fn new(kind: Kind, content: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            content: bounded(content.into()),
            dismiss: timing::DEFAULT_DISMISS,
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(content: impl Into<String>) -> Self {
        Self::new(Kind::Success, content)
    }

    /// Creates a warning notification.
    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(Kind::Warning, content)
    }

    /// Creates an error notification.
    pub fn error(content: impl Into<String>) -> Self {
        Self::new(Kind::Error, content)
    }

    /// Creates an info notification.
    pub fn info(content: impl Into<String>) -> Self {
        Self::new(Kind::Info, content)
    }

    /// Sets an explicit title, overriding the kind default.
    ///
    /// Titles longer than the message limit are silently truncated.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(bounded(title.into()));
        self
    }

    /// Sets how long the notification stays fully visible before fading out.
    #[must_use]
    pub fn dismiss_after(mut self, duration: Duration) -> Self {
        self.dismiss = duration;
        self
    }

    /// Returns the notification kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the explicit title, if one was set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the explicit title or, failing that, the kind default.
    #[must_use]
    pub fn effective_title(&self) -> Option<&str> {
        self.title.as_deref().or_else(|| self.kind.default_title())
    }

    /// Returns the message body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the configured wait-phase duration.
    #[must_use]
    pub fn dismiss(&self) -> Duration {
        self.dismiss
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the time elapsed since creation at the given snapshot.
    ///
    /// Saturates to zero for snapshots earlier than the creation time.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Returns the lifecycle phase at the given snapshot.
    #[must_use]
    pub fn phase(&self, now: Instant) -> Phase {
        let elapsed = self.elapsed(now);
        let fade = timing::FADE;

        if elapsed < fade {
            Phase::FadeIn
        } else if elapsed < fade + self.dismiss {
            Phase::Wait
        } else if elapsed < fade + self.dismiss + fade {
            Phase::FadeOut
        } else {
            Phase::Expired
        }
    }

    /// Returns the opacity at the given snapshot, in `[0, TOAST_MAX]`.
    ///
    /// Linear ramp up during fade-in, the ceiling during wait, linear ramp
    /// down during fade-out and zero once expired. Continuous at every
    /// phase boundary.
    #[must_use]
    pub fn fade_opacity(&self, now: Instant) -> f32 {
        let elapsed = self.elapsed(now).as_secs_f32();
        let fade = timing::FADE.as_secs_f32();
        let dismiss = self.dismiss.as_secs_f32();

        let raw = match self.phase(now) {
            Phase::FadeIn => elapsed / fade,
            Phase::Wait => 1.0,
            Phase::FadeOut => 1.0 - (elapsed - fade - dismiss) / fade,
            Phase::Expired => 0.0,
        };

        (raw * opacity::TOAST_MAX).clamp(0.0, opacity::TOAST_MAX)
    }
}

/// Truncates `text` to the message limit at a character boundary.
fn bounded(mut text: String) -> String {
    if text.len() > limits::MAX_MESSAGE_LEN {
        let mut end = limits::MAX_MESSAGE_LEN;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::time::Duration;

    fn at(notification: &Notification, ms: u64) -> Instant {
        notification.created_at() + Duration::from_millis(ms)
    }

    #[test]
    fn kind_colors_are_distinct() {
        let colors = [
            Kind::None.color(),
            Kind::Success.color(),
            Kind::Warning.color(),
            Kind::Error.color(),
            Kind::Info.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn none_kind_has_no_icon_or_default_title() {
        assert!(Kind::None.icon().is_none());
        assert!(Kind::None.default_title().is_none());
    }

    #[test]
    fn default_titles_match_kind_names() {
        assert_eq!(Kind::Success.default_title(), Some("Success"));
        assert_eq!(Kind::Warning.default_title(), Some("Warning"));
        assert_eq!(Kind::Error.default_title(), Some("Error"));
        assert_eq!(Kind::Info.default_title(), Some("Info"));
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Notification::success("").kind(), Kind::Success);
        assert_eq!(Notification::warning("").kind(), Kind::Warning);
        assert_eq!(Notification::error("").kind(), Kind::Error);
        assert_eq!(Notification::info("").kind(), Kind::Info);
    }

    #[test]
    fn explicit_title_overrides_kind_default() {
        let plain = Notification::success("saved");
        assert_eq!(plain.effective_title(), Some("Success"));

        let titled = Notification::success("saved").with_title("Export done");
        assert_eq!(titled.effective_title(), Some("Export done"));
    }

    #[test]
    fn phase_ladder_follows_elapsed_time() {
        let n = Notification::info("hello").dismiss_after(Duration::from_millis(3000));

        assert_eq!(n.phase(at(&n, 0)), Phase::FadeIn);
        assert_eq!(n.phase(at(&n, 149)), Phase::FadeIn);
        assert_eq!(n.phase(at(&n, 150)), Phase::Wait);
        assert_eq!(n.phase(at(&n, 3149)), Phase::Wait);
        assert_eq!(n.phase(at(&n, 3150)), Phase::FadeOut);
        assert_eq!(n.phase(at(&n, 3299)), Phase::FadeOut);
        assert_eq!(n.phase(at(&n, 3300)), Phase::Expired);
        assert_eq!(n.phase(at(&n, 100_000)), Phase::Expired);
    }

    #[test]
    fn phase_is_monotonic() {
        let n = Notification::warning("careful").dismiss_after(Duration::from_millis(500));
        let order = |phase: Phase| match phase {
            Phase::FadeIn => 0,
            Phase::Wait => 1,
            Phase::FadeOut => 2,
            Phase::Expired => 3,
        };

        let mut previous = 0;
        for ms in (0..1200).step_by(10) {
            let rank = order(n.phase(at(&n, ms)));
            assert!(rank >= previous, "phase went backward at {ms}ms");
            previous = rank;
        }
    }

    #[test]
    fn zero_dismiss_duration_skips_the_wait_phase() {
        let n = Notification::info("blink").dismiss_after(Duration::ZERO);

        assert_eq!(n.phase(at(&n, 0)), Phase::FadeIn);
        assert_eq!(n.phase(at(&n, 150)), Phase::FadeOut);
        assert_eq!(n.phase(at(&n, 300)), Phase::Expired);
    }

    #[test]
    fn opacity_scenario_boundaries() {
        let n = Notification::success("done").dismiss_after(Duration::from_millis(3000));

        assert_relative_eq!(n.fade_opacity(at(&n, 0)), 0.0);
        assert_relative_eq!(n.fade_opacity(at(&n, 150)), opacity::TOAST_MAX);
        assert_relative_eq!(n.fade_opacity(at(&n, 3150)), opacity::TOAST_MAX, epsilon = 1e-4);
        assert_relative_eq!(n.fade_opacity(at(&n, 3300)), 0.0);
    }

    #[test]
    fn opacity_is_continuous_at_phase_boundaries() {
        let n = Notification::info("steady").dismiss_after(Duration::from_millis(1000));

        // End of fade-in meets the wait plateau.
        let just_before_wait = n.fade_opacity(at(&n, 149));
        assert!((just_before_wait - opacity::TOAST_MAX).abs() < 0.01);

        // Start of fade-out leaves the plateau.
        let fade_out_start = n.fade_opacity(at(&n, 1150));
        assert!((fade_out_start - opacity::TOAST_MAX).abs() < 0.01);
    }

    #[test]
    fn opacity_stays_within_bounds() {
        let n = Notification::error("broken").dismiss_after(Duration::from_millis(700));
        for ms in 0..1100 {
            let value = n.fade_opacity(at(&n, ms));
            assert!((0.0..=opacity::TOAST_MAX).contains(&value), "out of range at {ms}ms");
        }
    }

    #[test]
    fn phase_and_opacity_are_idempotent_for_a_fixed_snapshot() {
        let n = Notification::info("same").dismiss_after(Duration::from_millis(300));
        let now = at(&n, 200);

        assert_eq!(n.phase(now), n.phase(now));
        assert_relative_eq!(n.fade_opacity(now), n.fade_opacity(now));
    }

    #[test]
    fn oversized_content_is_truncated_exactly_at_the_limit() {
        let long = "x".repeat(limits::MAX_MESSAGE_LEN + 100);
        let n = Notification::info(long);
        assert_eq!(n.content().len(), limits::MAX_MESSAGE_LEN);
    }

    #[test]
    fn truncation_never_splits_a_multibyte_character() {
        // 'é' is two bytes; an odd limit boundary must back off to the
        // previous character.
        let long = "é".repeat(limits::MAX_MESSAGE_LEN);
        let n = Notification::info(long);
        assert!(n.content().len() <= limits::MAX_MESSAGE_LEN);
        assert!(n.content().is_char_boundary(n.content().len()));
        assert!(n.content().chars().all(|c| c == 'é'));
    }

    #[test]
    fn oversized_title_is_truncated_too() {
        let n = Notification::info("body").with_title("t".repeat(limits::MAX_MESSAGE_LEN * 2));
        assert_eq!(n.title().unwrap().len(), limits::MAX_MESSAGE_LEN);
    }

    #[test]
    fn elapsed_saturates_before_creation() {
        let n = Notification::info("early");
        let before = n.created_at() - Duration::from_millis(50);
        assert_eq!(n.elapsed(before), Duration::ZERO);
        assert_eq!(n.phase(before), Phase::FadeIn);
    }
}
