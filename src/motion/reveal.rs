//! Declarative reveal presets and the tween that drives them.

use super::easing::REVEAL_EASE;
use super::style::{Length, VisualStyle};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealPreset {
    Fade,
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Scale,
    SlideUp,
    Blur,
    MaskUp,
}

const SHIFT_PX: f64 = 60.0;

impl RevealPreset {
    pub fn hidden(self) -> VisualStyle {
        let base = VisualStyle {
            opacity: 0.0,
            ..VisualStyle::IDENTITY
        };
        match self {
            Self::Fade => base,
            Self::FadeUp => VisualStyle {
                translate_y: Length::px(SHIFT_PX),
                ..base
            },
            Self::FadeDown => VisualStyle {
                translate_y: Length::px(-SHIFT_PX),
                ..base
            },
            Self::FadeLeft => VisualStyle {
                translate_x: Length::px(-SHIFT_PX),
                ..base
            },
            Self::FadeRight => VisualStyle {
                translate_x: Length::px(SHIFT_PX),
                ..base
            },
            Self::Scale => VisualStyle { scale: 0.8, ..base },
            Self::SlideUp => VisualStyle {
                translate_y: Length::px(100.0),
                rotate_x_deg: -15.0,
                ..base
            },
            Self::Blur => VisualStyle { blur_px: 10.0, ..base },
            Self::MaskUp => VisualStyle {
                translate_y: Length::percent(100.0),
                ..base
            },
        }
    }

    pub fn visible(self) -> VisualStyle {
        VisualStyle::IDENTITY
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RevealTiming {
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            delay_ms: 0.0,
            duration_ms: 800.0,
        }
    }
}

impl RevealTiming {
    pub fn new(delay_ms: f64, duration_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            duration_ms: duration_ms.max(0.0),
        }
    }

    /// Timing for the `index`-th child of a staggered group.
    pub fn staggered(base_delay_ms: f64, stagger_ms: f64, index: usize, duration_ms: f64) -> Self {
        Self::new(base_delay_ms + stagger_ms * index as f64, duration_ms)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
struct Segment {
    from: f64,
    to: f64,
    started_at_ms: f64,
}

/// Tween between a preset's hidden and visible styles. Progress 0 is hidden,
/// 1 is visible; reversing starts from wherever the tween currently is.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RevealAnimation {
    hidden: VisualStyle,
    timing: RevealTiming,
    target_visible: bool,
    segment: Option<Segment>,
}

impl RevealAnimation {
    pub fn new(preset: RevealPreset, timing: RevealTiming) -> Self {
        Self::from_hidden(preset.hidden(), timing)
    }

    /// Tween from an arbitrary hidden style to identity.
    pub fn from_hidden(hidden: VisualStyle, timing: RevealTiming) -> Self {
        Self {
            hidden,
            timing,
            target_visible: false,
            segment: None,
        }
    }

    pub fn set_visible(&mut self, visible: bool, now_ms: f64) {
        if visible == self.target_visible {
            return;
        }
        let from = self.progress(now_ms);
        self.target_visible = visible;
        self.segment = Some(Segment {
            from,
            to: if visible { 1.0 } else { 0.0 },
            started_at_ms: now_ms,
        });
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        let Some(segment) = self.segment else {
            return 0.0;
        };

        let elapsed = now_ms - segment.started_at_ms - self.timing.delay_ms;
        if elapsed <= 0.0 {
            return segment.from;
        }
        if self.timing.duration_ms <= 0.0 || elapsed >= self.timing.duration_ms {
            return segment.to;
        }

        let eased = REVEAL_EASE.ease(elapsed / self.timing.duration_ms);
        segment.from + (segment.to - segment.from) * eased
    }

    pub fn is_settled(&self, now_ms: f64) -> bool {
        match self.segment {
            None => true,
            Some(segment) => now_ms - segment.started_at_ms >= self.timing.delay_ms + self.timing.duration_ms,
        }
    }

    pub fn style(&self, now_ms: f64) -> VisualStyle {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return VisualStyle::IDENTITY;
        }
        self.hidden.mix(&VisualStyle::IDENTITY, progress)
    }
}

pub const STAGGER_MS: f64 = 100.0;
pub const STAGGER_ITEM_DURATION_MS: f64 = 600.0;
pub const LETTER_STAGGER_MS: f64 = 30.0;
pub const LETTER_DURATION_MS: f64 = 600.0;
pub const LINE_DURATION_MS: f64 = 800.0;
/// Share of a headline that must be visible before its letters or lines rise.
pub const TEXT_REVEAL_THRESHOLD: f64 = 0.5;

/// Children of a staggered group rise a shorter distance than `FadeUp`.
pub const STAGGER_ITEM_HIDDEN: VisualStyle = VisualStyle {
    opacity: 0.0,
    translate_y: Length::px(40.0),
    ..VisualStyle::IDENTITY
};

/// Letters flip up from below the baseline.
pub const LETTER_HIDDEN: VisualStyle = VisualStyle {
    opacity: 0.0,
    translate_y: Length::px(50.0),
    rotate_x_deg: -90.0,
    ..VisualStyle::IDENTITY
};

/// Per-character units for text reveals; spaces become non-breaking so the
/// inline-block spans keep their width.
pub fn text_units(text: &str) -> Vec<String> {
    text.chars()
        .map(|ch| if ch == ' ' { '\u{00A0}'.to_string() } else { ch.to_string() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESETS: [RevealPreset; 9] = [
        RevealPreset::Fade,
        RevealPreset::FadeUp,
        RevealPreset::FadeDown,
        RevealPreset::FadeLeft,
        RevealPreset::FadeRight,
        RevealPreset::Scale,
        RevealPreset::SlideUp,
        RevealPreset::Blur,
        RevealPreset::MaskUp,
    ];

    #[test]
    fn headlines_wait_for_half_their_area() {
        use crate::motion::visibility::{crosses_threshold, VisibilityOptions};

        let headline = VisibilityOptions::threshold(TEXT_REVEAL_THRESHOLD);
        assert!(!crosses_threshold(true, 0.3, &headline));
        assert!(crosses_threshold(true, 0.5, &headline));
        assert!(crosses_threshold(true, 0.3, &VisibilityOptions::default()));
    }

    #[test]
    fn renders_hidden_before_first_entry() {
        let animation = RevealAnimation::new(RevealPreset::FadeUp, RevealTiming::default());
        assert_eq!(animation.style(10_000.0), RevealPreset::FadeUp.hidden());
        assert!(animation.is_settled(0.0));
    }

    #[test]
    fn converges_to_identity_after_delay_plus_duration() {
        for preset in PRESETS {
            let mut animation = RevealAnimation::new(preset, RevealTiming::new(200.0, 800.0));
            animation.set_visible(true, 1_000.0);

            assert_eq!(animation.progress(1_100.0), 0.0, "{preset:?} waits for its delay");
            let style = animation.style(2_000.0);
            assert_eq!(style.opacity, 1.0);
            assert_eq!(style.translate_x.value, 0.0, "{preset:?} ends at identity");
            assert_eq!(style.translate_y.value, 0.0, "{preset:?} ends at identity");
            assert_eq!(style.scale, 1.0);
            assert_eq!((style.rotate_x_deg, style.rotate_deg), (0.0, 0.0));
            assert_eq!(style.blur_px, 0.0);
            assert!(animation.is_settled(2_000.0));
        }
    }

    #[test]
    fn progress_rises_monotonically_while_revealing() {
        let mut animation = RevealAnimation::new(RevealPreset::Scale, RevealTiming::default());
        animation.set_visible(true, 0.0);
        let mut previous = 0.0;
        for frame in 0..=60 {
            let value = animation.progress(f64::from(frame) * 16.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn reversal_starts_from_current_progress() {
        let mut animation = RevealAnimation::new(RevealPreset::Fade, RevealTiming::new(0.0, 1_000.0));
        animation.set_visible(true, 0.0);
        let midway = animation.progress(500.0);
        animation.set_visible(false, 500.0);

        assert_eq!(animation.progress(500.0), midway);
        assert_eq!(animation.progress(1_500.0), 0.0);
        assert_eq!(animation.style(1_500.0).opacity, 0.0);
    }

    #[test]
    fn repeated_targets_do_not_restart() {
        let mut animation = RevealAnimation::new(RevealPreset::Fade, RevealTiming::new(0.0, 1_000.0));
        animation.set_visible(true, 0.0);
        animation.set_visible(true, 900.0);
        assert_eq!(animation.progress(1_000.0), 1.0);
    }

    #[test]
    fn stagger_offsets_each_child() {
        let timing = RevealTiming::staggered(100.0, 50.0, 3, 600.0);
        assert_eq!(timing.delay_ms, 250.0);
        assert_eq!(timing.duration_ms, 600.0);
    }

    #[test]
    fn letters_settle_flat() {
        let mut animation = RevealAnimation::from_hidden(
            LETTER_HIDDEN,
            RevealTiming::staggered(0.0, LETTER_STAGGER_MS, 4, LETTER_DURATION_MS),
        );
        assert_eq!(animation.style(0.0).rotate_x_deg, -90.0);
        animation.set_visible(true, 0.0);
        assert_eq!(animation.style(120.0 + LETTER_DURATION_MS), VisualStyle::IDENTITY);
    }

    #[test]
    fn text_units_preserve_spacing() {
        assert_eq!(text_units("We Are"), vec!["W", "e", "\u{00A0}", "A", "r", "e"]);
    }
}
