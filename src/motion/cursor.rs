//! Custom cursor: hover classification and the lagged follower layers.

use super::spring::{Spring, Spring2, SpringConfig};

pub const DOT_SPRING: SpringConfig = SpringConfig::new(400.0, 25.0, 0.5);
pub const RING_SPRING: SpringConfig = SpringConfig::new(200.0, 20.0, 0.8);
pub const TRAIL_SPRING: SpringConfig = SpringConfig::new(120.0, 15.0, 1.0);
pub const DOT_SCALE_SPRING: SpringConfig = SpringConfig::new(300.0, 20.0, 1.0);
pub const RING_SCALE_SPRING: SpringConfig = SpringConfig::new(200.0, 15.0, 1.0);

const RING_ROTATION_PER_PX: f64 = 0.02;

pub const BUTTON_SELECTOR: &str = "button, .btn-hero, .btn-outline-hero, .cta-btn";
pub const LINK_SELECTOR: &str = "a";
pub const LETTER_SELECTOR: &str = ".letter";
pub const CARD_SELECTOR: &str = ".glass-card, .glass-card-glow, [data-cursor=\"expand\"]";
pub const LABEL_SELECTOR: &str = "[data-cursor-text]";
pub const LABEL_ATTRIBUTE: &str = "data-cursor-text";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CursorState {
    #[default]
    Default,
    Hover,
    Button,
    Link,
    Text,
}

impl CursorState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hover => "hover",
            Self::Button => "button",
            Self::Link => "link",
            Self::Text => "text",
        }
    }
}

/// Ancestry queries against the hovered element.
pub trait HoverProbe {
    /// Whether the element or an ancestor matches `selector`.
    fn closest_matches(&self, selector: &str) -> bool;
    /// `attribute` on the nearest ancestor-or-self that matches `selector`.
    fn closest_attribute(&self, selector: &str, attribute: &str) -> Option<String>;
}

#[derive(Clone, PartialEq, Debug)]
pub struct Classification {
    pub state: CursorState,
    pub label: Option<String>,
    pub dot_scale: f64,
    pub ring_scale: f64,
}

impl Classification {
    fn plain(state: CursorState, dot_scale: f64, ring_scale: f64) -> Self {
        Self {
            state,
            label: None,
            dot_scale,
            ring_scale,
        }
    }

    pub fn default_state() -> Self {
        Self::plain(CursorState::Default, 1.0, 1.0)
    }
}

type Rule = fn(&dyn HoverProbe) -> Option<Classification>;

fn text_label_rule(probe: &dyn HoverProbe) -> Option<Classification> {
    let label = probe
        .closest_attribute(LABEL_SELECTOR, LABEL_ATTRIBUTE)
        .filter(|label| !label.is_empty())?;
    Some(Classification {
        state: CursorState::Text,
        label: Some(label),
        dot_scale: 3.0,
        ring_scale: 2.0,
    })
}

fn button_rule(probe: &dyn HoverProbe) -> Option<Classification> {
    probe
        .closest_matches(BUTTON_SELECTOR)
        .then(|| Classification::plain(CursorState::Button, 2.0, 2.5))
}

fn link_rule(probe: &dyn HoverProbe) -> Option<Classification> {
    probe
        .closest_matches(LINK_SELECTOR)
        .then(|| Classification::plain(CursorState::Link, 1.5, 2.0))
}

fn letter_rule(probe: &dyn HoverProbe) -> Option<Classification> {
    probe
        .closest_matches(LETTER_SELECTOR)
        .then(|| Classification::plain(CursorState::Hover, 1.8, 1.5))
}

fn card_rule(probe: &dyn HoverProbe) -> Option<Classification> {
    probe
        .closest_matches(CARD_SELECTOR)
        .then(|| Classification::plain(CursorState::Hover, 1.5, 1.8))
}

/// Most specific first.
pub const RULES: [Rule; 5] = [text_label_rule, button_rule, link_rule, letter_rule, card_rule];

pub fn classify(probe: &dyn HoverProbe) -> Classification {
    RULES
        .iter()
        .find_map(|rule| rule(probe))
        .unwrap_or_else(Classification::default_state)
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CursorFrame {
    pub dot: (f64, f64),
    pub ring: (f64, f64),
    pub trail: (f64, f64),
    pub dot_scale: f64,
    pub ring_scale: f64,
    pub ring_rotation_deg: f64,
}

#[derive(Clone, PartialEq, Debug)]
pub struct CursorTracker {
    visible: bool,
    dot: Spring2,
    ring: Spring2,
    trail: Spring2,
    dot_scale: Spring,
    ring_scale: Spring,
    classification: Classification,
    has_moved: bool,
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorTracker {
    pub fn new() -> Self {
        Self {
            visible: false,
            dot: Spring2::new(DOT_SPRING, 0.0, 0.0),
            ring: Spring2::new(RING_SPRING, 0.0, 0.0),
            trail: Spring2::new(TRAIL_SPRING, 0.0, 0.0),
            dot_scale: Spring::new(DOT_SCALE_SPRING, 1.0),
            ring_scale: Spring::new(RING_SCALE_SPRING, 1.0),
            classification: Classification::default_state(),
            has_moved: false,
        }
    }

    pub fn state(&self) -> CursorState {
        self.classification.state
    }

    pub fn label(&self) -> Option<&str> {
        self.classification.label.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if !self.has_moved {
            // First sighting: start the followers under the pointer instead of
            // sweeping in from the corner.
            self.dot.jump(x, y);
            self.ring.jump(x, y);
            self.trail.jump(x, y);
            self.has_moved = true;
        }
        self.dot.set_target(x, y);
        self.ring.set_target(x, y);
        self.trail.set_target(x, y);
        self.visible = true;
    }

    /// Last pointer-over wins.
    pub fn pointer_over(&mut self, probe: &dyn HoverProbe) -> CursorState {
        let classification = classify(probe);
        self.dot_scale.set_target(classification.dot_scale);
        self.ring_scale.set_target(classification.ring_scale);
        self.classification = classification;
        self.classification.state
    }

    pub fn pointer_left_document(&mut self) {
        self.visible = false;
    }

    pub fn pointer_entered_document(&mut self) {
        self.visible = true;
    }

    pub fn step(&mut self, dt_secs: f64) -> CursorFrame {
        let dot = self.dot.step(dt_secs);
        let ring = self.ring.step(dt_secs);
        let trail = self.trail.step(dt_secs);
        CursorFrame {
            dot,
            ring,
            trail,
            dot_scale: self.dot_scale.step(dt_secs),
            ring_scale: self.ring_scale.step(dt_secs),
            ring_rotation_deg: dot.0 * RING_ROTATION_PER_PX,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.dot.is_at_rest()
            && self.ring.is_at_rest()
            && self.trail.is_at_rest()
            && self.dot_scale.is_at_rest()
            && self.ring_scale.is_at_rest()
    }
}

/// Media queries that mark a touch or coarse-pointer device.
pub const COARSE_POINTER_QUERIES: [&str; 2] = ["(hover: none)", "(pointer: coarse)"];

pub fn cursor_enabled(query_matches: impl Fn(&str) -> bool) -> bool {
    !COARSE_POINTER_QUERIES.iter().any(|query| query_matches(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeElement {
        matches: Vec<&'static str>,
        attributes: HashMap<&'static str, String>,
    }

    impl FakeElement {
        fn matching(selectors: &[&'static str]) -> Self {
            Self {
                matches: selectors.to_vec(),
                ..Self::default()
            }
        }

        fn with_label(mut self, label: &str) -> Self {
            self.matches.push(LABEL_SELECTOR);
            self.attributes.insert(LABEL_ATTRIBUTE, label.to_string());
            self
        }
    }

    impl HoverProbe for FakeElement {
        fn closest_matches(&self, selector: &str) -> bool {
            self.matches.iter().any(|candidate| *candidate == selector)
        }

        fn closest_attribute(&self, selector: &str, attribute: &str) -> Option<String> {
            if !self.closest_matches(selector) {
                return None;
            }
            self.attributes.get(attribute).cloned()
        }
    }

    #[test]
    fn plain_elements_classify_as_default() {
        let classification = classify(&FakeElement::default());
        assert_eq!(classification, Classification::default_state());
    }

    #[test]
    fn button_inside_card_prefers_button() {
        let element = FakeElement::matching(&[CARD_SELECTOR, BUTTON_SELECTOR, LINK_SELECTOR]);
        let classification = classify(&element);
        assert_eq!(classification.state, CursorState::Button);
        assert_eq!((classification.dot_scale, classification.ring_scale), (2.0, 2.5));
    }

    #[test]
    fn explicit_label_beats_everything() {
        let element = FakeElement::matching(&[BUTTON_SELECTOR, CARD_SELECTOR]).with_label("View");
        let classification = classify(&element);
        assert_eq!(classification.state, CursorState::Text);
        assert_eq!(classification.label.as_deref(), Some("View"));
    }

    #[test]
    fn empty_label_falls_through() {
        let element = FakeElement::matching(&[LINK_SELECTOR]).with_label("");
        assert_eq!(classify(&element).state, CursorState::Link);
    }

    #[test]
    fn letter_is_checked_before_card() {
        let element = FakeElement::matching(&[CARD_SELECTOR, LETTER_SELECTOR]);
        let classification = classify(&element);
        assert_eq!(classification.state, CursorState::Hover);
        assert_eq!(classification.dot_scale, 1.8);
    }

    #[test]
    fn followers_lag_by_layer() {
        let mut tracker = CursorTracker::new();
        tracker.pointer_moved(0.0, 0.0);
        tracker.pointer_moved(300.0, 0.0);
        let mut frame = tracker.step(1.0 / 60.0);
        for _ in 0..4 {
            frame = tracker.step(1.0 / 60.0);
        }
        assert!(frame.dot.0 > frame.ring.0);
        assert!(frame.ring.0 > frame.trail.0);
    }

    #[test]
    fn scale_targets_are_smoothed_not_snapped() {
        let mut tracker = CursorTracker::new();
        tracker.pointer_over(&FakeElement::matching(&[BUTTON_SELECTOR]));
        let frame = tracker.step(1.0 / 60.0);
        assert!(frame.dot_scale > 1.0 && frame.dot_scale < 2.0);

        for _ in 0..600 {
            tracker.step(1.0 / 60.0);
        }
        let settled = tracker.step(1.0 / 60.0);
        assert_eq!(settled.dot_scale, 2.0);
        assert_eq!(settled.ring_scale, 2.5);
    }

    #[test]
    fn last_pointer_over_wins() {
        let mut tracker = CursorTracker::new();
        tracker.pointer_over(&FakeElement::default().with_label("Open"));
        assert_eq!(tracker.label(), Some("Open"));
        tracker.pointer_over(&FakeElement::default());
        assert_eq!(tracker.state(), CursorState::Default);
        assert_eq!(tracker.label(), None);
    }

    #[test]
    fn visibility_follows_document_boundary() {
        let mut tracker = CursorTracker::new();
        assert!(!tracker.is_visible());
        tracker.pointer_moved(5.0, 5.0);
        assert!(tracker.is_visible());
        tracker.pointer_left_document();
        assert!(!tracker.is_visible());
    }

    #[test]
    fn coarse_pointers_disable_the_cursor() {
        assert!(cursor_enabled(|_| false));
        assert!(!cursor_enabled(|query| query == "(pointer: coarse)"));
        assert!(!cursor_enabled(|query| query == "(hover: none)"));
    }
}
