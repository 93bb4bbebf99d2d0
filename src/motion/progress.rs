//! Scroll progress of an element through a viewport-relative range.
//!
//! Anchors follow the `"<element edge> <viewport edge>"` convention: the
//! range starts when the element's start anchor meets the viewport's start
//! anchor and ends when the two end anchors meet.

/// A point along an axis, as a fraction of the box's height.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Edge {
    Start,
    Center,
    End,
    Fraction(f64),
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
            Self::Fraction(value) => value,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Anchor {
    pub element: Edge,
    pub viewport: Edge,
}

impl Anchor {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// Element top (viewport coordinates) at which this anchor is met.
    fn crossing_top(self, element_height: f64, viewport_height: f64) -> f64 {
        self.viewport.fraction() * viewport_height - self.element.fraction() * element_height
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScrollRange {
    pub start: Anchor,
    pub end: Anchor,
}

impl ScrollRange {
    pub const fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }

    /// From the element entering at the bottom until it leaves at the top.
    pub const THROUGH_VIEWPORT: Self = Self::new(
        Anchor::new(Edge::Start, Edge::End),
        Anchor::new(Edge::End, Edge::Start),
    );

    /// From the element's top at the viewport top until its bottom passes it.
    pub const LEAVING_TOP: Self = Self::new(
        Anchor::new(Edge::Start, Edge::Start),
        Anchor::new(Edge::End, Edge::Start),
    );

    /// Element top travelling from 80% to 20% of the viewport height.
    pub const SECTION_FOCUS: Self = Self::new(
        Anchor::new(Edge::Start, Edge::Fraction(0.8)),
        Anchor::new(Edge::Start, Edge::Fraction(0.2)),
    );

    /// Progress in `[0, 1]` given the element's bounding box top and height
    /// (viewport coordinates) and the viewport height.
    pub fn progress(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        let start_top = self.start.crossing_top(element_height, viewport_height);
        let end_top = self.end.crossing_top(element_height, viewport_height);
        let span = start_top - end_top;

        if !element_top.is_finite() {
            return 0.0;
        }
        if span.abs() < f64::EPSILON {
            return if element_top <= end_top { 1.0 } else { 0.0 };
        }

        ((start_top - element_top) / span).clamp(0.0, 1.0)
    }
}

/// Whole-document scroll progress for the top progress bar.
pub fn document_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Coalesces high-frequency scroll/resize events into one layout read per
/// animation frame.
#[derive(Default, Debug)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns `true` when the caller must schedule a frame; `false` when one
    /// is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn begin_frame(&mut self) {
        self.pending = false;
    }
}

/// Per-element tracker; only reports values that changed since the last read.
#[derive(Debug)]
pub struct ScrollTracker {
    range: ScrollRange,
    last: Option<f64>,
}

impl ScrollTracker {
    pub fn new(range: ScrollRange) -> Self {
        Self { range, last: None }
    }

    pub fn measure(&mut self, element_top: f64, element_height: f64, viewport_height: f64) -> Option<f64> {
        let progress = self.range.progress(element_top, element_height, viewport_height);
        if self.last == Some(progress) {
            return None;
        }
        self.last = Some(progress);
        Some(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEWPORT: f64 = 800.0;

    #[test]
    fn through_viewport_spans_entry_to_exit() {
        let range = ScrollRange::THROUGH_VIEWPORT;
        assert_eq!(range.progress(800.0, 400.0, VIEWPORT), 0.0);
        assert_eq!(range.progress(-400.0, 400.0, VIEWPORT), 1.0);
        assert_eq!(range.progress(200.0, 400.0, VIEWPORT), 0.5);
    }

    #[test]
    fn positions_outside_range_clamp() {
        let range = ScrollRange::LEAVING_TOP;
        assert_eq!(range.progress(2_000.0, 900.0, VIEWPORT), 0.0);
        assert_eq!(range.progress(-5_000.0, 900.0, VIEWPORT), 1.0);
    }

    #[test]
    fn section_focus_uses_viewport_percentages() {
        let range = ScrollRange::SECTION_FOCUS;
        assert_eq!(range.progress(640.0, 500.0, VIEWPORT), 0.0);
        assert_eq!(range.progress(400.0, 500.0, VIEWPORT), 0.5);
        assert_eq!(range.progress(160.0, 500.0, VIEWPORT), 1.0);
    }

    #[test]
    fn resize_moves_anchor_positions() {
        let range = ScrollRange::THROUGH_VIEWPORT;
        let before = range.progress(300.0, 400.0, 800.0);
        let after = range.progress(300.0, 400.0, 1_200.0);
        assert!(after > before);
    }

    #[test]
    fn degenerate_range_steps_at_the_anchor() {
        let range = ScrollRange::new(
            Anchor::new(Edge::Start, Edge::Start),
            Anchor::new(Edge::Start, Edge::Start),
        );
        assert_eq!(range.progress(10.0, 100.0, VIEWPORT), 0.0);
        assert_eq!(range.progress(0.0, 100.0, VIEWPORT), 1.0);
    }

    #[test]
    fn throttle_allows_one_frame_at_a_time() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());
        throttle.begin_frame();
        assert!(!throttle.pending);
        assert!(throttle.request());
    }

    #[test]
    fn tracker_skips_unchanged_measurements() {
        let mut tracker = ScrollTracker::new(ScrollRange::THROUGH_VIEWPORT);
        assert_eq!(tracker.measure(200.0, 400.0, VIEWPORT), Some(0.5));
        assert_eq!(tracker.measure(200.0, 400.0, VIEWPORT), None);
        assert_eq!(tracker.last, Some(0.5));
    }

    #[test]
    fn document_progress_handles_short_pages() {
        assert_eq!(document_progress(0.0, 600.0, VIEWPORT), 0.0);
        assert_eq!(document_progress(600.0, 2_000.0, VIEWPORT), 0.5);
        assert_eq!(document_progress(9_000.0, 2_000.0, VIEWPORT), 1.0);
    }

    proptest! {
        #[test]
        fn progress_is_always_clamped(top in -1.0e6f64..1.0e6, height in 0.0f64..5_000.0, viewport in 1.0f64..3_000.0) {
            let value = ScrollRange::THROUGH_VIEWPORT.progress(top, height, viewport);
            prop_assert!((0.0..=1.0).contains(&value));
        }

        #[test]
        fn forward_scroll_never_decreases_progress(top in -3_000.0f64..3_000.0, step in 0.0f64..500.0) {
            let range = ScrollRange::THROUGH_VIEWPORT;
            let before = range.progress(top, 600.0, VIEWPORT);
            let after = range.progress(top - step, 600.0, VIEWPORT);
            prop_assert!(after >= before);
        }
    }
}
