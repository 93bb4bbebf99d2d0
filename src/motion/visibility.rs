//! Viewport entry state for reveal triggers.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be inside the trigger box.
    pub threshold: f64,
    /// Grows (positive) or shrinks (negative) the viewport box on every side, in px.
    pub margin_px: f64,
    /// Stop observing after the first entry.
    pub once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            margin_px: 0.0,
            once: true,
        }
    }
}

impl VisibilityOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..Self::default()
        }
    }

    /// Section-level trigger: any pixel counts, 100px inside the viewport.
    pub fn section() -> Self {
        Self {
            threshold: 0.0,
            margin_px: -100.0,
            once: true,
        }
    }

    pub fn continuous(mut self) -> Self {
        self.once = false;
        self
    }

    pub fn root_margin(&self) -> String {
        format!("{0}px {0}px {0}px {0}px", self.margin_px)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Fraction of `element` inside the viewport after applying `margin_px`.
pub fn intersection_ratio(element: Rect, viewport_width: f64, viewport_height: f64, margin_px: f64) -> f64 {
    let root_top = -margin_px;
    let root_left = -margin_px;
    let root_bottom = viewport_height + margin_px;
    let root_right = viewport_width + margin_px;

    let visible_height = (element.bottom().min(root_bottom) - element.top.max(root_top)).max(0.0);
    let visible_width = (element.right().min(root_right) - element.left.max(root_left)).max(0.0);

    let area = element.width * element.height;
    if area <= 0.0 {
        let inside = element.top >= root_top
            && element.top <= root_bottom
            && element.left >= root_left
            && element.left <= root_right;
        return if inside { 1.0 } else { 0.0 };
    }

    (visible_height * visible_width / area).clamp(0.0, 1.0)
}

/// Whether an observer report counts as "entered" for the given options.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, options: &VisibilityOptions) -> bool {
    if options.threshold <= 0.0 {
        is_intersecting
    } else {
        is_intersecting && ratio + 1e-6 >= options.threshold
    }
}

/// Scroll-measured entry check. An element that is not mounted never counts
/// as in view.
pub fn measured_in_view(
    element: Option<Rect>,
    viewport_width: f64,
    viewport_height: f64,
    options: &VisibilityOptions,
) -> bool {
    element.is_some_and(|element| {
        let ratio = intersection_ratio(element, viewport_width, viewport_height, options.margin_px);
        crosses_threshold(ratio > 0.0, ratio, options)
    })
}

/// Entry flag for one observed element. With `once`, the flag latches.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RevealState {
    has_entered: bool,
    once: bool,
    observing: bool,
}

impl RevealState {
    pub fn new(once: bool) -> Self {
        Self {
            has_entered: false,
            once,
            observing: true,
        }
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Applies an observer report; returns the new flag when it changed.
    pub fn observe(&mut self, in_view: bool) -> Option<bool> {
        if !self.observing || in_view == self.has_entered {
            return None;
        }

        self.has_entered = in_view;
        if in_view && self.once {
            self.observing = false;
        }
        Some(in_view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, height: f64) -> Rect {
        Rect {
            top,
            left: 0.0,
            width: 100.0,
            height,
        }
    }

    #[test]
    fn once_latches_after_first_entry() {
        let mut state = RevealState::new(true);
        assert_eq!(state.observe(false), None);
        assert_eq!(state.observe(true), Some(true));
        assert!(!state.is_observing());
        assert_eq!(state.observe(false), None);
        assert!(state.has_entered);
    }

    #[test]
    fn continuous_mode_toggles() {
        let mut state = RevealState::new(false);
        assert_eq!(state.observe(true), Some(true));
        assert_eq!(state.observe(true), None);
        assert_eq!(state.observe(false), Some(false));
        assert!(state.is_observing());
    }

    #[test]
    fn ratio_accounts_for_partial_overlap() {
        let ratio = intersection_ratio(rect(700.0, 200.0), 1_000.0, 800.0, 0.0);
        assert_eq!(ratio, 0.5);
        assert_eq!(intersection_ratio(rect(900.0, 200.0), 1_000.0, 800.0, 0.0), 0.0);
        assert_eq!(intersection_ratio(rect(100.0, 200.0), 1_000.0, 800.0, 0.0), 1.0);
    }

    #[test]
    fn negative_margin_shrinks_trigger_box() {
        let element = rect(720.0, 200.0);
        assert!(intersection_ratio(element, 1_000.0, 800.0, 0.0) > 0.0);
        assert_eq!(intersection_ratio(element, 1_000.0, 800.0, -100.0), 0.0);
    }

    #[test]
    fn threshold_gate_requires_enough_area() {
        let options = VisibilityOptions::threshold(0.2);
        assert!(!crosses_threshold(true, 0.1, &options));
        assert!(crosses_threshold(true, 0.2, &options));
        assert!(!crosses_threshold(false, 0.9, &options));
        assert!(crosses_threshold(true, 0.0, &VisibilityOptions::section()));
    }

    #[test]
    fn unmounted_elements_stay_out_of_view() {
        let options = VisibilityOptions::default();
        assert!(!measured_in_view(None, 1_000.0, 800.0, &options));
        assert!(!measured_in_view(None, 1_000.0, 800.0, &VisibilityOptions::section()));
        assert!(measured_in_view(Some(rect(100.0, 200.0)), 1_000.0, 800.0, &options));
        assert!(!measured_in_view(Some(rect(780.0, 200.0)), 1_000.0, 800.0, &options));
    }

    #[test]
    fn root_margin_uses_css_shorthand() {
        assert_eq!(VisibilityOptions::section().root_margin(), "-100px -100px -100px -100px");
    }
}
