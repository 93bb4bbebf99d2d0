//! Navbar state derived from scroll position.

pub const SCROLLED_AFTER_PX: f64 = 50.0;
pub const ACTIVE_SECTION_LINE_PX: f64 = 150.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

/// Last section, in document order, whose top has crossed the activation
/// line. `tops` pairs section ids with their viewport-relative top; missing
/// sections are simply absent.
pub fn active_section<'a>(tops: &[(&'a str, f64)]) -> Option<&'a str> {
    tops.iter()
        .rev()
        .find(|(_, top)| *top <= ACTIVE_SECTION_LINE_PX)
        .map(|(id, _)| *id)
}

#[derive(Clone, PartialEq, Debug)]
pub struct NavState {
    pub scrolled: bool,
    pub active: String,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            scrolled: false,
            active: "home".to_string(),
            menu_open: false,
        }
    }
}

impl NavState {
    /// Returns `true` when anything visible changed.
    pub fn on_scroll(&mut self, scroll_y: f64, tops: &[(&str, f64)]) -> bool {
        let scrolled = is_scrolled(scroll_y);
        let active = active_section(tops).unwrap_or(self.active.as_str()).to_string();
        let changed = scrolled != self.scrolled || active != self.active;
        self.scrolled = scrolled;
        self.active = active;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flag_is_strictly_after_threshold() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn picks_last_section_past_the_line() {
        let tops = [("home", -900.0), ("about", -100.0), ("services", 150.0), ("portfolio", 600.0)];
        assert_eq!(active_section(&tops), Some("services"));
        assert_eq!(active_section(&[("home", 200.0)]), None);
    }

    #[test]
    fn keeps_previous_active_section_when_none_qualify() {
        let mut state = NavState::default();
        assert!(!state.on_scroll(0.0, &[("home", 400.0)]));
        assert_eq!(state.active, "home");
        assert!(state.on_scroll(120.0, &[("home", -120.0), ("about", 90.0)]));
        assert_eq!(state.active, "about");
        assert!(state.scrolled);
    }
}
