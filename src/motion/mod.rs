//! Scroll-synchronised animation coordination, independent of the DOM.

pub mod cursor;
pub mod easing;
pub mod parallax;
pub mod preloader;
pub mod progress;
pub mod reveal;
pub mod spring;
pub mod style;
pub mod visibility;
