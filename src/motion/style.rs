use super::easing::lerp;
use std::fmt::Write as _;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Unit {
    Px,
    Percent,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const ZERO: Self = Self::px(0.0);

    pub const fn px(value: f64) -> Self {
        Self { value, unit: Unit::Px }
    }

    pub const fn percent(value: f64) -> Self {
        Self { value, unit: Unit::Percent }
    }

    /// Interpolates toward `to`. A zero endpoint adopts the other side's unit,
    /// so `100% -> 0px` stays in percent.
    fn mix(self, to: Self, t: f64) -> Self {
        let unit = if self.value == 0.0 { to.unit } else { self.unit };
        Self {
            value: lerp(self.value, to.value, t),
            unit,
        }
    }

    fn css(self) -> String {
        format!("{:.3}{}", self.value, self.unit.suffix())
    }
}

/// Every visual property the reveal and parallax layers animate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VisualStyle {
    pub opacity: f64,
    pub translate_x: Length,
    pub translate_y: Length,
    pub scale: f64,
    pub rotate_x_deg: f64,
    pub rotate_deg: f64,
    pub blur_px: f64,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl VisualStyle {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_x: Length::ZERO,
        translate_y: Length::ZERO,
        scale: 1.0,
        rotate_x_deg: 0.0,
        rotate_deg: 0.0,
        blur_px: 0.0,
    };

    pub fn mix(&self, to: &Self, t: f64) -> Self {
        Self {
            opacity: lerp(self.opacity, to.opacity, t),
            translate_x: self.translate_x.mix(to.translate_x, t),
            translate_y: self.translate_y.mix(to.translate_y, t),
            scale: lerp(self.scale, to.scale, t),
            rotate_x_deg: lerp(self.rotate_x_deg, to.rotate_x_deg, t),
            rotate_deg: lerp(self.rotate_deg, to.rotate_deg, t),
            blur_px: lerp(self.blur_px, to.blur_px, t),
        }
    }

    /// Inline style declarations; identity components are omitted.
    pub fn css(&self) -> String {
        let mut transform = String::new();
        if self.translate_x.value != 0.0 || self.translate_y.value != 0.0 {
            let _ = write!(
                transform,
                "translate3d({}, {}, 0) ",
                self.translate_x.css(),
                self.translate_y.css()
            );
        }
        if self.scale != 1.0 {
            let _ = write!(transform, "scale({:.4}) ", self.scale);
        }
        if self.rotate_x_deg != 0.0 {
            let _ = write!(transform, "rotateX({:.3}deg) ", self.rotate_x_deg);
        }
        if self.rotate_deg != 0.0 {
            let _ = write!(transform, "rotate({:.3}deg) ", self.rotate_deg);
        }

        let mut style = format!("opacity: {:.4};", self.opacity);
        let transform = transform.trim_end();
        if transform.is_empty() {
            style.push_str(" transform: none;");
        } else {
            let _ = write!(style, " transform: {transform};");
        }
        if self.blur_px > 0.0 {
            let _ = write!(style, " filter: blur({:.3}px);", self.blur_px);
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_renders_without_transform() {
        assert_eq!(VisualStyle::IDENTITY.css(), "opacity: 1.0000; transform: none;");
    }

    #[test]
    fn percent_mask_keeps_its_unit_until_the_end() {
        let hidden = VisualStyle {
            translate_y: Length::percent(100.0),
            ..VisualStyle::IDENTITY
        };
        let halfway = hidden.mix(&VisualStyle::IDENTITY, 0.5);
        assert_eq!(halfway.translate_y, Length::percent(50.0));
    }

    #[test]
    fn blur_and_transform_are_emitted_together() {
        let style = VisualStyle {
            opacity: 0.5,
            translate_y: Length::px(20.0),
            scale: 0.9,
            blur_px: 4.0,
            ..VisualStyle::IDENTITY
        };
        let css = style.css();
        assert!(css.contains("translate3d(0.000px, 20.000px, 0)"));
        assert!(css.contains("scale(0.9000)"));
        assert!(css.contains("filter: blur(4.000px)"));
    }
}
