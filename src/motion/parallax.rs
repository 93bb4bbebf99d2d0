//! Maps scroll progress onto visual properties through piecewise-linear curves.

use super::style::{Length, Unit, VisualStyle};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    #[error("curve needs at least two stops, got {0}")]
    TooFewStops(usize),
    #[error("domain has {domain} stops but range has {range}")]
    LengthMismatch { domain: usize, range: usize },
    #[error("domain stops must be strictly increasing")]
    UnsortedDomain,
}

/// Multi-stop linear interpolation. Inputs outside the domain clamp to the
/// nearest endpoint value; nothing is extrapolated.
#[derive(Clone, PartialEq, Debug)]
pub struct Curve {
    domain: Vec<f64>,
    range: Vec<f64>,
}

impl Curve {
    pub fn new(domain: &[f64], range: &[f64]) -> Result<Self, CurveError> {
        if domain.len() != range.len() {
            return Err(CurveError::LengthMismatch {
                domain: domain.len(),
                range: range.len(),
            });
        }
        if domain.len() < 2 {
            return Err(CurveError::TooFewStops(domain.len()));
        }
        if domain.windows(2).any(|pair| pair[0].partial_cmp(&pair[1]) != Some(Ordering::Less)) {
            return Err(CurveError::UnsortedDomain);
        }

        Ok(Self {
            domain: domain.to_vec(),
            range: range.to_vec(),
        })
    }

    pub fn linear(from: f64, to: f64) -> Self {
        Self {
            domain: vec![0.0, 1.0],
            range: vec![from, to],
        }
    }

    pub fn sample(&self, input: f64) -> f64 {
        let last = self.domain.len() - 1;
        if input.is_nan() || input <= self.domain[0] {
            return self.range[0];
        }
        if input >= self.domain[last] {
            return self.range[last];
        }

        let upper = self
            .domain
            .iter()
            .position(|stop| *stop >= input)
            .unwrap_or(last);
        if self.domain[upper] == input {
            return self.range[upper];
        }

        let lower = upper - 1;
        let span = self.domain[upper] - self.domain[lower];
        let t = (input - self.domain[lower]) / span;
        self.range[lower] + (self.range[upper] - self.range[lower]) * t
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Property {
    TranslateX(Unit),
    TranslateY(Unit),
    Scale,
    Opacity,
    Rotate,
    RotateX,
    Blur,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ParallaxRule {
    pub property: Property,
    pub curve: Curve,
}

impl ParallaxRule {
    pub fn new(property: Property, curve: Curve) -> Self {
        Self { property, curve }
    }
}

/// A set of rules applied on top of the identity style. Later rules for the
/// same property win.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ParallaxMapper {
    rules: Vec<ParallaxRule>,
}

impl ParallaxMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, property: Property, curve: Curve) -> Self {
        self.rules.push(ParallaxRule::new(property, curve));
        self
    }

    pub fn values(&self, progress: f64) -> Vec<(Property, f64)> {
        self.rules
            .iter()
            .map(|rule| (rule.property, rule.curve.sample(progress)))
            .collect()
    }

    pub fn style(&self, progress: f64) -> VisualStyle {
        let mut style = VisualStyle::IDENTITY;
        for (property, value) in self.values(progress) {
            match property {
                Property::TranslateX(unit) => style.translate_x = Length { value, unit },
                Property::TranslateY(unit) => style.translate_y = Length { value, unit },
                Property::Scale => style.scale = value,
                Property::Opacity => style.opacity = value,
                Property::Rotate => style.rotate_deg = value,
                Property::RotateX => style.rotate_x_deg = value,
                Property::Blur => style.blur_px = value.max(0.0),
            }
        }
        style
    }
}

/// Section mappings used by the home page.
pub mod presets {
    use super::*;

    fn curve(domain: &[f64], range: &[f64]) -> Curve {
        Curve::new(domain, range).unwrap_or_else(|_| Curve::linear(range[0], range[range.len() - 1]))
    }

    pub fn hero_content() -> ParallaxMapper {
        ParallaxMapper::new()
            .rule(Property::TranslateY(Unit::Px), Curve::linear(0.0, 200.0))
            .rule(Property::Opacity, curve(&[0.0, 0.5], &[1.0, 0.0]))
            .rule(Property::Scale, curve(&[0.0, 0.5], &[1.0, 0.9]))
    }

    pub fn about_background() -> ParallaxMapper {
        ParallaxMapper::new().rule(Property::TranslateY(Unit::Percent), Curve::linear(-20.0, 20.0))
    }

    pub fn banner_image() -> ParallaxMapper {
        ParallaxMapper::new()
            .rule(Property::TranslateY(Unit::Percent), Curve::linear(-10.0, 10.0))
            .rule(Property::Scale, curve(&[0.0, 0.5, 1.0], &[1.1, 1.0, 1.1]))
    }

    pub fn banner_overlay() -> ParallaxMapper {
        ParallaxMapper::new().rule(Property::Opacity, curve(&[0.0, 0.5, 1.0], &[0.7, 0.5, 0.7]))
    }

    pub fn section_dimming() -> ParallaxMapper {
        ParallaxMapper::new().rule(Property::Opacity, Curve::linear(0.8, 1.0))
    }

    pub fn decorative_drift() -> ParallaxMapper {
        ParallaxMapper::new().rule(Property::TranslateY(Unit::Percent), Curve::linear(0.0, -50.0))
    }

    /// Navbar backdrop alpha and blur radius over the first 100px of scroll.
    pub fn navbar_backdrop(scroll_y: f64) -> (f64, f64) {
        let alpha = curve(&[0.0, 100.0], &[0.0, 0.8]).sample(scroll_y);
        let blur = curve(&[0.0, 100.0], &[0.0, 20.0]).sample(scroll_y);
        (alpha, blur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn three_stop_curve_interpolates_each_segment() {
        let curve = Curve::new(&[0.0, 0.5, 1.0], &[10.0, 20.0, 40.0]).expect("valid curve");
        assert_eq!(curve.sample(0.25), 15.0);
        assert_eq!(curve.sample(0.75), 30.0);
    }

    #[test]
    fn stops_return_exact_values() {
        let curve = Curve::new(&[0.0, 0.5, 1.0], &[0.7, 0.5, 0.7]).expect("valid curve");
        assert_eq!(curve.sample(0.0), 0.7);
        assert_eq!(curve.sample(0.5), 0.5);
        assert_eq!(curve.sample(1.0), 0.7);
    }

    #[test]
    fn out_of_domain_input_clamps() {
        let curve = Curve::new(&[0.0, 0.5], &[1.0, 0.9]).expect("valid curve");
        assert_eq!(curve.sample(-1.0), 1.0);
        assert_eq!(curve.sample(0.8), 0.9);
        assert_eq!(curve.sample(f64::NAN), 1.0);
    }

    #[test]
    fn invalid_curves_are_rejected() {
        assert_eq!(Curve::new(&[0.0], &[1.0]), Err(CurveError::TooFewStops(1)));
        assert_eq!(
            Curve::new(&[0.0, 1.0], &[1.0]),
            Err(CurveError::LengthMismatch { domain: 2, range: 1 })
        );
        assert_eq!(Curve::new(&[0.5, 0.5], &[1.0, 2.0]), Err(CurveError::UnsortedDomain));
    }

    #[test]
    fn nan_stops_are_rejected_anywhere_in_the_domain() {
        assert_eq!(Curve::new(&[f64::NAN, 1.0], &[1.0, 2.0]), Err(CurveError::UnsortedDomain));
        assert_eq!(Curve::new(&[0.0, f64::NAN], &[1.0, 2.0]), Err(CurveError::UnsortedDomain));
        assert_eq!(
            Curve::new(&[0.0, 0.5, f64::NAN], &[1.0, 2.0, 3.0]),
            Err(CurveError::UnsortedDomain)
        );
    }

    #[test]
    fn hero_fades_out_by_half_progress() {
        let mapper = presets::hero_content();
        let style = mapper.style(0.5);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.scale, 0.9);
        assert_eq!(style.translate_y, Length::px(100.0));

        let settled = mapper.style(1.0);
        assert_eq!(settled.opacity, 0.0);
        assert_eq!(settled.translate_y, Length::px(200.0));
    }

    #[test]
    fn navbar_backdrop_saturates_after_threshold() {
        assert_eq!(presets::navbar_backdrop(0.0), (0.0, 0.0));
        assert_eq!(presets::navbar_backdrop(50.0), (0.4, 10.0));
        assert_eq!(presets::navbar_backdrop(900.0), (0.8, 20.0));
    }

    proptest! {
        #[test]
        fn output_stays_within_range_bounds(progress in -10.0f64..10.0) {
            let curve = Curve::new(&[0.0, 0.5, 1.0], &[1.1, 1.0, 1.1]).expect("valid curve");
            let value = curve.sample(progress);
            prop_assert!(value >= 1.0 - 1e-12 && value <= 1.1 + 1e-12);
        }

        #[test]
        fn nearby_inputs_produce_nearby_outputs(progress in 0.0f64..0.999) {
            let curve = Curve::new(&[0.0, 0.5, 1.0], &[0.0, 100.0, 0.0]).expect("valid curve");
            let delta = (curve.sample(progress + 0.001) - curve.sample(progress)).abs();
            prop_assert!(delta <= 0.2 + 1e-9);
        }
    }
}
