//! Easing curves used by reveals and the preloader choreography.
//!
//! Every curve maps `t` in `[0, 1]` to eased progress with `f(0) = 0` and
//! `f(1) = 1`. Inputs outside the unit interval are clamped first.

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f64 = 1e-7;
const BISECTION_ITERATIONS: usize = 40;

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` with fixed endpoints at (0,0) and (1,1).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// The reveal curve, a close approximation of CSS `ease`.
pub const REVEAL_EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn component(t: f64, p1: f64, p2: f64) -> f64 {
        let inv = 1.0 - t;
        3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
    }

    fn component_slope(t: f64, p1: f64, p2: f64) -> f64 {
        let inv = 1.0 - t;
        3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    fn solve_t_for_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = Self::component(t, self.x1, self.x2) - x;
            if error.abs() < NEWTON_EPSILON {
                return t;
            }
            let slope = Self::component_slope(t, self.x1, self.x2);
            if slope.abs() < NEWTON_EPSILON {
                break;
            }
            t -= error / slope;
        }

        let (mut low, mut high) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = Self::component(t, self.x1, self.x2);
            if (value - x).abs() < NEWTON_EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }

    pub fn ease(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        Self::component(self.solve_t_for_x(x), self.y1, self.y2)
    }
}

/// Polynomial ease families (`power2` is quadratic, `power4` quintic).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Power {
    Two,
    Three,
    Four,
}

impl Power {
    fn exponent(self) -> i32 {
        match self {
            Self::Two => 3,
            Self::Three => 4,
            Self::Four => 5,
        }
    }

    pub fn ease_in(self, t: f64) -> f64 {
        t.clamp(0.0, 1.0).powi(self.exponent())
    }

    pub fn ease_out(self, t: f64) -> f64 {
        1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(self.exponent())
    }

    pub fn ease_in_out(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t < 0.5 {
            self.ease_in(t * 2.0) / 2.0
        } else {
            1.0 - self.ease_in((1.0 - t) * 2.0) / 2.0
        }
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_curve_hits_endpoints_exactly() {
        assert_eq!(REVEAL_EASE.ease(0.0), 0.0);
        assert_eq!(REVEAL_EASE.ease(1.0), 1.0);
        assert_eq!(REVEAL_EASE.ease(-3.0), 0.0);
        assert_eq!(REVEAL_EASE.ease(7.0), 1.0);
    }

    #[test]
    fn reveal_curve_front_loads_motion() {
        let mid = REVEAL_EASE.ease(0.5);
        assert!(mid > 0.75 && mid < 0.85, "ease(0.5) = {mid}");
    }

    #[test]
    fn reveal_curve_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = REVEAL_EASE.ease(f64::from(step) / 100.0);
            assert!(value >= previous - 1e-9);
            previous = value;
        }
    }

    #[test]
    fn linear_bezier_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for step in 0..=10 {
            let x = f64::from(step) / 10.0;
            assert!((linear.ease(x) - x).abs() < 1e-6);
        }
    }

    #[test]
    fn power_in_out_is_symmetric_around_midpoint() {
        for power in [Power::Two, Power::Three, Power::Four] {
            assert!((power.ease_in_out(0.5) - 0.5).abs() < 1e-12);
            let a = power.ease_in_out(0.2);
            let b = power.ease_in_out(0.8);
            assert!((a + b - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn counter_curve_matches_cubic_ease_out() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }
}
