//! Damped spring followers stepped once per animation frame.

const MAX_SUBSTEP_SECS: f64 = 1.0 / 240.0;
const MAX_FRAME_SECS: f64 = 0.064;
const REST_DISTANCE: f64 = 0.01;
const REST_VELOCITY: f64 = 0.01;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Moves value and target together without any motion.
    pub fn jump(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advances by `dt_secs`. Long frames (tab switches) are capped so the
    /// follower never overshoots wildly on resume.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        if self.is_at_rest() || dt_secs <= 0.0 {
            return self.value;
        }

        let mut remaining = dt_secs.min(MAX_FRAME_SECS);
        let mass = self.config.mass.max(f64::EPSILON);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECS);
            let spring_force = -self.config.stiffness * (self.value - self.target);
            let damping_force = -self.config.damping * self.velocity;
            self.velocity += (spring_force + damping_force) / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.value - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// Two independent springs sharing one config, for screen positions.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, x: f64, y: f64) -> Self {
        Self {
            x: Spring::new(config, x),
            y: Spring::new(config, y),
        }
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn jump(&mut self, x: f64, y: f64) {
        self.x.jump(x);
        self.y.jump(y);
    }

    pub fn step(&mut self, dt_secs: f64) -> (f64, f64) {
        (self.x.step(dt_secs), self.y.step(dt_secs))
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.step(FRAME);
        }
    }

    #[test]
    fn converges_and_snaps_to_target() {
        let mut spring = Spring::new(SpringConfig::new(400.0, 25.0, 0.5), 0.0);
        spring.set_target(500.0);
        run(&mut spring, 240);
        assert_eq!(spring.value, 500.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn softer_springs_lag_further_behind() {
        let mut fast = Spring::new(SpringConfig::new(400.0, 25.0, 0.5), 0.0);
        let mut slow = Spring::new(SpringConfig::new(120.0, 15.0, 1.0), 0.0);
        fast.set_target(100.0);
        slow.set_target(100.0);
        run(&mut fast, 5);
        run(&mut slow, 5);
        assert!(fast.value > slow.value);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut spring = Spring::new(SpringConfig::new(200.0, 20.0, 0.8), 0.0);
        spring.set_target(100.0);
        spring.step(5.0);
        assert!(spring.value.is_finite());
        assert!(spring.value < 100.0 * 1.5);
    }

    #[test]
    fn jump_leaves_spring_at_rest() {
        let mut pair = Spring2::new(SpringConfig::new(200.0, 20.0, 0.8), 0.0, 0.0);
        pair.jump(40.0, 80.0);
        assert!(pair.is_at_rest());
        assert_eq!(pair.step(FRAME), (40.0, 80.0));
    }
}
