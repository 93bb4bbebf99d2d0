//! Decorative background layers. They own their clocks and only take an
//! external progress/pointer bias, so the rest of the site never reaches into
//! their buffers.

use std::f64::consts::PI;

pub trait RenderLayer {
    /// Advances the layer's own clock by `dt_secs`. `progress` is the scroll
    /// progress of the host section; `pointer` is normalised to `[-1, 1]`.
    fn advance(&mut self, dt_secs: f64, progress: f64, pointer: Option<(f64, f64)>);

    /// Screen-space sprites for a `width` x `height` surface.
    fn sprites(&self, width: f64, height: f64) -> Vec<Sprite>;
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
    pub kind: SpriteKind,
    pub rotation: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpriteKind {
    Dot,
    Torus,
    Icosahedron,
    Octahedron,
    Sphere,
    Ring,
}

#[derive(Clone, Copy, PartialEq, Debug)]
struct Camera {
    distance: f64,
    fov_deg: f64,
}

impl Camera {
    /// Perspective projection; `None` for points behind the camera.
    fn project(&self, point: [f64; 3], width: f64, height: f64) -> Option<(f64, f64, f64)> {
        let depth = self.distance - point[2];
        if depth <= 0.1 {
            return None;
        }
        let focal = (height / 2.0) / (self.fov_deg.to_radians() / 2.0).tan();
        let scale = focal / depth;
        Some((width / 2.0 + point[0] * scale, height / 2.0 - point[1] * scale, scale))
    }
}

fn rotate(point: [f64; 3], angle_x: f64, angle_y: f64) -> [f64; 3] {
    let (sin_x, cos_x) = angle_x.sin_cos();
    let (sin_y, cos_y) = angle_y.sin_cos();
    let [x, y, z] = point;
    let (y, z) = (y * cos_x - z * sin_x, y * sin_x + z * cos_x);
    let (x, z) = (x * cos_y + z * sin_y, -x * sin_y + z * cos_y);
    [x, y, z]
}

const PARTICLE_SPREAD: f64 = 20.0;
const PARTICLE_SIZE: f64 = 0.05;
const WAVE_AMPLITUDE_PER_SEC: f64 = 0.06;
const POINTER_EASE_PER_SEC: f64 = 3.0;

/// Slowly rotating point cloud with a sine drift.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<[f64; 3]>,
    elapsed: f64,
    progress: f64,
    tilt: (f64, f64),
    camera: Camera,
}

impl ParticleField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let positions = (0..count)
            .map(|_| {
                [
                    (rng.f64() - 0.5) * PARTICLE_SPREAD,
                    (rng.f64() - 0.5) * PARTICLE_SPREAD,
                    (rng.f64() - 0.5) * PARTICLE_SPREAD,
                ]
            })
            .collect();

        Self {
            positions,
            elapsed: 0.0,
            progress: 0.0,
            tilt: (0.0, 0.0),
            camera: Camera {
                distance: 10.0,
                fov_deg: 60.0,
            },
        }
    }

    fn rotation(&self) -> (f64, f64) {
        (
            self.elapsed * 0.02 + self.progress * 0.5 + self.tilt.1 * 0.2,
            self.elapsed * 0.03 + self.tilt.0 * 0.2,
        )
    }
}

impl RenderLayer for ParticleField {
    fn advance(&mut self, dt_secs: f64, progress: f64, pointer: Option<(f64, f64)>) {
        let dt = dt_secs.clamp(0.0, 0.1);
        self.elapsed += dt;
        self.progress = progress.clamp(0.0, 1.0);

        let (target_x, target_y) = pointer.unwrap_or((0.0, 0.0));
        let blend = (POINTER_EASE_PER_SEC * dt).min(1.0);
        self.tilt.0 += (target_x.clamp(-1.0, 1.0) - self.tilt.0) * blend;
        self.tilt.1 += (target_y.clamp(-1.0, 1.0) - self.tilt.1) * blend;

        let time = self.elapsed;
        for position in &mut self.positions {
            position[1] += (time + position[0]).sin() * WAVE_AMPLITUDE_PER_SEC * dt;
        }
    }

    fn sprites(&self, width: f64, height: f64) -> Vec<Sprite> {
        let (angle_x, angle_y) = self.rotation();
        self.positions
            .iter()
            .filter_map(|point| {
                let rotated = rotate(*point, angle_x, angle_y);
                let (x, y, scale) = self.camera.project(rotated, width, height)?;
                Some(Sprite {
                    x,
                    y,
                    radius: (PARTICLE_SIZE * scale).max(0.5),
                    alpha: 0.6,
                    kind: SpriteKind::Dot,
                    rotation: 0.0,
                })
            })
            .collect()
    }
}

/// Hero shapes whose placement is a function of scroll progress and time.
#[derive(Clone, Debug)]
pub struct FloatingShapes {
    elapsed: f64,
    progress: f64,
    camera: Camera,
}

impl Default for FloatingShapes {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ShapePose {
    pub kind: SpriteKind,
    pub position: [f64; 3],
    pub rotation: f64,
    pub size: f64,
}

impl FloatingShapes {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            progress: 0.0,
            camera: Camera {
                distance: 8.0,
                fov_deg: 45.0,
            },
        }
    }

    pub fn poses(&self) -> [ShapePose; 5] {
        let p = self.progress;
        let t = self.elapsed;
        let angle = p * PI * 2.0;
        [
            ShapePose {
                kind: SpriteKind::Torus,
                position: [-3.0 + p * 1.5, (p * PI).sin() * 0.5 + 2.0, -2.0],
                rotation: p * PI * 2.0 + t * 0.2,
                size: 0.8,
            },
            ShapePose {
                kind: SpriteKind::Icosahedron,
                position: [3.5 - p, -1.0 + p * 3.0, -3.0],
                rotation: t * 0.3 + p * PI,
                size: 0.7,
            },
            ShapePose {
                kind: SpriteKind::Octahedron,
                position: [-2.0, 1.0 - p * 2.0, -2.0 + p],
                rotation: t * 0.4 + p * PI * 2.0,
                size: 0.5,
            },
            ShapePose {
                kind: SpriteKind::Sphere,
                position: [2.5 + angle.cos() * 0.5, 0.5 + angle.sin() * 0.5, -1.5],
                rotation: t * 0.3 + p * PI,
                size: 0.6,
            },
            ShapePose {
                kind: SpriteKind::Ring,
                position: [0.0, -2.0 + p * 2.5, -4.0],
                rotation: t * 0.3 + p * PI,
                size: 1.2 * (1.0 + p * 0.3),
            },
        ]
    }
}

impl RenderLayer for FloatingShapes {
    fn advance(&mut self, dt_secs: f64, progress: f64, _pointer: Option<(f64, f64)>) {
        self.elapsed += dt_secs.clamp(0.0, 0.1);
        self.progress = progress.clamp(0.0, 1.0);
    }

    fn sprites(&self, width: f64, height: f64) -> Vec<Sprite> {
        self.poses()
            .iter()
            .filter_map(|pose| {
                let bob = (self.elapsed * 1.5 + pose.position[0]).sin() * 0.15;
                let point = [pose.position[0], pose.position[1] + bob, pose.position[2]];
                let (x, y, scale) = self.camera.project(point, width, height)?;
                Some(Sprite {
                    x,
                    y,
                    radius: pose.size * scale,
                    alpha: 0.35,
                    kind: pose.kind,
                    rotation: pose.rotation,
                })
            })
            .collect()
    }
}

const WAVE_SEGMENTS: usize = 32;
const WAVE_SIZE: f64 = 30.0;
const WAVE_TILT: f64 = -PI / 2.5;
const WAVE_DROP: f64 = 10.0;

/// Wireframe swell behind the services carousel: a tilted grid whose height
/// rolls with time.
#[derive(Clone, Debug)]
pub struct WaveField {
    elapsed: f64,
    camera: Camera,
}

impl Default for WaveField {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveField {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            camera: Camera {
                distance: 15.0,
                fov_deg: 50.0,
            },
        }
    }

    pub fn height(x: f64, y: f64, time: f64) -> f64 {
        (x * 0.5 + time).sin() * 0.3 + (y * 0.3 + time * 0.5).cos() * 0.3
    }

    fn vertices(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        let step = WAVE_SIZE / WAVE_SEGMENTS as f64;
        (0..=WAVE_SEGMENTS).flat_map(move |row| {
            (0..=WAVE_SEGMENTS).map(move |column| {
                let x = column as f64 * step - WAVE_SIZE / 2.0;
                let y = row as f64 * step - WAVE_SIZE / 2.0;
                let [x, y, z] = rotate([x, y, Self::height(x, y, self.elapsed)], WAVE_TILT, 0.0);
                [x, y - WAVE_DROP, z]
            })
        })
    }
}

impl RenderLayer for WaveField {
    fn advance(&mut self, dt_secs: f64, _progress: f64, _pointer: Option<(f64, f64)>) {
        self.elapsed += dt_secs.clamp(0.0, 0.1);
    }

    fn sprites(&self, width: f64, height: f64) -> Vec<Sprite> {
        self.vertices()
            .filter_map(|point| {
                let (x, y, scale) = self.camera.project(point, width, height)?;
                let on_surface = (0.0..=width).contains(&x) && (0.0..=height).contains(&y);
                on_surface.then_some(Sprite {
                    x,
                    y,
                    radius: (0.02 * scale).max(0.5),
                    alpha: 0.15,
                    kind: SpriteKind::Dot,
                    rotation: 0.0,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_fields_are_reproducible() {
        let a = ParticleField::new(50, 7);
        let b = ParticleField::new(50, 7);
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.positions.len(), 50);
    }

    #[test]
    fn advance_moves_the_internal_clock() {
        let mut field = ParticleField::new(10, 1);
        field.advance(1.0 / 60.0, 0.3, None);
        field.advance(1.0 / 60.0, 0.3, Some((0.5, -0.5)));
        assert!((field.elapsed - 2.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn stalled_tabs_do_not_jump_the_clock() {
        let mut field = ParticleField::new(10, 1);
        field.advance(30.0, 0.0, None);
        assert_eq!(field.elapsed, 0.1);
    }

    #[test]
    fn sprites_land_on_the_surface_center_for_origin() {
        let camera = Camera {
            distance: 10.0,
            fov_deg: 60.0,
        };
        let (x, y, _) = camera.project([0.0, 0.0, 0.0], 800.0, 600.0).expect("in front");
        assert_eq!((x, y), (400.0, 300.0));
        assert!(camera.project([0.0, 0.0, 12.0], 800.0, 600.0).is_none());
    }

    #[test]
    fn shapes_follow_scroll_progress() {
        let mut shapes = FloatingShapes::new();
        shapes.advance(0.0, 0.0, None);
        let start = shapes.poses();
        shapes.advance(0.0, 1.0, None);
        let end = shapes.poses();

        assert_eq!(start[1].position[1], -1.0);
        assert_eq!(end[1].position[1], 2.0);
        assert!(end[4].size > start[4].size);
        assert_eq!(shapes.sprites(800.0, 600.0).len(), 5);
    }

    #[test]
    fn waves_roll_with_time_and_stay_shallow() {
        assert_eq!(WaveField::height(0.0, 0.0, 0.0), 0.3);
        assert_ne!(WaveField::height(2.0, 1.0, 0.0), WaveField::height(2.0, 1.0, 1.0));
        for step in 0..100u32 {
            let t = f64::from(step) * 0.37;
            assert!(WaveField::height(t, -t, t).abs() <= 0.6);
        }
    }

    #[test]
    fn wave_grid_projects_onto_the_lower_surface() {
        let mut waves = WaveField::new();
        let before = waves.sprites(800.0, 600.0);
        waves.advance(0.05, 0.4, None);
        let after = waves.sprites(800.0, 600.0);

        assert!(!before.is_empty());
        assert!(before.len() <= (WAVE_SEGMENTS + 1) * (WAVE_SEGMENTS + 1));
        assert!(after
            .iter()
            .all(|sprite| (0.0..=800.0).contains(&sprite.x) && (300.0..=600.0).contains(&sprite.y)));
        assert_ne!(before, after);
    }
}
