use glam::Vec3;
use rand::Rng;

use super::{centered, PointBuffers};
use crate::config::MovingStarsConfig;

/// Stars that drift along a fixed velocity and wrap around a cube.
///
/// The GPU evaluates `position + velocity * time` and wraps it; the CPU keeps
/// the same rule in [`MovingStars::position_at`] so the two agree.
#[derive(Debug, Clone)]
pub struct MovingStars {
    pub points: PointBuffers,
    pub velocities: Vec<f32>,
    pub half_extent: f32,
}

impl MovingStars {
    pub fn velocity(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.velocities[index * 3..index * 3 + 3])
    }

    /// Where particle `index` is drawn at scene time `time`.
    pub fn position_at(&self, index: usize, time: f32) -> Vec3 {
        let raw = self.points.position(index) + self.velocity(index) * time;
        Vec3::new(
            wrap_coordinate(raw.x, self.half_extent),
            wrap_coordinate(raw.y, self.half_extent),
            wrap_coordinate(raw.z, self.half_extent),
        )
    }
}

/// Toroidal wrap into `[-half, half)`. Matches GLSL `mod(v + h, 2h) - h`.
pub fn wrap_coordinate(value: f32, half: f32) -> f32 {
    if half <= 0.0 {
        return 0.0;
    }
    let wrapped = (value + half).rem_euclid(2.0 * half) - half;
    // rem_euclid can round up to exactly 2h for tiny negative inputs
    if wrapped >= half {
        -half
    } else {
        wrapped
    }
}

pub fn moving_stars<R: Rng + ?Sized>(rng: &mut R, cfg: &MovingStarsConfig) -> MovingStars {
    let mut points = PointBuffers::with_capacity(cfg.count);
    let mut velocities = Vec::with_capacity(cfg.count * 3);

    for _ in 0..cfg.count {
        let position = Vec3::new(
            centered(rng) * cfg.range,
            centered(rng) * cfg.range * 0.3,
            centered(rng) * cfg.range,
        );
        velocities.extend_from_slice(&[
            centered(rng) * 0.02,
            centered(rng) * 0.01,
            centered(rng) * 0.02,
        ]);

        let color = [0.8 + rng.gen::<f32>() * 0.2, 0.9 + rng.gen::<f32>() * 0.1, 1.0];
        let size = rng.gen::<f32>() * 2.0 + 1.0;
        points.push(position, color, size);
    }

    MovingStars {
        points,
        velocities,
        half_extent: cfg.wrap_extent * 0.5,
    }
}
