use std::f32::consts::{PI, TAU};

use glam::{EulerRot, Quat, Vec3};
use rand::Rng;

use super::{centered, PointBuffers};
use crate::config::MovingGalaxiesConfig;

/// A miniature galaxy (bright core plus a two-armed spiral) that sails
/// across the scene in a straight line.
///
/// Positions are stored in world space and shifted in place every frame.
#[derive(Debug, Clone)]
pub struct MovingGalaxy {
    pub points: PointBuffers,
    pub center: Vec3,
    pub direction: Vec3,
    pub speed: f32,
    /// Farthest particle from `center`.
    pub extent: f32,
}

impl MovingGalaxy {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, cfg: &MovingGalaxiesConfig) -> Self {
        let center = random_unit(rng) * cfg.spawn_radius * rng.gen::<f32>().cbrt();
        let direction = random_unit(rng);
        let speed = if cfg.max_speed > cfg.min_speed {
            rng.gen_range(cfg.min_speed..cfg.max_speed)
        } else {
            cfg.min_speed
        };

        let tilt = Quat::from_euler(
            EulerRot::XYZ,
            centered(rng) * PI * 0.6,
            rng.gen::<f32>() * TAU,
            centered(rng) * PI * 0.6,
        );

        let mut points = PointBuffers::with_capacity(cfg.particles_per_galaxy());
        let mut extent = 0.0f32;

        for _ in 0..cfg.core_particles {
            let local = random_unit(rng) * cfg.core_radius * rng.gen::<f32>().cbrt();
            let warm = 0.85 + rng.gen::<f32>() * 0.15;
            let color = [1.0, warm, warm * 0.75];
            let size = rng.gen::<f32>() * 1.5 + 1.5;
            extent = extent.max(local.length());
            points.push(center + local, color, size);
        }

        for i in 0..cfg.arm_particles {
            let t = i as f32 / cfg.arm_particles as f32;
            let radius = cfg.core_radius + t * (cfg.arm_radius - cfg.core_radius).max(0.0);
            let arm = (i % 2) as f32 * PI;
            let angle = arm + t * PI * 3.0 + centered(rng) * 0.4;
            let flat = Vec3::new(
                angle.cos() * radius,
                centered(rng) * 0.2,
                angle.sin() * radius,
            );
            let local = tilt * flat;
            let fade = 1.0 - t * 0.6;
            let color = [fade * (0.5 + rng.gen::<f32>() * 0.2), fade * 0.8, fade];
            let size = (1.0 - t) * 1.5 + 0.5;
            extent = extent.max(local.length());
            points.push(center + local, color, size);
        }

        Self {
            points,
            center,
            direction,
            speed,
            extent,
        }
    }

    /// Move one frame along `direction`. A cluster that passes
    /// `reset_distance` reappears on the opposite side of the sphere,
    /// still heading the same way, so it re-enters the scene.
    ///
    /// Returns `true` when the cluster was sent to the far side.
    pub fn advance(&mut self, reset_distance: f32) -> bool {
        let mut next = self.center + self.direction * self.speed;
        let reset = next.length() > reset_distance;
        if reset {
            next = -next.normalize_or_zero() * reset_distance;
        }
        self.points.translate(next - self.center);
        self.center = next;
        reset
    }
}

/// Spawn `cfg.count` clusters.
pub fn moving_galaxies<R: Rng + ?Sized>(rng: &mut R, cfg: &MovingGalaxiesConfig) -> Vec<MovingGalaxy> {
    (0..cfg.count).map(|_| MovingGalaxy::spawn(rng, cfg)).collect()
}

/// Uniform direction on the unit sphere.
fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let z = rng.gen_range(-1.0f32..=1.0);
    let theta = rng.gen::<f32>() * TAU;
    let ring = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(ring * theta.cos(), ring * theta.sin(), z)
}
