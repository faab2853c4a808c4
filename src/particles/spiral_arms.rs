use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

use super::{centered, PointBuffers};
use crate::config::SpiralArmsConfig;

/// One arm of the galaxy, rotated `arm / arm_count` of a full turn.
///
/// Radius grows linearly with `t`; the angle sweeps two turns with a
/// sinusoidal ripple. Brightness and size fall off towards the rim.
pub fn spiral_arm<R: Rng + ?Sized>(rng: &mut R, arm: usize, cfg: &SpiralArmsConfig) -> PointBuffers {
    let count = cfg.stars_per_arm;
    let mut out = PointBuffers::with_capacity(count);
    if count == 0 {
        return out;
    }

    let arm_offset = arm as f32 / cfg.arm_count.max(1) as f32 * TAU;

    for i in 0..count {
        let t = i as f32 / count as f32;
        let radius = t * cfg.radius;
        let angle = arm_offset + t * PI * 4.0 + (t * PI * 8.0).sin() * 0.3;

        let position = Vec3::new(
            angle.cos() * radius + centered(rng) * 3.0,
            centered(rng) * 2.0,
            angle.sin() * radius + centered(rng) * 3.0,
        );

        let intensity = 1.0 - t * 0.7;
        let color = [
            intensity * (0.4 + rng.gen::<f32>() * 0.3),
            intensity * (0.8 + rng.gen::<f32>() * 0.2),
            intensity,
        ];
        let size = (1.0 - t) * 2.0 + 0.5;

        out.push(position, color, size);
    }

    out
}

pub fn spiral_arms<R: Rng + ?Sized>(rng: &mut R, cfg: &SpiralArmsConfig) -> Vec<PointBuffers> {
    (0..cfg.arm_count).map(|arm| spiral_arm(rng, arm, cfg)).collect()
}
