use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

use super::{centered, rgb, PointBuffers};
use crate::config::StarFieldConfig;

const COLOR_JITTER: f32 = 0.3;

/// Stars scattered over a flattened disk of radius `range`.
pub fn star_field<R: Rng + ?Sized>(rng: &mut R, cfg: &StarFieldConfig) -> PointBuffers {
    let base = rgb(cfg.color);
    let mut out = PointBuffers::with_capacity(cfg.count);

    for _ in 0..cfg.count {
        let radius = rng.gen::<f32>() * cfg.range;
        let theta = rng.gen::<f32>() * TAU;
        // elevation stays within ±27° and y is squashed again below
        let phi = centered(rng) * PI * 0.3;

        let position = Vec3::new(
            radius * theta.cos() * phi.cos(),
            radius * phi.sin() * 0.3,
            radius * theta.sin() * phi.cos(),
        );

        let color = base.map(|c| (c + centered(rng) * COLOR_JITTER).clamp(0.0, 1.0));
        let size = rng.gen::<f32>() * 3.0 + 1.0;

        out.push(position, color, size);
    }

    out
}
