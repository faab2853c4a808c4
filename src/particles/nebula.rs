use glam::Vec3;
use rand::Rng;

use super::{centered, PointBuffers};
use crate::config::NebulaConfig;

/// Purple, blue, cyan.
pub const NEBULA_PALETTE: [[f32; 3]; 3] = [[0.4, 0.0, 0.8], [0.0, 0.4, 1.0], [0.0, 0.8, 1.0]];

/// Soft cloud wound along a loose spiral; angle grows with particle index.
pub fn nebula<R: Rng + ?Sized>(rng: &mut R, cfg: &NebulaConfig) -> PointBuffers {
    let mut out = PointBuffers::with_capacity(cfg.count);

    for i in 0..cfg.count {
        let angle = i as f32 * cfg.angle_step;
        let radius = rng.gen::<f32>() * cfg.radius;

        let position = Vec3::new(
            angle.cos() * radius + centered(rng) * 10.0,
            centered(rng) * 5.0,
            angle.sin() * radius + centered(rng) * 10.0,
        );
        let color = NEBULA_PALETTE[rng.gen_range(0..NEBULA_PALETTE.len())];
        let size = rng.gen::<f32>() * 5.0 + 2.0;

        out.push(position, color, size);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn colors_come_from_palette() {
        let mut rng = StdRng::seed_from_u64(11);
        let cloud = nebula(&mut rng, &NebulaConfig::default());
        for c in cloud.colors.chunks_exact(3) {
            assert!(NEBULA_PALETTE.iter().any(|p| p.as_slice() == c));
        }
        for i in 0..cloud.len() {
            assert!(cloud.position(i).y.abs() <= 2.5);
        }
    }
}
