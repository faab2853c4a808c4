//! Procedural point-sprite generators.
//!
//! Each generator fills a [`PointBuffers`] once at startup. The buffers are
//! flat `f32` arrays laid out for direct upload as vertex attributes:
//! three floats per particle for position and colour, one for size.

mod galaxy_cluster;
mod moving_stars;
mod nebula;
mod spiral_arms;
mod star_field;

pub use galaxy_cluster::{moving_galaxies, MovingGalaxy};
pub use moving_stars::{moving_stars, wrap_coordinate, MovingStars};
pub use nebula::{nebula, NEBULA_PALETTE};
pub use spiral_arms::{spiral_arm, spiral_arms};
pub use star_field::star_field;

use glam::Vec3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointBuffers {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub sizes: Vec<f32>,
}

impl PointBuffers {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count * 3),
            colors: Vec::with_capacity(count * 3),
            sizes: Vec::with_capacity(count),
        }
    }

    pub fn push(&mut self, position: Vec3, color: [f32; 3], size: f32) {
        self.positions.extend_from_slice(&position.to_array());
        self.colors.extend_from_slice(&color);
        self.sizes.push(size);
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn position(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[index * 3..index * 3 + 3])
    }

    /// Shift every particle by `delta` in place.
    pub fn translate(&mut self, delta: Vec3) {
        for p in self.positions.chunks_exact_mut(3) {
            p[0] += delta.x;
            p[1] += delta.y;
            p[2] += delta.z;
        }
    }
}

/// Split `0xRRGGBB` into linear 0..1 channels.
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Uniform sample in `[-0.5, 0.5)`.
pub(crate) fn centered<R: rand::Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() - 0.5
}
