#![cfg(not(target_arch = "wasm32"))]

use galaxy_portfolio::config::{
    GalaxyConfig, MovingGalaxiesConfig, MovingStarsConfig, NebulaConfig, SpiralArmsConfig, StarFieldConfig,
};
use galaxy_portfolio::particles::{
    moving_galaxies, moving_stars, nebula, spiral_arms, star_field, PointBuffers,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn assert_lengths(points: &PointBuffers, count: usize) {
    assert_eq!(points.positions.len(), count * 3);
    assert_eq!(points.colors.len(), count * 3);
    assert_eq!(points.sizes.len(), count);
    assert_eq!(points.len(), count);
}

proptest! {
    #[test]
    fn generators_fill_exact_buffer_lengths(count in 0usize..600, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);

        let field = star_field(&mut rng, &StarFieldConfig { count, range: 50.0, color: 0x00bcd4 });
        assert_lengths(&field, count);

        let cloud = nebula(&mut rng, &NebulaConfig { count, ..Default::default() });
        assert_lengths(&cloud, count);

        let movers = moving_stars(&mut rng, &MovingStarsConfig { count, ..Default::default() });
        assert_lengths(&movers.points, count);
        prop_assert_eq!(movers.velocities.len(), count * 3);

        let arms = spiral_arms(&mut rng, &SpiralArmsConfig { stars_per_arm: count, ..Default::default() });
        prop_assert_eq!(arms.len(), 4);
        for arm in &arms {
            assert_lengths(arm, count);
        }
    }

    #[test]
    fn accepted_speed_overrides_always_spawn(
        min in prop_oneof![any::<f32>(), -1.0f32..1.0],
        max in prop_oneof![any::<f32>(), -1.0f32..1.0],
        seed in any::<u64>(),
    ) {
        let json = format!(
            r#"{{ "moving_galaxies": {{ "count": 4, "min_speed": {min:e}, "max_speed": {max:e} }} }}"#
        );
        if let Ok(cfg) = GalaxyConfig::from_json(&json) {
            let g = cfg.moving_galaxies.unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            for galaxy in moving_galaxies(&mut rng, &g) {
                prop_assert!(galaxy.speed.is_finite());
                prop_assert!(galaxy.speed >= g.min_speed && galaxy.speed <= g.max_speed);
            }
        }
    }

    #[test]
    fn moving_stars_stay_in_wrap_cube(seed in any::<u64>(), time in 0.0f32..100_000.0) {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = moving_stars(&mut rng, &MovingStarsConfig { count: 200, ..Default::default() });
        let h = stars.half_extent;
        for i in 0..stars.points.len() {
            let p = stars.position_at(i, time);
            for c in p.to_array() {
                prop_assert!((-h..h).contains(&c), "particle {} at {} escaped at t={}", i, p, time);
            }
        }
    }

    #[test]
    fn moving_galaxies_stay_in_bounding_sphere(seed in any::<u64>(), frames in 0usize..3000) {
        let mut rng = StdRng::seed_from_u64(seed);
        let cfg = MovingGalaxiesConfig {
            count: 3,
            core_particles: 20,
            arm_particles: 30,
            min_speed: 0.5,
            max_speed: 2.0,
            ..Default::default()
        };
        let mut galaxies = moving_galaxies(&mut rng, &cfg);

        for _ in 0..frames {
            for g in &mut galaxies {
                g.advance(cfg.reset_distance);
            }
        }

        for g in &galaxies {
            prop_assert!(g.center.length() <= cfg.reset_distance + 1e-3);
            let bound = cfg.reset_distance + g.extent + 0.05;
            for i in 0..g.points.len() {
                prop_assert!(g.points.position(i).length() <= bound);
            }
        }
    }
}

#[test]
fn default_scene_sizes() {
    let mut rng = StdRng::seed_from_u64(42);
    let cfg = MovingGalaxiesConfig::default();
    let galaxies = moving_galaxies(&mut rng, &cfg);
    assert_eq!(galaxies.len(), 6);
    for g in &galaxies {
        assert_lengths(&g.points, cfg.particles_per_galaxy());
        assert!((g.direction.length() - 1.0).abs() < 1e-4);
        assert!((cfg.min_speed..cfg.max_speed).contains(&g.speed));
        assert!(g.center.length() <= cfg.spawn_radius + 1e-3);
    }
}

#[test]
fn same_seed_same_sky() {
    let cfg = StarFieldConfig::default();
    let a = star_field(&mut StdRng::seed_from_u64(7), &cfg);
    let b = star_field(&mut StdRng::seed_from_u64(7), &cfg);
    assert_eq!(a, b);
}
