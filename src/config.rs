//! Scene configuration.
//!
//! Every struct derives `Deserialize` with `#[serde(default)]`, so a partial
//! JSON override only has to name the fields it changes. Layers wrapped in
//! `Option` can be switched off with `null`.

use serde::Deserialize;

use crate::error::GalaxyError;

/// Most point sprites a single scene may allocate.
pub const MAX_PARTICLES: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub camera: CameraConfig,
    pub star_fields: Vec<StarFieldConfig>,
    pub moving_stars: Option<MovingStarsConfig>,
    pub nebula: Option<NebulaConfig>,
    pub spiral_arms: Option<SpiralArmsConfig>,
    pub moving_galaxies: Option<MovingGalaxiesConfig>,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            seed: None,
            camera: CameraConfig::default(),
            star_fields: vec![
                // distant
                StarFieldConfig { count: 5000, range: 50.0, color: 0xffffff },
                // core
                StarFieldConfig { count: 2000, range: 30.0, color: 0x64ffda },
                // accent
                StarFieldConfig { count: 1000, range: 20.0, color: 0x00bcd4 },
            ],
            moving_stars: Some(MovingStarsConfig::default()),
            nebula: Some(NebulaConfig::default()),
            spiral_arms: Some(SpiralArmsConfig::default()),
            moving_galaxies: Some(MovingGalaxiesConfig::default()),
        }
    }
}

impl GalaxyConfig {
    /// Parse an override and reject values the scene cannot be built from.
    pub fn from_json(json: &str) -> Result<Self, GalaxyError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Total number of point sprites the scene will allocate, saturating at
    /// `usize::MAX`.
    pub fn particle_total(&self) -> usize {
        self.checked_particle_total().unwrap_or(usize::MAX)
    }

    fn checked_particle_total(&self) -> Option<usize> {
        let mut total = 0usize;
        for field in &self.star_fields {
            total = total.checked_add(field.count)?;
        }
        if let Some(m) = &self.moving_stars {
            total = total.checked_add(m.count)?;
        }
        if let Some(n) = &self.nebula {
            total = total.checked_add(n.count)?;
        }
        if let Some(s) = &self.spiral_arms {
            total = total.checked_add(s.arm_count.checked_mul(s.stars_per_arm)?)?;
        }
        if let Some(g) = &self.moving_galaxies {
            let per = g.core_particles.checked_add(g.arm_particles)?;
            total = total.checked_add(g.count.checked_mul(per)?)?;
        }
        Some(total)
    }

    /// Every generator and the camera can run on these values without
    /// panicking or producing NaN positions.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        self.camera.validate()?;
        for field in &self.star_fields {
            non_negative("star_fields.range", field.range)?;
        }
        if let Some(m) = &self.moving_stars {
            non_negative("moving_stars.range", m.range)?;
            positive("moving_stars.wrap_extent", m.wrap_extent)?;
        }
        if let Some(n) = &self.nebula {
            non_negative("nebula.radius", n.radius)?;
            finite("nebula.angle_step", n.angle_step)?;
            finite("nebula.spin", n.spin)?;
        }
        if let Some(s) = &self.spiral_arms {
            non_negative("spiral_arms.radius", s.radius)?;
            finite("spiral_arms.spin", s.spin)?;
        }
        if let Some(g) = &self.moving_galaxies {
            g.validate()?;
        }
        match self.checked_particle_total() {
            Some(total) if total <= MAX_PARTICLES => Ok(()),
            _ => Err(GalaxyError::ConfigRange(format!(
                "more than {MAX_PARTICLES} particles requested"
            ))),
        }
    }
}

fn finite(name: &str, value: f32) -> Result<(), GalaxyError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GalaxyError::ConfigRange(format!("{name} must be finite, got {value}")))
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), GalaxyError> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(GalaxyError::ConfigRange(format!("{name} must not be negative, got {value}")))
    }
}

fn positive(name: &str, value: f32) -> Result<(), GalaxyError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(GalaxyError::ConfigRange(format!("{name} must be positive, got {value}")))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub start_z: f32,
    /// Extra distance added at full page scroll.
    pub scroll_dolly: f32,
    /// Lerp factor applied per frame when chasing the mouse target.
    pub easing: f32,
    /// Mouse NDC is multiplied by this to get the camera target.
    pub mouse_reach: f32,
    pub time_step: f32,
    pub max_pixel_ratio: f64,
}

impl CameraConfig {
    fn validate(&self) -> Result<(), GalaxyError> {
        positive("camera.fov_degrees", self.fov_degrees)?;
        if self.fov_degrees >= 180.0 {
            return Err(GalaxyError::ConfigRange(format!(
                "camera.fov_degrees must be below 180, got {}",
                self.fov_degrees
            )));
        }
        positive("camera.near", self.near)?;
        finite("camera.far", self.far)?;
        if self.far <= self.near {
            return Err(GalaxyError::ConfigRange("camera.far must exceed camera.near".into()));
        }
        finite("camera.start_z", self.start_z)?;
        finite("camera.scroll_dolly", self.scroll_dolly)?;
        finite("camera.easing", self.easing)?;
        finite("camera.mouse_reach", self.mouse_reach)?;
        finite("camera.time_step", self.time_step)?;
        if self.max_pixel_ratio.is_finite() && self.max_pixel_ratio > 0.0 {
            Ok(())
        } else {
            Err(GalaxyError::ConfigRange(format!(
                "camera.max_pixel_ratio must be positive, got {}",
                self.max_pixel_ratio
            )))
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            start_z: 5.0,
            scroll_dolly: 10.0,
            easing: 0.02,
            mouse_reach: 2.0,
            time_step: 0.01,
            max_pixel_ratio: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    pub count: usize,
    pub range: f32,
    /// `0xRRGGBB`
    pub color: u32,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self { count: 1000, range: 20.0, color: 0xffffff }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovingStarsConfig {
    pub count: usize,
    pub range: f32,
    /// Edge length of the wrap cube, centred on the origin.
    pub wrap_extent: f32,
}

impl Default for MovingStarsConfig {
    fn default() -> Self {
        Self { count: 500, range: 15.0, wrap_extent: 50.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NebulaConfig {
    pub count: usize,
    pub radius: f32,
    /// Angle advance per particle index.
    pub angle_step: f32,
    /// Mesh rotation about y, radians per unit of scene time.
    pub spin: f32,
}

impl Default for NebulaConfig {
    fn default() -> Self {
        Self { count: 1000, radius: 30.0, angle_step: 0.01, spin: 0.05 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpiralArmsConfig {
    pub arm_count: usize,
    pub stars_per_arm: usize,
    pub radius: f32,
    pub spin: f32,
}

impl Default for SpiralArmsConfig {
    fn default() -> Self {
        Self { arm_count: 4, stars_per_arm: 800, radius: 40.0, spin: 0.1 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovingGalaxiesConfig {
    pub count: usize,
    pub core_particles: usize,
    pub arm_particles: usize,
    pub core_radius: f32,
    pub arm_radius: f32,
    /// Clusters are spawned inside this radius.
    pub spawn_radius: f32,
    /// A cluster whose centre passes this distance is sent to the far side.
    pub reset_distance: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for MovingGalaxiesConfig {
    fn default() -> Self {
        Self {
            count: 6,
            core_particles: 150,
            arm_particles: 250,
            core_radius: 0.6,
            arm_radius: 2.5,
            spawn_radius: 35.0,
            reset_distance: 60.0,
            min_speed: 0.01,
            max_speed: 0.04,
        }
    }
}

impl MovingGalaxiesConfig {
    pub fn particles_per_galaxy(&self) -> usize {
        self.core_particles.saturating_add(self.arm_particles)
    }

    fn validate(&self) -> Result<(), GalaxyError> {
        non_negative("moving_galaxies.core_radius", self.core_radius)?;
        non_negative("moving_galaxies.arm_radius", self.arm_radius)?;
        non_negative("moving_galaxies.spawn_radius", self.spawn_radius)?;
        positive("moving_galaxies.reset_distance", self.reset_distance)?;
        non_negative("moving_galaxies.min_speed", self.min_speed)?;
        finite("moving_galaxies.max_speed", self.max_speed)?;
        if self.max_speed < self.min_speed {
            return Err(GalaxyError::ConfigRange(
                "moving_galaxies.max_speed must not be below min_speed".into(),
            ));
        }
        Ok(())
    }
}
