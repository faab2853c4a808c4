//! Camera and clock shared between the input handlers and the frame loop.

use glam::{Mat4, Vec2, Vec3};

use crate::config::CameraConfig;

#[derive(Debug, Clone)]
pub struct ViewState {
    /// Scene clock, advanced by a fixed step each frame.
    pub time: f32,
    /// Pointer in normalised device coordinates.
    pub mouse: Vec2,
    pub camera: Vec3,
    pub aspect: f32,
    cfg: CameraConfig,
}

impl ViewState {
    pub fn new(cfg: CameraConfig, width: f64, height: f64) -> Self {
        let mut view = Self {
            time: 0.0,
            mouse: Vec2::ZERO,
            camera: Vec3::new(0.0, 0.0, cfg.start_z),
            aspect: 1.0,
            cfg,
        };
        view.set_viewport(width, height);
        view
    }

    pub fn config(&self) -> &CameraConfig {
        &self.cfg
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = (width / height) as f32;
        }
    }

    pub fn set_pointer(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        self.mouse = pointer_ndc(client_x, client_y, width, height);
    }

    /// Dolly the camera back as the page scrolls.
    pub fn set_scroll(&mut self, scroll_y: f64, scroll_height: f64, viewport_height: f64) {
        let fraction = scroll_fraction(scroll_y, scroll_height, viewport_height);
        self.camera.z = self.cfg.start_z + fraction * self.cfg.scroll_dolly;
    }

    /// Advance the clock and ease the camera towards the pointer target.
    pub fn tick(&mut self) {
        self.time += self.cfg.time_step;
        let target = self.mouse * self.cfg.mouse_reach;
        self.camera.x += (target.x - self.camera.x) * self.cfg.easing;
        self.camera.y += (target.y - self.camera.y) * self.cfg.easing;
    }

    /// Always looks at the origin.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.camera, Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.cfg.fov_degrees.to_radians(),
            self.aspect,
            self.cfg.near,
            self.cfg.far,
        )
    }

    /// Rigid rotation about y for a layer spinning at `rate` rad per time unit.
    pub fn spin(&self, rate: f32) -> Mat4 {
        Mat4::from_rotation_y(self.time * rate)
    }
}

/// Window pixel coordinates to NDC, y up.
pub fn pointer_ndc(client_x: f64, client_y: f64, width: f64, height: f64) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width * 2.0 - 1.0) as f32,
        (-(client_y / height) * 2.0 + 1.0) as f32,
    )
}

/// How far down the page we are, in `[0, 1]`.
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_corners() {
        assert_eq!(pointer_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(pointer_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
        assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    }

    #[test]
    fn short_page_does_not_divide_by_zero() {
        assert_eq!(scroll_fraction(0.0, 600.0, 600.0), 0.0);
        assert_eq!(scroll_fraction(50.0, 500.0, 600.0), 0.0);
        assert_eq!(scroll_fraction(700.0, 1600.0, 600.0), 0.7);
        assert_eq!(scroll_fraction(5000.0, 1600.0, 600.0), 1.0);
    }

    #[test]
    fn camera_eases_towards_pointer() {
        let mut view = ViewState::new(CameraConfig::default(), 800.0, 600.0);
        view.set_pointer(800.0, 0.0, 800.0, 600.0);
        view.tick();
        assert!((view.camera.x - 0.04).abs() < 1e-6);
        assert!((view.camera.y - 0.04).abs() < 1e-6);
        for _ in 0..2000 {
            view.tick();
        }
        assert!((view.camera.x - 2.0).abs() < 1e-3);
        assert!((view.time - 20.01).abs() < 0.1);
    }

    #[test]
    fn scroll_dollies_camera() {
        let mut view = ViewState::new(CameraConfig::default(), 800.0, 600.0);
        view.set_scroll(500.0, 1600.0, 600.0);
        assert_eq!(view.camera.z, 10.0);
    }
}
