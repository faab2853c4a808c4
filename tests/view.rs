#![cfg(not(target_arch = "wasm32"))]

use galaxy_portfolio::config::CameraConfig;
use galaxy_portfolio::ViewState;
use glam::{Vec3, Vec4};

fn project(view: &ViewState, p: Vec3) -> Vec3 {
    let clip = view.projection_matrix() * view.view_matrix() * Vec4::new(p.x, p.y, p.z, 1.0);
    clip.truncate() / clip.w
}

#[test]
fn origin_is_centred_for_any_aspect() {
    for (w, h) in [(1920.0, 1080.0), (1080.0, 1920.0), (800.0, 800.0)] {
        let view = ViewState::new(CameraConfig::default(), w, h);
        let ndc = project(&view, Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "{w}x{h}: {ndc}");
    }
}

#[test]
fn wide_viewport_squeezes_x_by_aspect() {
    let square = ViewState::new(CameraConfig::default(), 1000.0, 1000.0);
    let wide = ViewState::new(CameraConfig::default(), 2000.0, 1000.0);
    let p = Vec3::new(1.0, 1.0, 0.0);
    let a = project(&square, p);
    let b = project(&wide, p);
    assert!((a.x / b.x - 2.0).abs() < 1e-4);
    assert!((a.y - b.y).abs() < 1e-6);
}

#[test]
fn camera_keeps_looking_at_origin_while_easing() {
    let mut view = ViewState::new(CameraConfig::default(), 1280.0, 720.0);
    view.set_pointer(0.0, 720.0, 1280.0, 720.0);
    view.set_scroll(900.0, 2520.0, 720.0);
    for _ in 0..500 {
        view.tick();
        let ndc = project(&view, Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    }
    assert!(view.camera.x < -1.9 && view.camera.y < -1.9);
    assert!((view.camera.z - 10.0).abs() < 1e-5);
}
