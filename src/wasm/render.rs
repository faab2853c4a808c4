use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use rand::{rngs::StdRng, Rng, SeedableRng};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, MouseEvent, WebGl2RenderingContext as GL, Window};

use super::dom;
use super::frame::run_frames;
use super::points::{
    FrameUniforms, Motion, PointLayer, Programs, MOVING_STAR_GLOW, NEBULA_GLOW, STAR_GLOW,
};
use crate::config::GalaxyConfig;
use crate::error::GalaxyError;
use crate::particles::{self, MovingGalaxy};
use crate::view::ViewState;

/// Build the galaxy on `canvas` and start the render loop.
///
/// Fails before the first frame if WebGL2 is missing or the scene cannot be
/// built; once the loop is running it never stops.
pub fn start(canvas: HtmlCanvasElement, config: GalaxyConfig) -> Result<(), GalaxyError> {
    let gl = context(&canvas)?;
    let window = dom::window()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut scene = Scene::build(&gl, &config, &mut rng)?;
    log::info!(
        "galaxy scene ready: {} layers, {} moving galaxies, {} particles",
        scene.layers.len(),
        scene.galaxies.len(),
        config.particle_total()
    );

    let (width, height) = dom::viewport_size(&window);
    let view = Rc::new(RefCell::new(ViewState::new(config.camera.clone(), width, height)));
    resize(&window, &canvas, &gl, &mut view.borrow_mut());
    listen(&window, &canvas, &gl, &view)?;

    gl.clear_color(0.0, 0.0, 0.0, 0.0);
    gl.disable(GL::DEPTH_TEST);
    gl.depth_mask(false);
    gl.enable(GL::BLEND);
    gl.blend_func(GL::SRC_ALPHA, GL::ONE);

    run_frames(move || {
        let mut view = view.borrow_mut();
        view.tick();
        scene.advance(&gl);
        scene.draw(&gl, &view);
        true
    })
}

fn context(canvas: &HtmlCanvasElement) -> Result<GL, GalaxyError> {
    let options = Object::new();
    Reflect::set(&options, &"alpha".into(), &JsValue::TRUE)?;
    Reflect::set(&options, &"antialias".into(), &JsValue::TRUE)?;

    let context = canvas
        .get_context_with_context_options("webgl2", &options)?
        .ok_or(GalaxyError::WebGlUnavailable)?;
    context
        .dyn_into::<GL>()
        .map_err(|_| GalaxyError::WebGlUnavailable)
}

struct Scene {
    programs: Programs,
    layers: Vec<PointLayer>,
    galaxies: Vec<(MovingGalaxy, PointLayer)>,
    reset_distance: f32,
}

impl Scene {
    fn build<R: Rng>(gl: &GL, config: &GalaxyConfig, rng: &mut R) -> Result<Self, GalaxyError> {
        let programs = Programs::new(gl)?;
        let mut layers = Vec::new();

        for field in &config.star_fields {
            let points = particles::star_field(rng, field);
            layers.push(PointLayer::upload(gl, &points, None, Motion::Twinkle, STAR_GLOW)?);
        }

        if let Some(cfg) = &config.moving_stars {
            let stars = particles::moving_stars(rng, cfg);
            let layer = PointLayer::upload(
                gl,
                &stars.points,
                Some(stars.velocities.as_slice()),
                Motion::Wrap,
                MOVING_STAR_GLOW,
            )?;
            layers.push(layer.with_half_extent(stars.half_extent));
        }

        if let Some(cfg) = &config.nebula {
            let points = particles::nebula(rng, cfg);
            let layer = PointLayer::upload(gl, &points, None, Motion::Drift, NEBULA_GLOW)?;
            layers.push(layer.with_spin(cfg.spin));
        }

        if let Some(cfg) = &config.spiral_arms {
            for arm in particles::spiral_arms(rng, cfg) {
                let layer = PointLayer::upload(gl, &arm, None, Motion::Rigid, STAR_GLOW)?;
                layers.push(layer.with_spin(cfg.spin));
            }
        }

        let mut galaxies = Vec::new();
        let mut reset_distance = f32::INFINITY;
        if let Some(cfg) = &config.moving_galaxies {
            reset_distance = cfg.reset_distance;
            for galaxy in particles::moving_galaxies(rng, cfg) {
                let layer = PointLayer::upload_dynamic(gl, &galaxy.points, Motion::Rigid, STAR_GLOW)?;
                galaxies.push((galaxy, layer));
            }
        }

        Ok(Self {
            programs,
            layers,
            galaxies,
            reset_distance,
        })
    }

    /// CPU-side motion: only the moving galaxies live here.
    fn advance(&mut self, gl: &GL) {
        for (galaxy, layer) in &mut self.galaxies {
            if galaxy.advance(self.reset_distance) {
                log::debug!("moving galaxy wrapped to {}", galaxy.center);
            }
            layer.write_positions(gl, &galaxy.points.positions);
        }
    }

    fn draw(&self, gl: &GL, view: &ViewState) {
        let frame = FrameUniforms {
            view: view.view_matrix(),
            projection: view.projection_matrix(),
            time: view.time,
        };

        gl.clear(GL::COLOR_BUFFER_BIT);
        let galaxy_layers = self.galaxies.iter().map(|(_, layer)| layer);
        for layer in self.layers.iter().chain(galaxy_layers) {
            layer.draw(gl, &self.programs, &frame);
        }
    }
}

/// Match the drawing buffer to the window, capped at the configured pixel ratio.
fn resize(window: &Window, canvas: &HtmlCanvasElement, gl: &GL, view: &mut ViewState) {
    let (width, height) = dom::viewport_size(window);
    let ratio = window.device_pixel_ratio().min(view.config().max_pixel_ratio);
    canvas.set_width((width * ratio) as u32);
    canvas.set_height((height * ratio) as u32);
    gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);
    view.set_viewport(width, height);
}

fn listen(
    window: &Window,
    canvas: &HtmlCanvasElement,
    gl: &GL,
    view: &Rc<RefCell<ViewState>>,
) -> Result<(), GalaxyError> {
    let document = dom::document(window)?;

    {
        let (win, canvas, gl, view) = (window.clone(), canvas.clone(), gl.clone(), view.clone());
        dom::on(window, "resize", move |_| {
            resize(&win, &canvas, &gl, &mut view.borrow_mut());
        })?;
    }

    {
        let (win, view) = (window.clone(), view.clone());
        dom::on(&document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (width, height) = dom::viewport_size(&win);
            view.borrow_mut().set_pointer(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                width,
                height,
            );
        })?;
    }

    {
        let (win, view) = (window.clone(), view.clone());
        dom::on(window, "scroll", move |_| {
            let scroll_height = document
                .document_element()
                .map_or(0.0, |root| f64::from(root.scroll_height()));
            let (_, viewport_height) = dom::viewport_size(&win);
            view.borrow_mut()
                .set_scroll(dom::scroll_y(&win), scroll_height, viewport_height);
        })?;
    }

    Ok(())
}
