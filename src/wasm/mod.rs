use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement};

use crate::config::GalaxyConfig;
use crate::error::GalaxyError;

pub mod dom;
pub mod fallback;
pub mod frame;
pub mod page;
mod points;
pub mod render;
mod shaders;

/// Render target for the galaxy.
pub const CANVAS_ID: &str = "galaxy-canvas";
/// Optional JSON override of [`GalaxyConfig`] on the canvas element.
pub const CONFIG_ATTRIBUTE: &str = "data-galaxy-config";

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("galaxy_portfolio starting");

    let window = dom::window()?;
    let document = dom::document(&window)?;

    if let Err(e) = page::install(&window, &document) {
        log::warn!("page interactions partially wired: {e}");
    }

    match dom::canvas_by_id(&document, CANVAS_ID) {
        Ok(canvas) => {
            boot_or_fall_back(&document, &canvas)?;
        }
        Err(e) => fall_back(&document, None, &e)?,
    }
    Ok(())
}

/// Start the galaxy on `canvas`, configured from its data attribute.
pub fn boot(canvas: &HtmlCanvasElement) -> Result<(), GalaxyError> {
    render::start(canvas.clone(), load_config(canvas))
}

/// Boot, or show the CSS backdrop if the galaxy cannot run here.
/// Returns `true` when the galaxy is running.
pub fn boot_or_fall_back(document: &Document, canvas: &HtmlCanvasElement) -> Result<bool, GalaxyError> {
    match boot(canvas) {
        Ok(()) => Ok(true),
        Err(e) => fall_back(document, Some(canvas), &e).map(|()| false),
    }
}

fn fall_back(
    document: &Document,
    canvas: Option<&HtmlCanvasElement>,
    cause: &GalaxyError,
) -> Result<(), GalaxyError> {
    log::warn!("galaxy unavailable, using static background: {cause}");
    fallback::activate(document, canvas)
}

fn load_config(canvas: &HtmlCanvasElement) -> GalaxyConfig {
    let Some(json) = canvas.get_attribute(CONFIG_ATTRIBUTE) else {
        log::info!("using default galaxy config");
        return GalaxyConfig::default();
    };
    match GalaxyConfig::from_json(&json) {
        Ok(config) => {
            log::info!("galaxy config from {CONFIG_ATTRIBUTE}");
            config
        }
        Err(e) => {
            log::warn!("ignoring {CONFIG_ATTRIBUTE}: {e}");
            GalaxyConfig::default()
        }
    }
}
