use web_sys::{Document, HtmlCanvasElement};

use super::dom;
use crate::error::GalaxyError;

/// Marker class on `<body>` once the CSS backdrop is in place.
pub const FALLBACK_CLASS: &str = "galaxy-fallback";

const KEYFRAMES: &str = "@keyframes galaxy-fallback-shift {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
}";

/// Hide the canvas and paint a slowly shifting gradient behind the page.
/// A second call only hides the canvas it is given; the backdrop is set up once.
pub fn activate(document: &Document, canvas: Option<&HtmlCanvasElement>) -> Result<(), GalaxyError> {
    let body = document
        .body()
        .ok_or_else(|| GalaxyError::ElementNotFound("body".into()))?;
    if let Some(canvas) = canvas {
        canvas.style().set_property("display", "none")?;
    }
    if body.class_list().contains(FALLBACK_CLASS) {
        return Ok(());
    }

    dom::inject_style(document, KEYFRAMES)?;
    dom::set_styles(
        &body,
        &[
            (
                "background",
                "linear-gradient(-45deg, #0a0a1a, #1a1033, #0d1b2a, #000000)",
            ),
            ("background-size", "400% 400%"),
            ("animation", "galaxy-fallback-shift 20s ease infinite"),
        ],
    )?;
    body.class_list().add_1(FALLBACK_CLASS)?;
    Ok(())
}

pub fn is_active(document: &Document) -> bool {
    document
        .body()
        .map_or(false, |body| body.class_list().contains(FALLBACK_CLASS))
}
