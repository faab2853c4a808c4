/// Clearance left for the fixed navbar when jumping to a section.
pub const NAV_SCROLL_OFFSET: f64 = 80.0;
/// A section becomes current this many pixels before its top reaches the viewport.
pub const SECTION_ACTIVATION_OFFSET: f64 = 100.0;
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
const PARALLAX_SPEED: f64 = 0.5;

/// The last section (in document order) whose activation line is above the
/// scroll position. A reached section without an id makes nothing current.
pub fn active_section<'a>(scroll_y: f64, sections: &[(&'a str, f64)]) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - SECTION_ACTIVATION_OFFSET)
        .last()
        .map(|(id, _)| *id)
        .filter(|id| !id.is_empty())
}

pub fn link_is_active(href: &str, current: Option<&str>) -> bool {
    match current {
        Some(id) => href.strip_prefix('#') == Some(id),
        None => false,
    }
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * PARALLAX_SPEED)
}
