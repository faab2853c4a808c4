//! Thin helpers over `web_sys` shared by the renderer and the page wiring.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, EventTarget, HtmlCanvasElement, HtmlElement, Window};

use crate::error::GalaxyError;

pub fn window() -> Result<Window, GalaxyError> {
    web_sys::window().ok_or(GalaxyError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, GalaxyError> {
    window.document().ok_or(GalaxyError::NoDocument)
}

pub fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement, GalaxyError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GalaxyError::ElementNotFound(format!("#{id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GalaxyError::ElementNotFound(format!("canvas#{id}")))
}

/// First match, or `None` for no match or an invalid selector.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn html(element: &Element) -> Option<HtmlElement> {
    element.dyn_ref::<HtmlElement>().cloned()
}

pub fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, GalaxyError> {
    Ok(document.create_element(tag)?.unchecked_into())
}

pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), GalaxyError> {
    let style = element.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Append a `<style>` block to `<head>`.
pub fn inject_style(document: &Document, css: &str) -> Result<(), GalaxyError> {
    let head = document
        .head()
        .ok_or_else(|| GalaxyError::ElementNotFound("head".into()))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}

/// Attach `handler` for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), GalaxyError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `ms` milliseconds.
pub fn after<F>(ms: i32, f: F) -> Result<(), GalaxyError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)?;
    Ok(())
}

/// CSS pixel size of the viewport.
pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
