//! DOM wiring for the portfolio page. Every piece is optional: a missing
//! element just means that behaviour is skipped.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, FormData, HtmlElement, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollToOptions, Window,
};

use super::{dom, frame};
use crate::error::GalaxyError;
use crate::page::{
    active_section, link_is_active, navbar_scrolled, parallax_transform, ContactForm, FormError,
    NotificationKind, StatCounter, Typewriter, HIDE_AFTER_MS, NAV_SCROLL_OFFSET, REMOVE_AFTER_MS,
    SHOW_AFTER_MS, SUCCESS_MESSAGE,
};

const LOADING_FADE_DELAY_MS: i32 = 2000;
const LOADING_REMOVE_DELAY_MS: i32 = 1000;
const TYPING_START_MS: i32 = 1000;
const TYPING_STEP_MS: i32 = 100;
const RIPPLE_SIZE: f64 = 60.0;
const RIPPLE_LIFETIME_MS: i32 = 600;
const CURSOR_HIDE_WIDTH: f64 = 768.0;

const CURSOR_TRAIL_CSS: &str = "position: fixed; width: 20px; height: 20px; border-radius: 50%; \
    background: radial-gradient(circle, rgba(100,255,218,0.8) 0%, rgba(100,255,218,0) 70%); \
    pointer-events: none; z-index: 9999; transition: transform 0.1s ease;";

const RIPPLE_CSS: &str = "position: fixed; border-radius: 50%; background: rgba(100, 255, 218, 0.3); \
    transform: scale(0); animation: ripple 0.6s linear; pointer-events: none; z-index: 9999;";

const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";

/// Wire every page behaviour. Stops at the first DOM call that throws.
pub fn install(window: &Window, document: &Document) -> Result<(), GalaxyError> {
    hide_loading_screen(document)?;
    reveal_on_scroll(document)?;
    navigation(window, document)?;
    navbar(window, document)?;
    typing(document)?;
    parallax(window, document)?;
    stat_counters(document)?;
    skill_hover(document)?;
    contact_form(document)?;
    cursor_trail(window, document)?;
    click_ripple(document)?;
    Ok(())
}

pub fn hide_loading_screen(document: &Document) -> Result<(), GalaxyError> {
    let Some(screen) = document.get_element_by_id("loading-screen").and_then(|e| dom::html(&e)) else {
        return Ok(());
    };
    dom::after(LOADING_FADE_DELAY_MS, move || {
        if screen.style().set_property("opacity", "0").is_err() {
            return;
        }
        let result = dom::after(LOADING_REMOVE_DELAY_MS, move || {
            screen.style().set_property("display", "none").ok();
        });
        if let Err(e) = result {
            log::warn!("loading screen left visible: {e}");
        }
    })
}

/// Tag the usual blocks with `fade-in`, then reveal every `fade-in` element,
/// including ones marked up by hand, as it enters the viewport.
pub fn reveal_on_scroll(document: &Document) -> Result<(), GalaxyError> {
    for el in dom::query_all(document, "section, .project-card, .skill-category, .stat") {
        el.class_list().add_1("fade-in")?;
    }
    let elements = dom::query_all(document, ".fade-in");
    observe(&elements, 0.1, Some("0px 0px -50px 0px"), |target, _| {
        target.class_list().add_1("visible").ok();
    })
}

/// Call `on_visible` for each element as it scrolls into view.
fn observe<F>(
    elements: &[Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: F,
) -> Result<(), GalaxyError>
where
    F: FnMut(Element, &IntersectionObserver) + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                on_visible(entry.target(), &observer);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for el in elements {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}

pub fn navigation(window: &Window, document: &Document) -> Result<(), GalaxyError> {
    let hamburger = dom::query(document, ".hamburger");
    let menu = dom::query(document, ".nav-menu");
    let links = dom::query_all(document, ".nav-link");

    if let (Some(toggle), Some(menu)) = (&hamburger, &menu) {
        let (button, menu) = (toggle.clone(), menu.clone());
        dom::on(toggle, "click", move |_| {
            button.class_list().toggle("active").ok();
            menu.class_list().toggle("active").ok();
        })?;
    }

    for link in &links {
        let (hamburger, menu) = (hamburger.clone(), menu.clone());
        let (win, doc, href) = (window.clone(), document.clone(), link.get_attribute("href"));
        dom::on(link, "click", move |event| {
            event.prevent_default();
            for el in hamburger.iter().chain(menu.iter()) {
                el.class_list().remove_1("active").ok();
            }
            let target = href
                .as_deref()
                .and_then(|sel| dom::query(&doc, sel))
                .and_then(|el| dom::html(&el));
            if let Some(section) = target {
                let options = ScrollToOptions::new();
                options.set_top(f64::from(section.offset_top()) - NAV_SCROLL_OFFSET);
                options.set_behavior(ScrollBehavior::Smooth);
                win.scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }

    let sections = dom::query_all(document, "section");
    let win = window.clone();
    dom::on(window, "scroll", move |_| {
        let tops: Vec<(String, f64)> = sections
            .iter()
            .map(|s| {
                let top = dom::html(s).map_or(0.0, |h| f64::from(h.offset_top()));
                (s.id(), top)
            })
            .collect();
        let tops: Vec<(&str, f64)> = tops.iter().map(|(id, top)| (id.as_str(), *top)).collect();
        let current = active_section(dom::scroll_y(&win), &tops);

        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            let classes = link.class_list();
            if link_is_active(&href, current) {
                classes.add_1("active").ok();
            } else {
                classes.remove_1("active").ok();
            }
        }
    })
}

fn navbar(window: &Window, document: &Document) -> Result<(), GalaxyError> {
    let Some(bar) = dom::query(document, ".navbar") else {
        return Ok(());
    };
    let win = window.clone();
    dom::on(window, "scroll", move |_| {
        let classes = bar.class_list();
        if navbar_scrolled(dom::scroll_y(&win)) {
            classes.add_1("scrolled").ok();
        } else {
            classes.remove_1("scrolled").ok();
        }
    })
}

fn typing(document: &Document) -> Result<(), GalaxyError> {
    let Some(hero) = dom::query(document, ".hero-name") else {
        return Ok(());
    };
    let text = hero.text_content().unwrap_or_default();
    hero.set_text_content(Some(""));
    let frames = Typewriter::new(text);
    dom::after(TYPING_START_MS, move || type_next(hero, frames))
}

fn type_next(hero: Element, mut frames: Typewriter) {
    let Some(frame) = frames.next() else {
        return;
    };
    hero.set_text_content(Some(&frame));
    if let Err(e) = dom::after(TYPING_STEP_MS, move || type_next(hero, frames)) {
        log::warn!("typing stopped: {e}");
    }
}

fn parallax(window: &Window, document: &Document) -> Result<(), GalaxyError> {
    let targets: Vec<HtmlElement> = dom::query_all(document, ".hero-content")
        .iter()
        .filter_map(dom::html)
        .collect();
    if targets.is_empty() {
        return Ok(());
    }
    let win = window.clone();
    dom::on(window, "scroll", move |_| {
        let transform = parallax_transform(dom::scroll_y(&win));
        for el in &targets {
            el.style().set_property("transform", &transform).ok();
        }
    })
}

fn stat_counters(document: &Document) -> Result<(), GalaxyError> {
    let stats = dom::query_all(document, ".stat-number");
    observe(&stats, 0.5, None, |target, observer| {
        observer.unobserve(&target);
        let text = target.text_content().unwrap_or_default();
        let Some(counter) = StatCounter::parse(&text) else {
            return;
        };
        if let Err(e) = animate_counter(target, counter) {
            log::warn!("stat counter not started: {e}");
        }
    })
}

/// Drive `counter` once per animation frame, writing each frame into `target`.
pub fn animate_counter(target: Element, mut counter: StatCounter) -> Result<(), GalaxyError> {
    frame::run_frames(move || {
        let frame = counter.step();
        target.set_text_content(Some(frame.text()));
        !frame.is_done()
    })
}

pub fn skill_hover(document: &Document) -> Result<(), GalaxyError> {
    let items: Vec<HtmlElement> = dom::query_all(document, ".skill-item")
        .iter()
        .filter_map(dom::html)
        .collect();

    for (index, item) in items.into_iter().enumerate() {
        item.style()
            .set_property("animation-delay", &format!("{:.1}s", index as f64 * 0.1))?;

        let hovered = item.clone();
        dom::on(&item, "mouseenter", move |_| {
            hovered
                .style()
                .set_property("transform", "translateY(-5px) scale(1.05)")
                .ok();
        })?;
        let left = item.clone();
        dom::on(&item, "mouseleave", move |_| {
            left.style().set_property("transform", "translateY(0) scale(1)").ok();
        })?;
    }
    Ok(())
}

fn contact_form(document: &Document) -> Result<(), GalaxyError> {
    let Some(form) = dom::query(document, ".contact-form")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let (doc, target) = (document.clone(), form.clone());
    dom::on(&form, "submit", move |event| {
        event.prevent_default();
        submit_contact(&doc, &target).ok();
    })
}

/// Validate the form, toast the outcome and clear the form on success.
pub fn submit_contact(document: &Document, form: &HtmlFormElement) -> Result<(), FormError> {
    let submission = read_form(form);
    let outcome = submission.validate();

    let toast = match &outcome {
        Ok(()) => {
            form.reset();
            show_notification(document, SUCCESS_MESSAGE, NotificationKind::Success)
        }
        Err(reason) => {
            log::debug!("contact form rejected: {reason}");
            show_notification(document, &reason.to_string(), NotificationKind::Error)
        }
    };
    if let Err(e) = toast {
        log::warn!("notification not shown: {e}");
    }
    outcome
}

pub fn read_form(form: &HtmlFormElement) -> ContactForm {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactForm::default();
    };
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    ContactForm::new(field("name"), field("email"), field("message"))
}

/// Slide a toast in from the right, then remove it a few seconds later.
pub fn show_notification(
    document: &Document,
    message: &str,
    kind: NotificationKind,
) -> Result<HtmlElement, GalaxyError> {
    let body = document
        .body()
        .ok_or_else(|| GalaxyError::ElementNotFound("body".into()))?;
    let toast = dom::create_html(document, "div")?;
    toast.set_class_name(&kind.class_name());
    toast.set_text_content(Some(message));
    dom::set_styles(
        &toast,
        &[
            ("position", "fixed"),
            ("top", "20px"),
            ("right", "20px"),
            ("padding", "15px 20px"),
            ("border-radius", "5px"),
            ("color", "#ffffff"),
            ("font-weight", "500"),
            ("z-index", "10000"),
            ("transform", "translateX(400px)"),
            ("transition", "transform 0.3s ease"),
            ("max-width", "300px"),
            ("word-wrap", "break-word"),
            ("background", kind.background()),
        ],
    )?;
    body.append_child(&toast)?;

    let shown = toast.clone();
    dom::after(SHOW_AFTER_MS, move || {
        shown.style().set_property("transform", "translateX(0)").ok();
    })?;
    let hidden = toast.clone();
    dom::after(HIDE_AFTER_MS, move || {
        hidden.style().set_property("transform", "translateX(400px)").ok();
        dom::after(REMOVE_AFTER_MS, move || hidden.remove()).ok();
    })?;
    Ok(toast)
}

pub fn cursor_trail(window: &Window, document: &Document) -> Result<(), GalaxyError> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    let cursor = dom::create_html(document, "div")?;
    cursor.set_class_name("cursor-trail");
    cursor.style().set_css_text(CURSOR_TRAIL_CSS);
    body.append_child(&cursor)?;

    let (width, _) = dom::viewport_size(window);
    if width <= CURSOR_HIDE_WIDTH {
        cursor.style().set_property("display", "none")?;
    }

    dom::on(document, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let style = cursor.style();
        style.set_property("left", &format!("{}px", event.client_x() - 10)).ok();
        style.set_property("top", &format!("{}px", event.client_y() - 10)).ok();
    })
}

pub fn click_ripple(document: &Document) -> Result<(), GalaxyError> {
    dom::inject_style(document, RIPPLE_KEYFRAMES)?;
    let doc = document.clone();
    dom::on(document, "click", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        if let Err(e) = spawn_ripple(&doc, event) {
            log::debug!("ripple skipped: {e}");
        }
    })
}

fn spawn_ripple(document: &Document, event: &MouseEvent) -> Result<(), GalaxyError> {
    let body = document
        .body()
        .ok_or_else(|| GalaxyError::ElementNotFound("body".into()))?;
    let ripple = dom::create_html(document, "div")?;
    ripple.style().set_css_text(RIPPLE_CSS);

    let half = RIPPLE_SIZE / 2.0;
    let size = format!("{RIPPLE_SIZE}px");
    let left = format!("{}px", f64::from(event.client_x()) - half);
    let top = format!("{}px", f64::from(event.client_y()) - half);
    dom::set_styles(
        &ripple,
        &[
            ("width", size.as_str()),
            ("height", size.as_str()),
            ("left", left.as_str()),
            ("top", top.as_str()),
        ],
    )?;
    body.append_child(&ripple)?;

    dom::after(RIPPLE_LIFETIME_MS, move || ripple.remove())
}
