#![cfg(target_arch = "wasm32")]

use galaxy_portfolio::page::{FormError, NotificationKind};
use galaxy_portfolio::wasm::{self, dom, fallback, page};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Event, HtmlCanvasElement, HtmlElement, HtmlFormElement, HtmlInputElement, MouseEvent,
    MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn attach(html: &str) -> web_sys::HtmlElement {
    let doc = document();
    let host = dom::create_html(&doc, "div").unwrap();
    host.set_inner_html(html);
    doc.body().unwrap().append_child(&host).unwrap();
    host
}

fn by_class(host: &HtmlElement, class: &str) -> HtmlElement {
    host.query_selector(&format!(".{class}"))
        .unwrap()
        .unwrap()
        .unchecked_into()
}

fn by_id(host: &HtmlElement, id: &str) -> HtmlElement {
    host.query_selector(&format!("#{id}"))
        .unwrap()
        .unwrap()
        .unchecked_into()
}

fn head_styles() -> String {
    dom::query_all(&document(), "head style")
        .iter()
        .filter_map(|s| s.text_content())
        .collect()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn mouse_event(kind: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    init.set_bubbles(true);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

#[wasm_bindgen_test]
fn fallback_activates_without_webgl2() {
    let doc = document();
    let canvas: HtmlCanvasElement = doc.create_element("canvas").unwrap().unchecked_into();
    doc.body().unwrap().append_child(&canvas).unwrap();

    // A canvas already bound to a 2D context cannot hand out a WebGL2 one.
    canvas.get_context("2d").unwrap().unwrap();

    let running = wasm::boot_or_fall_back(&doc, &canvas).unwrap();
    assert!(!running);
    assert!(fallback::is_active(&doc));
    assert_eq!(canvas.style().get_property_value("display").unwrap(), "none");

    // idempotent
    fallback::activate(&doc, Some(&canvas)).unwrap();
    assert!(fallback::is_active(&doc));
    assert!(head_styles().contains("@keyframes galaxy-fallback-shift"));
}

#[wasm_bindgen_test]
fn later_fallback_still_hides_its_canvas() {
    let doc = document();
    fallback::activate(&doc, None).unwrap();
    assert!(fallback::is_active(&doc));

    let canvas: HtmlCanvasElement = doc.create_element("canvas").unwrap().unchecked_into();
    doc.body().unwrap().append_child(&canvas).unwrap();
    fallback::activate(&doc, Some(&canvas)).unwrap();
    assert_eq!(canvas.style().get_property_value("display").unwrap(), "none");
    canvas.remove();
}

#[wasm_bindgen_test(async)]
async fn reveal_tags_blocks_and_shows_hand_marked_elements() {
    let host = attach(
        r#"<section class="reveal-section">tagged</section>
           <div class="stat reveal-stat">tagged</div>
           <p class="fade-in reveal-manual">marked in markup</p>"#,
    );
    dom::set_styles(&host, &[("position", "fixed"), ("top", "0"), ("left", "0")]).unwrap();

    page::reveal_on_scroll(&document()).unwrap();
    let section = by_class(&host, "reveal-section");
    let stat = by_class(&host, "reveal-stat");
    let manual = by_class(&host, "reveal-manual");
    assert!(section.class_list().contains("fade-in"));
    assert!(stat.class_list().contains("fade-in"));

    sleep(200).await;
    for el in [&section, &stat, &manual] {
        assert!(el.class_list().contains("visible"), "{} not revealed", el.class_name());
    }
    host.remove();
}

#[wasm_bindgen_test]
fn hamburger_toggles_and_link_closes_menu() {
    let host = attach(
        r##"<div class="hamburger"></div>
           <ul class="nav-menu"><li><a class="nav-link" href="#no-such-section">Go</a></li></ul>"##,
    );
    let window = web_sys::window().unwrap();
    page::navigation(&window, &document()).unwrap();

    let toggle = by_class(&host, "hamburger");
    let menu = by_class(&host, "nav-menu");
    toggle.click();
    assert!(toggle.class_list().contains("active"));
    assert!(menu.class_list().contains("active"));
    toggle.click();
    assert!(!toggle.class_list().contains("active"));
    assert!(!menu.class_list().contains("active"));

    toggle.click();
    by_class(&host, "nav-link").click();
    assert!(!toggle.class_list().contains("active"));
    assert!(!menu.class_list().contains("active"));
    host.remove();
}

#[wasm_bindgen_test]
fn skill_items_stagger_and_lift_on_hover() {
    let host = attach(
        r#"<div class="skill-item skill-a">Rust</div><div class="skill-item skill-b">WebGL</div>"#,
    );
    page::skill_hover(&document()).unwrap();

    let first = by_class(&host, "skill-a");
    let second = by_class(&host, "skill-b");
    assert!(!first.style().get_property_value("animation-delay").unwrap().is_empty());
    assert_eq!(second.style().get_property_value("animation-delay").unwrap(), "0.1s");

    second.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    let lifted = second.style().get_property_value("transform").unwrap();
    assert!(lifted.contains("-5px") && lifted.contains("scale(1.05)"), "{lifted}");

    second.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    let rested = second.style().get_property_value("transform").unwrap();
    assert!(rested.contains("scale(1)") && !rested.contains("1.05"), "{rested}");
    host.remove();
}

#[wasm_bindgen_test]
fn cursor_trail_follows_pointer_and_hides_on_narrow_screens() {
    let doc = document();
    let window = web_sys::window().unwrap();
    page::cursor_trail(&window, &doc).unwrap();

    let trail: HtmlElement = dom::query_all(&doc, ".cursor-trail")
        .pop()
        .unwrap()
        .unchecked_into();
    let (width, _) = dom::viewport_size(&window);
    let display = trail.style().get_property_value("display").unwrap();
    assert_eq!(display == "none", width <= 768.0);

    doc.dispatch_event(&mouse_event("mousemove", 50, 60)).unwrap();
    assert_eq!(trail.style().get_property_value("left").unwrap(), "40px");
    assert_eq!(trail.style().get_property_value("top").unwrap(), "50px");
    trail.remove();
}

#[wasm_bindgen_test]
fn click_spawns_ripple_with_injected_keyframes() {
    let doc = document();
    page::click_ripple(&doc).unwrap();
    assert!(head_styles().contains("@keyframes ripple"));

    doc.dispatch_event(&mouse_event("click", 100, 100)).unwrap();
    let ripples: Vec<HtmlElement> = dom::query_all(&doc, "body > div")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .filter(|el| el.style().get_property_value("animation").unwrap_or_default().contains("ripple"))
        .collect();
    let ripple = ripples.last().unwrap();
    assert_eq!(ripple.style().get_property_value("left").unwrap(), "70px");
    assert_eq!(ripple.style().get_property_value("width").unwrap(), "60px");
}

#[wasm_bindgen_test(async)]
async fn loading_screen_fades_then_hides() {
    let host = attach(r#"<div id="loading-screen"></div>"#);
    page::hide_loading_screen(&document()).unwrap();
    let screen = by_id(&host, "loading-screen");
    assert!(screen.style().get_property_value("opacity").unwrap().is_empty());

    sleep(2200).await;
    assert_eq!(screen.style().get_property_value("opacity").unwrap(), "0");
    sleep(1100).await;
    assert_eq!(screen.style().get_property_value("display").unwrap(), "none");
    host.remove();
}

#[wasm_bindgen_test]
fn contact_form_rejects_missing_fields() {
    let host = attach(
        r#"<form class="test-form">
            <input name="name" value="Ada">
            <input name="email" value="ada@example.com">
            <textarea name="message"></textarea>
        </form>"#,
    );
    let form: HtmlFormElement = host
        .query_selector(".test-form")
        .unwrap()
        .unwrap()
        .unchecked_into();

    let outcome = page::submit_contact(&document(), &form);
    assert_eq!(outcome, Err(FormError::MissingField));

    let toasts = dom::query_all(&document(), ".notification-error");
    assert!(!toasts.is_empty());
    assert!(dom::query_all(&document(), ".notification-success").is_empty());
    host.remove();
}

#[wasm_bindgen_test]
fn contact_form_rejects_bad_email_and_keeps_input() {
    let host = attach(
        r#"<form class="test-form">
            <input name="name" value="Ada">
            <input name="email" value="ada@example">
            <textarea name="message">hi</textarea>
        </form>"#,
    );
    let form: HtmlFormElement = host
        .query_selector(".test-form")
        .unwrap()
        .unwrap()
        .unchecked_into();

    assert_eq!(page::submit_contact(&document(), &form), Err(FormError::InvalidEmail));
    let email: HtmlInputElement = host
        .query_selector("input[name=email]")
        .unwrap()
        .unwrap()
        .unchecked_into();
    assert_eq!(email.value(), "ada@example");
    host.remove();
}

#[wasm_bindgen_test]
fn notification_is_attached_with_kind_class() {
    let toast =
        page::show_notification(&document(), "hello", NotificationKind::Info).unwrap();
    assert_eq!(toast.class_name(), "notification notification-info");
    assert_eq!(toast.text_content().as_deref(), Some("hello"));
    assert!(toast.is_connected());
    assert_eq!(toast.style().get_property_value("position").unwrap(), "fixed");
}
