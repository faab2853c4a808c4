//! Page behaviour that does not need a DOM: form rules, counter stepping,
//! typewriter frames, nav highlighting and toast styling. The browser
//! wiring lives in `wasm::page`.

mod counter;
mod form;
mod nav;
mod notification;
mod typewriter;

pub use counter::{parse_leading_int, CounterFrame, StatCounter, COUNTER_DURATION_MS, FRAME_MS};
pub use form::{is_valid_email, ContactForm, FormError, SUCCESS_MESSAGE};
pub use nav::{
    active_section, link_is_active, navbar_scrolled, parallax_transform, NAVBAR_SCROLL_THRESHOLD,
    NAV_SCROLL_OFFSET, SECTION_ACTIVATION_OFFSET,
};
pub use notification::{NotificationKind, HIDE_AFTER_MS, REMOVE_AFTER_MS, SHOW_AFTER_MS};
pub use typewriter::Typewriter;
