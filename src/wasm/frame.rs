use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};

use super::dom;
use crate::error::GalaxyError;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Call `step` once per animation frame until it returns `false`.
///
/// The closure re-registers itself through `slot`, which it also owns; the
/// cycle keeps it alive without a handle. A finished loop just stops asking
/// for frames.
pub fn run_frames<F>(mut step: F) -> Result<(), GalaxyError>
where
    F: FnMut() -> bool + 'static,
{
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let inner = slot.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !step() {
            return;
        }
        if let Err(e) = request_frame(&inner) {
            log::error!("animation frame not scheduled: {e}");
        }
    }) as Box<dyn FnMut()>));

    request_frame(&slot)
}

fn request_frame(slot: &FrameSlot) -> Result<(), GalaxyError> {
    let window = dom::window()?;
    if let Some(callback) = slot.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
