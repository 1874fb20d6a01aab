//! Self-rescheduling animation-frame loop.
//!
//! Standard wasm-bindgen pattern: the closure holds an `Rc` to itself so it
//! can request the next frame. The loop is started exactly once, from the
//! readiness effect in the particles backdrop, and then runs for the page's
//! lifetime; there is no cancellation path.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Run `tick` once per animation frame, forever.
pub fn start_loop(mut tick: impl FnMut() + 'static) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let inner = Rc::clone(&holder);

    *holder.borrow_mut() = Some(Closure::new(move || {
        tick();
        if let Some(callback) = inner.borrow().as_ref() {
            request_frame(callback);
        }
    }));

    if let Some(callback) = holder.borrow().as_ref() {
        request_frame(callback);
    }
}
