//! Presence-checked DOM helpers.
//!
//! Every lookup returns an `Option` or silently no-ops when the node (or the
//! window itself) is missing; decorative failure must never break
//! navigation. Required structural markup is rendered by our own components,
//! so those call sites may assume presence.

use pagefx::consts::NAV_SCROLL_OFFSET_PX;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Attach a listener to the window for the page's lifetime.
///
/// The original site never removes its window listeners, so the closure is
/// intentionally leaked.
pub fn on_window_event(event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Current vertical scroll offset, 0.0 without a window.
#[must_use]
pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Viewport width in CSS pixels, 0.0 without a window.
#[must_use]
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Viewport height in CSS pixels, 0.0 without a window.
#[must_use]
pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Distance from the document top to the element with the given id.
#[must_use]
pub fn offset_top(id: &str) -> Option<f64> {
    let el = web_sys::window()?.document()?.get_element_by_id(id)?;
    let el = el.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(el.offset_top()))
}

/// Smooth-scroll the window to a vertical offset.
pub fn scroll_to_y(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll to a section anchor, stopping below the fixed navbar.
pub fn scroll_to_section(id: &str) {
    if let Some(top) = offset_top(id) {
        scroll_to_y(top - NAV_SCROLL_OFFSET_PX);
    }
}

/// Lock or unlock body scrolling (used while the mobile menu is open).
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// Whether the event target sits inside the element with the given id.
///
/// Used for outside-click detection; a missing element counts as "outside".
#[must_use]
pub fn event_inside(target: Option<&web_sys::EventTarget>, id: &str) -> bool {
    let Some(node) = target.and_then(|t| t.dyn_ref::<web_sys::Node>()) else {
        return false;
    };
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some_and(|el| el.contains(Some(node)))
}
