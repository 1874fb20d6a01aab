//! Scroll-reveal animations via `IntersectionObserver`.
//!
//! Section headings, cards, and contact items get an entrance animation the
//! first time they scroll into view. Each element is observed once, tagged
//! `animated` on intersection, and immediately unobserved. The observer and
//! its callback live for the page lifetime.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REVEAL_SELECTOR: &str =
    ".section-title, .about-content, .skill-category, .project-card, .education-card, .contact-item";

/// Entrance direction classes, assigned round-robin across observed elements.
const DIRECTION_CLASSES: [&str; 3] = ["animate-fade-up", "animate-fade-left", "animate-fade-right"];

/// Observe all revealable elements currently in the document.
pub fn observe_reveals() {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("animated");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    let Ok(nodes) = doc.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let _ = el.class_list().add_1("animate-on-scroll");
        let _ = el.class_list().add_1(DIRECTION_CLASSES[i as usize % DIRECTION_CLASSES.len()]);
        observer.observe(&el);
    }
}
