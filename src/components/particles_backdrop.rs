//! Ambient particle backdrop.
//!
//! The motion model lives in [`pagefx::particles`]; this component owns the
//! container element, creates one absolutely-positioned `div.particle` per
//! particle, and drives the field from the animation-frame clock. The loop
//! starts exactly once, from an effect watching the shared `loaded` flag,
//! and then self-reschedules for the page's lifetime. If the container is
//! missing everything degrades to a no-op.

use leptos::prelude::*;

/// Decorative drifting particles behind the hero section.
#[component]
pub fn ParticlesBackdrop() -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use pagefx::consts::RESIZE_THROTTLE_MS;
        use pagefx::particles::ParticleField;

        use crate::state::ui::UiState;
        use crate::util::{dom, raf, throttle};

        let ui = expect_context::<RwSignal<UiState>>();
        let field: Rc<RefCell<ParticleField<Option<web_sys::HtmlElement>>>> =
            Rc::new(RefCell::new(ParticleField::new()));

        // Populate once the container is mounted.
        {
            let field = Rc::clone(&field);
            Effect::new(move || {
                if let Some(el) = container.get() {
                    regenerate(&field, &el);
                }
            });
        }

        // Start the frame loop on the readiness signal, exactly once.
        {
            let field = Rc::clone(&field);
            let started = StoredValue::new(false);
            Effect::new(move || {
                if ui.get().loaded && !started.get_value() {
                    started.set_value(true);
                    let field = Rc::clone(&field);
                    raf::start_loop(move || {
                        field.borrow_mut().step(|handle, x, y| {
                            if let Some(el) = handle {
                                let style = el.style();
                                let _ = style.set_property("left", &format!("{x}px"));
                                let _ = style.set_property("top", &format!("{y}px"));
                            }
                        });
                    });
                }
            });
        }

        // A resized viewport gets a freshly sampled field, not a stretched one.
        {
            let field = Rc::clone(&field);
            let on_resize = throttle::trailing(RESIZE_THROTTLE_MS, move |(): ()| {
                if let Some(el) = container.get_untracked() {
                    regenerate(&field, &el);
                }
            });
            dom::on_window_event("resize", move |_| on_resize(()));
        }
    }

    view! { <div id="particles" class="particles" node_ref=container></div> }
}

/// Clear the container and sample a fresh batch sized to the viewport.
#[cfg(feature = "csr")]
fn regenerate(
    field: &std::rc::Rc<
        std::cell::RefCell<pagefx::particles::ParticleField<Option<web_sys::HtmlElement>>>,
    >,
    container: &web_sys::HtmlElement,
) {
    use wasm_bindgen::JsCast;

    use crate::util::dom;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    container.set_inner_html("");

    let width = dom::viewport_width();
    let height = dom::viewport_height();
    let mut rng = || js_sys::Math::random();

    field.borrow_mut().regenerate(width, height, &mut rng, |size, x, y| {
        let el = doc
            .create_element("div")
            .ok()
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(el) = &el {
            el.set_class_name("particle");
            let style = el.style();
            let _ = style.set_property("width", &format!("{size}px"));
            let _ = style.set_property("height", &format!("{size}px"));
            let _ = style.set_property("left", &format!("{x}px"));
            let _ = style.set_property("top", &format!("{y}px"));
            let delay = js_sys::Math::random() * 6.0;
            let _ = style.set_property("animation-delay", &format!("{delay}s"));
            let _ = container.append_child(el);
        }
        el
    });
}
