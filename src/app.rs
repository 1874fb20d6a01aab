//! Root application component: shared state, window listeners, page layout.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::back_to_top::BackToTop;
use crate::components::hero::Hero;
use crate::components::loader::Loader;
use crate::components::navbar::Navbar;
use crate::components::projects::ProjectsSection;
use crate::components::sections::{AboutSection, ContactSection, EducationSection, SkillsSection};
use crate::state::ui::UiState;

/// Root component.
///
/// Owns the single [`UiState`] signal (provided via context, never a global)
/// and registers the window-level listeners: throttled scroll and resize,
/// outside clicks, and Escape.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    #[cfg(feature = "csr")]
    wire_window_events(ui);

    view! {
        <Title text="Kostiantyn — Portfolio"/>

        <Loader/>
        <Navbar/>
        <main>
            <Hero/>
            <AboutSection/>
            <SkillsSection/>
            <ProjectsSection/>
            <EducationSection/>
            <ContactSection/>
        </main>
        <BackToTop/>
    }
}

/// Route a menu event through the state machine and apply its side effects.
///
/// The machine reports `Some(entered_state)` only on a real transition, so
/// the body scroll lock and the open classes (bound reactively in the
/// navbar) flip exactly once per change.
#[cfg(feature = "csr")]
pub(crate) fn apply_menu_event(ui: RwSignal<UiState>, event: pagefx::menu::MenuEvent) {
    let mut menu = ui.get_untracked().menu;
    if let Some(open) = menu.apply(event) {
        ui.update(|u| u.menu = menu);
        crate::util::dom::set_body_scroll_locked(open);
    }
}

#[cfg(feature = "csr")]
fn wire_window_events(ui: RwSignal<UiState>) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pagefx::consts::{RESIZE_THROTTLE_MS, SCROLL_THROTTLE_MS};
    use pagefx::menu::MenuEvent;
    use pagefx::scrollspy::{self, SECTION_IDS, ScrollSpy};

    use crate::util::{dark_mode, dom, reveal, throttle};

    // Scroll: navbar style, back-to-top visibility, then active section.
    // One synchronous state update per throttled tick, and none at all when
    // nothing changed.
    let spy = Rc::new(RefCell::new(ScrollSpy::new()));
    let on_scroll = throttle::trailing(SCROLL_THROTTLE_MS, move |(): ()| {
        let y = dom::scroll_y();
        let scrolled = scrollspy::navbar_scrolled(y);
        let show_top = scrollspy::back_to_top_visible(y);

        let offsets: Vec<f64> = SECTION_IDS
            .iter()
            .map(|id| dom::offset_top(id).unwrap_or(f64::INFINITY))
            .collect();
        let section_change = spy.borrow_mut().update(&offsets, y);

        let current = ui.get_untracked();
        if current.navbar_scrolled != scrolled
            || current.back_to_top_visible != show_top
            || section_change.is_some()
        {
            ui.update(|u| {
                u.navbar_scrolled = scrolled;
                u.back_to_top_visible = show_top;
                if let Some(index) = section_change {
                    u.active_section = index;
                }
            });
        }
    });
    dom::on_window_event("scroll", move |_| on_scroll(()));

    // Resize: an open mobile menu closes at desktop widths. The particle
    // backdrop registers its own resize listener.
    let on_resize = throttle::trailing(RESIZE_THROTTLE_MS, move |(): ()| {
        apply_menu_event(ui, MenuEvent::Resized { viewport_width: dom::viewport_width() });
    });
    dom::on_window_event("resize", move |_| on_resize(()));

    // Clicks outside both the menu panel and its toggle close the menu.
    dom::on_window_event("click", move |ev| {
        if !ui.get_untracked().menu.open {
            return;
        }
        let target = ev.target();
        if dom::event_inside(target.as_ref(), "nav-menu")
            || dom::event_inside(target.as_ref(), "mobile-menu-toggle")
        {
            return;
        }
        apply_menu_event(ui, MenuEvent::OutsideClick);
    });

    dom::on_window_event("keydown", move |ev| {
        use wasm_bindgen::JsCast;
        if let Some(key_event) = ev.dyn_ref::<web_sys::KeyboardEvent>() {
            if key_event.key() == "Escape" {
                apply_menu_event(ui, MenuEvent::EscapeKey);
            }
        }
    });

    // Post-mount: stored theme and scroll-reveal observation.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        reveal::observe_reveals();
    });

    // Debug snapshot of every state change.
    Effect::new(move || {
        let snapshot = ui.get();
        if let Ok(json) = serde_json::to_string(&snapshot) {
            log::debug!("ui state: {json}");
        }
    });
}
