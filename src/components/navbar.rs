//! Fixed navbar: logo, section links, theme toggle, and the mobile menu.

use leptos::prelude::*;

use pagefx::scrollspy::SECTION_IDS;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Display labels matching [`SECTION_IDS`] by index.
const NAV_LABELS: [&str; 6] = ["Home", "About", "Skills", "Projects", "Education", "Contact"];

/// Top navigation bar.
///
/// The link matching the active section carries the `active` class; the
/// hamburger button and menu panel carry it while the menu is open. Link
/// clicks smooth-scroll to their section, mark it active immediately, and
/// close an open mobile menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = move || ui.get().menu.open;

    let on_toggle = move |_| {
        #[cfg(feature = "csr")]
        crate::app::apply_menu_event(ui, pagefx::menu::MenuEvent::ToggleClick);
    };

    let on_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let links = SECTION_IDS
        .iter()
        .enumerate()
        .map(|(index, &id)| {
            let on_link = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                #[cfg(feature = "csr")]
                {
                    crate::util::dom::scroll_to_section(id);
                    crate::app::apply_menu_event(ui, pagefx::menu::MenuEvent::LinkClick);
                }
                ui.update(|u| u.active_section = index);
            };
            view! {
                <li class="nav-item">
                    <a
                        class="nav-link"
                        class:active=move || ui.get().active_section == index
                        href=format!("#{id}")
                        on:click=on_link
                    >
                        {NAV_LABELS[index]}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || ui.get().navbar_scrolled>
            <div class="nav-container">
                <a href="#hero" class="nav-logo">"K.O."</a>
                <ul id="nav-menu" class="nav-menu" class:active=menu_open>
                    {links}
                </ul>
                <button
                    id="theme-toggle"
                    class="theme-toggle"
                    aria-pressed="false"
                    title="Toggle color theme"
                    on:click=on_theme
                >
                    {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
                </button>
                <button
                    id="mobile-menu-toggle"
                    class="menu-toggle"
                    class:active=menu_open
                    aria-label="Toggle navigation menu"
                    on:click=on_toggle
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
