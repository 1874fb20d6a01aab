//! Back-to-top button.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Floating button that appears past the scroll threshold and smooth-scrolls
/// back to the top of the page.
#[component]
pub fn BackToTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        #[cfg(feature = "csr")]
        crate::util::dom::scroll_to_y(0.0);
    };

    view! {
        <button
            id="back-to-top"
            class="back-to-top"
            class:show=move || ui.get().back_to_top_visible
            aria-label="Back to top"
            on:click=on_click
        >
            "\u{2191}"
        </button>
    }
}
