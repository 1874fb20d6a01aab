//! Startup loader overlay.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Full-screen overlay shown while the page settles.
///
/// After a fixed hold it fades out and flips the shared `loaded` flag, the
/// explicit start signal the particle loop waits on. The node leaves layout
/// once the fade finishes.
#[component]
pub fn Loader() -> impl IntoView {
    let fading = RwSignal::new(false);
    let gone = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        use gloo_timers::callback::Timeout;
        use pagefx::consts::{LOADER_FADE_MS, LOADER_HOLD_MS};

        let ui = expect_context::<RwSignal<UiState>>();
        Timeout::new(LOADER_HOLD_MS, move || {
            fading.set(true);
            ui.update(|u| u.loaded = true);
            Timeout::new(LOADER_FADE_MS, move || gone.set(true)).forget();
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = expect_context::<RwSignal<UiState>>();
    }

    view! {
        <div
            id="loader"
            class="loader"
            class:fade-out=move || fading.get()
            style:display=move || if gone.get() { "none" } else { "flex" }
        >
            <div class="loader-spinner"></div>
        </div>
    }
}
