//! Hero section with the typewriter heading and particle backdrop.

use leptos::prelude::*;

use crate::components::particles_backdrop::ParticlesBackdrop;

#[cfg(feature = "csr")]
const HERO_TEXT: &str = "Hi! I'm Kostiantyn";

/// Landing section. The heading types itself out one character at a time,
/// starting after a short pause, via a self-rescheduling timeout chain.
#[component]
pub fn Hero() -> impl IntoView {
    let typed = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        use gloo_timers::callback::Timeout;
        use pagefx::consts::TYPE_START_DELAY_MS;

        Timeout::new(TYPE_START_DELAY_MS, move || type_next(typed, 0)).forget();
    }

    view! {
        <section id="hero" class="hero">
            <ParticlesBackdrop/>
            <div class="hero-content">
                <h1 class="hero-title">
                    <span id="typewriter">{move || typed.get()}</span>
                    <span class="typewriter-cursor">"|"</span>
                </h1>
                <p class="hero-subtitle">
                    "Software engineer crafting fast, reliable web experiences."
                </p>
                <a href="#projects" class="btn btn-primary hero-cta">"View My Work"</a>
            </div>
        </section>
    }
}

#[cfg(feature = "csr")]
fn type_next(typed: RwSignal<String>, index: usize) {
    use gloo_timers::callback::Timeout;
    use pagefx::consts::TYPE_SPEED_MS;

    let Some(c) = HERO_TEXT.chars().nth(index) else {
        return;
    };
    typed.update(|t| t.push(c));
    Timeout::new(TYPE_SPEED_MS, move || type_next(typed, index + 1)).forget();
}
