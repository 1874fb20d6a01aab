//! Projects section: category filter bar and expandable project cards.
//!
//! Filtering and expansion use the staged transitions from
//! [`pagefx::filter`]: the immediate half of each step applies synchronously
//! and the deferred half runs on a timeout that re-checks state when it
//! fires, so a quickly reversed choice never leaves a card half-hidden.

use leptos::prelude::*;

use pagefx::filter::Expansion;

use crate::state::ui::UiState;

struct Project {
    title: &'static str,
    /// Space-separated category tags, mirrored into `data-category`.
    categories: &'static str,
    summary: &'static str,
    details: &'static str,
}

static PROJECTS: [Project; 4] = [
    Project {
        title: "Star Chart",
        categories: "web",
        summary: "Interactive sky map rendered entirely client-side.",
        details: "Canvas-based star field with constellation overlays, catalog \
                  search, and a time slider for precession. Ships as a static \
                  bundle with no backend.",
    },
    Project {
        title: "Ledgerline",
        categories: "web api",
        summary: "Personal finance dashboard over a small JSON API.",
        details: "Imports bank exports, categorizes transactions with \
                  user-defined rules, and charts monthly trends. The API layer \
                  is a thin typed wrapper the dashboard shares with a CLI.",
    },
    Project {
        title: "hauler",
        categories: "cli",
        summary: "Parallel file-sync tool for flaky connections.",
        details: "Resumable chunked transfers with integrity checks and a \
                  progress TUI. Retries are budgeted per file so one bad host \
                  cannot stall a batch.",
    },
    Project {
        title: "pollen",
        categories: "api cli",
        summary: "Webhook fan-out service with a management CLI.",
        details: "Receives provider webhooks, verifies signatures, and fans \
                  events out to subscribers with per-endpoint backoff. The CLI \
                  inspects delivery history and replays failures.",
    },
];

const FILTERS: [(&str, &str); 4] =
    [("all", "All"), ("web", "Web"), ("api", "APIs"), ("cli", "CLI")];

/// The filterable project grid.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let buttons = FILTERS
        .iter()
        .map(|&(key, label)| {
            view! {
                <button
                    class="filter-btn"
                    class:active=move || ui.get().filter == key
                    data-filter=key
                    on:click=move |_| ui.update(|u| u.filter = key.to_owned())
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let cards = PROJECTS.iter().map(|p| view! { <ProjectCard project=p/> }).collect::<Vec<_>>();

    view! {
        <section id="projects" class="section">
            <h2 class="section-title">"Projects"</h2>
            <div class="project-filters">{buttons}</div>
            <div class="project-grid">{cards}</div>
        </section>
    }
}

/// One project card with its collapsible detail panel.
#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Filter transition state: in layout, and settled at full opacity.
    let shown = RwSignal::new(true);
    let settled = RwSignal::new(true);

    // Detail panel state, independent per card.
    let expansion = RwSignal::new(Expansion::default());
    let details_shown = RwSignal::new(false);
    let details_settled = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        use gloo_timers::callback::Timeout;
        use pagefx::filter::{FilterStep, card_matches, card_step};

        let categories = project.categories;
        Effect::new(move || {
            let matches = ui.with(|u| card_matches(&u.filter, categories));
            match card_step(matches) {
                FilterStep::Reveal { settle_delay_ms } => {
                    shown.set(true);
                    Timeout::new(settle_delay_ms, move || {
                        // Only settle if the card still passes the filter.
                        if ui.with_untracked(|u| card_matches(&u.filter, categories)) {
                            settled.set(true);
                        }
                    })
                    .forget();
                }
                FilterStep::Conceal { hide_delay_ms } => {
                    settled.set(false);
                    Timeout::new(hide_delay_ms, move || {
                        if !ui.with_untracked(|u| card_matches(&u.filter, categories)) {
                            shown.set(false);
                        }
                    })
                    .forget();
                }
            }
        });
    }

    let on_expand = move |_| {
        let step = {
            let mut state = expansion.get_untracked();
            let step = state.toggle();
            expansion.set(state);
            step
        };
        #[cfg(feature = "csr")]
        {
            use gloo_timers::callback::Timeout;
            use pagefx::filter::FilterStep;

            match step {
                FilterStep::Reveal { settle_delay_ms } => {
                    details_shown.set(true);
                    Timeout::new(settle_delay_ms, move || {
                        if expansion.get_untracked().expanded {
                            details_settled.set(true);
                        }
                    })
                    .forget();
                }
                FilterStep::Conceal { hide_delay_ms } => {
                    details_settled.set(false);
                    Timeout::new(hide_delay_ms, move || {
                        if !expansion.get_untracked().expanded {
                            details_shown.set(false);
                        }
                    })
                    .forget();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = step;
        }
    };

    view! {
        <article
            class="project-card"
            data-category=project.categories
            style:display=move || if shown.get() { "block" } else { "none" }
            style:opacity=move || if settled.get() { "1" } else { "0" }
            style:transform=move || {
                if settled.get() { "translateY(0)" } else { "translateY(20px)" }
            }
        >
            <h3 class="project-title">{project.title}</h3>
            <p class="project-summary">{project.summary}</p>
            <div
                class="project-details"
                style:display=move || if details_shown.get() { "block" } else { "none" }
                style:opacity=move || if details_settled.get() { "1" } else { "0" }
                style:transform=move || {
                    if details_settled.get() { "translateY(0)" } else { "translateY(-10px)" }
                }
            >
                <p>{project.details}</p>
            </div>
            <button class="expand-btn" on:click=on_expand>
                {move || expansion.get().button_label()}
            </button>
        </article>
    }
}
