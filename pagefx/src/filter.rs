//! Project card filtering and detail-panel expansion.
//!
//! Cards carry space-separated category tags. Filtering and expansion both
//! stage their CSS transitions: the embedder applies the immediate part of a
//! step now and schedules the deferred part after the step's delay. Delays
//! come from [`crate::consts`]; stale timers are the embedder's concern (it
//! re-checks the current state when they fire).

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use serde::Serialize;

use crate::consts::{
    CARD_HIDE_DELAY_MS, CARD_SETTLE_DELAY_MS, DETAILS_HIDE_DELAY_MS, DETAILS_SETTLE_DELAY_MS,
};

/// Filter key that matches every card.
pub const FILTER_ALL: &str = "all";

/// Whether a card with the given space-separated tags passes the filter.
#[must_use]
pub fn card_matches(filter: &str, categories: &str) -> bool {
    filter == FILTER_ALL || categories.split_whitespace().any(|tag| tag == filter)
}

/// One side of the staged card visibility transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStep {
    /// Enter layout immediately; settle opacity/transform after the delay.
    Reveal { settle_delay_ms: u32 },
    /// Fade immediately; leave layout after the delay.
    Conceal { hide_delay_ms: u32 },
}

/// The staged transition for a card that does or does not match the filter.
#[must_use]
pub fn card_step(matches: bool) -> FilterStep {
    if matches {
        FilterStep::Reveal { settle_delay_ms: CARD_SETTLE_DELAY_MS }
    } else {
        FilterStep::Conceal { hide_delay_ms: CARD_HIDE_DELAY_MS }
    }
}

/// Per-card detail panel, default collapsed. Independent of every other card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Expansion {
    pub expanded: bool,
}

impl Expansion {
    /// Flip the panel and return the staged transition to apply.
    pub fn toggle(&mut self) -> FilterStep {
        self.expanded = !self.expanded;
        if self.expanded {
            FilterStep::Reveal { settle_delay_ms: DETAILS_SETTLE_DELAY_MS }
        } else {
            FilterStep::Conceal { hide_delay_ms: DETAILS_HIDE_DELAY_MS }
        }
    }

    /// Label for the expand button in the current state.
    #[must_use]
    pub fn button_label(self) -> &'static str {
        if self.expanded { "Show Less" } else { "Learn More" }
    }
}
