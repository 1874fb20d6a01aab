//! Active-section tracking and scroll-position predicates.
//!
//! The site has a fixed, ordered list of sections. The active one is the
//! last section in document order whose top offset has scrolled under the
//! lookahead margin; at the top of the page that is the first section by
//! construction. [`ScrollSpy`] wraps the computation and reports only
//! changes so callers touch the DOM once per actual transition.

#[cfg(test)]
#[path = "scrollspy_test.rs"]
mod scrollspy_test;

use crate::consts::{BACK_TO_TOP_PX, NAVBAR_SCROLLED_PX, SECTION_LOOKAHEAD_PX};

/// Section ids in document order. Each corresponds to one page anchor and
/// one nav link.
pub const SECTION_IDS: [&str; 6] = ["hero", "about", "skills", "projects", "education", "contact"];

/// Index of the active section for the given per-section top offsets and
/// scroll position.
///
/// Scans in reverse document order and returns the first section whose
/// offset is within `scroll_y` plus the lookahead margin, i.e. the last
/// matching section in forward order. Returns 0 when nothing matches.
#[must_use]
pub fn active_index(offsets: &[f64], scroll_y: f64) -> usize {
    let threshold = scroll_y + SECTION_LOOKAHEAD_PX;
    offsets
        .iter()
        .rposition(|&top| top <= threshold)
        .unwrap_or(0)
}

/// Whether the navbar should take its compact "scrolled" style.
#[must_use]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_PX
}

/// Whether the back-to-top button should be visible.
#[must_use]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_PX
}

/// Change-tracking wrapper around [`active_index`].
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    active: usize,
}

impl ScrollSpy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The index of the currently active section.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Recompute the active section; returns the new index only if it
    /// differs from the stored one. Calling again with the same inputs
    /// yields `None`.
    pub fn update(&mut self, offsets: &[f64], scroll_y: f64) -> Option<usize> {
        let next = active_index(offsets, scroll_y);
        if next == self.active {
            None
        } else {
            self.active = next;
            Some(next)
        }
    }
}
