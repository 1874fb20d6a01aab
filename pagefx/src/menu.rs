//! Mobile menu state machine.
//!
//! Two states, `closed` and `open`. The toggle button always flips; every
//! other event only forces the menu closed, and only when it is open. The
//! machine returns the state actually entered so the caller applies the
//! visual effects (open classes, body scroll lock) exactly once per real
//! transition and never double-toggles.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use serde::Serialize;

use crate::consts::MOBILE_BREAKPOINT_PX;

/// Events that can move the menu between `closed` and `open`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// The hamburger button was clicked; always flips the state.
    ToggleClick,
    /// A nav link was activated; closes an open menu.
    LinkClick,
    /// A click landed outside both the menu panel and the toggle button.
    OutsideClick,
    /// Escape was pressed; closes an open menu.
    EscapeKey,
    /// The viewport was resized; closes an open menu on desktop widths.
    Resized { viewport_width: f64 },
}

/// Current menu state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Apply an event. Returns `Some(open)` when a transition happened,
    /// carrying the state entered; `None` when the event was a no-op.
    pub fn apply(&mut self, event: MenuEvent) -> Option<bool> {
        let next = match event {
            MenuEvent::ToggleClick => !self.open,
            MenuEvent::LinkClick | MenuEvent::OutsideClick | MenuEvent::EscapeKey => false,
            MenuEvent::Resized { viewport_width } => {
                if viewport_width > MOBILE_BREAKPOINT_PX {
                    false
                } else {
                    self.open
                }
            }
        };
        if next == self.open {
            None
        } else {
            self.open = next;
            Some(next)
        }
    }
}
