#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use pagefx::filter::FILTER_ALL;
use pagefx::menu::MenuState;
use serde::Serialize;

/// Page-wide UI state: menu, scrollspy outputs, load flag, filter, theme.
///
/// Lives in a single `RwSignal` provided via context from [`crate::app::App`]
/// and serialized to the console at debug level on every change.
#[derive(Clone, Debug, Serialize)]
pub struct UiState {
    pub menu: MenuState,
    /// Index into [`pagefx::scrollspy::SECTION_IDS`].
    pub active_section: usize,
    /// Set once the loader overlay has faded; starts the particle loop.
    pub loaded: bool,
    /// Currently selected project filter key.
    pub filter: String,
    /// Dark theme applied to the document element.
    pub dark_mode: bool,
    /// Navbar compact style (scroll position past 50px).
    pub navbar_scrolled: bool,
    /// Back-to-top button visibility (scroll position past 500px).
    pub back_to_top_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            menu: MenuState::default(),
            active_section: 0,
            loaded: false,
            filter: FILTER_ALL.to_owned(),
            dark_mode: false,
            navbar_scrolled: false,
            back_to_top_visible: false,
        }
    }
}

impl UiState {
    /// Id of the currently active section.
    #[must_use]
    pub fn active_section_id(&self) -> &'static str {
        pagefx::scrollspy::SECTION_IDS[self.active_section]
    }
}
