//! Page components.
//!
//! Each component renders its own markup and owns its local transition
//! state; everything page-wide (menu, active section, filter, theme, load
//! flag) lives in the shared [`crate::state::ui::UiState`] context.

pub mod back_to_top;
pub mod hero;
pub mod loader;
pub mod navbar;
pub mod particles_backdrop;
pub mod projects;
pub mod sections;
