//! Shared client-side state.
//!
//! DESIGN
//! ======
//! One `UiState` behind an `RwSignal` provided from the root component;
//! components read the slices they care about. Event handlers are the only
//! writers, and the host runs them to completion one at a time, so there are
//! no concurrent writers to reason about.

pub mod ui;
