//! Page behavior logic for the portfolio client.
//!
//! This crate holds everything about the site's interactive behavior that
//! does not touch the browser: the scrollspy that maps a scroll offset to
//! the active section, the particle field's motion model, the mobile menu
//! state machine, project filter/expand transitions, and the trailing-edge
//! throttle core. The `portfolio-web` crate wires these to DOM events and
//! timers; this crate compiles and tests natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Shared numeric constants (thresholds, delays, tuning) |
//! | [`throttle`] | Clock-free trailing-edge throttle core |
//! | [`particles`] | Particle field with toroidal wraparound |
//! | [`scrollspy`] | Active-section tracking and scroll predicates |
//! | [`menu`] | Mobile menu state machine |
//! | [`filter`] | Project card filtering and detail expansion |

pub mod consts;
pub mod filter;
pub mod menu;
pub mod particles;
pub mod scrollspy;
pub mod throttle;
