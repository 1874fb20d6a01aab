//! Browser utilities: DOM lookups, timers, and persisted preferences.

pub mod dark_mode;
#[cfg(feature = "csr")]
pub mod dom;
#[cfg(feature = "csr")]
pub mod raf;
#[cfg(feature = "csr")]
pub mod reveal;
#[cfg(feature = "csr")]
pub mod throttle;
