//! Trailing-edge throttle core.
//!
//! The browser half of throttling (scheduling and cancelling a timeout)
//! lives in `portfolio-web`; this type holds the part worth testing: which
//! invocation's arguments actually run. Each `call` replaces any pending
//! arguments and invalidates every previously issued generation token, so a
//! timer scheduled for an older call fires into a no-op. This is the
//! deterministic equivalent of `clearTimeout` + `setTimeout`.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// State for a trailing-edge throttle: at most one pending execution, the
/// most recent call's arguments win.
#[derive(Debug, Default)]
pub struct Throttle<T> {
    pending: Option<T>,
    generation: u64,
}

impl<T> Throttle<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { pending: None, generation: 0 }
    }

    /// Record a call. Returns the generation token the caller should pass to
    /// [`Throttle::fire`] when its freshly scheduled timer elapses. Any token
    /// issued earlier is invalidated.
    pub fn call(&mut self, args: T) -> u64 {
        self.pending = Some(args);
        self.generation += 1;
        self.generation
    }

    /// Attempt to run the pending call for `token`. Returns the stored
    /// arguments if `token` is still the latest generation, otherwise `None`
    /// (a newer call superseded this timer).
    pub fn fire(&mut self, token: u64) -> Option<T> {
        if token == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Whether a call is waiting to be fired.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
