//! Trailing-edge throttle over browser timeouts.
//!
//! Pairs [`pagefx::throttle::Throttle`] with `gloo_timers` timeouts: each
//! invocation cancels the pending timeout (dropping a `Timeout` clears it)
//! and schedules a fresh one for the full window. The generation token from
//! the core makes a superseded timer's callback a no-op even if cancellation
//! raced the timer queue.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use pagefx::throttle::Throttle;

/// Wrap `f` so bursts of calls collapse into one trailing invocation per
/// `wait_ms` window, carrying the latest call's arguments.
pub fn trailing<T: 'static>(wait_ms: u32, f: impl Fn(T) + 'static) -> impl Fn(T) {
    let core = Rc::new(RefCell::new(Throttle::new()));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let f = Rc::new(f);

    move |args: T| {
        let token = core.borrow_mut().call(args);
        let core = Rc::clone(&core);
        let f = Rc::clone(&f);
        let timeout = Timeout::new(wait_ms, move || {
            if let Some(args) = core.borrow_mut().fire(token) {
                f(args);
            }
        });
        // Replacing the previous timeout drops and thereby cancels it.
        *pending.borrow_mut() = Some(timeout);
    }
}
