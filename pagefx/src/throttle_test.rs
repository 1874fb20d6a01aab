use super::*;

// --- Basic trailing-edge behavior ---

#[test]
fn single_call_fires_with_its_arguments() {
    let mut t = Throttle::new();
    let token = t.call(7);
    assert_eq!(t.fire(token), Some(7));
}

#[test]
fn burst_of_calls_fires_once_with_latest_arguments() {
    // Ten calls inside one window: only the timer from the tenth call is
    // still valid, and it carries the tenth call's arguments.
    let mut t = Throttle::new();
    let mut tokens = Vec::new();
    for i in 1..=10 {
        tokens.push(t.call(i));
    }
    let last = tokens.pop().unwrap();

    let mut fired = Vec::new();
    for token in tokens {
        if let Some(args) = t.fire(token) {
            fired.push(args);
        }
    }
    if let Some(args) = t.fire(last) {
        fired.push(args);
    }
    assert_eq!(fired, vec![10]);
}

#[test]
fn stale_token_is_dropped() {
    let mut t = Throttle::new();
    let first = t.call("a");
    let _second = t.call("b");
    assert_eq!(t.fire(first), None);
}

#[test]
fn fire_consumes_the_pending_call() {
    let mut t = Throttle::new();
    let token = t.call(1);
    assert_eq!(t.fire(token), Some(1));
    assert_eq!(t.fire(token), None);
    assert!(!t.is_pending());
}

// --- Re-arming after a fire ---

#[test]
fn new_call_after_fire_gets_a_fresh_token() {
    let mut t = Throttle::new();
    let a = t.call(1);
    assert_eq!(t.fire(a), Some(1));

    let b = t.call(2);
    assert_ne!(a, b);
    assert_eq!(t.fire(b), Some(2));
}

#[test]
fn is_pending_tracks_lifecycle() {
    let mut t = Throttle::new();
    assert!(!t.is_pending());
    let token = t.call(());
    assert!(t.is_pending());
    t.fire(token);
    assert!(!t.is_pending());
}
