//! Leading-edge debounce for outbound requests.
//!
//! Used to keep rapid repeated input (clicking the toggle, dragging the color
//! slider) from producing a burst of requests: the first invocation fires
//! immediately, then everything inside the quiet window is suppressed, and
//! every invocation — fired or not — extends the window.

use std::cell::RefCell;
use std::rc::Rc;

/// Default quiet window in milliseconds.
pub const DEFAULT_QUIET_WINDOW_MS: f64 = 300.0;

/// Clock-explicit leading-edge debounce state machine.
///
/// The gate is *armed* from each invocation until `window_ms` of quiet has
/// passed. An invocation while disarmed fires; an invocation while armed is
/// suppressed. Either way the invocation re-arms the gate, so a steady stream
/// of calls keeps it closed indefinitely.
#[derive(Debug, Clone)]
pub struct LeadingEdgeGate {
    window_ms: f64,
    armed_until: Option<f64>,
}

impl LeadingEdgeGate {
    /// Create a gate with the given quiet window.
    #[must_use]
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            armed_until: None,
        }
    }

    /// Record an invocation at `now_ms` and report whether it should fire.
    pub fn should_fire(&mut self, now_ms: f64) -> bool {
        let armed = self.armed_until.is_some_and(|until| now_ms < until);
        self.armed_until = Some(now_ms + self.window_ms);
        !armed
    }
}

/// Wrap a zero-argument action so that it fires on the leading edge only.
///
/// The returned closure is cheap to clone and can be called from any event
/// handler; each wrapped action gets its own independent gate.
pub fn debounce_leading<F>(action: F) -> impl Fn() + Clone
where
    F: Fn() + Clone + 'static,
{
    let gate = Rc::new(RefCell::new(LeadingEdgeGate::new(DEFAULT_QUIET_WINDOW_MS)));
    move || {
        if gate.borrow_mut().should_fire(js_sys::Date::now()) {
            action();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fire_on_first_invocation() {
        let mut gate = LeadingEdgeGate::new(300.0);
        assert!(gate.should_fire(0.0));
    }

    #[test]
    fn should_suppress_calls_within_quiet_window() {
        let mut gate = LeadingEdgeGate::new(300.0);
        assert!(gate.should_fire(0.0));
        assert!(!gate.should_fire(10.0));
        assert!(!gate.should_fire(100.0));
        assert!(!gate.should_fire(299.0));
    }

    #[test]
    fn should_fire_again_after_window_elapses() {
        let mut gate = LeadingEdgeGate::new(300.0);
        assert!(gate.should_fire(0.0));
        assert!(gate.should_fire(300.0));
    }

    #[test]
    fn should_extend_window_on_suppressed_call() {
        let mut gate = LeadingEdgeGate::new(300.0);
        assert!(gate.should_fire(0.0));
        // Suppressed call at t=250 pushes the window out to t=550.
        assert!(!gate.should_fire(250.0));
        assert!(!gate.should_fire(400.0));
        assert!(!gate.should_fire(549.0));
    }

    #[test]
    fn should_fire_once_window_extension_expires() {
        let mut gate = LeadingEdgeGate::new(300.0);
        assert!(gate.should_fire(0.0));
        assert!(!gate.should_fire(250.0));
        assert!(gate.should_fire(550.0));
    }

    #[test]
    fn should_count_one_fire_for_a_burst() {
        let mut gate = LeadingEdgeGate::new(300.0);
        let fired = (0..10).filter(|i| gate.should_fire(f64::from(*i) * 20.0)).count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn should_produce_cloneable_dispatcher() {
        // Event handlers capture the dispatcher by move; constructing and
        // cloning must work for any plain closure, including non-Copy ones.
        let message = String::from("fired");
        let dispatch = debounce_leading(move || {
            let _ = &message;
        });
        let _handler_copy = dispatch.clone();
    }

    #[test]
    fn should_keep_independent_gates_independent() {
        let mut a = LeadingEdgeGate::new(300.0);
        let mut b = LeadingEdgeGate::new(300.0);
        assert!(a.should_fire(0.0));
        assert!(b.should_fire(1.0));
    }
}
