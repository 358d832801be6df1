//! On/off switch for automatic replies.
//!
//! Two states, ENABLED (initial) and DISABLED. The state lives only in memory, so every
//! restart comes back ENABLED.

use std::sync::atomic::{AtomicBool, Ordering};

/// Outcome of an enable/disable request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTransition {
    /// The gate switched state.
    Changed,
    /// The gate was already in the requested state.
    Unchanged,
}

/// Process-local enabled flag.
#[derive(Debug)]
pub struct ResponderGate {
    enabled: AtomicBool,
}

impl ResponderGate {
    /// Creates an enabled gate.
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn enable(&self) -> GateTransition {
        self.switch(true)
    }

    pub fn disable(&self) -> GateTransition {
        self.switch(false)
    }

    fn switch(&self, enabled: bool) -> GateTransition {
        if self.enabled.swap(enabled, Ordering::SeqCst) == enabled {
            GateTransition::Unchanged
        } else {
            GateTransition::Changed
        }
    }
}

impl Default for ResponderGate {
    fn default() -> Self {
        Self::new()
    }
}
