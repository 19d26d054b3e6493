//! Process-wide poisoning gate.
//!
//! Internal bookkeeping (quarantine rotation, chunk header updates) must be
//! able to touch memory without tripping the instrumentation that poisoned
//! it, so privileged callers disable poisoning around those windows.

use std::sync::atomic::{AtomicBool, Ordering};

/// Boolean gate controlling whether poisoning writes are permitted.
///
/// Starts enabled. The flag is a relaxed atomic so it can be flipped
/// without tearing, but flipping it does not order the fills themselves:
/// callers poisoning overlapping ranges still need external serialization.
pub struct PoisonGate {
    can_poison: AtomicBool,
}

impl PoisonGate {
    /// Create a gate with poisoning enabled.
    pub const fn new() -> Self {
        Self {
            can_poison: AtomicBool::new(true),
        }
    }

    /// Unconditionally set whether poisoning is permitted.
    pub fn set_can_poison(&self, value: bool) {
        self.can_poison.store(value, Ordering::Relaxed);
    }

    /// Whether poisoning writes are currently permitted.
    pub fn can_poison(&self) -> bool {
        self.can_poison.load(Ordering::Relaxed)
    }

    /// Disable poisoning until the returned guard drops.
    pub fn pause(&self) -> PoisonPauseGuard<'_> {
        let previous = self.can_poison();
        self.set_can_poison(false);
        PoisonPauseGuard {
            gate: self,
            previous,
        }
    }
}

impl Default for PoisonGate {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard that restores the previous gate state on drop.
pub struct PoisonPauseGuard<'a> {
    gate: &'a PoisonGate,
    previous: bool,
}

impl Drop for PoisonPauseGuard<'_> {
    fn drop(&mut self) {
        self.gate.set_can_poison(self.previous);
    }
}
