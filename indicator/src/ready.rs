use core::sync::atomic::{AtomicBool, Ordering};

/// One-shot readiness gate.
///
/// False from boot, flipped true exactly once by the startup sequencer
/// after its patterns have had time to render, never reset. Event-driven
/// producers check it and no-op while it is false.
///
/// Relaxed ordering is enough: the flag is write-once-then-read-only, and a
/// reader briefly seeing the stale `false` only costs one early event.
pub struct ReadyGate {
    ready: AtomicBool,
}

impl ReadyGate {
    pub const fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
        }
    }

    pub fn set_ready(&self) {
        self.ready.store(true, Ordering::Relaxed);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_ready_and_latches() {
        let gate = ReadyGate::new();
        assert!(!gate.is_ready());

        gate.set_ready();
        assert!(gate.is_ready());

        // absorbing state
        gate.set_ready();
        assert!(gate.is_ready());
    }
}
