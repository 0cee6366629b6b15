//! Single-slot interrupt event cell
//!
//! The power-key interrupt handler raises the flag; the main loop drains
//! it once per tick. Interrupts arriving between two ticks collapse into
//! one observed event.
//!
//! `take` is a read-modify-write. Targets without native atomic swap
//! (thumbv6m and similar) need the `critical-section` feature of this
//! crate, which enables the same feature of `portable-atomic`, plus a
//! `critical-section` implementation from the board crate.

use portable_atomic::{AtomicBool, Ordering};

/// Interrupt flag shared between an ISR and the polling loop
#[derive(Debug)]
pub struct IrqFlag {
    pending: AtomicBool,
}

impl Default for IrqFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl IrqFlag {
    /// Create a cleared flag, usable in a `static`
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Mark an interrupt as pending (interrupt context)
    pub fn raise(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Take the pending event, clearing the flag
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    /// Check without clearing
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears() {
        let flag = IrqFlag::new();
        assert!(!flag.take());
        flag.raise();
        assert!(flag.is_pending());
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn test_multiple_raises_collapse() {
        let flag = IrqFlag::new();
        flag.raise();
        flag.raise();
        flag.raise();
        assert!(flag.take());
        assert!(!flag.take());
    }
}
