//! Deep sleep and monotonic clock traits

/// Signal that wakes the device from deep sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeSource {
    /// Power-key interrupt line pulled low
    ButtonLow,
    /// Touch controller interrupt line pulled low
    TouchLow,
}

/// Trait for the chip's deep-sleep entry
pub trait Sleep {
    /// Power everything down and enter deep sleep
    ///
    /// Hardware implementations never return: waking is a reset. Test
    /// doubles return so the request can be observed.
    fn enter_deep_sleep(&mut self, wake: WakeSource);
}

/// Trait for the monotonic millisecond clock and blocking delay
pub trait Clock {
    /// Milliseconds since boot
    fn now_ms(&self) -> u64;

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
