//! Tap and double-tap recognition
//!
//! Consumes one raw touch sample per tick and classifies releases by
//! their press duration and the gap to the previous tap.

use crate::config::GestureConfig;

/// Raw per-tick touch input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchSample {
    pub pressed: bool,
    pub x: i16,
    pub y: i16,
}

impl TouchSample {
    /// Sample with no finger on the panel
    pub const RELEASED: TouchSample = TouchSample {
        pressed: false,
        x: 0,
        y: 0,
    };

    /// Sample with a finger at (x, y)
    pub const fn pressed(x: i16, y: i16) -> Self {
        Self { pressed: true, x, y }
    }

    /// Convert a touch panel poll result
    pub fn from_poll(point: Option<(i16, i16)>) -> Self {
        match point {
            Some((x, y)) => Self::pressed(x, y),
            None => Self::RELEASED,
        }
    }
}

/// Classified gesture for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureEvent {
    #[default]
    None,
    SingleTap,
    DoubleTap,
}

/// Debounced touch state derived from samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchState {
    pub is_pressed: bool,
    pub was_pressed: bool,
    /// Last pressed coordinate, kept across the release
    pub x: i16,
    pub y: i16,
    /// Timestamp of the most recent press start (ms)
    pub press_start_ms: u64,
}

impl TouchState {
    /// True on the tick the finger lifted
    pub fn just_released(&self) -> bool {
        self.was_pressed && !self.is_pressed
    }
}

/// Tap / double-tap detector
#[derive(Debug, Clone)]
pub struct GestureDetector {
    config: GestureConfig,
    touch: TouchState,
    /// Pending first tap (0 or 1)
    tap_count: u8,
    /// Release time of the pending first tap (ms)
    last_tap_ms: u64,
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureDetector {
    /// Create a detector with the given timing
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            touch: TouchState::default(),
            tap_count: 0,
            last_tap_ms: 0,
        }
    }

    /// Return to the power-on state
    pub fn reset(&mut self) {
        self.touch = TouchState::default();
        self.tap_count = 0;
        self.last_tap_ms = 0;
    }

    /// Current touch state
    pub fn touch(&self) -> &TouchState {
        &self.touch
    }

    /// Whether a first tap is waiting for its partner
    pub fn has_pending_tap(&self) -> bool {
        self.tap_count > 0
    }

    /// Feed one sample and classify the tick
    ///
    /// A release that completes a double tap is reported only as
    /// `DoubleTap`, never additionally as `SingleTap`.
    pub fn update(&mut self, sample: TouchSample, now_ms: u64) -> GestureEvent {
        self.touch.was_pressed = self.touch.is_pressed;
        self.touch.is_pressed = sample.pressed;

        if sample.pressed {
            self.touch.x = sample.x;
            self.touch.y = sample.y;
            if !self.touch.was_pressed {
                self.touch.press_start_ms = now_ms;
            }
        }

        let mut event = GestureEvent::None;

        if self.touch.just_released() {
            let duration = now_ms.saturating_sub(self.touch.press_start_ms);
            if duration < self.config.single_tap_max_ms {
                let interval = now_ms.saturating_sub(self.last_tap_ms);
                if self.tap_count > 0 && interval < self.config.double_tap_interval_ms {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("double tap, interval {} ms", interval);
                    self.tap_count = 0;
                    self.last_tap_ms = 0;
                    event = GestureEvent::DoubleTap;
                } else {
                    self.tap_count = 1;
                    self.last_tap_ms = now_ms;
                    event = GestureEvent::SingleTap;
                }
            }
        }

        // A first tap nobody followed up on expires
        if self.tap_count > 0
            && now_ms.saturating_sub(self.last_tap_ms) > self.config.double_tap_interval_ms
        {
            self.tap_count = 0;
        }

        event
    }
}
