//! Idle tracking, backlight dimming and deep sleep
//!
//! The controller only decides; the caller applies the returned action
//! to the backlight and sleep collaborators.

use crate::config::PowerConfig;

/// What the caller must do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerAction {
    None,
    /// Lower the backlight to the given level
    Dim(u8),
    /// Raise the backlight back to the given level
    Restore(u8),
    /// Disconnect, switch the backlight off and enter deep sleep
    Sleep,
}

/// Idle and backlight policy
#[derive(Debug, Clone)]
pub struct PowerController {
    config: PowerConfig,
    last_activity_ms: u64,
    /// Level currently applied to the backlight
    brightness: u8,
    /// Set once sleep has been requested
    sleeping: bool,
}

impl PowerController {
    pub fn new(config: PowerConfig, now_ms: u64) -> Self {
        Self {
            config,
            last_activity_ms: now_ms,
            brightness: config.full_brightness,
            sleeping: false,
        }
    }

    /// Level currently applied to the backlight
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// User-chosen "full" level
    pub fn full_brightness(&self) -> u8 {
        self.config.full_brightness
    }

    pub fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    /// Time since the last touch or button press
    pub fn idle_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_activity_ms)
    }

    /// Touch, button press or screen change: reset the idle timer
    pub fn on_activity(&mut self, now_ms: u64) -> PowerAction {
        self.last_activity_ms = now_ms;
        if self.brightness != self.config.full_brightness {
            self.brightness = self.config.full_brightness;
            return PowerAction::Restore(self.brightness);
        }
        PowerAction::None
    }

    /// Change the full level, clamped to `[min_brightness, 255]`
    ///
    /// Returns the level to apply if the backlight is currently at full.
    pub fn set_full_brightness(&mut self, level: u8) -> Option<u8> {
        let level = level.max(self.config.min_brightness);
        let at_full = self.brightness == self.config.full_brightness;
        self.config.full_brightness = level;
        if at_full {
            self.brightness = level;
            return Some(level);
        }
        None
    }

    /// Decide on dimming or sleep from the idle time
    pub fn evaluate(&mut self, now_ms: u64) -> PowerAction {
        if self.sleeping {
            return PowerAction::None;
        }

        let idle = self.idle_ms(now_ms);
        if idle > self.config.sleep_timeout_ms {
            #[cfg(feature = "defmt")]
            defmt::info!("idle {} ms, requesting deep sleep", idle);
            self.sleeping = true;
            self.brightness = 0;
            PowerAction::Sleep
        } else if idle > self.config.sleep_timeout_ms / 2
            && self.brightness > self.config.dim_brightness
        {
            #[cfg(feature = "defmt")]
            defmt::debug!("idle {} ms, dimming", idle);
            self.brightness = self.config.dim_brightness;
            PowerAction::Dim(self.brightness)
        } else {
            PowerAction::None
        }
    }
}
