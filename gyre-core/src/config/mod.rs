//! Watch configuration
//!
//! `WatchConfig` gathers every tunable; its `Default` is built from the
//! compile-time constants in [`defaults`].

pub mod defaults;

use heapless::{String, Vec};

use crate::traits::Point;
use defaults::*;

/// Maximum SSID length (802.11)
pub const MAX_SSID_LEN: usize = 32;

/// Maximum WPA2 passphrase length
pub const MAX_PASSWORD_LEN: usize = 64;

/// Maximum NTP server hostname length
pub const MAX_HOST_LEN: usize = 32;

/// Maximum number of NTP servers
pub const MAX_NTP_SERVERS: usize = 3;

/// WiFi credentials and join timeout
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WifiConfig {
    pub ssid: String<MAX_SSID_LEN>,
    pub password: String<MAX_PASSWORD_LEN>,
    /// Join timeout (seconds)
    pub timeout_secs: u16,
}

impl Default for WifiConfig {
    fn default() -> Self {
        Self {
            ssid: truncated(WIFI_SSID),
            password: truncated(WIFI_PASSWORD),
            timeout_secs: WIFI_TIMEOUT_SECS,
        }
    }
}

/// Network time source settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NtpConfig {
    pub servers: Vec<String<MAX_HOST_LEN>, MAX_NTP_SERVERS>,
    pub gmt_offset_secs: i32,
    pub daylight_offset_secs: i32,
    /// Query attempts before reporting failure
    pub max_attempts: u8,
    /// Delay between attempts (ms)
    pub retry_delay_ms: u32,
    /// Run one sync during start-up
    pub sync_on_boot: bool,
}

impl Default for NtpConfig {
    fn default() -> Self {
        let mut servers = Vec::new();
        for host in [NTP_SERVER1, NTP_SERVER2, NTP_SERVER3] {
            let _ = servers.push(truncated(host));
        }
        Self {
            servers,
            gmt_offset_secs: GMT_OFFSET_SECS,
            daylight_offset_secs: DAYLIGHT_OFFSET_SECS,
            max_attempts: NTP_MAX_ATTEMPTS,
            retry_delay_ms: NTP_RETRY_DELAY_MS,
            sync_on_boot: true,
        }
    }
}

/// Gesture timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureConfig {
    /// Maximum gap between two releases of a double tap (ms)
    pub double_tap_interval_ms: u64,
    /// Presses this long or longer are not taps (ms)
    pub single_tap_max_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_interval_ms: DOUBLE_TAP_INTERVAL_MS,
            single_tap_max_ms: SINGLE_TAP_MAX_MS,
        }
    }
}

/// Backlight and sleep policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerConfig {
    /// Idle time before deep sleep (ms)
    pub sleep_timeout_ms: u64,
    pub full_brightness: u8,
    pub dim_brightness: u8,
    /// Lowest level the user may choose as "full"
    pub min_brightness: u8,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            sleep_timeout_ms: SLEEP_TIMEOUT_MS,
            full_brightness: FULL_BRIGHTNESS,
            dim_brightness: DIM_BRIGHTNESS,
            min_brightness: MIN_BRIGHTNESS,
        }
    }
}

/// Panel geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub center: Point,
    /// Radius of the rotating label ring
    pub ring_radius: i32,
    /// Panel rotation in quarter turns
    pub rotation: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            center: Point::new(CENTER_X, CENTER_Y),
            ring_radius: RING_RADIUS,
            rotation: DISPLAY_ROTATION,
        }
    }
}

/// Complete watch configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchConfig {
    pub wifi: WifiConfig,
    pub ntp: NtpConfig,
    pub gesture: GestureConfig,
    pub power: PowerConfig,
    pub display: DisplayConfig,
    /// Pulse marker step period (ms)
    pub pulse_step_ms: u64,
    /// Main loop period (ms)
    pub tick_period_ms: u32,
    /// Seed for the accent colour generator
    pub accent_seed: u32,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            wifi: WifiConfig::default(),
            ntp: NtpConfig::default(),
            gesture: GestureConfig::default(),
            power: PowerConfig::default(),
            display: DisplayConfig::default(),
            pulse_step_ms: PULSE_STEP_MS,
            tick_period_ms: TICK_PERIOD_MS,
            accent_seed: 0x2F6B_1D33,
        }
    }
}

/// Copy `text` into a bounded string, dropping what does not fit
pub fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut s = String::new();
    for c in text.chars() {
        if s.push(c).is_err() {
            break;
        }
    }
    s
}
