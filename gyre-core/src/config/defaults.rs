//! Compile-time configuration defaults
//!
//! Board builds override these through [`super::WatchConfig`]; the values
//! here match the TTGO-class watch with a 240x240 round panel.

// WiFi (used only for time sync)

pub const WIFI_SSID: &str = "gyre-setup";
pub const WIFI_PASSWORD: &str = "change-me";

/// WiFi join timeout (seconds)
pub const WIFI_TIMEOUT_SECS: u16 = 15;

/// Interval between WiFi link status polls (ms)
pub const WIFI_POLL_MS: u32 = 100;

// NTP

pub const NTP_SERVER1: &str = "pool.ntp.org";
pub const NTP_SERVER2: &str = "time.google.com";
pub const NTP_SERVER3: &str = "time.nist.gov";

/// Local offset from GMT (seconds), GMT+9
pub const GMT_OFFSET_SECS: i32 = 9 * 3600;

/// Daylight saving offset (seconds)
pub const DAYLIGHT_OFFSET_SECS: i32 = 0;

/// Time query attempts before giving up
pub const NTP_MAX_ATTEMPTS: u8 = 10;

/// Delay between time query attempts (ms)
pub const NTP_RETRY_DELAY_MS: u32 = 500;

// Timing

/// Maximum gap between two releases to form a double tap (ms)
pub const DOUBLE_TAP_INTERVAL_MS: u64 = 400;

/// Presses at least this long are holds, not taps (ms)
pub const SINGLE_TAP_MAX_MS: u64 = 500;

/// Idle time before deep sleep (ms); dimming starts at half of it
pub const SLEEP_TIMEOUT_MS: u64 = 60_000;

/// Pulse marker step period (ms)
pub const PULSE_STEP_MS: u64 = 40;

/// Main loop period (ms)
pub const TICK_PERIOD_MS: u32 = 20;

// Backlight

pub const FULL_BRIGHTNESS: u8 = 255;
pub const DIM_BRIGHTNESS: u8 = 100;
pub const MIN_BRIGHTNESS: u8 = 30;

// Display geometry

pub const CENTER_X: i32 = 120;
pub const CENTER_Y: i32 = 120;

/// Radius of the rotating label ring
pub const RING_RADIUS: i32 = 104;

/// Panel rotation in quarter turns
pub const DISPLAY_ROTATION: u8 = 2;
