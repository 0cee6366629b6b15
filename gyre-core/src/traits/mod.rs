//! Hardware abstraction traits
//!
//! These traits define the boundary between the watch logic and the
//! board bindings (panel driver, touch controller, PMIC, WiFi, RTC).

pub mod display;
pub mod network;
pub mod power;
pub mod rtc;
pub mod sleep;
pub mod storage;
pub mod touch;

pub use display::{Canvas, Color, DisplayError, Font, Point, Rect};
pub use network::{NetworkTime, TimeSource};
pub use power::{Backlight, IrqCause, PowerIc};
pub use rtc::Rtc;
pub use sleep::{Clock, Sleep, WakeSource};
pub use storage::{NoStorage, SettingsStorage, StorageError, StorageKey};
pub use touch::TouchPanel;

/// Bundle of board collaborators
///
/// A board crate implements this once to tell [`crate::watch::Watch`]
/// which concrete driver types it owns.
pub trait Platform {
    type Display: Canvas;
    type Touch: TouchPanel;
    type Power: PowerIc;
    type Backlight: Backlight;
    type Network: NetworkTime;
    type Rtc: Rtc;
    type Sleep: Sleep;
    type Clock: Clock;
    type Storage: SettingsStorage;
}
