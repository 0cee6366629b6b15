//! Board-agnostic core logic for the Gyre round-display watch
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (canvas, touch, power IC, network time, RTC)
//! - Tap and double-tap recognition
//! - Screen state machine
//! - Partial-redraw clock face and static screens
//! - Network time sync workflow
//! - Idle dimming and deep sleep policy
//! - Configuration and persisted settings

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod input;
pub mod power;
pub mod render;
pub mod settings;
pub mod state;
pub mod sync;
pub mod time;
pub mod traits;
pub mod watch;

#[cfg(test)]
mod mock;

pub use error::{Error, Peripheral, SyncError};
pub use watch::{Peripherals, Watch};
