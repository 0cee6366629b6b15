//! Battery readout and idle power policy

pub mod battery;
pub mod controller;

pub use battery::{battery_percent, BatteryStatus};
pub use controller::{PowerAction, PowerController};
