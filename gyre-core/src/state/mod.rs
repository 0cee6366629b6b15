//! Application state machine
//!
//! Exactly one screen is active at a time. Gestures map to screen
//! changes or to a sync request through an exhaustive transition table.

pub mod events;
pub mod machine;

pub use events::{Action, Event};
pub use machine::{AppState, MenuItem};
