//! Touch and interrupt input

pub mod gesture;
pub mod irq;

pub use gesture::{GestureDetector, GestureEvent, TouchSample, TouchState};
pub use irq::IrqFlag;
