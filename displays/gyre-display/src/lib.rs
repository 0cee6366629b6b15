//! embedded-graphics backend for the Gyre watch
//!
//! This crate provides:
//! - `EgCanvas`, an implementation of the core `Canvas` trait for any
//!   `DrawTarget<Color = Rgb565>` (SPI TFT drivers, simulators, framebuffers)
//! - `Rotated`, a draw target adapter applying the panel rotation
//! - The mapping from watch fonts to embedded-graphics mono fonts
//!
//! # Architecture
//!
//! The watch core only speaks in terms of the `Canvas` trait. A board crate
//! wraps its panel driver in an `EgCanvas` and hands it to the core as the
//! display collaborator.

#![cfg_attr(not(test), no_std)]

pub mod canvas;
pub mod font;
pub mod rotation;

// Re-export key types
pub use canvas::{to_rgb565, EgCanvas};
pub use font::mono_font;
pub use rotation::Rotated;
