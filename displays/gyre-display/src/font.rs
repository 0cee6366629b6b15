//! Watch fonts mapped onto embedded-graphics mono fonts

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_8X13, FONT_9X18_BOLD};
use embedded_graphics::mono_font::MonoFont;
use gyre_core::traits::Font;

/// Closest mono font for a watch font
///
/// There is no seven-segment face in embedded-graphics, so the digit
/// fields use the large ASCII fonts.
pub fn mono_font(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::Tiny => &FONT_6X10,
        Font::Small => &FONT_8X13,
        Font::Large => &FONT_10X20,
        Font::Segment20 => &FONT_9X18_BOLD,
        Font::Segment28 => &FONT_10X20,
    }
}
