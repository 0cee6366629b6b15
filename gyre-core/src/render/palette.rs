//! Accent colour for the pulse marker

use crate::traits::Color;

/// Bright pseudo-random colours from a xorshift32 sequence
#[derive(Debug, Clone)]
pub struct AccentPalette {
    state: u32,
}

impl AccentPalette {
    /// Create a generator; a zero seed is replaced since xorshift sticks at 0
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next colour with every channel in `[128, 256)`
    pub fn next_color(&mut self) -> Color {
        let bits = self.next_u32();
        let channel = |shift: u32| 0x80 | ((bits >> shift) & 0x7F) as u8;
        Color::from_rgb888(channel(0), channel(8), channel(16))
    }
}
