//! Panel rotation adapter
//!
//! Maps logical coordinates to the physical panel one pixel at a time,
//! so every primitive and glyph rotates with the panel.

use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::prelude::*;

/// Rotate `point` by `quarter_turns` clockwise inside a panel of `size`
pub fn rotate_point(point: Point, quarter_turns: u8, size: Size) -> Point {
    let w = size.width as i32;
    let h = size.height as i32;
    match quarter_turns % 4 {
        0 => point,
        1 => Point::new(w - 1 - point.y, point.x),
        2 => Point::new(w - 1 - point.x, h - 1 - point.y),
        _ => Point::new(point.y, h - 1 - point.x),
    }
}

/// Draw target seen through a rotation
pub struct Rotated<'a, D> {
    inner: &'a mut D,
    quarter_turns: u8,
}

impl<'a, D> Rotated<'a, D> {
    pub fn new(inner: &'a mut D, quarter_turns: u8) -> Self {
        Self {
            inner,
            quarter_turns: quarter_turns % 4,
        }
    }
}

impl<D: OriginDimensions> OriginDimensions for Rotated<'_, D> {
    fn size(&self) -> Size {
        let size = self.inner.size();
        if self.quarter_turns % 2 == 1 {
            Size::new(size.height, size.width)
        } else {
            size
        }
    }
}

impl<C, D> DrawTarget for Rotated<'_, D>
where
    C: PixelColor,
    D: DrawTarget<Color = C> + OriginDimensions,
{
    type Color = C;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let turns = self.quarter_turns;
        let size = self.inner.size();
        if turns == 0 {
            return self.inner.draw_iter(pixels);
        }
        self.inner.draw_iter(
            pixels
                .into_iter()
                .map(|Pixel(p, c)| Pixel(rotate_point(p, turns, size), c)),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.inner.clear(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: Size = Size::new(240, 240);

    #[test]
    fn test_rotate_corners() {
        let origin = Point::new(0, 0);
        assert_eq!(rotate_point(origin, 0, PANEL), origin);
        assert_eq!(rotate_point(origin, 1, PANEL), Point::new(239, 0));
        assert_eq!(rotate_point(origin, 2, PANEL), Point::new(239, 239));
        assert_eq!(rotate_point(origin, 3, PANEL), Point::new(0, 239));
    }

    #[test]
    fn test_four_turns_is_identity() {
        let p = Point::new(17, 201);
        let mut q = p;
        for _ in 0..4 {
            q = rotate_point(q, 1, PANEL);
        }
        assert_eq!(q, p);
        assert_eq!(rotate_point(p, 6, PANEL), rotate_point(p, 2, PANEL));
    }
}
