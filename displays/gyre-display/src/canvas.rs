//! `Canvas` implementation over an embedded-graphics draw target

use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Point as EgPoint, Primitive, Size};
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_graphics::Drawable;

use gyre_core::traits::{Canvas, Color, DisplayError, Font, Point, Rect};

use crate::font::mono_font;
use crate::rotation::Rotated;

/// Convert a watch colour to the embedded-graphics pixel type
pub fn to_rgb565(color: Color) -> Rgb565 {
    Rgb565::from(RawU16::new(color.0))
}

fn to_point(p: Point) -> EgPoint {
    EgPoint::new(p.x, p.y)
}

/// Diameter of a circle whose outermost pixels sit `radius` from the centre
fn diameter(radius: u32) -> u32 {
    radius * 2 + 1
}

/// Watch canvas backed by any RGB565 draw target
pub struct EgCanvas<D> {
    target: D,
    rotation: u8,
}

impl<D> EgCanvas<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    /// Wrap a panel driver, unrotated
    pub fn new(target: D) -> Self {
        Self {
            target,
            rotation: 0,
        }
    }

    /// Current rotation in quarter turns
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Give the panel driver back
    pub fn release(self) -> D {
        self.target
    }

    fn draw<T>(&mut self, item: &T) -> Result<(), DisplayError>
    where
        T: Drawable<Color = Rgb565>,
    {
        let mut view = Rotated::new(&mut self.target, self.rotation);
        item.draw(&mut view)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}

impl<D> Canvas for EgCanvas<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
        self.target
            .clear(to_rgb565(color))
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(
        &mut self,
        text: &str,
        at: Point,
        font: Font,
        fg: Color,
        bg: Color,
    ) -> Result<(), DisplayError> {
        let character_style = MonoTextStyleBuilder::new()
            .font(mono_font(font))
            .text_color(to_rgb565(fg))
            .background_color(to_rgb565(bg))
            .build();
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        self.draw(&Text::with_text_style(text, to_point(at), character_style, text_style))
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        let area = Rectangle::new(EgPoint::new(rect.x, rect.y), Size::new(rect.width, rect.height));
        self.draw(&area.into_styled(PrimitiveStyle::with_fill(to_rgb565(color))))
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        let area = Rectangle::new(EgPoint::new(rect.x, rect.y), Size::new(rect.width, rect.height));
        self.draw(&area.into_styled(PrimitiveStyle::with_stroke(to_rgb565(color), 1)))
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), DisplayError> {
        let circle = Circle::with_center(to_point(center), diameter(radius));
        self.draw(&circle.into_styled(PrimitiveStyle::with_fill(to_rgb565(color))))
    }

    fn draw_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), DisplayError> {
        let circle = Circle::with_center(to_point(center), diameter(radius));
        self.draw(&circle.into_styled(PrimitiveStyle::with_stroke(to_rgb565(color), 1)))
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), DisplayError> {
        let line = Line::new(to_point(from), to_point(to));
        self.draw(&line.into_styled(PrimitiveStyle::with_stroke(to_rgb565(color), 1)))
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) -> Result<(), DisplayError> {
        let triangle = Triangle::new(to_point(a), to_point(b), to_point(c));
        self.draw(&triangle.into_styled(PrimitiveStyle::with_fill(to_rgb565(color))))
    }

    fn set_rotation(&mut self, quarter_turns: u8) -> Result<(), DisplayError> {
        if quarter_turns > 3 {
            return Err(DisplayError::InvalidCoordinates);
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("display rotation {}", quarter_turns);
        self.rotation = quarter_turns;
        Ok(())
    }
}
