//! Display canvas trait for the round TFT panel

/// Errors that can occur while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Communication,
    /// Coordinates or dimensions rejected by the driver
    InvalidCoordinates,
    /// Panel not initialized
    NotInitialized,
}

/// A 16-bit RGB565 colour, the native format of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const BLUE: Color = Color(0x001F);
    pub const ORANGE: Color = Color(0xFDA0);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const CYAN: Color = Color(0x35D7);
    pub const GRAY1: Color = Color(0x8410);
    pub const GRAY2: Color = Color(0x5ACB);

    /// Pack 8-bit channels into RGB565
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Color((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }

    /// Red channel (5 bits)
    pub const fn r5(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel (6 bits)
    pub const fn g6(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel (5 bits)
    pub const fn b5(self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

/// A point in panel coordinates, (0,0) is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Fonts available on the watch
///
/// The adapter picks the closest glyph set the panel driver offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Smallest system font, footers and hints
    Tiny,
    /// Body text for menus and info screens
    Small,
    /// Double-size text for status bar numbers and the weekday
    Large,
    /// Seven-segment digits for the seconds field
    Segment20,
    /// Seven-segment digits for titles and the HH:MM field
    Segment28,
}

/// Trait for the pixel display
///
/// All calls are immediate. Text is anchored at its middle-centre point,
/// and drawn with an opaque background so that redrawing the same string
/// in the background colour erases it.
pub trait Canvas {
    /// Fill the whole panel with one colour
    fn clear(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Draw a string centred on `at`
    fn draw_text(
        &mut self,
        text: &str,
        at: Point,
        font: Font,
        fg: Color,
        bg: Color,
    ) -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError>;

    /// Draw a one pixel rectangle outline
    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError>;

    /// Fill a circle of `radius` around `center`
    fn fill_circle(&mut self, center: Point, radius: u32, color: Color)
        -> Result<(), DisplayError>;

    /// Draw a one pixel circle outline of `radius` around `center`
    fn draw_circle(&mut self, center: Point, radius: u32, color: Color)
        -> Result<(), DisplayError>;

    /// Draw a one pixel line
    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), DisplayError>;

    /// Fill a triangle
    fn fill_triangle(
        &mut self,
        a: Point,
        b: Point,
        c: Point,
        color: Color,
    ) -> Result<(), DisplayError>;

    /// Set the panel rotation in quarter turns (0-3)
    fn set_rotation(&mut self, quarter_turns: u8) -> Result<(), DisplayError>;
}
