//! Rotating clock face with per-field partial redraw
//!
//! Each field is compared with what was last drawn. Changed fields are
//! erased by drawing the old content in the background colour, then the
//! new content is drawn and committed to the snapshot.

use core::fmt::Write;

use heapless::String;

use super::coords::CoordinateTable;
use crate::time::CalendarTime;
use crate::traits::{Canvas, Color, DisplayError, Font, Point, Rect};

/// Labels of the 12 hour slots, starting at angle 0 (three o'clock)
pub const HOUR_LABELS: [&str; 12] = [
    "45", "40", "35", "30", "25", "20", "15", "10", "05", "0", "55", "50",
];

/// Radius of the outer bezel circle
pub const BEZEL_RADIUS: u32 = 124;

const RING_COLOR: Color = Color::WHITE;
const BOX_COLOR: Color = Color::GRAY2;
const BRAND: &str = "GYRE";

const DOT_RADIUS: u32 = 1;
const DOT_ERASE_RADIUS: u32 = 2;
const PULSE_RADIUS: u32 = 6;
const PULSE_ERASE_RADIUS: u32 = 7;

const BATTERY_FIELD: Rect = Rect::new(185, 5, 35, 20);
const BATTERY_TEXT_AT: Point = Point::new(204, 15);
const BRIGHTNESS_FIELD: Rect = Rect::new(15, 220, 80, 20);
const BRIGHTNESS_TEXT_AT: Point = Point::new(50, 230);
const SYNC_DOT_AT: Point = Point::new(10, 230);

/// Battery readings closer than this to the drawn value are not redrawn
const BATTERY_HYSTERESIS: u8 = 5;

/// Pulse positions per revolution (2 degrees per step)
const PULSE_STEPS: u64 = 180;

/// Inputs for one clock frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFrame {
    pub time: CalendarTime,
    pub now_ms: u64,
    pub battery_percent: u8,
    pub brightness: u8,
    pub synced_today: bool,
}

/// What is currently on the panel; `None` means "not drawn yet"
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockSnapshot {
    pub seconds: Option<String<2>>,
    pub hh_mm: Option<String<5>>,
    pub ring_angle: Option<u16>,
    pub pulse_angle: Option<u16>,
    pub battery_percent: Option<u8>,
    pub brightness: Option<u8>,
    pub accent: Color,
    pub last_minute: Option<u8>,
    /// Date shown in the month/day boxes
    pub date: Option<(u16, u8, u8)>,
}

/// Rotation of the ring for a given second
pub fn ring_angle(second: u8) -> u16 {
    (u16::from(second) * 6) % 360
}

/// Pulse marker angle at monotonic time `now_ms`
///
/// Runs 359, 357, ..., 1 and wraps back to 359, one step per `step_ms`.
pub fn pulse_angle(now_ms: u64, step_ms: u64) -> u16 {
    let step = now_ms / step_ms.max(1);
    (359 - 2 * (step % PULSE_STEPS)) as u16
}

fn two_digits(value: u8) -> String<2> {
    let mut s = String::new();
    let _ = write!(s, "{:02}", value % 100);
    s
}

fn hh_mm(time: &CalendarTime) -> String<5> {
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}", time.hour, time.minute);
    s
}

/// Clock face renderer
#[derive(Debug, Clone)]
pub struct ClockRenderer {
    center: Point,
    pulse_step_ms: u64,
    snapshot: ClockSnapshot,
    palette: super::palette::AccentPalette,
}

impl ClockRenderer {
    pub fn new(center: Point, pulse_step_ms: u64, accent_seed: u32) -> Self {
        let mut palette = super::palette::AccentPalette::new(accent_seed);
        let accent = palette.next_color();
        Self {
            center,
            pulse_step_ms,
            snapshot: ClockSnapshot {
                accent,
                ..ClockSnapshot::default()
            },
            palette,
        }
    }

    pub fn snapshot(&self) -> &ClockSnapshot {
        &self.snapshot
    }

    /// Draw one frame
    ///
    /// With `full` set the static chrome is drawn onto a cleared panel and
    /// every field is drawn from scratch in the same frame. A date change
    /// also forces the chrome to be redrawn.
    pub fn draw<D: Canvas>(
        &mut self,
        canvas: &mut D,
        coords: &CoordinateTable,
        frame: &ClockFrame,
        full: bool,
    ) -> Result<(), DisplayError> {
        let time = &frame.time;
        let date = (time.year, time.month, time.day);
        let date_changed = self.snapshot.date.is_some_and(|d| d != date);

        if full || date_changed {
            if !full {
                canvas.clear(Color::BLACK)?;
            }
            self.draw_chrome(canvas, frame)?;
            let accent = self.snapshot.accent;
            self.snapshot = ClockSnapshot {
                accent,
                date: Some(date),
                ..ClockSnapshot::default()
            };
        }

        let angle = ring_angle(time.second);
        let ring_changed = self.snapshot.ring_angle != Some(angle);

        let minute_rolled = self.snapshot.last_minute != Some(time.minute);
        if minute_rolled {
            // The very first frame keeps the initial accent
            if self.snapshot.last_minute.is_some() {
                self.snapshot.accent = self.palette.next_color();
            }
            self.snapshot.last_minute = Some(time.minute);
        }

        let pulse = pulse_angle(frame.now_ms, self.pulse_step_ms);
        // Ring dots share the pulse ring and would leave holes in the disc
        let pulse_dirty =
            self.snapshot.pulse_angle != Some(pulse) || ring_changed || minute_rolled;

        if ring_changed {
            if let Some(old) = self.snapshot.ring_angle {
                self.draw_ring(canvas, coords, old, None)?;
            }
        }
        if pulse_dirty {
            if let Some(old) = self.snapshot.pulse_angle {
                canvas.fill_circle(
                    coords.tick(usize::from(old)),
                    PULSE_ERASE_RADIUS,
                    Color::BLACK,
                )?;
            }
        }
        if ring_changed {
            self.draw_ring(canvas, coords, angle, Some(RING_COLOR))?;
            self.snapshot.ring_angle = Some(angle);
        }
        if pulse_dirty {
            canvas.fill_circle(coords.tick(usize::from(pulse)), PULSE_RADIUS, self.snapshot.accent)?;
            self.snapshot.pulse_angle = Some(pulse);
        }

        self.draw_seconds(canvas, time)?;
        self.draw_hh_mm(canvas, time)?;
        self.draw_battery(canvas, frame.battery_percent)?;
        self.draw_brightness(canvas, frame.brightness)?;

        Ok(())
    }

    fn draw_chrome<D: Canvas>(&self, canvas: &mut D, frame: &ClockFrame) -> Result<(), DisplayError> {
        let c = self.center;
        let time = &frame.time;

        canvas.draw_circle(c, BEZEL_RADIUS, Color::GRAY1)?;

        for x in [70, 84, 150, 164] {
            canvas.fill_rect(Rect::new(x, 86, 12, 20), BOX_COLOR)?;
        }
        canvas.draw_text("MONTH", Point::new(84, 78), Font::Tiny, Color::CYAN, Color::BLACK)?;
        canvas.draw_text("DAY", Point::new(162, 78), Font::Tiny, Color::CYAN, Color::BLACK)?;

        canvas.draw_text("System Control", c.offset(0, 54), Font::Tiny, Color::ORANGE, Color::BLACK)?;
        canvas.draw_text("***", c.offset(0, -16), Font::Tiny, Color::ORANGE, Color::BLACK)?;

        canvas.fill_triangle(c.offset(-1, -70), c.offset(-5, -56), c.offset(4, -56), Color::ORANGE)?;

        // Battery outline and terminal
        canvas.draw_rect(Rect::new(186, 8, 36, 14), Color::CYAN)?;
        canvas.fill_rect(Rect::new(222, 12, 4, 6), Color::CYAN)?;

        canvas.draw_text(time.weekday(), Point::new(30, 15), Font::Large, Color::CYAN, Color::BLACK)?;

        let month = two_digits(time.month);
        let day = two_digits(time.day);
        let digits = [
            (&month[0..1], 77),
            (&month[1..2], 91),
            (&day[0..1], 157),
            (&day[1..2], 171),
        ];
        for (digit, x) in digits {
            canvas.draw_text(digit, Point::new(x, 96), Font::Small, Color::WHITE, BOX_COLOR)?;
        }

        canvas.draw_text(BRAND, c, Font::Small, Color::WHITE, Color::BLACK)?;

        let sync_color = if frame.synced_today {
            Color::GREEN
        } else {
            Color::ORANGE
        };
        canvas.fill_circle(SYNC_DOT_AT, 4, sync_color)
    }

    /// Draw (or with `color = None` erase) the ring at `angle`
    fn draw_ring<D: Canvas>(
        &self,
        canvas: &mut D,
        coords: &CoordinateTable,
        angle: u16,
        color: Option<Color>,
    ) -> Result<(), DisplayError> {
        let (text_fg, line, dot, dot_radius) = match color {
            Some(c) => (Color::WHITE, c, c, DOT_RADIUS),
            None => (Color::BLACK, Color::BLACK, Color::BLACK, DOT_ERASE_RADIUS),
        };

        for (k, label) in HOUR_LABELS.iter().enumerate() {
            let idx = CoordinateTable::ring_index(CoordinateTable::hour_base(k), angle);
            canvas.draw_text(label, coords.label(idx), Font::Small, text_fg, Color::BLACK)?;
            canvas.draw_line(coords.tick(idx), coords.tick_end(idx), line)?;
        }

        for k in 0..60 {
            let idx = CoordinateTable::ring_index(CoordinateTable::minute_base(k), angle);
            canvas.fill_circle(coords.tick(idx), dot_radius, dot)?;
        }

        Ok(())
    }

    fn draw_seconds<D: Canvas>(&mut self, canvas: &mut D, time: &CalendarTime) -> Result<(), DisplayError> {
        let seconds = two_digits(time.second);
        if self.snapshot.seconds.as_ref() == Some(&seconds) {
            return Ok(());
        }

        let at = self.center.offset(0, -36);
        if let Some(old) = &self.snapshot.seconds {
            canvas.draw_text(old, at, Font::Segment20, Color::BLACK, Color::BLACK)?;
        }
        canvas.draw_text(&seconds, at, Font::Segment20, Color::WHITE, Color::BLACK)?;
        self.snapshot.seconds = Some(seconds);
        Ok(())
    }

    fn draw_hh_mm<D: Canvas>(&mut self, canvas: &mut D, time: &CalendarTime) -> Result<(), DisplayError> {
        let text = hh_mm(time);
        if self.snapshot.hh_mm.as_ref() == Some(&text) {
            return Ok(());
        }

        let at = self.center.offset(0, 28);
        if let Some(old) = &self.snapshot.hh_mm {
            canvas.draw_text(old, at, Font::Segment28, Color::BLACK, Color::BLACK)?;
        }
        canvas.draw_text(&text, at, Font::Segment28, Color::WHITE, Color::BLACK)?;
        self.snapshot.hh_mm = Some(text);
        Ok(())
    }

    fn draw_battery<D: Canvas>(&mut self, canvas: &mut D, percent: u8) -> Result<(), DisplayError> {
        let moved = match self.snapshot.battery_percent {
            Some(old) => old.abs_diff(percent) >= BATTERY_HYSTERESIS,
            None => true,
        };
        if !moved {
            return Ok(());
        }

        let mut text: String<4> = String::new();
        let _ = write!(text, "{}", percent);
        canvas.fill_rect(BATTERY_FIELD, Color::BLACK)?;
        canvas.draw_text(&text, BATTERY_TEXT_AT, Font::Large, Color::CYAN, Color::BLACK)?;
        self.snapshot.battery_percent = Some(percent);
        Ok(())
    }

    fn draw_brightness<D: Canvas>(&mut self, canvas: &mut D, level: u8) -> Result<(), DisplayError> {
        if self.snapshot.brightness == Some(level) {
            return Ok(());
        }

        let mut text: String<6> = String::new();
        let _ = write!(text, "B:{}", level);
        canvas.fill_rect(BRIGHTNESS_FIELD, Color::BLACK)?;
        canvas.draw_text(&text, BRIGHTNESS_TEXT_AT, Font::Large, Color::CYAN, Color::BLACK)?;
        self.snapshot.brightness = Some(level);
        Ok(())
    }
}
