//! Static screens: menu, battery info and network time sync

use core::fmt::Write;

use heapless::String;

use crate::power::BatteryStatus;
use crate::state::MenuItem;
use crate::sync::NtpStatus;
use crate::traits::{Canvas, Color, DisplayError, Font, Point, Rect};

/// Area cleared before the NTP status text is redrawn
pub const NTP_STATUS_FIELD: Rect = Rect::new(100, 100, 140, 25);
const NTP_STATUS_AT: Point = Point::new(170, 110);

const MENU_FIRST_ROW_Y: i32 = 70;
const MENU_ROW_SPACING: i32 = 35;

const GAUGE: Rect = Rect::new(70, 170, 100, 40);

fn title<D: Canvas>(canvas: &mut D, text: &str, y: i32) -> Result<(), DisplayError> {
    canvas.draw_text(text, Point::new(120, y), Font::Segment28, Color::WHITE, Color::BLACK)
}

fn caption<D: Canvas>(canvas: &mut D, text: &str, at: Point) -> Result<(), DisplayError> {
    canvas.draw_text(text, at, Font::Small, Color::CYAN, Color::BLACK)
}

/// Main menu with the last-sync line
///
/// `sync_age` is `None` when no sync happened today.
pub fn draw_menu<D: Canvas>(canvas: &mut D, sync_age: Option<&str>) -> Result<(), DisplayError> {
    title(canvas, "MENU", 25)?;

    let mut y = MENU_FIRST_ROW_Y;
    for item in MenuItem::ALL {
        canvas.draw_text(item.label(), Point::new(120, y), Font::Small, Color::WHITE, Color::BLACK)?;
        y += MENU_ROW_SPACING;
    }

    let mut line: String<32> = String::new();
    match sync_age {
        Some(age) => {
            let _ = write!(line, "Last sync: {}", age);
        }
        None => {
            let _ = line.push_str("Not synced today");
        }
    }
    canvas.draw_text(&line, Point::new(120, 200), Font::Tiny, Color::CYAN, Color::BLACK)?;
    canvas.draw_text("Double tap to exit", Point::new(120, 220), Font::Tiny, Color::CYAN, Color::BLACK)
}

/// Colour of the battery gauge fill
pub fn gauge_color(percent: u8) -> Color {
    match percent {
        51.. => Color::GREEN,
        21..=50 => Color::ORANGE,
        _ => Color::RED,
    }
}

/// Battery voltage, level, charge state and gauge
pub fn draw_battery_info<D: Canvas>(canvas: &mut D, battery: &BatteryStatus) -> Result<(), DisplayError> {
    title(canvas, "BATT", 30)?;

    caption(canvas, "Voltage:", Point::new(60, 80))?;
    canvas.draw_text(
        &battery.volts_string(),
        Point::new(170, 80),
        Font::Small,
        Color::WHITE,
        Color::BLACK,
    )?;

    caption(canvas, "Level:", Point::new(60, 110))?;
    let mut level: String<6> = String::new();
    let _ = write!(level, "{} %", battery.percent);
    let level_color = if battery.percent > 20 {
        Color::WHITE
    } else {
        Color::RED
    };
    canvas.draw_text(&level, Point::new(170, 110), Font::Small, level_color, Color::BLACK)?;

    caption(canvas, "Status:", Point::new(60, 140))?;
    let (charge, charge_color) = if battery.charging {
        ("Charging", Color::GREEN)
    } else {
        ("Discharge", Color::WHITE)
    };
    canvas.draw_text(charge, Point::new(170, 140), Font::Small, charge_color, Color::BLACK)?;

    canvas.draw_rect(GAUGE, Color::WHITE)?;
    canvas.fill_rect(
        Rect::new(GAUGE.x + GAUGE.width as i32, GAUGE.y + 10, 8, 20),
        Color::WHITE,
    )?;
    let fill = (GAUGE.width - 4) * u32::from(battery.percent.min(100)) / 100;
    if fill > 0 {
        canvas.fill_rect(
            Rect::new(GAUGE.x + 2, GAUGE.y + 2, fill, GAUGE.height - 4),
            gauge_color(battery.percent),
        )?;
    }

    canvas.draw_text("Tap to go back", Point::new(120, 225), Font::Tiny, Color::CYAN, Color::BLACK)
}

/// Network time screen without its status field
pub fn draw_ntp_sync<D: Canvas>(canvas: &mut D, ssid: &str, last_sync: &str) -> Result<(), DisplayError> {
    title(canvas, "NTP", 25)?;

    caption(canvas, "WiFi:", Point::new(50, 60))?;
    canvas.draw_text(ssid, Point::new(150, 60), Font::Small, Color::WHITE, Color::BLACK)?;

    caption(canvas, "Last:", Point::new(50, 85))?;
    canvas.draw_text(last_sync, Point::new(150, 85), Font::Small, Color::WHITE, Color::BLACK)?;

    caption(canvas, "Status:", Point::new(50, 110))?;

    canvas.draw_rect(Rect::new(60, 140, 120, 35), Color::CYAN)?;
    caption(canvas, "[ SYNC NOW ]", Point::new(120, 157))?;

    canvas.draw_text("Tap button to sync", Point::new(120, 190), Font::Tiny, Color::GRAY1, Color::BLACK)?;
    canvas.draw_text("Tap here to go back", Point::new(120, 220), Font::Tiny, Color::GRAY1, Color::BLACK)
}

/// Replace the NTP status text
pub fn draw_ntp_status<D: Canvas>(canvas: &mut D, status: NtpStatus) -> Result<(), DisplayError> {
    canvas.fill_rect(NTP_STATUS_FIELD, Color::BLACK)?;
    canvas.draw_text(status.label(), NTP_STATUS_AT, Font::Small, status.color(), Color::BLACK)
}
