//! Screen rendering
//!
//! [`Renderer`] dispatches on the active screen. A screen change sets the
//! full-redraw flag; the next render clears the panel and draws the
//! screen from scratch. After that only changed fields are touched.

pub mod clock_face;
pub mod coords;
pub mod palette;
pub mod screens;

pub use clock_face::{ClockFrame, ClockRenderer, ClockSnapshot};
pub use coords::CoordinateTable;
pub use palette::AccentPalette;

use crate::config::WatchConfig;
use crate::power::BatteryStatus;
use crate::state::AppState;
use crate::sync::{NtpStatus, SyncRecord};
use crate::time::CalendarTime;
use crate::traits::{Canvas, Color, DisplayError, Point};

/// Everything a frame may show
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub now_ms: u64,
    pub time: CalendarTime,
    pub battery: BatteryStatus,
    pub brightness: u8,
    pub record: &'a SyncRecord,
    pub ntp_status: NtpStatus,
    pub ssid: &'a str,
}

/// Per-screen renderer state
#[derive(Debug, Clone)]
pub struct Renderer {
    center: Point,
    ring_radius: i32,
    coords: Option<CoordinateTable>,
    clock: ClockRenderer,
    full_redraw: bool,
    /// Status currently shown on the NTP screen
    ntp_drawn: Option<NtpStatus>,
}

impl Renderer {
    pub fn new(config: &WatchConfig) -> Self {
        let center = config.display.center;
        Self {
            center,
            ring_radius: config.display.ring_radius,
            coords: None,
            clock: ClockRenderer::new(center, config.pulse_step_ms, config.accent_seed),
            full_redraw: true,
            ntp_drawn: None,
        }
    }

    /// Build the coordinate table if it does not exist yet
    pub fn init_coordinates(&mut self) {
        if self.coords.is_none() {
            self.coords = Some(CoordinateTable::build(self.center, self.ring_radius));
        }
    }

    /// Clear and redraw the whole screen on the next render
    pub fn mark_full_redraw(&mut self) {
        self.full_redraw = true;
    }

    pub fn needs_full_redraw(&self) -> bool {
        self.full_redraw
    }

    pub fn clock(&self) -> &ClockRenderer {
        &self.clock
    }

    /// Draw one frame of `state`
    pub fn render<D: Canvas>(
        &mut self,
        canvas: &mut D,
        state: AppState,
        view: &View<'_>,
    ) -> Result<(), DisplayError> {
        self.init_coordinates();
        let full = self.full_redraw;
        if full {
            canvas.clear(Color::BLACK)?;
        }

        match state {
            AppState::Menu => {
                if full {
                    let age = view.record.age(view.now_ms);
                    let sync_age = view.record.synced_today.then_some(age.as_str());
                    screens::draw_menu(canvas, sync_age)?;
                }
            }
            AppState::BatteryInfo => {
                if full {
                    screens::draw_battery_info(canvas, &view.battery)?;
                }
            }
            AppState::NtpSync => {
                if full {
                    let age = view.record.age(view.now_ms);
                    screens::draw_ntp_sync(canvas, view.ssid, &age)?;
                    self.ntp_drawn = None;
                }
                self.draw_ntp_status(canvas, view.ntp_status)?;
            }
            // Screens without their own layout show the clock
            AppState::Clock | AppState::Settings | AppState::WatchFace | AppState::WifiSettings => {
                let frame = ClockFrame {
                    time: view.time,
                    now_ms: view.now_ms,
                    battery_percent: view.battery.percent,
                    brightness: view.brightness,
                    synced_today: view.record.synced_today,
                };
                let Some(coords) = self.coords.as_ref() else {
                    return Err(DisplayError::NotInitialized);
                };
                self.clock.draw(canvas, coords, &frame, full)?;
            }
        }

        self.full_redraw = false;
        Ok(())
    }

    /// Redraw the NTP status field if it differs from what is shown
    pub fn draw_ntp_status<D: Canvas>(
        &mut self,
        canvas: &mut D,
        status: NtpStatus,
    ) -> Result<(), DisplayError> {
        if self.ntp_drawn == Some(status) {
            return Ok(());
        }
        screens::draw_ntp_status(canvas, status)?;
        self.ntp_drawn = Some(status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{DrawCall, MockCanvas};

    fn view(record: &SyncRecord, status: NtpStatus, now_ms: u64) -> View<'_> {
        View {
            now_ms,
            time: CalendarTime::new(2024, 1, 1, 8, 0, 0),
            battery: BatteryStatus::default(),
            brightness: 255,
            record,
            ntp_status: status,
            ssid: "home",
        }
    }

    #[test]
    fn test_static_screens_draw_once() {
        let record = SyncRecord::default();
        let mut renderer = Renderer::new(&WatchConfig::default());
        let mut canvas = MockCanvas::default();

        for state in [AppState::Menu, AppState::BatteryInfo] {
            renderer.mark_full_redraw();
            renderer.render(&mut canvas, state, &view(&record, NtpStatus::Idle, 0)).unwrap();
            assert_eq!(canvas.take()[0], DrawCall::Clear(Color::BLACK));
            renderer.render(&mut canvas, state, &view(&record, NtpStatus::Idle, 500)).unwrap();
            assert!(canvas.take().is_empty());
        }
    }

    #[test]
    fn test_ntp_status_redrawn_on_change_only() {
        let record = SyncRecord::default();
        let mut renderer = Renderer::new(&WatchConfig::default());
        let mut canvas = MockCanvas::default();

        renderer.render(&mut canvas, AppState::NtpSync, &view(&record, NtpStatus::Idle, 0)).unwrap();
        assert!(canvas.has_text("Ready"));
        canvas.take();

        renderer.render(&mut canvas, AppState::NtpSync, &view(&record, NtpStatus::Idle, 20)).unwrap();
        assert!(canvas.take().is_empty());

        renderer.render(&mut canvas, AppState::NtpSync, &view(&record, NtpStatus::FailedNtp, 40)).unwrap();
        assert_eq!(canvas.texts_in(Color::RED), ["NTP Failed"]);
        assert_eq!(canvas.calls().len(), 2);
    }

    #[test]
    fn test_clock_same_instant_is_idempotent() {
        let record = SyncRecord::default();
        let mut renderer = Renderer::new(&WatchConfig::default());
        let mut canvas = MockCanvas::default();
        let v = view(&record, NtpStatus::Idle, 1234);

        renderer.render(&mut canvas, AppState::Clock, &v).unwrap();
        assert!(!renderer.needs_full_redraw());
        canvas.take();
        renderer.render(&mut canvas, AppState::Clock, &v).unwrap();
        assert!(canvas.calls().is_empty());
    }

    #[test]
    fn test_failed_full_redraw_is_retried() {
        let record = SyncRecord::default();
        let mut renderer = Renderer::new(&WatchConfig::default());
        let mut canvas = MockCanvas::default();
        canvas.set_failing(true);
        assert!(renderer.render(&mut canvas, AppState::Menu, &view(&record, NtpStatus::Idle, 0)).is_err());
        assert!(renderer.needs_full_redraw());
        canvas.set_failing(false);
        renderer.render(&mut canvas, AppState::Menu, &view(&record, NtpStatus::Idle, 0)).unwrap();
        assert!(canvas.has_text("MENU"));
    }

    #[test]
    fn test_menu_shows_sync_age() {
        let mut record = SyncRecord::default();
        record.record_success(0, CalendarTime::new(2024, 1, 1, 7, 0, 0));
        let mut renderer = Renderer::new(&WatchConfig::default());
        let mut canvas = MockCanvas::default();
        renderer.render(&mut canvas, AppState::Menu, &view(&record, NtpStatus::Idle, 120_000)).unwrap();
        assert!(canvas.has_text("Last sync: 2m ago"));
    }
}
