//! Application context
//!
//! [`Watch`] owns every collaborator and all mutable UI state. One call
//! to [`Watch::tick`] is one iteration of the polling loop: sample input,
//! route gestures, render, apply the power policy.

use crate::config::WatchConfig;
use crate::error::{Error, Peripheral};
use crate::input::{GestureDetector, IrqFlag, TouchSample};
use crate::power::{BatteryStatus, PowerAction, PowerController};
use crate::render::{Renderer, View};
use crate::settings::{self, Settings};
use crate::state::{Action, AppState, Event};
use crate::sync::{NtpStatus, NtpSyncController, SyncRecord};
use crate::time::CalendarTime;
use crate::traits::{
    Backlight, Canvas, Clock, IrqCause, NetworkTime, Platform, PowerIc, Rtc, Sleep, StorageKey,
    TouchPanel, WakeSource,
};

/// Board collaborators handed to [`Watch::new`]
///
/// Display, touch panel and RTC are required. A board without a power
/// IC reads an empty battery and ignores button interrupts.
pub struct Peripherals<P: Platform> {
    pub display: Option<P::Display>,
    pub touch: Option<P::Touch>,
    pub rtc: Option<P::Rtc>,
    pub power: Option<P::Power>,
    pub backlight: P::Backlight,
    pub network: P::Network,
    pub sleep: P::Sleep,
    pub clock: P::Clock,
    pub storage: P::Storage,
}

/// The watch application
pub struct Watch<'a, P: Platform> {
    display: P::Display,
    touch: P::Touch,
    rtc: P::Rtc,
    power: Option<P::Power>,
    backlight: P::Backlight,
    network: P::Network,
    sleep: P::Sleep,
    clock: P::Clock,
    storage: P::Storage,

    irq: &'a IrqFlag,
    rotation: u8,
    tick_period_ms: u32,

    state: AppState,
    gestures: GestureDetector,
    power_ctl: PowerController,
    sync: NtpSyncController,
    record: SyncRecord,
    renderer: Renderer,
    /// Deep sleep was requested; nothing runs after that
    halted: bool,
}

impl<'a, P: Platform> Watch<'a, P> {
    /// Assemble the watch from its collaborators
    pub fn new(parts: Peripherals<P>, irq: &'a IrqFlag, config: WatchConfig) -> Result<Self, Error> {
        let display = parts
            .display
            .ok_or(Error::HardwareInit(Peripheral::Display))?;
        let touch = parts.touch.ok_or(Error::HardwareInit(Peripheral::Touch))?;
        let rtc = parts.rtc.ok_or(Error::HardwareInit(Peripheral::Rtc))?;

        #[cfg(feature = "defmt")]
        if parts.power.is_none() {
            defmt::warn!("no power IC, battery reads 0%");
        }

        let now = parts.clock.now_ms();
        let renderer = Renderer::new(&config);
        let WatchConfig {
            wifi,
            ntp,
            gesture,
            power,
            display: display_config,
            tick_period_ms,
            ..
        } = config;

        Ok(Self {
            display,
            touch,
            rtc,
            power: parts.power,
            backlight: parts.backlight,
            network: parts.network,
            sleep: parts.sleep,
            clock: parts.clock,
            storage: parts.storage,
            irq,
            rotation: display_config.rotation,
            tick_period_ms,
            state: AppState::Clock,
            gestures: GestureDetector::new(gesture),
            power_ctl: PowerController::new(power, now),
            sync: NtpSyncController::new(wifi, ntp),
            record: SyncRecord::default(),
            renderer,
            halted: false,
        })
    }

    /// Boot sequence, run once before the first tick
    ///
    /// A failed boot sync is logged and otherwise ignored.
    pub fn start(&mut self) -> Result<(), Error> {
        #[cfg(feature = "defmt")]
        defmt::info!("starting watch");

        self.display.set_rotation(self.rotation)?;
        self.backlight.set_level(self.power_ctl.brightness());

        self.irq.take();
        if let Some(power) = self.power.as_mut() {
            power.clear_irq();
        }

        self.renderer.init_coordinates();
        self.restore_settings();

        if self.sync.sync_on_boot() {
            match self.sync_now() {
                Ok(_) => {}
                Err(Error::Sync(_e)) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("boot sync failed ({}), keeping RTC time", _e);
                }
                Err(e) => return Err(e),
            }
        }

        let now = self.clock.now_ms();
        let action = self.power_ctl.on_activity(now);
        self.apply_power(action);
        self.renderer.mark_full_redraw();
        Ok(())
    }

    /// One iteration of the polling loop
    pub fn tick(&mut self) -> Result<(), Error> {
        if self.halted {
            return Ok(());
        }

        let now = self.clock.now_ms();
        let sample = TouchSample::from_poll(self.touch.poll());
        if sample.pressed {
            let action = self.power_ctl.on_activity(now);
            self.apply_power(action);
        }

        if self.irq.take() {
            self.handle_irq(now);
        }

        let gesture = self.gestures.update(sample, now);
        if let Some(event) = Event::from_gesture(gesture, self.gestures.touch().y) {
            self.handle_event(event, now)?;
        }

        self.render()?;

        let now = self.clock.now_ms();
        let action = self.power_ctl.evaluate(now);
        self.apply_power(action);
        Ok(())
    }

    /// Tick forever at the configured period, until deep sleep
    ///
    /// Drawing errors are logged and the frame is retried on the next tick.
    pub fn run(&mut self) {
        while !self.halted {
            if let Err(_e) = self.tick() {
                #[cfg(feature = "defmt")]
                defmt::error!("tick failed: {}", _e);
            }
            self.clock.delay_ms(self.tick_period_ms);
        }
    }

    /// Run a network time sync now
    ///
    /// While the NTP screen is shown its status field follows every step.
    /// A successful sync is persisted.
    pub fn sync_now(&mut self) -> Result<CalendarTime, Error> {
        let show_progress = self.state == AppState::NtpSync;
        let renderer = &mut self.renderer;
        let display = &mut self.display;
        let mut draw_error = None;

        let result = self.sync.perform_sync(
            &mut self.network,
            &mut self.rtc,
            &mut self.clock,
            &mut self.record,
            |status| {
                #[cfg(feature = "defmt")]
                defmt::debug!("sync status {}", status);
                if show_progress {
                    if let Err(e) = renderer.draw_ntp_status(display, status) {
                        draw_error = draw_error.or(Some(e));
                    }
                }
            },
        );

        if show_progress {
            // Refresh the "Last:" line
            self.renderer.mark_full_redraw();
        }

        if let Ok(time) = &result {
            if let Err(_e) = settings::store(&mut self.storage, StorageKey::LastSync, time) {
                #[cfg(feature = "defmt")]
                defmt::warn!("could not persist sync time: {}", _e);
            }
        }

        if let Some(e) = draw_error {
            return Err(Error::Display(e));
        }
        result.map_err(Error::from)
    }

    /// Change and persist the full backlight level
    pub fn set_brightness_level(&mut self, level: u8) -> Result<(), Error> {
        if let Some(applied) = self.power_ctl.set_full_brightness(level) {
            self.backlight.set_level(applied);
        }
        let full = self.power_ctl.full_brightness();
        #[cfg(feature = "defmt")]
        defmt::info!("full brightness set to {}", full);
        settings::store(&mut self.storage, StorageKey::Brightness, &full)?;
        Ok(())
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn ntp_status(&self) -> NtpStatus {
        self.sync.status()
    }

    pub fn sync_record(&self) -> &SyncRecord {
        &self.record
    }

    /// Level currently applied to the backlight
    pub fn brightness(&self) -> u8 {
        self.power_ctl.brightness()
    }

    /// Whether deep sleep has been requested
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    fn restore_settings(&mut self) {
        let stored = Settings::load(&mut self.storage);

        if let Some(level) = stored.brightness {
            if let Some(applied) = self.power_ctl.set_full_brightness(level) {
                self.backlight.set_level(applied);
            }
        }

        if let Some(at) = stored.last_sync {
            let today = self.rtc.now();
            self.record.restore(at, &today);
            #[cfg(feature = "defmt")]
            defmt::info!("last sync {}, synced today: {}", at, self.record.synced_today);
        }
    }

    fn handle_event(&mut self, event: Event, now: u64) -> Result<(), Error> {
        match self.state.handle(event) {
            Action::Stay => Ok(()),
            Action::Switch(next) => {
                self.switch_to(next, now);
                Ok(())
            }
            Action::StartSync => match self.sync_now() {
                Ok(_) | Err(Error::Sync(_)) => Ok(()),
                Err(e) => Err(e),
            },
        }
    }

    fn switch_to(&mut self, next: AppState, now: u64) {
        #[cfg(feature = "defmt")]
        defmt::info!("screen {} -> {}", self.state, next);
        self.state = next;
        self.renderer.mark_full_redraw();
        let action = self.power_ctl.on_activity(now);
        self.apply_power(action);
    }

    fn handle_irq(&mut self, now: u64) {
        let Some(power) = self.power.as_mut() else {
            return;
        };
        let cause = power.read_irq_cause();
        power.clear_irq();

        if cause.contains(IrqCause::PEK_SHORT_PRESS) {
            #[cfg(feature = "defmt")]
            defmt::debug!("power key pressed");
            let action = self.power_ctl.on_activity(now);
            self.apply_power(action);
        }
    }

    fn render(&mut self) -> Result<(), Error> {
        let view = View {
            now_ms: self.clock.now_ms(),
            time: self.rtc.now(),
            battery: BatteryStatus::read(self.power.as_mut()),
            brightness: self.power_ctl.brightness(),
            record: &self.record,
            ntp_status: self.sync.status(),
            ssid: self.sync.ssid(),
        };
        self.renderer.render(&mut self.display, self.state, &view)?;
        Ok(())
    }

    fn apply_power(&mut self, action: PowerAction) {
        match action {
            PowerAction::None => {}
            PowerAction::Dim(level) | PowerAction::Restore(level) => self.backlight.set_level(level),
            PowerAction::Sleep => self.enter_sleep(),
        }
    }

    fn enter_sleep(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("entering deep sleep");
        self.network.disconnect();
        self.backlight.set_level(0);
        self.halted = true;
        self.sleep.enter_deep_sleep(WakeSource::ButtonLow);
    }
}
