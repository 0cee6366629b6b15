//! Screen state machine
//!
//! Screen changes are a pure function of the current screen and a
//! gesture event.

use super::events::{Action, Event};

/// Top of the first menu row band
pub const MENU_TOP_Y: i16 = 55;

/// Height of each menu row band
pub const MENU_ROW_HEIGHT: i16 = 35;

/// Sync button band on the NTP screen, `[start, end)`
pub const SYNC_BUTTON_Y: (i16, i16) = (130, 180);

/// Rows at or below this go back from the NTP screen
pub const NTP_BACK_Y: i16 = 200;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppState {
    /// Rotating clock face
    #[default]
    Clock,
    /// Main menu
    Menu,
    /// Settings (listed in the menu, no screen yet)
    Settings,
    /// Battery voltage and level
    BatteryInfo,
    /// Watch face picker (no screen yet)
    WatchFace,
    /// Network time sync
    NtpSync,
    /// WiFi credentials (no screen yet)
    WifiSettings,
}

/// Entries of the main menu, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    NtpSync,
    BatteryInfo,
    Settings,
    Exit,
}

impl MenuItem {
    /// Menu entries in display order
    pub const ALL: [MenuItem; 4] = [
        MenuItem::NtpSync,
        MenuItem::BatteryInfo,
        MenuItem::Settings,
        MenuItem::Exit,
    ];

    /// Label drawn in the menu
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::NtpSync => "1. NTP Sync",
            MenuItem::BatteryInfo => "2. Battery Info",
            MenuItem::Settings => "3. Settings",
            MenuItem::Exit => "4. Exit",
        }
    }

    /// Map a release row to the menu entry under it
    pub fn at_y(y: i16) -> Option<MenuItem> {
        if y < MENU_TOP_Y {
            return None;
        }
        let row = ((y - MENU_TOP_Y) / MENU_ROW_HEIGHT) as usize;
        Self::ALL.get(row).copied()
    }
}

impl AppState {
    /// Check if this screen has a dedicated renderer
    pub fn has_screen(&self) -> bool {
        matches!(
            self,
            AppState::Clock | AppState::Menu | AppState::BatteryInfo | AppState::NtpSync
        )
    }

    /// Process an event and return what the controller should do
    pub fn handle(self, event: Event) -> Action {
        use AppState::*;
        use Event::*;

        match (self, event) {
            (Clock, DoubleTap) => Action::Switch(Menu),
            (Clock, Tap { .. }) => Action::Stay,

            (Menu, DoubleTap) => Action::Switch(Clock),
            (Menu, Tap { y }) => match MenuItem::at_y(y) {
                Some(MenuItem::NtpSync) => Action::Switch(NtpSync),
                Some(MenuItem::BatteryInfo) => Action::Switch(BatteryInfo),
                // Listed but not implemented yet
                Some(MenuItem::Settings) => Action::Stay,
                Some(MenuItem::Exit) => Action::Switch(Clock),
                None => Action::Stay,
            },

            (NtpSync, DoubleTap) => Action::Switch(Clock),
            (NtpSync, Tap { y }) if (SYNC_BUTTON_Y.0..SYNC_BUTTON_Y.1).contains(&y) => {
                Action::StartSync
            }
            (NtpSync, Tap { y }) if y >= NTP_BACK_Y => Action::Switch(Menu),
            (NtpSync, Tap { .. }) => Action::Stay,

            (BatteryInfo, DoubleTap | Tap { .. }) => Action::Switch(Menu),

            // Screens without a renderer: double tap escapes to the clock
            (Settings | WatchFace | WifiSettings, DoubleTap) => Action::Switch(Clock),
            (Settings | WatchFace | WifiSettings, Tap { .. }) => Action::Stay,
        }
    }

    /// Apply an action, returning the next screen
    pub fn transition(self, event: Event) -> Self {
        match self.handle(event) {
            Action::Switch(next) => next,
            Action::Stay | Action::StartSync => self,
        }
    }
}
