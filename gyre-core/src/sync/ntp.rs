//! WiFi join, time query with retry, RTC update

use heapless::Vec;

use super::record::SyncRecord;
use crate::config::defaults::WIFI_POLL_MS;
use crate::config::{NtpConfig, WifiConfig, MAX_NTP_SERVERS};
use crate::error::SyncError;
use crate::time::CalendarTime;
use crate::traits::{Clock, Color, NetworkTime, Rtc, TimeSource};

/// Progress of the current (or last) sync attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NtpStatus {
    #[default]
    Idle,
    ConnectingWifi,
    WifiConnected,
    Syncing,
    Success,
    FailedWifi,
    FailedNtp,
}

impl NtpStatus {
    /// Text shown in the status field
    pub fn label(self) -> &'static str {
        match self {
            NtpStatus::Idle => "Ready",
            NtpStatus::ConnectingWifi => "Connecting WiFi...",
            NtpStatus::WifiConnected => "WiFi OK",
            NtpStatus::Syncing => "Syncing...",
            NtpStatus::Success => "Sync OK!",
            NtpStatus::FailedWifi => "WiFi Failed",
            NtpStatus::FailedNtp => "NTP Failed",
        }
    }

    /// Colour of the status text
    pub fn color(self) -> Color {
        match self {
            NtpStatus::Idle => Color::WHITE,
            NtpStatus::ConnectingWifi | NtpStatus::Syncing => Color::YELLOW,
            NtpStatus::WifiConnected | NtpStatus::Success => Color::GREEN,
            NtpStatus::FailedWifi | NtpStatus::FailedNtp => Color::RED,
        }
    }

    /// Whether the attempt has finished, successfully or not
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            NtpStatus::Success | NtpStatus::FailedWifi | NtpStatus::FailedNtp
        )
    }
}

/// Runs one synchronization at a time
#[derive(Debug, Clone)]
pub struct NtpSyncController {
    wifi: WifiConfig,
    ntp: NtpConfig,
    status: NtpStatus,
}

impl NtpSyncController {
    pub fn new(wifi: WifiConfig, ntp: NtpConfig) -> Self {
        Self {
            wifi,
            ntp,
            status: NtpStatus::Idle,
        }
    }

    pub fn status(&self) -> NtpStatus {
        self.status
    }

    /// SSID used for syncing
    pub fn ssid(&self) -> &str {
        self.wifi.ssid.as_str()
    }

    /// Whether a sync should run during start-up
    pub fn sync_on_boot(&self) -> bool {
        self.ntp.sync_on_boot
    }

    /// Join WiFi, fetch the time and write it to the RTC
    ///
    /// Blocks for up to the WiFi timeout plus every query attempt. Each
    /// status step is reported to `on_status` as it happens. The network
    /// is always disconnected before returning.
    pub fn perform_sync<N, R, C>(
        &mut self,
        network: &mut N,
        rtc: &mut R,
        clock: &mut C,
        record: &mut SyncRecord,
        mut on_status: impl FnMut(NtpStatus),
    ) -> Result<CalendarTime, SyncError>
    where
        N: NetworkTime,
        R: Rtc,
        C: Clock,
    {
        #[cfg(feature = "defmt")]
        defmt::info!("time sync starting, ssid {}", self.wifi.ssid.as_str());

        let result = self
            .connect(network, clock, &mut on_status)
            .and_then(|()| self.query(network, clock, &mut on_status));

        if let Ok(time) = result {
            rtc.set_date_time(&time);
            record.record_success(clock.now_ms(), time);
            self.set_status(NtpStatus::Success, &mut on_status);
            #[cfg(feature = "defmt")]
            defmt::info!("RTC updated to {}", time);
        }

        network.disconnect();
        result
    }

    fn set_status(&mut self, status: NtpStatus, on_status: &mut impl FnMut(NtpStatus)) {
        self.status = status;
        on_status(status);
    }

    fn connect<N: NetworkTime, C: Clock>(
        &mut self,
        network: &mut N,
        clock: &mut C,
        on_status: &mut impl FnMut(NtpStatus),
    ) -> Result<(), SyncError> {
        self.set_status(NtpStatus::ConnectingWifi, on_status);
        network.begin_connect(self.wifi.ssid.as_str(), self.wifi.password.as_str());

        let max_polls = u32::from(self.wifi.timeout_secs) * (1000 / WIFI_POLL_MS);
        let mut polls = 0;
        while !network.is_connected() {
            if polls >= max_polls {
                #[cfg(feature = "defmt")]
                defmt::warn!("WiFi join timed out after {} polls", polls);
                self.set_status(NtpStatus::FailedWifi, on_status);
                return Err(SyncError::WifiConnect);
            }
            clock.delay_ms(WIFI_POLL_MS);
            polls += 1;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("WiFi connected after {} polls", polls);
        self.set_status(NtpStatus::WifiConnected, on_status);
        Ok(())
    }

    fn query<N: NetworkTime, C: Clock>(
        &mut self,
        network: &mut N,
        clock: &mut C,
        on_status: &mut impl FnMut(NtpStatus),
    ) -> Result<CalendarTime, SyncError> {
        self.set_status(NtpStatus::Syncing, on_status);

        if let Some(time) = self.fetch(network, clock) {
            return Ok(time);
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("time query failed after {} attempts", self.ntp.max_attempts);
        self.set_status(NtpStatus::FailedNtp, on_status);
        Err(SyncError::TimeQuery)
    }

    /// Query the time source until a valid answer or the attempts run out
    fn fetch<N: NetworkTime, C: Clock>(&self, network: &mut N, clock: &mut C) -> Option<CalendarTime> {
        let servers: Vec<&str, MAX_NTP_SERVERS> =
            self.ntp.servers.iter().map(|s| s.as_str()).collect();
        let source = TimeSource {
            gmt_offset_secs: self.ntp.gmt_offset_secs,
            daylight_offset_secs: self.ntp.daylight_offset_secs,
            servers: &servers,
        };

        for attempt in 0..self.ntp.max_attempts {
            if attempt > 0 {
                clock.delay_ms(self.ntp.retry_delay_ms);
            }
            if let Some(time) = network.query_time(&source) {
                if time.is_valid() {
                    return Some(time);
                }
                // The client answers 1970 until its first exchange completes
                #[cfg(feature = "defmt")]
                defmt::warn!("attempt {}: rejected time {}", attempt + 1, time);
            }
        }
        None
    }
}
