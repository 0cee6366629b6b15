//! Bookkeeping of the last successful sync

use core::fmt::Write;

use heapless::String;

use crate::time::CalendarTime;

/// Outcome of the most recent successful sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SyncRecord {
    /// Monotonic time of the sync, `None` if restored from storage
    pub last_sync_ms: Option<u64>,
    pub synced_today: bool,
    /// Wall-clock time written to the RTC
    pub last_synced_at: Option<CalendarTime>,
}

impl SyncRecord {
    /// Record a clock update made at monotonic time `now_ms`
    pub fn record_success(&mut self, now_ms: u64, time: CalendarTime) {
        self.last_sync_ms = Some(now_ms);
        self.synced_today = true;
        self.last_synced_at = Some(time);
    }

    /// Restore a sync persisted before the last reset
    ///
    /// The monotonic timestamp does not survive a reset, so only the
    /// wall-clock date is kept; it counts as today's sync when it falls
    /// on the RTC's current date.
    pub fn restore(&mut self, stored: CalendarTime, today: &CalendarTime) {
        self.last_sync_ms = None;
        self.last_synced_at = Some(stored);
        self.synced_today = stored.is_valid() && stored.same_date(today);
    }

    /// Human-readable age of the last sync
    pub fn age(&self, now_ms: u64) -> String<16> {
        let mut s = String::new();
        if !self.synced_today {
            let _ = s.push_str("Never");
            return s;
        }

        let Some(at) = self.last_sync_ms else {
            let _ = s.push_str("Today");
            return s;
        };

        let elapsed = now_ms.saturating_sub(at) / 1000;
        let _ = if elapsed < 60 {
            write!(s, "{}s ago", elapsed)
        } else if elapsed < 3600 {
            write!(s, "{}m ago", elapsed / 60)
        } else {
            write!(s, "{}h ago", elapsed / 3600)
        };
        s
    }
}
