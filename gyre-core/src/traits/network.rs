//! Network link and time-query trait

use crate::time::CalendarTime;

/// Parameters for one network time query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSource<'a> {
    /// Offset from GMT applied to the returned time (seconds)
    pub gmt_offset_secs: i32,
    /// Additional daylight-saving offset (seconds)
    pub daylight_offset_secs: i32,
    /// Time servers, tried in order by the client
    pub servers: &'a [&'a str],
}

/// Trait for the WiFi link and its NTP client
///
/// Every call is blocking. Connecting is split into a request and a
/// status poll so the caller controls the timeout.
pub trait NetworkTime {
    /// Start joining the access point in station mode
    fn begin_connect(&mut self, ssid: &str, password: &str);

    /// Check whether the link is up
    fn is_connected(&mut self) -> bool;

    /// Drop the link and power the radio down
    ///
    /// Must be safe to call when not connected.
    fn disconnect(&mut self);

    /// Query the current local time
    ///
    /// Returns `None` if no time could be obtained on this attempt.
    fn query_time(&mut self, source: &TimeSource<'_>) -> Option<CalendarTime>;
}
