//! Real-time clock trait

use heapless::String;

use crate::time::CalendarTime;

/// Trait for the battery-backed RTC
pub trait Rtc {
    /// Write a new date and time
    fn set_date_time(&mut self, time: &CalendarTime);

    /// Read the current date and time
    fn now(&mut self) -> CalendarTime;

    /// Current time as `HH:MM:SS`
    fn formatted(&mut self) -> String<8> {
        self.now().time_string()
    }
}
