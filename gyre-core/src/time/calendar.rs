//! Calendar time and weekday arithmetic

use core::fmt::Write;

use heapless::String;
use serde::{Deserialize, Serialize};

/// Earliest year accepted from the network time source
///
/// The time client reports a zeroed 1970 clock until the first
/// successful exchange, so anything older is treated as "not set".
pub const MIN_VALID_YEAR: u16 = 2016;

/// Weekday labels indexed by Zeller's congruence result (0 = Saturday)
pub const WEEKDAY_NAMES: [&str; 7] = ["SAT", "SUN", "MON", "TUE", "WED", "THU", "FRI"];

/// Wall-clock date and time as kept by the RTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CalendarTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check that every field is in range and the year has been set
    pub fn is_valid(&self) -> bool {
        self.year >= MIN_VALID_YEAR
            && (1..=12).contains(&self.month)
            && (1..=days_in_month(self.month, self.year)).contains(&self.day)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }

    /// Same calendar day, ignoring the time of day
    pub fn same_date(&self, other: &CalendarTime) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }

    /// Three-letter weekday of this date
    pub fn weekday(&self) -> &'static str {
        weekday(self.day, self.month, self.year)
    }

    /// Format as `HH:MM:SS`
    pub fn time_string(&self) -> String<8> {
        let mut s = String::new();
        let _ = write!(s, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second);
        s
    }

    /// Format as `DD-MM-YYYY`
    pub fn date_string(&self) -> String<10> {
        let mut s = String::new();
        let _ = write!(s, "{:02}-{:02}-{:04}", self.day, self.month, self.year);
        s
    }
}

/// Whether `year` is a Gregorian leap year
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`, 0 for an invalid month
pub fn days_in_month(month: u8, year: u16) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Weekday name for a date using Zeller's congruence
///
/// January and February count as months 13 and 14 of the previous year.
pub fn weekday(day: u8, month: u8, year: u16) -> &'static str {
    let mut m = month as i32;
    let mut y = year as i32;
    if m < 3 {
        m += 12;
        y -= 1;
    }

    let k = y % 100;
    let j = y / 100;
    let h = (day as i32 + (13 * (m + 1)) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);

    WEEKDAY_NAMES[h as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_reference_dates() {
        assert_eq!(weekday(1, 1, 2024), "MON");
        assert_eq!(weekday(15, 3, 2024), "FRI");
        assert_eq!(weekday(29, 2, 2024), "THU");
        assert_eq!(weekday(1, 1, 2000), "SAT");
        assert_eq!(weekday(4, 7, 1976), "SUN");
        assert_eq!(weekday(25, 12, 2023), "MON");
        assert_eq!(weekday(31, 12, 2099), "THU");
    }

    #[test]
    fn test_weekday_january_february_use_previous_year() {
        // 2023-02-28 is a Tuesday, 2023-03-01 a Wednesday
        assert_eq!(weekday(28, 2, 2023), "TUE");
        assert_eq!(weekday(1, 3, 2023), "WED");
    }

    #[test]
    fn test_validity() {
        assert!(CalendarTime::new(2024, 3, 15, 10, 30, 0).is_valid());
        assert!(CalendarTime::new(2024, 2, 29, 23, 59, 59).is_valid());
        assert!(!CalendarTime::new(2023, 2, 29, 0, 0, 0).is_valid());
        assert!(!CalendarTime::new(1970, 1, 1, 0, 0, 0).is_valid());
        assert!(!CalendarTime::new(2024, 13, 1, 0, 0, 0).is_valid());
        assert!(!CalendarTime::new(2024, 1, 1, 24, 0, 0).is_valid());
        assert!(!CalendarTime::default().is_valid());
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_formatting() {
        let t = CalendarTime::new(2024, 3, 5, 7, 8, 9);
        assert_eq!(t.time_string().as_str(), "07:08:09");
        assert_eq!(t.date_string().as_str(), "05-03-2024");
        assert_eq!(t.weekday(), "TUE");
    }

    #[test]
    fn test_same_date() {
        let a = CalendarTime::new(2024, 3, 15, 0, 0, 1);
        let b = CalendarTime::new(2024, 3, 15, 23, 59, 59);
        let c = CalendarTime::new(2024, 3, 16, 0, 0, 0);
        assert!(a.same_date(&b));
        assert!(!a.same_date(&c));
    }
}
