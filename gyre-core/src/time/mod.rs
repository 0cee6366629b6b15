//! Wall-clock time types

pub mod calendar;

pub use calendar::{weekday, CalendarTime, MIN_VALID_YEAR};
