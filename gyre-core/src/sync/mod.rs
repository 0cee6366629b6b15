//! Network time synchronization
//!
//! A sync joins WiFi only for the duration of one time query, writes the
//! result to the RTC and drops the link again.

pub mod ntp;
pub mod record;

pub use ntp::{NtpStatus, NtpSyncController};
pub use record::SyncRecord;
