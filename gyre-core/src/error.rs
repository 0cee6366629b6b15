//! Crate-wide error type

use crate::traits::{DisplayError, StorageError};

/// Collaborator the watch cannot run without
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Peripheral {
    Display,
    Touch,
    Rtc,
}

/// Reasons a network time sync did not update the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncError {
    /// Access point not joined before the timeout
    WifiConnect,
    /// No valid time after every query attempt
    TimeQuery,
}

/// Top-level error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A required collaborator is missing (fatal)
    HardwareInit(Peripheral),
    /// Time sync failed (non-fatal)
    Sync(SyncError),
    /// A drawing call failed
    Display(DisplayError),
    /// Settings could not be read or written
    Storage(StorageError),
}

impl From<SyncError> for Error {
    fn from(e: SyncError) -> Self {
        Error::Sync(e)
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Display(e)
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Error::Storage(e)
    }
}

impl Error {
    /// Whether the watch cannot continue after this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::HardwareInit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Error::from(SyncError::WifiConnect), Error::Sync(SyncError::WifiConnect));
        assert_eq!(
            Error::from(DisplayError::Communication),
            Error::Display(DisplayError::Communication)
        );
        assert_eq!(Error::from(StorageError::Io), Error::Storage(StorageError::Io));
    }

    #[test]
    fn test_fatality() {
        assert!(Error::HardwareInit(Peripheral::Rtc).is_fatal());
        assert!(!Error::Sync(SyncError::TimeQuery).is_fatal());
        assert!(!Error::Display(DisplayError::NotInitialized).is_fatal());
    }
}
