//! Persistent settings storage trait

/// Storage keys for persisted settings
///
/// Values mirror the slots reserved in the watch's small NVS area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Full backlight level chosen by the user
    Brightness = 0,
    /// Date and time of the last successful network sync
    LastSync = 1,
}

impl StorageKey {
    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a key from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageKey::Brightness),
            1 => Some(StorageKey::LastSync),
            _ => None,
        }
    }
}

/// Errors from settings storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Underlying flash/NVS operation failed
    Io,
    /// Key not found
    NotFound,
    /// Buffer too small for the data
    BufferTooSmall,
    /// Stored bytes could not be decoded
    Corrupted,
}

/// Key-value storage for small settings records
pub trait SettingsStorage {
    /// Read a value into `buffer`, returning the number of bytes read
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError>;

    /// Write a value
    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError>;
}

/// Storage for boards without a settings area
///
/// Reads report `NotFound`, writes are discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStorage;

impl SettingsStorage for NoStorage {
    fn read(&mut self, _key: StorageKey, _buffer: &mut [u8]) -> Result<usize, StorageError> {
        Err(StorageError::NotFound)
    }

    fn write(&mut self, _key: StorageKey, _data: &[u8]) -> Result<(), StorageError> {
        Ok(())
    }
}
