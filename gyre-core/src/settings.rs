//! Persisted user settings
//!
//! Each setting is one postcard-encoded record under its own key.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::time::CalendarTime;
use crate::traits::{SettingsStorage, StorageError, StorageKey};

/// Largest encoded record
pub const MAX_RECORD_SIZE: usize = 16;

/// Settings restored at boot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// User-chosen full backlight level
    pub brightness: Option<u8>,
    /// Time written to the RTC by the last successful sync
    pub last_sync: Option<CalendarTime>,
}

/// Read and decode one record, `Ok(None)` if it was never written
pub fn load<S, T>(storage: &mut S, key: StorageKey) -> Result<Option<T>, StorageError>
where
    S: SettingsStorage,
    T: DeserializeOwned,
{
    let mut buffer = [0u8; MAX_RECORD_SIZE];
    let len = match storage.read(key, &mut buffer) {
        Ok(len) => len,
        Err(StorageError::NotFound) => return Ok(None),
        Err(e) => return Err(e),
    };

    let bytes = buffer.get(..len).ok_or(StorageError::BufferTooSmall)?;
    let value = postcard::from_bytes(bytes).map_err(|_| StorageError::Corrupted)?;
    Ok(Some(value))
}

/// Encode and write one record
pub fn store<S, T>(storage: &mut S, key: StorageKey, value: &T) -> Result<(), StorageError>
where
    S: SettingsStorage,
    T: Serialize,
{
    let mut buffer = [0u8; MAX_RECORD_SIZE];
    let bytes = postcard::to_slice(value, &mut buffer).map_err(|_| StorageError::BufferTooSmall)?;

    #[cfg(feature = "defmt")]
    defmt::debug!("storing {} bytes under key {}", bytes.len(), key.as_u8());

    storage.write(key, bytes)
}

impl Settings {
    /// Load every setting
    ///
    /// A record that fails to load is logged and treated as absent, so one
    /// bad record never blocks the others.
    pub fn load<S: SettingsStorage>(storage: &mut S) -> Self {
        let brightness = load(storage, StorageKey::Brightness).unwrap_or_else(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("brightness setting unreadable: {}", _e);
            None
        });
        let last_sync = load(storage, StorageKey::LastSync).unwrap_or_else(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("last sync setting unreadable: {}", _e);
            None
        });
        Self {
            brightness,
            last_sync,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockStorage;
    use crate::traits::NoStorage;

    #[test]
    fn test_store_and_load_brightness() {
        let mut storage = MockStorage::default();
        store(&mut storage, StorageKey::Brightness, &180u8).unwrap();
        assert_eq!(load::<_, u8>(&mut storage, StorageKey::Brightness), Ok(Some(180)));
    }

    #[test]
    fn test_last_sync_record() {
        let mut storage = MockStorage::default();
        let t = CalendarTime::new(2024, 3, 15, 10, 30, 0);
        store(&mut storage, StorageKey::LastSync, &t).unwrap();
        let settings = Settings::load(&mut storage);
        assert_eq!(settings.last_sync, Some(t));
        assert_eq!(settings.brightness, None);
    }

    #[test]
    fn test_missing_records() {
        assert_eq!(Settings::load(&mut NoStorage), Settings::default());
    }

    #[test]
    fn test_corrupted_record_is_skipped() {
        let mut storage = MockStorage::default();
        storage.put(StorageKey::LastSync, &[0xFF]);
        store(&mut storage, StorageKey::Brightness, &90u8).unwrap();
        assert_eq!(
            load::<_, CalendarTime>(&mut storage, StorageKey::LastSync),
            Err(StorageError::Corrupted)
        );
        let settings = Settings::load(&mut storage);
        assert_eq!(settings.last_sync, None);
        assert_eq!(settings.brightness, Some(90));
    }

    #[test]
    fn test_io_error_propagates() {
        let mut storage = MockStorage::default();
        storage.set_failing(true);
        assert_eq!(
            store(&mut storage, StorageKey::Brightness, &1u8),
            Err(StorageError::Io)
        );
        assert_eq!(load::<_, u8>(&mut storage, StorageKey::Brightness), Err(StorageError::Io));
    }
}
