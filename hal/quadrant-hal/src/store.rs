//! Persistent storage abstractions
//!
//! The device keeps a small number of records in a key/value store that
//! survives restarts. Each record is written whole; there is no partial
//! update.

/// Storage keys for persisted records
///
/// The numeric value is the key the platform store sees. Changing the
/// layout of a record means bumping its schema version, not its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Watchface settings (binary postcard format)
    Settings = 1,
}

impl StorageKey {
    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Errors from persistent storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Underlying storage operation failed
    Storage,
    /// Key not found
    NotFound,
    /// Buffer too small for the stored record
    BufferTooSmall,
}

/// Persistent key/value store
///
/// Implementations must give replace semantics: after a successful
/// `write`, a `read` of the same key returns exactly `data`, including
/// across restarts.
pub trait PersistentStore {
    /// Read a record by key into the provided buffer
    ///
    /// Returns the number of bytes read.
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StoreError>;

    /// Write a record by key, replacing any previous value
    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StoreError>;

    /// Check if a key exists in storage
    fn exists(&mut self, key: StorageKey) -> bool;

    /// Delete a record. Deleting a missing key is not an error.
    fn delete(&mut self, key: StorageKey) -> Result<(), StoreError>;
}

impl<T: PersistentStore + ?Sized> PersistentStore for &mut T {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StoreError> {
        (**self).read(key, buffer)
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StoreError> {
        (**self).write(key, data)
    }

    fn exists(&mut self, key: StorageKey) -> bool {
        (**self).exists(key)
    }

    fn delete(&mut self, key: StorageKey) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}
