//! Settings persistence
//!
//! Loads and saves [`Settings`] through the platform key/value store.
//!
//! The record is postcard-encoded: a schema version byte followed by the
//! settings body. Region kinds are stored as raw wire bytes so a single
//! unknown kind degrades to `None` instead of discarding the whole record.

use heapless::String;
use quadrant_hal::{PersistentStore, StorageKey, StoreError};
use quadrant_protocol::{ContentKind, REGION_COUNT};
use serde::{Deserialize, Serialize};

use super::settings::{Settings, API_KEY_LEN};

/// Schema version of the settings record
///
/// Bump whenever [`SettingsRecord`] changes layout, so records written by an
/// older build are discarded instead of misread.
pub const SETTINGS_VERSION: u8 = 3;

/// Maximum serialized settings size
const MAX_SETTINGS_SIZE: usize = 128;

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Store operation failed
    Store(StoreError),
    /// Deserialization failed
    Deserialize,
    /// Serialization failed
    Serialize,
    /// Record written by a different schema version
    VersionMismatch(u8),
    /// Record longer than the current layout
    TrailingBytes,
}

impl From<StoreError> for SettingsError {
    fn from(e: StoreError) -> Self {
        SettingsError::Store(e)
    }
}

/// On-storage settings body (follows the version byte)
#[derive(Debug, Serialize, Deserialize)]
struct SettingsRecord {
    use_celsius: bool,
    use_metric: bool,
    api_key: String<API_KEY_LEN>,
    region_content: [u8; REGION_COUNT],
}

impl From<&Settings> for SettingsRecord {
    fn from(settings: &Settings) -> Self {
        Self {
            use_celsius: settings.use_celsius,
            use_metric: settings.use_metric,
            api_key: settings.api_key.clone(),
            region_content: settings.region_content.map(ContentKind::to_byte),
        }
    }
}

impl From<SettingsRecord> for Settings {
    fn from(record: SettingsRecord) -> Self {
        Self {
            use_celsius: record.use_celsius,
            use_metric: record.use_metric,
            api_key: record.api_key,
            region_content: record
                .region_content
                .map(|b| ContentKind::from_byte(b).unwrap_or(ContentKind::None)),
        }
    }
}

/// Load settings from the store
///
/// Returns the stored settings, or defaults if the record is missing,
/// corrupt or from another schema version.
pub fn load_settings<S: PersistentStore>(store: &mut S) -> Settings {
    match load_settings_inner(store) {
        Ok(settings) => {
            info!("Loaded settings from store");
            debug!(
                "  celsius={} metric={} regions={:?}",
                settings.use_celsius,
                settings.use_metric,
                settings.region_content
            );
            settings
        }
        Err(SettingsError::Store(StoreError::NotFound)) => {
            debug!("No settings in store, using defaults");
            Settings::default()
        }
        Err(e) => {
            warn!("Failed to load settings: {:?}, using defaults", e);
            Settings::default()
        }
    }
}

/// Inner function that returns errors
fn load_settings_inner<S: PersistentStore>(store: &mut S) -> Result<Settings, SettingsError> {
    let mut buffer = [0u8; MAX_SETTINGS_SIZE];
    let len = store.read(StorageKey::Settings, &mut buffer)?;

    trace!("Read {} bytes of settings from store", len);

    let (version, body): (u8, _) =
        postcard::take_from_bytes(&buffer[..len]).map_err(|_| SettingsError::Deserialize)?;
    if version != SETTINGS_VERSION {
        return Err(SettingsError::VersionMismatch(version));
    }

    let (record, rest): (SettingsRecord, _) =
        postcard::take_from_bytes(body).map_err(|_| SettingsError::Deserialize)?;
    if !rest.is_empty() {
        return Err(SettingsError::TrailingBytes);
    }

    Ok(record.into())
}

/// Save settings to the store, replacing the previous record
pub fn save_settings<S: PersistentStore>(
    store: &mut S,
    settings: &Settings,
) -> Result<(), SettingsError> {
    let record = SettingsRecord::from(settings);

    let mut buffer = [0u8; MAX_SETTINGS_SIZE];
    let bytes = postcard::to_slice(&(SETTINGS_VERSION, &record), &mut buffer)
        .map_err(|_| SettingsError::Serialize)?;

    trace!("Saving {} bytes of settings to store", bytes.len());

    store.write(StorageKey::Settings, bytes)?;

    info!("Saved settings to store");
    Ok(())
}
