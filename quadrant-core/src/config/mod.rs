//! Watchface configuration
//!
//! User settings arrive from the companion and are persisted as a
//! postcard-serialized record. Device capabilities are detected once at
//! startup and never persisted.

pub mod settings;
pub mod store;

pub use settings::*;
pub use store::{load_settings, save_settings, SettingsError, SETTINGS_VERSION};

/// Runtime device capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capabilities {
    /// Health metrics (steps, distance, activity, heart rate) are available
    pub health: bool,
}
