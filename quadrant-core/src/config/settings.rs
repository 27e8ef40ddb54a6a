//! User settings
//!
//! Settings change only through companion messages. Each change is
//! reported back to the caller so it can persist the new value and decide
//! whether the tick subscription must follow.

use heapless::String;
use quadrant_protocol::{ContentKind, SettingsUpdate, REGION_COUNT};

use crate::text;
use crate::traits::Region;

/// Maximum API key length in bytes
pub const API_KEY_LEN: usize = 63;

/// Region assignment used until the user configures one
pub const DEFAULT_REGIONS: [ContentKind; REGION_COUNT] = [
    ContentKind::Battery,
    ContentKind::Temperature,
    ContentKind::Day,
    ContentKind::Date,
];

/// Persisted user settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Show temperatures in Celsius instead of Fahrenheit
    pub use_celsius: bool,
    /// Show distances in kilometers instead of miles
    pub use_metric: bool,
    /// Weather service key, relayed back to the companion
    pub api_key: String<API_KEY_LEN>,
    /// Content kind per region, in region order
    pub region_content: [ContentKind; REGION_COUNT],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_celsius: false,
            use_metric: false,
            api_key: String::new(),
            region_content: DEFAULT_REGIONS,
        }
    }
}

/// What an applied settings update changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettingsChange {
    /// At least one settings field was present; the record must be saved
    pub touched: bool,
    /// Some region started or stopped showing seconds
    pub seconds_toggled: bool,
}

impl Settings {
    /// Content kind shown in a region
    pub fn content(&self, region: Region) -> ContentKind {
        self.region_content[region.index()]
    }

    /// True if any region shows seconds
    pub fn shows_seconds(&self) -> bool {
        self.region_content.contains(&ContentKind::Seconds)
    }

    /// Set the API key, truncating to [`API_KEY_LEN`] bytes
    pub fn set_api_key(&mut self, key: &str) {
        self.api_key = text::bounded(key);
    }

    /// Apply the settings fields of an inbound message
    ///
    /// Region transitions are checked one region at a time against the
    /// kind that region showed before this update.
    pub fn apply(&mut self, update: &SettingsUpdate<'_>) -> SettingsChange {
        let mut change = SettingsChange {
            touched: !update.is_empty(),
            seconds_toggled: false,
        };

        if let Some(use_celsius) = update.use_celsius {
            self.use_celsius = use_celsius;
        }
        if let Some(use_metric) = update.use_metric {
            self.use_metric = use_metric;
        }
        if let Some(key) = update.api_key {
            self.set_api_key(key);
        }

        for (current, new) in self.region_content.iter_mut().zip(update.regions) {
            if let Some(new) = new {
                let was_seconds = *current == ContentKind::Seconds;
                let is_seconds = new == ContentKind::Seconds;
                if was_seconds != is_seconds {
                    change.seconds_toggled = true;
                }
                *current = new;
            }
        }

        change
    }
}
