//! Message keys shared with the companion
//!
//! The companion addresses fields by name; the wire carries the numeric id.

/// Number of configurable display regions
pub const REGION_COUNT: usize = 4;

/// Key of the outbound refresh marker (watch → companion only)
pub const REFRESH_REQUEST_KEY: u32 = 0;

/// Inbound message keys (companion → watch)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum MessageKey {
    /// Temperature in °C (int)
    TemperatureC = 0,
    /// Temperature in °F (int)
    TemperatureF = 1,
    /// Short condition text (string)
    Conditions = 2,
    /// Show temperatures in Celsius (bool/int)
    UseCelsius = 3,
    /// Weather service API key (string)
    ApiKey = 4,
    /// Show distances in kilometers (bool/int)
    UseMetric = 5,
    /// Content kind for the top-left region
    QuadrantTopLeft = 6,
    /// Content kind for the top-right region
    QuadrantTopRight = 7,
    /// Content kind for the bottom-left region
    QuadrantBottomLeft = 8,
    /// Content kind for the bottom-right region
    QuadrantBottomRight = 9,
}

impl MessageKey {
    /// All keys, in id order
    pub const ALL: [MessageKey; 10] = [
        MessageKey::TemperatureC,
        MessageKey::TemperatureF,
        MessageKey::Conditions,
        MessageKey::UseCelsius,
        MessageKey::ApiKey,
        MessageKey::UseMetric,
        MessageKey::QuadrantTopLeft,
        MessageKey::QuadrantTopRight,
        MessageKey::QuadrantBottomLeft,
        MessageKey::QuadrantBottomRight,
    ];

    /// Region keys, in region order (top-left, top-right, bottom-left, bottom-right)
    pub const REGIONS: [MessageKey; REGION_COUNT] = [
        MessageKey::QuadrantTopLeft,
        MessageKey::QuadrantTopRight,
        MessageKey::QuadrantBottomLeft,
        MessageKey::QuadrantBottomRight,
    ];

    /// Numeric wire id
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Look up a key by wire id
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.id() == id)
    }

    /// Companion-side name
    pub fn name(self) -> &'static str {
        match self {
            MessageKey::TemperatureC => "TEMPERATUREC",
            MessageKey::TemperatureF => "TEMPERATUREF",
            MessageKey::Conditions => "CONDITIONS",
            MessageKey::UseCelsius => "USECELSIUS",
            MessageKey::ApiKey => "APIKEY",
            MessageKey::UseMetric => "USEMETRIC",
            MessageKey::QuadrantTopLeft => "QUADRANT_TL",
            MessageKey::QuadrantTopRight => "QUADRANT_TR",
            MessageKey::QuadrantBottomLeft => "QUADRANT_BL",
            MessageKey::QuadrantBottomRight => "QUADRANT_BR",
        }
    }

    /// Look up a key by companion-side name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        for key in MessageKey::ALL {
            assert_eq!(MessageKey::from_id(key.id()), Some(key));
        }
        assert_eq!(MessageKey::from_id(42), None);
    }

    #[test]
    fn test_name_roundtrip() {
        for key in MessageKey::ALL {
            assert_eq!(MessageKey::from_name(key.name()), Some(key));
        }
        assert_eq!(MessageKey::from_name("temperaturec"), None);
    }

    #[test]
    fn test_region_keys_are_consecutive() {
        let ids = MessageKey::REGIONS.map(MessageKey::id);
        assert_eq!(ids, [6, 7, 8, 9]);
    }
}
