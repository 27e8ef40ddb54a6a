//! Content kinds a display region can show

/// What a region is configured to display
///
/// The wire value is what the companion's configuration page sends and what
/// the settings record stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ContentKind {
    /// Region left blank
    #[default]
    None,
    /// Battery charge, "70%"
    Battery,
    /// Temperature in the preferred unit, "21°C"
    Temperature,
    /// Full weekday name, "Tuesday"
    Day,
    /// Abbreviated month and day, "Jun 2"
    Date,
    /// Weather condition text, "Clouds"
    Conditions,
    /// Step count today
    Steps,
    /// Walked distance today, "1.5km"
    Distance,
    /// Active minutes today, "42min"
    ActiveMinutes,
    /// Current heart rate, "72bpm"
    HeartRate,
    /// Seconds of the current minute, ":07"
    Seconds,
}

// Wire format values
const KIND_NONE: u8 = 0;
const KIND_BATTERY: u8 = 1;
const KIND_TEMPERATURE: u8 = 2;
const KIND_DAY: u8 = 3;
const KIND_DATE: u8 = 4;
const KIND_CONDITIONS: u8 = 5;
const KIND_STEPS: u8 = 6;
const KIND_DISTANCE: u8 = 7;
const KIND_ACTIVE_MINUTES: u8 = 8;
const KIND_HEART_RATE: u8 = 9;
const KIND_SECONDS: u8 = 10;

impl ContentKind {
    /// Every kind, in wire order
    pub const ALL: [ContentKind; 11] = [
        ContentKind::None,
        ContentKind::Battery,
        ContentKind::Temperature,
        ContentKind::Day,
        ContentKind::Date,
        ContentKind::Conditions,
        ContentKind::Steps,
        ContentKind::Distance,
        ContentKind::ActiveMinutes,
        ContentKind::HeartRate,
        ContentKind::Seconds,
    ];

    /// Parse a kind from its wire byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            KIND_NONE => Some(ContentKind::None),
            KIND_BATTERY => Some(ContentKind::Battery),
            KIND_TEMPERATURE => Some(ContentKind::Temperature),
            KIND_DAY => Some(ContentKind::Day),
            KIND_DATE => Some(ContentKind::Date),
            KIND_CONDITIONS => Some(ContentKind::Conditions),
            KIND_STEPS => Some(ContentKind::Steps),
            KIND_DISTANCE => Some(ContentKind::Distance),
            KIND_ACTIVE_MINUTES => Some(ContentKind::ActiveMinutes),
            KIND_HEART_RATE => Some(ContentKind::HeartRate),
            KIND_SECONDS => Some(ContentKind::Seconds),
            _ => None,
        }
    }

    /// Map a decoded integer to a kind. Out-of-range values are `None`.
    pub fn from_value(value: i32) -> Self {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_byte)
            .unwrap_or(ContentKind::None)
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            ContentKind::None => KIND_NONE,
            ContentKind::Battery => KIND_BATTERY,
            ContentKind::Temperature => KIND_TEMPERATURE,
            ContentKind::Day => KIND_DAY,
            ContentKind::Date => KIND_DATE,
            ContentKind::Conditions => KIND_CONDITIONS,
            ContentKind::Steps => KIND_STEPS,
            ContentKind::Distance => KIND_DISTANCE,
            ContentKind::ActiveMinutes => KIND_ACTIVE_MINUTES,
            ContentKind::HeartRate => KIND_HEART_RATE,
            ContentKind::Seconds => KIND_SECONDS,
        }
    }

    /// Returns true if the kind needs the health capability
    pub fn is_health(&self) -> bool {
        matches!(
            self,
            ContentKind::Steps
                | ContentKind::Distance
                | ContentKind::ActiveMinutes
                | ContentKind::HeartRate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        for kind in ContentKind::ALL {
            assert_eq!(ContentKind::from_byte(kind.to_byte()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_byte() {
        assert_eq!(ContentKind::from_byte(11), None);
        assert_eq!(ContentKind::from_byte(0xFF), None);
    }

    #[test]
    fn test_from_value_out_of_range() {
        assert_eq!(ContentKind::from_value(10), ContentKind::Seconds);
        assert_eq!(ContentKind::from_value(11), ContentKind::None);
        assert_eq!(ContentKind::from_value(-1), ContentKind::None);
        assert_eq!(ContentKind::from_value(256 + 1), ContentKind::None);
    }

    #[test]
    fn test_health_kinds() {
        assert!(ContentKind::Steps.is_health());
        assert!(ContentKind::HeartRate.is_health());
        assert!(!ContentKind::Battery.is_health());
        assert!(!ContentKind::Seconds.is_health());
    }
}
