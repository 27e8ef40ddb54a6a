//! Message types for the companion protocol
//!
//! Messages are divided by direction:
//! - Companion → Watch: weather and settings, identified by key presence
//! - Watch → Companion: the refresh request marker

use crate::content::ContentKind;
use crate::dict::{DictError, Dictionary, DictionaryBuilder, TupleValue, TUPLE_HEADER_SIZE};
use crate::keys::{MessageKey, REFRESH_REQUEST_KEY, REGION_COUNT};

/// Decode a numeric field that may arrive as an integer or as decimal text
///
/// Malformed text decodes to 0.
pub fn decode_value(value: &TupleValue<'_>) -> i32 {
    match *value {
        TupleValue::Int(v) => v,
        TupleValue::UInt(v) => i32::try_from(v).unwrap_or(i32::MAX),
        TupleValue::CString(s) => s.trim().parse().unwrap_or(0),
        TupleValue::Bytes(_) => 0,
    }
}

/// Decode a boolean field that may arrive as an integer or as text
pub fn decode_flag(value: &TupleValue<'_>) -> bool {
    match *value {
        TupleValue::CString(s) if s.trim().eq_ignore_ascii_case("true") => true,
        _ => decode_value(value) != 0,
    }
}

/// Weather fields of an inbound message
///
/// Only produced when both temperatures are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherUpdate<'a> {
    pub temp_c: i32,
    pub temp_f: i32,
    pub conditions: Option<&'a str>,
}

/// Settings fields of an inbound message
///
/// Absent fields are `None` and leave the current setting untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettingsUpdate<'a> {
    pub use_celsius: Option<bool>,
    pub use_metric: Option<bool>,
    pub api_key: Option<&'a str>,
    /// Content kind per region, in region order
    pub regions: [Option<ContentKind>; REGION_COUNT],
}

impl SettingsUpdate<'_> {
    /// True if the message carried no settings field at all
    pub fn is_empty(&self) -> bool {
        self.use_celsius.is_none()
            && self.use_metric.is_none()
            && self.api_key.is_none()
            && self.regions.iter().all(Option::is_none)
    }
}

/// A decoded companion → watch message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InboundMessage<'a> {
    pub settings: SettingsUpdate<'a>,
    pub weather: Option<WeatherUpdate<'a>>,
}

impl<'a> InboundMessage<'a> {
    /// Parse and decode a message from its wire bytes
    pub fn decode(bytes: &'a [u8]) -> Result<Self, DictError> {
        let dict = Dictionary::parse(bytes)?;
        Ok(Self::from_dictionary(&dict))
    }

    /// Decode a message from an already parsed dictionary
    pub fn from_dictionary(dict: &Dictionary<'a>) -> Self {
        let field = |key: MessageKey| dict.find(key.id()).copied();

        let mut regions = [None; REGION_COUNT];
        for (slot, key) in regions.iter_mut().zip(MessageKey::REGIONS) {
            *slot = field(key).map(|v| ContentKind::from_value(decode_value(&v)));
        }

        let settings = SettingsUpdate {
            use_celsius: field(MessageKey::UseCelsius).map(|v| decode_flag(&v)),
            use_metric: field(MessageKey::UseMetric).map(|v| decode_flag(&v)),
            api_key: field(MessageKey::ApiKey).and_then(as_str),
            regions,
        };

        // Both units or nothing: a lone value would desync the unit toggle
        let weather = match (field(MessageKey::TemperatureC), field(MessageKey::TemperatureF)) {
            (Some(c), Some(f)) => Some(WeatherUpdate {
                temp_c: decode_value(&c),
                temp_f: decode_value(&f),
                conditions: field(MessageKey::Conditions).and_then(as_str),
            }),
            _ => None,
        };

        Self { settings, weather }
    }
}

fn as_str<'a>(value: TupleValue<'a>) -> Option<&'a str> {
    match value {
        TupleValue::CString(s) => Some(s),
        _ => None,
    }
}

/// Watch → companion "send fresh weather now" marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshRequest;

impl RefreshRequest {
    /// Encoded size: count byte, one header, one uint8 value
    pub const ENCODED_LEN: usize = 1 + TUPLE_HEADER_SIZE + 1;

    /// Encode the request into `buf`
    pub fn encode(self, buf: &mut [u8]) -> Result<&[u8], DictError> {
        let mut builder = DictionaryBuilder::new(buf)?;
        builder.push_uint8(REFRESH_REQUEST_KEY, 0)?;
        Ok(builder.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encode<'b>(
        buf: &'b mut [u8],
        fill: impl FnOnce(&mut DictionaryBuilder<'_>) -> Result<(), DictError>,
    ) -> &'b [u8] {
        let mut builder = DictionaryBuilder::new(buf).unwrap();
        fill(&mut builder).unwrap();
        builder.finish()
    }

    #[test]
    fn test_decode_value_int_and_string() {
        assert_eq!(decode_value(&TupleValue::Int(3)), 3);
        assert_eq!(decode_value(&TupleValue::CString("3")), 3);
        assert_eq!(decode_value(&TupleValue::CString("-12")), -12);
        assert_eq!(decode_value(&TupleValue::UInt(7)), 7);
    }

    #[test]
    fn test_decode_value_malformed() {
        assert_eq!(decode_value(&TupleValue::CString("")), 0);
        assert_eq!(decode_value(&TupleValue::CString("abc")), 0);
        assert_eq!(decode_value(&TupleValue::CString("3x")), 0);
        assert_eq!(decode_value(&TupleValue::Bytes(&[1, 2])), 0);
        assert_eq!(decode_value(&TupleValue::UInt(u32::MAX)), i32::MAX);
    }

    #[test]
    fn test_decode_flag() {
        assert!(decode_flag(&TupleValue::Int(1)));
        assert!(!decode_flag(&TupleValue::Int(0)));
        assert!(decode_flag(&TupleValue::CString("true")));
        assert!(decode_flag(&TupleValue::CString("1")));
        assert!(!decode_flag(&TupleValue::CString("false")));
        assert!(!decode_flag(&TupleValue::CString("0")));
    }

    #[test]
    fn test_weather_and_settings_in_one_message() {
        let mut buf = [0u8; 128];
        let bytes = encode(&mut buf, |b| {
            b.push_int(MessageKey::TemperatureC.id(), 21)?;
            b.push_int(MessageKey::TemperatureF.id(), 70)?;
            b.push_cstring(MessageKey::Conditions.id(), "Clouds")?;
            b.push_int(MessageKey::UseCelsius.id(), 1)?;
            b.push_cstring(MessageKey::ApiKey.id(), "abc123")?;
            Ok(())
        });

        let msg = InboundMessage::decode(bytes).unwrap();
        assert_eq!(
            msg.weather,
            Some(WeatherUpdate {
                temp_c: 21,
                temp_f: 70,
                conditions: Some("Clouds"),
            })
        );
        assert_eq!(msg.settings.use_celsius, Some(true));
        assert_eq!(msg.settings.api_key, Some("abc123"));
        assert_eq!(msg.settings.use_metric, None);
        assert_eq!(msg.settings.regions, [None; REGION_COUNT]);
    }

    #[test]
    fn test_partial_weather_is_ignored() {
        let mut buf = [0u8; 64];
        let bytes = encode(&mut buf, |b| {
            b.push_int(MessageKey::TemperatureC.id(), 21)?;
            b.push_cstring(MessageKey::Conditions.id(), "Rain")?;
            Ok(())
        });

        let msg = InboundMessage::decode(bytes).unwrap();
        assert_eq!(msg.weather, None);
        assert!(msg.settings.is_empty());
    }

    #[test]
    fn test_region_kinds_string_or_int() {
        let mut buf = [0u8; 128];
        let bytes = encode(&mut buf, |b| {
            b.push_int(MessageKey::QuadrantTopLeft.id(), 3)?;
            b.push_cstring(MessageKey::QuadrantTopRight.id(), "3")?;
            b.push_cstring(MessageKey::QuadrantBottomRight.id(), "bogus")?;
            Ok(())
        });

        let msg = InboundMessage::decode(bytes).unwrap();
        assert_eq!(
            msg.settings.regions,
            [
                Some(ContentKind::Day),
                Some(ContentKind::Day),
                None,
                Some(ContentKind::None),
            ]
        );
        assert!(!msg.settings.is_empty());
    }

    #[test]
    fn test_non_string_api_key_ignored() {
        let mut buf = [0u8; 32];
        let bytes = encode(&mut buf, |b| {
            b.push_int(MessageKey::ApiKey.id(), 5)?;
            Ok(())
        });
        let msg = InboundMessage::decode(bytes).unwrap();
        assert_eq!(msg.settings.api_key, None);
    }

    #[test]
    fn test_refresh_request_encoding() {
        let mut buf = [0u8; RefreshRequest::ENCODED_LEN];
        let bytes = RefreshRequest.encode(&mut buf).unwrap();
        assert_eq!(bytes, &[1, 0, 0, 0, 0, 2, 1, 0, 0]);

        let dict = Dictionary::parse(bytes).unwrap();
        assert_eq!(dict.find(REFRESH_REQUEST_KEY), Some(&TupleValue::UInt(0)));
    }

    proptest! {
        #[test]
        fn prop_int_and_string_decode_equal(value in any::<i32>()) {
            let text = value.to_string();
            prop_assert_eq!(decode_value(&TupleValue::Int(value)), value);
            prop_assert_eq!(decode_value(&TupleValue::CString(&text)), value);
        }

        #[test]
        fn prop_region_kind_int_and_string_agree(value in 0i32..16) {
            let text = value.to_string();
            let mut buf_int = [0u8; 32];
            let mut buf_str = [0u8; 32];
            let key = MessageKey::QuadrantBottomLeft.id();
            let int_bytes = encode(&mut buf_int, |b| { b.push_int(key, value)?; Ok(()) });
            let str_bytes = encode(&mut buf_str, |b| { b.push_cstring(key, &text)?; Ok(()) });

            let from_int = InboundMessage::decode(int_bytes).unwrap();
            let from_str = InboundMessage::decode(str_bytes).unwrap();
            prop_assert_eq!(from_int.settings.regions, from_str.settings.regions);
            prop_assert_eq!(from_int.settings.regions[2], Some(ContentKind::from_value(value)));
        }
    }
}
