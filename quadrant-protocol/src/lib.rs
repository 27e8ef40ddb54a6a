//! Companion Message Protocol
//!
//! This crate defines the messages exchanged between the watchface and its
//! companion process on the phone. The companion fetches weather and relays
//! user configuration; the watchface asks it for fresh weather.
//!
//! # Protocol Overview
//!
//! Every message is a key/value dictionary:
//! ```text
//! ┌───────┬───────────────────────────────────────────┐
//! │ COUNT │ TUPLE × COUNT                             │
//! │ 1B    │ KEY 4B LE │ TYPE 1B │ LEN 2B LE │ VALUE   │
//! └───────┴───────────────────────────────────────────┘
//! ```
//!
//! A message has no "type". What it carries is decided by which keys are
//! present, and a single message may carry weather and settings at once.
//! The companion serializes some numeric fields as text, so every numeric
//! field is accepted both as an integer and as a decimal string.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod content;
pub mod dict;
pub mod keys;
pub mod messages;

pub use content::ContentKind;
pub use dict::{DictError, Dictionary, DictionaryBuilder, Tuple, TupleValue, MAX_TUPLES};
pub use keys::{MessageKey, REFRESH_REQUEST_KEY, REGION_COUNT};
pub use messages::{
    decode_flag, decode_value, InboundMessage, RefreshRequest, SettingsUpdate, WeatherUpdate,
};
