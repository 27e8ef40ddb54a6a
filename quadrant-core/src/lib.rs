//! Display state engine for the Quadrant watchface
//!
//! This crate contains everything the watchface decides, independent of the
//! device it runs on:
//!
//! - Persisted settings and their storage record
//! - The metric snapshot fed by ticks, battery, health and weather
//! - Rendering of the four configurable regions and the time region
//! - Tick granularity control and the periodic weather refresh request
//! - The event dispatcher ([`Face`]) that ties them together
//!
//! Device services are reached through the traits in `quadrant-hal` and the
//! [`traits::FaceDisplay`] painter.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod config;
pub mod face;
pub mod metrics;
pub mod render;
pub mod state;
pub mod text;
pub mod tick;
pub mod traits;

#[cfg(test)]
mod testing;

pub use config::{Capabilities, Settings};
pub use face::{Face, Peripherals, Platform};
pub use metrics::MetricSnapshot;
pub use state::{Event, HealthEvent};
