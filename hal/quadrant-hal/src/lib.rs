//! Quadrant host abstraction layer
//!
//! This crate defines the services the watchface engine borrows from the
//! device OS. A watch port implements them on top of the platform SDK; the
//! simulator implements them on top of `std`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  quadrant-core (Face event dispatcher)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  quadrant-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  watch port   │       │ quadrant-sim  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`store::PersistentStore`] - Key/value persistence
//! - [`tick::TickService`] - Wall-clock tick subscription
//! - [`battery::BatteryService`] - Charge state
//! - [`health::HealthService`] - Daily activity sums and heart rate
//! - [`message::Outbox`] - Messages to the companion process

#![no_std]
#![deny(unsafe_code)]

pub mod battery;
pub mod health;
pub mod message;
pub mod store;
pub mod tick;

// Re-export key traits at crate root for convenience
pub use battery::{BatteryService, BatteryState};
pub use health::{HealthMetric, HealthService};
pub use message::{AppMessageResult, Outbox};
pub use store::{PersistentStore, StorageKey, StoreError};
pub use tick::{Granularity, TickService, TimeUnits};
