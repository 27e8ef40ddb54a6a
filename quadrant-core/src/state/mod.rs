//! Events delivered to the watchface

mod events;

pub use events::{Event, HealthEvent};
