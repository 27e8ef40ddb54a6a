//! Device abstraction traits
//!
//! The engine paints through these; the device port owns layout, fonts and
//! colors.

pub mod display;

pub use display::*;
