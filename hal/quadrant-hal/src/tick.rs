//! Wall-clock tick abstractions
//!
//! The device OS delivers ticks at a subscribed granularity together with
//! the set of calendar units that changed since the previous tick.

use core::ops::{BitOr, BitOrAssign};

/// Tick subscription granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Granularity {
    /// One tick per minute, at second zero
    Minute,
    /// One tick per second
    Second,
}

/// Set of calendar units that changed between two ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const SECOND: Self = Self(1 << 0);
    pub const MINUTE: Self = Self(1 << 1);
    pub const HOUR: Self = Self(1 << 2);
    pub const DAY: Self = Self(1 << 3);
    pub const MONTH: Self = Self(1 << 4);
    pub const YEAR: Self = Self(1 << 5);

    /// No unit changed
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every unit changed (first tick after startup)
    pub const fn all() -> Self {
        Self(0x3F)
    }

    /// True if `self` and `other` share at least one unit
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True if the minute or any coarser unit changed
    pub const fn minute_or_coarser(self) -> bool {
        self.intersects(Self(
            Self::MINUTE.0 | Self::HOUR.0 | Self::DAY.0 | Self::MONTH.0 | Self::YEAR.0,
        ))
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for TimeUnits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TimeUnits {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Tick timer service
///
/// Only one subscription is active at a time. Subscribing again replaces
/// the previous subscription.
pub trait TickService {
    /// Start delivering ticks at the given granularity
    fn subscribe(&mut self, granularity: Granularity);

    /// Stop delivering ticks
    fn unsubscribe(&mut self);

    /// Whether the user prefers a 24-hour clock
    fn is_24h_style(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let changed = TimeUnits::SECOND | TimeUnits::MINUTE;
        assert!(changed.intersects(TimeUnits::MINUTE));
        assert!(changed.intersects(TimeUnits::MINUTE | TimeUnits::DAY));
        assert!(!changed.intersects(TimeUnits::DAY));
    }

    #[test]
    fn test_minute_or_coarser() {
        assert!(!TimeUnits::SECOND.minute_or_coarser());
        assert!(TimeUnits::MINUTE.minute_or_coarser());
        assert!((TimeUnits::SECOND | TimeUnits::DAY).minute_or_coarser());
        assert!(TimeUnits::all().minute_or_coarser());
        assert!(!TimeUnits::empty().minute_or_coarser());
    }
}
