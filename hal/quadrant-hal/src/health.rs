//! Health data service
//!
//! Only some devices carry the sensors behind this service. Each metric can
//! be unavailable on its own (no permission, no data yet), so callers check
//! [`HealthService::is_accessible`] before reading.

/// Health metrics the watchface reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HealthMetric {
    /// Step count
    StepCount,
    /// Walked distance in meters
    WalkedDistanceMeters,
    /// Active time in seconds
    ActiveSeconds,
    /// Heart rate in beats per minute
    HeartRateBpm,
}

/// Health service
pub trait HealthService {
    /// Whether the metric can currently be read
    fn is_accessible(&self, metric: HealthMetric) -> bool;

    /// Sum of the metric since midnight
    fn sum_today(&self, metric: HealthMetric) -> i32;

    /// Most recent instantaneous reading of the metric
    fn peek_current(&self, metric: HealthMetric) -> i32;
}
