//! Metric snapshot
//!
//! Latest known value of every displayable quantity. Each field is owned by
//! the event source that produces it and is overwritten in place; nothing
//! here depends on the user's unit preferences. Temperatures and distances
//! are kept in both or canonical units and converted at render time.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use heapless::String;
use quadrant_hal::{BatteryState, HealthMetric, HealthService, TimeUnits};
use quadrant_protocol::WeatherUpdate;

use crate::render::time::{
    format_date, format_day, format_seconds, DATE_TEXT_LEN, DAY_TEXT_LEN, SECONDS_TEXT_LEN,
};
use crate::text;

/// Weather condition buffer size
pub const CONDITIONS_LEN: usize = 31;

/// Last received temperature, in both units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    pub celsius: i32,
    pub fahrenheit: i32,
}

/// Latest values of all displayable quantities
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetricSnapshot {
    /// Battery charge, 0-100
    pub battery_percent: u8,
    /// `None` until the first complete weather update
    pub temperature: Option<Temperature>,
    pub conditions: String<CONDITIONS_LEN>,
    /// Full weekday name
    pub day: String<DAY_TEXT_LEN>,
    /// Abbreviated month and day
    pub date: String<DATE_TEXT_LEN>,
    /// Seconds of the last tick, ":SS"
    pub seconds: String<SECONDS_TEXT_LEN>,
    /// Wall clock at the last minute change, `None` before the first tick
    pub clock: Option<NaiveTime>,
    pub steps: i32,
    pub distance_m: i32,
    pub active_minutes: i32,
    /// Last heart rate reading; 0 means no reading
    pub heart_rate_bpm: i32,
}

impl MetricSnapshot {
    /// Refresh the time-derived fields after a tick
    ///
    /// Seconds are always refreshed. Day, date and clock follow only when
    /// the minute or a coarser unit changed.
    pub fn update_time(&mut self, now: &NaiveDateTime, changed: TimeUnits) {
        self.seconds = format_seconds(now);

        if changed.minute_or_coarser() {
            self.day = format_day(now);
            self.date = format_date(now);
            self.clock = now.time().with_second(0);
        }
    }

    /// Record a battery state change
    pub fn update_battery(&mut self, state: BatteryState) {
        self.battery_percent = state.charge_percent.min(100);
    }

    /// Record a complete weather update
    pub fn apply_weather(&mut self, weather: &WeatherUpdate<'_>) {
        self.temperature = Some(Temperature {
            celsius: weather.temp_c,
            fahrenheit: weather.temp_f,
        });
        if let Some(conditions) = weather.conditions {
            self.conditions = text::bounded(conditions);
        }
    }

    /// Re-read today's activity sums
    ///
    /// Each metric is checked on its own; an inaccessible metric keeps its
    /// previous value.
    pub fn update_activity<H: HealthService>(&mut self, health: &H) {
        if health.is_accessible(HealthMetric::StepCount) {
            self.steps = health.sum_today(HealthMetric::StepCount);
        }
        if health.is_accessible(HealthMetric::WalkedDistanceMeters) {
            self.distance_m = health.sum_today(HealthMetric::WalkedDistanceMeters);
        }
        if health.is_accessible(HealthMetric::ActiveSeconds) {
            self.active_minutes = health.sum_today(HealthMetric::ActiveSeconds) / 60;
        }
    }

    /// Re-read the current heart rate
    pub fn update_heart_rate<H: HealthService>(&mut self, health: &H) {
        if health.is_accessible(HealthMetric::HeartRateBpm) {
            self.heart_rate_bpm = health.peek_current(HealthMetric::HeartRateBpm);
        }
    }
}
