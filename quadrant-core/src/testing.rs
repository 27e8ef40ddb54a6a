//! In-memory collaborators for unit tests

use std::collections::HashMap;
use std::string::String;
use std::vec::Vec;

use chrono::{NaiveDate, NaiveDateTime};
use quadrant_hal::{
    AppMessageResult, BatteryService, BatteryState, Granularity, HealthMetric, HealthService,
    Outbox, PersistentStore, StorageKey, StoreError, TickService,
};

use crate::config::Capabilities;
use crate::face::Platform;
use crate::traits::{DisplayError, FaceDisplay, Region};

/// Local time on a fixed date (Sunday 2 June 2024)
pub fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 2)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

/// Capabilities of a device with every sensor
pub const FULL_CAPS: Capabilities = Capabilities { health: true };

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<u8, Vec<u8>>,
    pub fail_writes: bool,
    pub writes: usize,
}

impl MemoryStore {
    pub fn raw_mut(&mut self, key: StorageKey) -> Option<&mut Vec<u8>> {
        self.records.get_mut(&key.as_u8())
    }
}

impl PersistentStore for MemoryStore {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StoreError> {
        let data = self.records.get(&key.as_u8()).ok_or(StoreError::NotFound)?;
        if data.len() > buffer.len() {
            return Err(StoreError::BufferTooSmall);
        }
        buffer[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Storage);
        }
        self.writes += 1;
        self.records.insert(key.as_u8(), data.to_vec());
        Ok(())
    }

    fn exists(&mut self, key: StorageKey) -> bool {
        self.records.contains_key(&key.as_u8())
    }

    fn delete(&mut self, key: StorageKey) -> Result<(), StoreError> {
        self.records.remove(&key.as_u8());
        Ok(())
    }
}

/// Tick service that records every (un)subscribe call
#[derive(Debug, Default)]
pub struct RecordingTicks {
    pub subscribed: Option<Granularity>,
    pub subscribe_calls: Vec<Granularity>,
    pub unsubscribe_calls: usize,
    pub clock_24h: bool,
}

impl TickService for RecordingTicks {
    fn subscribe(&mut self, granularity: Granularity) {
        self.subscribed = Some(granularity);
        self.subscribe_calls.push(granularity);
    }

    fn unsubscribe(&mut self) {
        self.subscribed = None;
        self.unsubscribe_calls += 1;
    }

    fn is_24h_style(&self) -> bool {
        self.clock_24h
    }
}

#[derive(Debug, Default)]
pub struct RecordingOutbox {
    pub sent: Vec<Vec<u8>>,
    pub fail_with: Option<AppMessageResult>,
}

impl Outbox for RecordingOutbox {
    fn send(&mut self, dictionary: &[u8]) -> Result<(), AppMessageResult> {
        if let Some(reason) = self.fail_with {
            return Err(reason);
        }
        self.sent.push(dictionary.to_vec());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub regions: [String; 4],
    pub time: String,
    pub paints: usize,
}

impl FaceDisplay for RecordingDisplay {
    fn set_region_text(&mut self, region: Region, text: &str) -> Result<(), DisplayError> {
        self.regions[region.index()] = text.into();
        self.paints += 1;
        Ok(())
    }

    fn set_time_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.time = text.into();
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FixedBattery(pub u8);

impl BatteryService for FixedBattery {
    fn peek(&self) -> BatteryState {
        BatteryState {
            charge_percent: self.0,
            ..Default::default()
        }
    }
}

/// Health service with fixed readings; `None` marks a metric inaccessible
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptedHealth {
    pub steps: Option<i32>,
    pub distance_m: Option<i32>,
    pub active_seconds: Option<i32>,
    pub heart_rate: Option<i32>,
}

impl ScriptedHealth {
    fn reading(&self, metric: HealthMetric) -> Option<i32> {
        match metric {
            HealthMetric::StepCount => self.steps,
            HealthMetric::WalkedDistanceMeters => self.distance_m,
            HealthMetric::ActiveSeconds => self.active_seconds,
            HealthMetric::HeartRateBpm => self.heart_rate,
        }
    }
}

impl HealthService for ScriptedHealth {
    fn is_accessible(&self, metric: HealthMetric) -> bool {
        self.reading(metric).is_some()
    }

    fn sum_today(&self, metric: HealthMetric) -> i32 {
        self.reading(metric).unwrap_or_default()
    }

    fn peek_current(&self, metric: HealthMetric) -> i32 {
        self.reading(metric).unwrap_or_default()
    }
}

pub struct TestPlatform;

impl Platform for TestPlatform {
    type Store = MemoryStore;
    type Ticks = RecordingTicks;
    type Battery = FixedBattery;
    type Health = ScriptedHealth;
    type Outbox = RecordingOutbox;
    type Display = RecordingDisplay;
}
