//! Host implementations of the device services

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use log::{debug, warn};
use quadrant_core::traits::{DisplayError, FaceDisplay, Region};
use quadrant_core::Platform;
use quadrant_hal::{
    AppMessageResult, BatteryService, BatteryState, Granularity, HealthMetric, HealthService,
    Outbox, PersistentStore, StorageKey, StoreError, TickService,
};
use quadrant_protocol::{Dictionary, MessageKey, TupleValue, REFRESH_REQUEST_KEY, REGION_COUNT};
use serde_json::{Map, Value};

/// Simulator platform
pub struct Sim;

impl Platform for Sim {
    type Store = FileStore;
    type Ticks = SimTicks;
    type Battery = SimBattery;
    type Health = SimHealth;
    type Outbox = StdoutOutbox;
    type Display = ConsoleDisplay;
}

/// Persistent store keeping one file per storage key
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: &Path) -> anyhow::Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Error creating store directory {}", dir.display()))?;
        Ok(Self { dir: dir.to_owned() })
    }

    fn path(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.bin", key.as_u8()))
    }
}

fn store_error(key: StorageKey, e: io::Error) -> StoreError {
    if e.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound
    } else {
        warn!("Store I/O error on {:?}: {}", key, e);
        StoreError::Storage
    }
}

impl PersistentStore for FileStore {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StoreError> {
        let data = fs::read(self.path(key)).map_err(|e| store_error(key, e))?;
        let dest = buffer
            .get_mut(..data.len())
            .ok_or(StoreError::BufferTooSmall)?;
        dest.copy_from_slice(&data);
        Ok(data.len())
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StoreError> {
        // Write then rename so a crash never leaves a half-written record
        let path = self.path(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, data).map_err(|e| store_error(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| store_error(key, e))
    }

    fn exists(&mut self, key: StorageKey) -> bool {
        self.path(key).is_file()
    }

    fn delete(&mut self, key: StorageKey) -> Result<(), StoreError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(store_error(key, e)),
        }
    }
}

/// Tick service driven by the main loop
///
/// The loop reads [`SimTicks::subscribed`] to decide which wall-clock
/// changes become tick events.
#[derive(Debug, Default)]
pub struct SimTicks {
    pub subscribed: Option<Granularity>,
    pub clock_24h: bool,
}

impl TickService for SimTicks {
    fn subscribe(&mut self, granularity: Granularity) {
        debug!("Tick subscription: {:?}", granularity);
        self.subscribed = Some(granularity);
    }

    fn unsubscribe(&mut self) {
        self.subscribed = None;
    }

    fn is_24h_style(&self) -> bool {
        self.clock_24h
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimBattery {
    pub charge_percent: u8,
}

impl BatteryService for SimBattery {
    fn peek(&self) -> BatteryState {
        BatteryState {
            charge_percent: self.charge_percent,
            is_charging: false,
            is_plugged: false,
        }
    }
}

/// Health readings that grow with simulator uptime
#[derive(Debug, Clone, Copy)]
pub struct SimHealth {
    started: Instant,
}

impl SimHealth {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    fn uptime_secs(&self) -> i32 {
        i32::try_from(self.started.elapsed().as_secs()).unwrap_or(i32::MAX)
    }
}

impl Default for SimHealth {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthService for SimHealth {
    fn is_accessible(&self, _metric: HealthMetric) -> bool {
        true
    }

    fn sum_today(&self, metric: HealthMetric) -> i32 {
        let uptime = self.uptime_secs();
        match metric {
            // Brisk walk: two steps a second, 0.75m per step
            HealthMetric::StepCount => uptime.saturating_mul(2),
            HealthMetric::WalkedDistanceMeters => uptime.saturating_mul(3) / 2,
            HealthMetric::ActiveSeconds => uptime,
            HealthMetric::HeartRateBpm => 0,
        }
    }

    fn peek_current(&self, metric: HealthMetric) -> i32 {
        match metric {
            HealthMetric::HeartRateBpm => 95 + self.uptime_secs() % 20,
            _ => 0,
        }
    }
}

/// Outbox writing each message as a JSON line on stdout
#[derive(Debug, Default)]
pub struct StdoutOutbox;

impl Outbox for StdoutOutbox {
    fn send(&mut self, dictionary: &[u8]) -> Result<(), AppMessageResult> {
        let dict = Dictionary::parse(dictionary).map_err(|e| {
            warn!("Refusing to send malformed dictionary: {:?}", e);
            AppMessageResult::InternalError
        })?;

        let line = Value::Object(dictionary_to_json(&dict)).to_string();
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)
            .and_then(|()| stdout.flush())
            .map_err(|_| AppMessageResult::Closed)
    }
}

/// JSON object keyed by companion-side names
pub fn dictionary_to_json(dict: &Dictionary<'_>) -> Map<String, Value> {
    dict.iter()
        .map(|tuple| {
            // Only outbound dictionaries come through here, so key 0 is the
            // refresh marker rather than an inbound temperature
            let name = if tuple.key == REFRESH_REQUEST_KEY {
                "REFRESH".to_owned()
            } else {
                MessageKey::from_id(tuple.key)
                    .map_or_else(|| tuple.key.to_string(), |key| key.name().to_owned())
            };
            let value = match tuple.value {
                TupleValue::Bytes(bytes) => Value::from(bytes.to_vec()),
                TupleValue::CString(s) => Value::from(s),
                TupleValue::UInt(v) => Value::from(v),
                TupleValue::Int(v) => Value::from(v),
            };
            (name, value)
        })
        .collect()
}

/// Display printing the face to stderr whenever it changes
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    time: String,
    regions: [String; REGION_COUNT],
    dirty: bool,
}

impl ConsoleDisplay {
    /// Print the face if anything changed since the last flush
    pub fn flush(&mut self) {
        if !std::mem::take(&mut self.dirty) {
            return;
        }
        let [tl, tr, bl, br] = &self.regions;
        eprintln!("+----------------------------------+");
        eprintln!("| {:<16}{:>16} |", tl, tr);
        eprintln!("| {:^32} |", self.time);
        eprintln!("| {:<16}{:>16} |", bl, br);
        eprintln!("+----------------------------------+");
    }
}

fn replace(slot: &mut String, text: &str) -> bool {
    if slot.as_str() == text {
        return false;
    }
    text.clone_into(slot);
    true
}

impl FaceDisplay for ConsoleDisplay {
    fn set_region_text(&mut self, region: Region, text: &str) -> Result<(), DisplayError> {
        self.dirty |= replace(&mut self.regions[region.index()], text);
        Ok(())
    }

    fn set_time_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.dirty |= replace(&mut self.time, text);
        Ok(())
    }
}
