//! Quadrant watchface simulator
//!
//! Runs the watchface engine against the host clock. The face is printed to
//! stderr whenever it changes, outbound messages are printed as JSON lines
//! on stdout, and companion messages are read as JSON lines from stdin.
//!
//! Usage: `quadrant-sim [CONFIG]` (defaults to `./quadrant.toml`).

mod config;
mod input;
mod platform;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use log::{info, warn};
use quadrant_core::{Event, Face, HealthEvent, Peripherals};
use quadrant_hal::{Granularity, TimeUnits};

use crate::config::SimConfig;
use crate::platform::{
    ConsoleDisplay, FileStore, Sim, SimBattery, SimHealth, SimTicks, StdoutOutbox,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(SimConfig::PATH), PathBuf::from);
    let config = SimConfig::load(&config_path)?;

    let io = Peripherals::<Sim> {
        store: FileStore::open(&config.store_dir)?,
        ticks: SimTicks {
            subscribed: None,
            clock_24h: config.clock_24h,
        },
        battery: SimBattery {
            charge_percent: config.battery_percent,
        },
        health: config.health.then(SimHealth::new),
        outbox: StdoutOutbox,
        display: ConsoleDisplay::default(),
    };

    let inbound = spawn_stdin_reader().context("Error starting stdin reader")?;
    run(io, inbound);
    Ok(())
}

/// Read companion messages from stdin on a background thread
fn spawn_stdin_reader() -> io::Result<Receiver<Vec<u8>>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        warn!("Error reading stdin: {}", e);
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                match input::encode_line(&line) {
                    Ok(bytes) => {
                        if tx.send(bytes).is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!("Skipping input line: {:#}", e),
                }
            }
        })?;
    Ok(rx)
}

fn run(io: Peripherals<Sim>, inbound: Receiver<Vec<u8>>) {
    let mut last = Local::now().naive_local();
    let mut face = Face::start(io, last);
    face.platform_mut().display.flush();
    info!("Simulator running, type JSON messages on stdin");

    let mut inbound = Some(inbound);
    loop {
        let wait = until_next_second();
        let received = match &inbound {
            Some(rx) => rx.recv_timeout(wait),
            None => {
                thread::sleep(wait);
                Err(RecvTimeoutError::Timeout)
            }
        };

        match received {
            Ok(bytes) => {
                face.handle(Event::Inbound(&bytes));
                face.platform_mut().display.flush();
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => {
                info!("Input closed, running on ticks only");
                inbound = None;
                continue;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        let now = Local::now().naive_local();
        let changed = changed_units(&last, &now);
        if changed.is_empty() {
            continue;
        }
        last = now;

        if changed.minute_or_coarser() && face.capabilities().health {
            face.handle(Event::Health(HealthEvent::Movement));
            face.handle(Event::Health(HealthEvent::HeartRate));
        }

        if let Some(granularity) = face.granularity() {
            if let Some(tick) = tick_event(granularity, now, changed) {
                face.handle(tick);
            }
        }
        face.platform_mut().display.flush();
    }
}

fn until_next_second() -> Duration {
    let millis = Local::now().timestamp_subsec_millis().min(999);
    Duration::from_millis(u64::from(1000 - millis))
}

/// Calendar units that differ between two wall-clock readings
fn changed_units(previous: &NaiveDateTime, now: &NaiveDateTime) -> TimeUnits {
    let mut changed = TimeUnits::empty();
    if previous.second() != now.second() {
        changed |= TimeUnits::SECOND;
    }
    if previous.minute() != now.minute() {
        changed |= TimeUnits::MINUTE;
    }
    if previous.hour() != now.hour() {
        changed |= TimeUnits::HOUR;
    }
    if previous.day() != now.day() {
        changed |= TimeUnits::DAY;
    }
    if previous.month() != now.month() {
        changed |= TimeUnits::MONTH;
    }
    if previous.year() != now.year() {
        changed |= TimeUnits::YEAR;
    }
    changed
}

/// Tick the subscribed granularity would deliver for this change, if any
///
/// Any tick that changes the minute lands on second zero, as on the device,
/// even when the loop woke up late.
fn tick_event(
    granularity: Granularity,
    now: NaiveDateTime,
    changed: TimeUnits,
) -> Option<Event<'static>> {
    let fires = match granularity {
        Granularity::Second => !changed.is_empty(),
        Granularity::Minute => changed.minute_or_coarser(),
    };
    if !fires {
        return None;
    }
    let now = if changed.minute_or_coarser() {
        now.with_second(0).unwrap_or(now)
    } else {
        now
    };
    Some(Event::Tick { now, changed })
}
