//! Event dispatcher
//!
//! [`Face`] owns all watchface state and the device collaborators. The
//! device port creates it once with [`Face::start`] and feeds it every event
//! with [`Face::handle`]. Each event is applied in full, then the whole
//! frame is recomputed and painted.

use chrono::NaiveDateTime;
use quadrant_hal::{
    BatteryService, Granularity, HealthService, Outbox, PersistentStore, TickService, TimeUnits,
};
use quadrant_protocol::InboundMessage;

use crate::config::{load_settings, save_settings, Capabilities, Settings};
use crate::metrics::MetricSnapshot;
use crate::render::Frame;
use crate::state::{Event, HealthEvent};
use crate::tick::{is_refresh_due, send_refresh_request, TickRateController};
use crate::traits::FaceDisplay;

/// Collaborator types provided by a device port
pub trait Platform {
    type Store: PersistentStore;
    type Ticks: TickService;
    type Battery: BatteryService;
    type Health: HealthService;
    type Outbox: Outbox;
    type Display: FaceDisplay;
}

/// Device collaborators handed to the face at startup
///
/// `health` is `None` on devices without health sensors.
pub struct Peripherals<P: Platform> {
    pub store: P::Store,
    pub ticks: P::Ticks,
    pub battery: P::Battery,
    pub health: Option<P::Health>,
    pub outbox: P::Outbox,
    pub display: P::Display,
}

/// Watchface state and event dispatcher
pub struct Face<P: Platform> {
    io: Peripherals<P>,
    settings: Settings,
    snapshot: MetricSnapshot,
    tick_rate: TickRateController,
    capabilities: Capabilities,
    frame: Frame,
}

impl<P: Platform> Face<P> {
    /// Initialize state from the store and sensors, subscribe to ticks and
    /// paint the first frame
    pub fn start(mut io: Peripherals<P>, now: NaiveDateTime) -> Self {
        let settings = load_settings(&mut io.store);
        let capabilities = Capabilities {
            health: io.health.is_some(),
        };

        let mut snapshot = MetricSnapshot::default();
        snapshot.update_battery(io.battery.peek());
        if let Some(health) = &io.health {
            snapshot.update_activity(health);
            snapshot.update_heart_rate(health);
        }
        snapshot.update_time(&now, TimeUnits::all());

        let mut face = Self {
            io,
            settings,
            snapshot,
            tick_rate: TickRateController::new(),
            capabilities,
            frame: Frame::default(),
        };
        face.tick_rate.reconcile(&face.settings, &mut face.io.ticks);
        face.render();

        info!("Face started (health={})", capabilities.health);
        face
    }

    /// Apply one event, then repaint if it can affect the display
    pub fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Tick { now, changed } => self.on_tick(&now, changed),
            Event::Battery(state) => self.snapshot.update_battery(state),
            Event::Health(health_event) => self.on_health(health_event),
            Event::Inbound(bytes) => self.on_inbound(bytes),
            Event::InboxDropped(reason) => error!("Inbound message dropped: {:?}", reason),
            Event::OutboxSent => debug!("Outbound message sent"),
            Event::OutboxFailed(reason) => error!("Outbound message failed: {:?}", reason),
        }

        if event.changes_display() {
            self.render();
        }
    }

    /// Drop the tick subscription and hand the collaborators back
    pub fn stop(mut self) -> Peripherals<P> {
        self.tick_rate.stop(&mut self.io.ticks);
        info!("Face stopped");
        self.io
    }

    fn on_tick(&mut self, now: &NaiveDateTime, changed: TimeUnits) {
        self.snapshot.update_time(now, changed);

        if is_refresh_due(now) {
            if let Err(e) = send_refresh_request(&mut self.io.outbox) {
                error!("Failed to request weather refresh: {:?}", e);
            }
        }
    }

    fn on_health(&mut self, event: HealthEvent) {
        let Some(health) = &self.io.health else {
            trace!("Ignoring health event without health capability");
            return;
        };
        if event.affects_activity() {
            self.snapshot.update_activity(health);
        }
        if event.affects_heart_rate() {
            self.snapshot.update_heart_rate(health);
        }
    }

    /// Settings fields are applied before weather fields
    fn on_inbound(&mut self, bytes: &[u8]) {
        let message = match InboundMessage::decode(bytes) {
            Ok(message) => message,
            Err(e) => {
                warn!("Failed to decode inbound message: {:?}", e);
                return;
            }
        };

        let change = self.settings.apply(&message.settings);
        if change.touched {
            if let Err(e) = save_settings(&mut self.io.store, &self.settings) {
                warn!("Failed to save settings: {:?}", e);
            }
        }
        if change.seconds_toggled {
            self.tick_rate.reconcile(&self.settings, &mut self.io.ticks);
        }

        if let Some(weather) = message.weather {
            debug!("Weather update: {}C / {}F", weather.temp_c, weather.temp_f);
            self.snapshot.apply_weather(&weather);
        }
    }

    fn render(&mut self) {
        let clock_24h = self.io.ticks.is_24h_style();
        self.frame = Frame::compose(&self.settings, &self.snapshot, self.capabilities, clock_24h);
        if let Err(e) = self.frame.paint(&mut self.io.display) {
            warn!("Failed to paint frame: {:?}", e);
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn snapshot(&self) -> &MetricSnapshot {
        &self.snapshot
    }

    /// Last painted frame
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Active tick granularity
    pub fn granularity(&self) -> Option<Granularity> {
        self.tick_rate.current()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn platform(&self) -> &Peripherals<P> {
        &self.io
    }

    pub fn platform_mut(&mut self) -> &mut Peripherals<P> {
        &mut self.io
    }
}
