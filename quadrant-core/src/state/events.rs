use chrono::NaiveDateTime;
use quadrant_hal::{AppMessageResult, BatteryState, TimeUnits};

/// Health service notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HealthEvent {
    /// Step, distance or activity totals moved
    Movement,
    /// New heart rate sample
    HeartRate,
    /// Large update (day rollover, sync); everything is re-read
    Significant,
}

impl HealthEvent {
    /// Whether activity totals should be re-read
    pub fn affects_activity(self) -> bool {
        matches!(self, HealthEvent::Movement | HealthEvent::Significant)
    }

    /// Whether the heart rate should be re-read
    pub fn affects_heart_rate(self) -> bool {
        matches!(self, HealthEvent::HeartRate | HealthEvent::Significant)
    }
}

/// One event from the device OS
///
/// Events are handled strictly in delivery order, each to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// Wall-clock tick at the subscribed granularity
    Tick {
        now: NaiveDateTime,
        changed: TimeUnits,
    },
    /// Battery charge state changed
    Battery(BatteryState),
    /// Health service notification
    Health(HealthEvent),
    /// Encoded dictionary received from the companion
    Inbound(&'a [u8]),
    /// An inbound message was dropped by the transport
    InboxDropped(AppMessageResult),
    /// An outbound message was delivered
    OutboxSent,
    /// An outbound message failed after being queued
    OutboxFailed(AppMessageResult),
}

impl Event<'_> {
    /// Whether handling the event can change what is on screen
    pub fn changes_display(&self) -> bool {
        !matches!(
            self,
            Event::InboxDropped(_) | Event::OutboxSent | Event::OutboxFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::at;

    #[test]
    fn test_health_event_scope() {
        assert!(HealthEvent::Movement.affects_activity());
        assert!(!HealthEvent::Movement.affects_heart_rate());
        assert!(HealthEvent::HeartRate.affects_heart_rate());
        assert!(!HealthEvent::HeartRate.affects_activity());
        assert!(HealthEvent::Significant.affects_activity());
        assert!(HealthEvent::Significant.affects_heart_rate());
    }

    #[test]
    fn test_transport_callbacks_do_not_change_display() {
        assert!(!Event::OutboxSent.changes_display());
        assert!(!Event::InboxDropped(AppMessageResult::Busy).changes_display());
        assert!(!Event::OutboxFailed(AppMessageResult::SendTimeout).changes_display());

        let tick = Event::Tick {
            now: at(12, 0, 0),
            changed: TimeUnits::MINUTE,
        };
        assert!(tick.changes_display());
        assert!(Event::Inbound(&[0]).changes_display());
        assert!(Event::Health(HealthEvent::Movement).changes_display());
    }
}
