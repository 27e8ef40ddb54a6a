//! Tick-rate controller

use quadrant_hal::{Granularity, TickService};

use crate::config::Settings;

/// Granularity the current region assignment needs
pub fn required_granularity(settings: &Settings) -> Granularity {
    if settings.shows_seconds() {
        Granularity::Second
    } else {
        Granularity::Minute
    }
}

/// Tracks the active tick subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickRateController {
    current: Option<Granularity>,
}

impl TickRateController {
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Active granularity, `None` before the first reconcile
    pub fn current(&self) -> Option<Granularity> {
        self.current
    }

    /// Bring the subscription in line with the settings
    ///
    /// Resubscribes only when the required granularity differs from the
    /// active one. Returns true if the subscription changed.
    pub fn reconcile<T: TickService>(&mut self, settings: &Settings, ticks: &mut T) -> bool {
        let required = required_granularity(settings);
        if self.current == Some(required) {
            return false;
        }

        if self.current.is_some() {
            ticks.unsubscribe();
        }
        ticks.subscribe(required);
        info!("Tick granularity {:?} -> {:?}", self.current, required);
        self.current = Some(required);
        true
    }

    /// Drop the subscription
    pub fn stop<T: TickService>(&mut self, ticks: &mut T) {
        if self.current.take().is_some() {
            ticks.unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTicks;
    use quadrant_protocol::ContentKind;

    #[test]
    fn test_required_granularity() {
        let mut settings = Settings::default();
        assert_eq!(required_granularity(&settings), Granularity::Minute);

        settings.region_content[2] = ContentKind::Seconds;
        assert_eq!(required_granularity(&settings), Granularity::Second);

        settings.region_content[0] = ContentKind::Seconds;
        settings.region_content[2] = ContentKind::Day;
        assert_eq!(required_granularity(&settings), Granularity::Second);

        settings.region_content[0] = ContentKind::Battery;
        assert_eq!(required_granularity(&settings), Granularity::Minute);
    }

    #[test]
    fn test_first_reconcile_subscribes() {
        let mut ticks = RecordingTicks::default();
        let mut controller = TickRateController::new();

        assert!(controller.reconcile(&Settings::default(), &mut ticks));
        assert_eq!(controller.current(), Some(Granularity::Minute));
        assert_eq!(ticks.subscribe_calls, [Granularity::Minute]);
        assert_eq!(ticks.unsubscribe_calls, 0);
    }

    #[test]
    fn test_unchanged_requirement_does_not_churn() {
        let mut ticks = RecordingTicks::default();
        let mut controller = TickRateController::new();
        let settings = Settings::default();

        controller.reconcile(&settings, &mut ticks);
        assert!(!controller.reconcile(&settings, &mut ticks));
        assert_eq!(ticks.subscribe_calls.len(), 1);
        assert_eq!(ticks.unsubscribe_calls, 0);
    }

    #[test]
    fn test_switch_unsubscribes_then_resubscribes() {
        let mut ticks = RecordingTicks::default();
        let mut controller = TickRateController::new();
        let mut settings = Settings::default();
        controller.reconcile(&settings, &mut ticks);

        settings.region_content[3] = ContentKind::Seconds;
        assert!(controller.reconcile(&settings, &mut ticks));
        assert_eq!(ticks.subscribed, Some(Granularity::Second));
        assert_eq!(ticks.unsubscribe_calls, 1);

        settings.region_content[3] = ContentKind::Date;
        assert!(controller.reconcile(&settings, &mut ticks));
        assert_eq!(ticks.subscribed, Some(Granularity::Minute));
        assert_eq!(
            ticks.subscribe_calls,
            [Granularity::Minute, Granularity::Second, Granularity::Minute]
        );
        assert_eq!(ticks.unsubscribe_calls, 2);
    }

    #[test]
    fn test_stop() {
        let mut ticks = RecordingTicks::default();
        let mut controller = TickRateController::new();
        controller.reconcile(&Settings::default(), &mut ticks);

        controller.stop(&mut ticks);
        assert_eq!(controller.current(), None);
        assert_eq!(ticks.subscribed, None);

        // Second stop is a no-op
        controller.stop(&mut ticks);
        assert_eq!(ticks.unsubscribe_calls, 1);
    }
}
