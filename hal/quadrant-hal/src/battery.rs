//! Battery state service

/// Battery charge state as reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryState {
    /// Charge in percent (0-100)
    pub charge_percent: u8,
    /// Battery is currently charging
    pub is_charging: bool,
    /// Charger is plugged in
    pub is_plugged: bool,
}

/// Battery service
///
/// Charge changes arrive as events; `peek` reads the current state
/// synchronously, used once at startup.
pub trait BatteryService {
    fn peek(&self) -> BatteryState;
}
