//! Companion message transport
//!
//! Messages to and from the companion process are small encoded
//! dictionaries. Delivery is fire-and-forget: the device OS reports the
//! outcome of a send later, as an event.

/// Outcome codes reported by the message transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppMessageResult {
    /// Operation completed
    Ok,
    /// Companion did not acknowledge in time
    SendTimeout,
    /// Companion rejected the message
    SendRejected,
    /// No companion connected
    NotConnected,
    /// A previous send is still in flight
    Busy,
    /// Message larger than the transport buffer
    BufferOverflow,
    /// Transport could not allocate
    OutOfMemory,
    /// Transport is closed
    Closed,
    /// Platform internal error
    InternalError,
    /// Any other platform code
    Unknown,
}

/// Outbound message transport
pub trait Outbox {
    /// Queue an encoded dictionary for delivery
    ///
    /// An `Err` means the message was not queued at all; failures after
    /// queuing are reported separately.
    fn send(&mut self, dictionary: &[u8]) -> Result<(), AppMessageResult>;
}
