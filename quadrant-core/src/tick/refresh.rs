//! Weather refresh trigger
//!
//! The companion fetches weather when asked. The watch asks at the top and
//! the bottom of every hour, on the tick whose second is zero, so a
//! per-second subscription still sends a single request.

use chrono::Timelike;
use quadrant_hal::{AppMessageResult, Outbox};
use quadrant_protocol::{DictError, RefreshRequest};

/// Minutes between refresh requests
pub const REFRESH_PERIOD_MINUTES: u32 = 30;

/// Errors sending a refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshError {
    /// The request could not be encoded
    Encode(DictError),
    /// The transport refused the message
    Send(AppMessageResult),
}

impl From<DictError> for RefreshError {
    fn from(e: DictError) -> Self {
        RefreshError::Encode(e)
    }
}

impl From<AppMessageResult> for RefreshError {
    fn from(e: AppMessageResult) -> Self {
        RefreshError::Send(e)
    }
}

/// True on the one tick per period that should trigger a refresh
pub fn is_refresh_due<T: Timelike>(now: &T) -> bool {
    now.minute() % REFRESH_PERIOD_MINUTES == 0 && now.second() == 0
}

/// Encode and queue a refresh request
pub fn send_refresh_request<O: Outbox>(outbox: &mut O) -> Result<(), RefreshError> {
    let mut buffer = [0u8; RefreshRequest::ENCODED_LEN];
    let bytes = RefreshRequest.encode(&mut buffer)?;
    outbox.send(bytes)?;
    info!("Requested weather refresh");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{at, RecordingOutbox};

    #[test]
    fn test_due_on_half_hours_only() {
        assert!(is_refresh_due(&at(9, 0, 0)));
        assert!(is_refresh_due(&at(9, 30, 0)));
        assert!(!is_refresh_due(&at(9, 15, 0)));
        assert!(!is_refresh_due(&at(9, 29, 0)));
        assert!(!is_refresh_due(&at(9, 30, 1)));
    }

    #[test]
    fn test_second_ticks_through_half_hour_fire_once() {
        let due: Vec<u32> = (0..60)
            .filter(|&s| is_refresh_due(&at(14, 30, s)))
            .collect();
        assert_eq!(due, [0]);
    }

    #[test]
    fn test_send_refresh_request() {
        let mut outbox = RecordingOutbox::default();
        send_refresh_request(&mut outbox).unwrap();
        assert_eq!(outbox.sent, [vec![1, 0, 0, 0, 0, 2, 1, 0, 0]]);
    }

    #[test]
    fn test_send_failure_reported() {
        let mut outbox = RecordingOutbox {
            fail_with: Some(AppMessageResult::NotConnected),
            ..Default::default()
        };
        assert_eq!(
            send_refresh_request(&mut outbox),
            Err(RefreshError::Send(AppMessageResult::NotConnected))
        );
        assert!(outbox.sent.is_empty());
    }
}
