//! Rendered frame
//!
//! A frame is the full text of one render pass: the time region plus the
//! four configurable regions. Frames are recomputed from scratch after every
//! event and painted whole.

use heapless::String;
use quadrant_protocol::REGION_COUNT;

use super::region::{render_all, RegionText};
use super::time::{render_time, TIME_TEXT_LEN};
use crate::config::{Capabilities, Settings};
use crate::metrics::MetricSnapshot;
use crate::traits::{DisplayError, FaceDisplay, Region};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub time: String<TIME_TEXT_LEN>,
    pub regions: [RegionText; REGION_COUNT],
}

impl Frame {
    /// Render a frame from the current state
    pub fn compose(
        settings: &Settings,
        snapshot: &MetricSnapshot,
        caps: Capabilities,
        clock_24h: bool,
    ) -> Self {
        Self {
            time: render_time(snapshot.clock, clock_24h),
            regions: render_all(settings, snapshot, caps),
        }
    }

    /// Text of one region
    pub fn region(&self, region: Region) -> &str {
        &self.regions[region.index()]
    }

    /// Paint the time region, then every region in order
    ///
    /// Stops at the first painter error.
    pub fn paint<D: FaceDisplay>(&self, display: &mut D) -> Result<(), DisplayError> {
        display.set_time_text(&self.time)?;
        for region in Region::ALL {
            display.set_region_text(region, self.region(region))?;
        }
        Ok(())
    }
}
