//! Rendering
//!
//! Turns settings and the metric snapshot into the text of each display
//! region. Rendering is a pure function of its inputs; the dispatcher
//! recomputes every region after each event, with no dirty tracking.

pub mod frame;
pub mod region;
pub mod time;

pub use frame::Frame;
pub use region::{render_all, render_region, RegionText, REGION_TEXT_LEN};
pub use time::render_time;
