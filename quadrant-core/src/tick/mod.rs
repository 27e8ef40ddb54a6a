//! Tick subscription and periodic refresh
//!
//! The tick rate follows what the regions show: seconds granularity only
//! while some region displays seconds. Independently of the rate, a weather
//! refresh request goes out once every half hour.

pub mod controller;
pub mod refresh;

pub use controller::{required_granularity, TickRateController};
pub use refresh::{is_refresh_due, send_refresh_request, RefreshError, REFRESH_PERIOD_MINUTES};
