//! Region text rendering

use core::fmt::Write;

use heapless::String;
use quadrant_protocol::{ContentKind, REGION_COUNT};

use crate::config::{Capabilities, Settings};
use crate::metrics::MetricSnapshot;
use crate::traits::Region;

/// Region text buffer size
pub const REGION_TEXT_LEN: usize = 31;

/// Rendered text of one region
pub type RegionText = String<REGION_TEXT_LEN>;

const METERS_PER_MILE: i64 = 1609;

/// Render the text a region shows for a content kind
///
/// Total over every kind. Health kinds render empty on devices without
/// the health capability.
pub fn render_region(
    kind: ContentKind,
    snapshot: &MetricSnapshot,
    settings: &Settings,
    caps: Capabilities,
) -> RegionText {
    let mut text = RegionText::new();
    if kind.is_health() && !caps.health {
        return text;
    }

    // Every formatted value fits the buffer; a write error cannot occur
    let _ = match kind {
        ContentKind::None => Ok(()),
        ContentKind::Battery => write!(text, "{}%", snapshot.battery_percent),
        ContentKind::Temperature => match snapshot.temperature {
            Some(t) if settings.use_celsius => write!(text, "{}°C", t.celsius),
            Some(t) => write!(text, "{}°F", t.fahrenheit),
            None => Ok(()),
        },
        ContentKind::Day => text.write_str(&snapshot.day),
        ContentKind::Date => text.write_str(&snapshot.date),
        ContentKind::Conditions => text.write_str(&snapshot.conditions),
        ContentKind::Seconds => text.write_str(&snapshot.seconds),
        ContentKind::Steps => write!(text, "{}", snapshot.steps),
        ContentKind::Distance => write_distance(&mut text, snapshot.distance_m, settings.use_metric),
        ContentKind::ActiveMinutes => write!(text, "{}min", snapshot.active_minutes),
        ContentKind::HeartRate if snapshot.heart_rate_bpm > 0 => {
            write!(text, "{}bpm", snapshot.heart_rate_bpm)
        }
        ContentKind::HeartRate => text.write_str("--bpm"),
    };
    text
}

/// Distance with one decimal, integer arithmetic only
///
/// Miles are computed in tenths first so short distances are not truncated
/// to zero before the split.
fn write_distance<W: Write>(out: &mut W, meters: i32, metric: bool) -> core::fmt::Result {
    let meters = i64::from(meters.max(0));
    if metric {
        write!(out, "{}.{}km", meters / 1000, (meters / 100) % 10)
    } else {
        let tenths = meters * 10 / METERS_PER_MILE;
        write!(out, "{}.{}mi", tenths / 10, tenths % 10)
    }
}

/// Render every region in region order
pub fn render_all(
    settings: &Settings,
    snapshot: &MetricSnapshot,
    caps: Capabilities,
) -> [RegionText; REGION_COUNT] {
    Region::ALL.map(|region| render_region(settings.content(region), snapshot, settings, caps))
}
