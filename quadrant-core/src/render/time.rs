//! Clock and calendar text

use core::fmt::Write;

use chrono::{Datelike, NaiveTime, Timelike, Weekday};
use heapless::String;

/// Time region buffer size ("12:59")
pub const TIME_TEXT_LEN: usize = 7;

/// Weekday buffer size ("Wednesday")
pub const DAY_TEXT_LEN: usize = 15;

/// Date buffer size ("Sep 30")
pub const DATE_TEXT_LEN: usize = 15;

/// Seconds buffer size (":59")
pub const SECONDS_TEXT_LEN: usize = 3;

/// Full English weekday name
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Abbreviated English month name for a 1-based month
pub fn month_abbrev(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    month
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Clock text: "HH:MM" in 24-hour style, "H:MM" in 12-hour style
pub fn format_time<T: Timelike>(now: &T, clock_24h: bool) -> String<TIME_TEXT_LEN> {
    let mut text = String::new();
    let _ = if clock_24h {
        write!(text, "{:02}:{:02}", now.hour(), now.minute())
    } else {
        let (_, hour) = now.hour12();
        write!(text, "{}:{:02}", hour, now.minute())
    };
    text
}

/// Time region text, empty until the clock is known
pub fn render_time(clock: Option<NaiveTime>, clock_24h: bool) -> String<TIME_TEXT_LEN> {
    clock
        .map(|time| format_time(&time, clock_24h))
        .unwrap_or_default()
}

/// Weekday text, "Tuesday"
pub fn format_day<D: Datelike>(now: &D) -> String<DAY_TEXT_LEN> {
    crate::text::bounded(weekday_name(now.weekday()))
}

/// Date text without leading zero, "Jun 2"
pub fn format_date<D: Datelike>(now: &D) -> String<DATE_TEXT_LEN> {
    let mut text = String::new();
    let _ = write!(text, "{} {}", month_abbrev(now.month()), now.day());
    text
}

/// Seconds text, ":07"
pub fn format_seconds<T: Timelike>(now: &T) -> String<SECONDS_TEXT_LEN> {
    let mut text = String::new();
    let _ = write!(text, ":{:02}", now.second());
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::at;
    use chrono::NaiveDate;

    #[test]
    fn test_time_24h() {
        assert_eq!(format_time(&at(9, 5, 0), true).as_str(), "09:05");
        assert_eq!(format_time(&at(23, 59, 0), true).as_str(), "23:59");
        assert_eq!(format_time(&at(0, 0, 0), true).as_str(), "00:00");
    }

    #[test]
    fn test_time_12h_strips_leading_zero() {
        assert_eq!(format_time(&at(9, 5, 0), false).as_str(), "9:05");
        assert_eq!(format_time(&at(13, 30, 0), false).as_str(), "1:30");
        assert_eq!(format_time(&at(0, 15, 0), false).as_str(), "12:15");
        assert_eq!(format_time(&at(12, 0, 0), false).as_str(), "12:00");
    }

    #[test]
    fn test_render_time_before_first_tick() {
        assert_eq!(render_time(None, true).as_str(), "");
        let clock = NaiveTime::from_hms_opt(7, 45, 0);
        assert_eq!(render_time(clock, false).as_str(), "7:45");
    }

    #[test]
    fn test_day_and_date() {
        // 2 June 2024 is a Sunday
        let now = at(8, 0, 0);
        assert_eq!(format_day(&now).as_str(), "Sunday");
        assert_eq!(format_date(&now).as_str(), "Jun 2");

        let wednesday = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(format_day(&wednesday).as_str(), "Wednesday");
        assert_eq!(format_date(&wednesday).as_str(), "Dec 25");
    }

    #[test]
    fn test_seconds_zero_padded() {
        assert_eq!(format_seconds(&at(8, 0, 7)).as_str(), ":07");
        assert_eq!(format_seconds(&at(8, 0, 59)).as_str(), ":59");
    }

    #[test]
    fn test_month_out_of_range() {
        assert_eq!(month_abbrev(0), "");
        assert_eq!(month_abbrev(13), "");
        assert_eq!(month_abbrev(1), "Jan");
    }
}
