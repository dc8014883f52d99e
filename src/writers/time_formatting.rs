use chrono::{DateTime, Local, NaiveTime, TimeZone, Utc};
use std::fmt::Display;

const API_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const LIVE_TIME_FORMAT: &str = "%I:%M %p UTC";

/// Converts a UTC timestamp from either API into local time.
///
/// Accepts full stats API timestamps (`2017-08-11T18:45:00Z`) and live
/// service kick-off times (`07:45 PM UTC`, taken as today). Anything else,
/// such as a live match minute, is returned unchanged.
///
/// # Examples
/// ```
/// use soccer_cli::writers::time_formatting::utc_to_local;
///
/// assert_eq!(utc_to_local("63'", false, false), "63'");
/// ```
pub fn utc_to_local(time_str: &str, use_12_hour: bool, show_datetime: bool) -> String {
    utc_to_timezone(time_str, &Local, use_12_hour, show_datetime)
}

/// Same as [`utc_to_local`] with an explicit target timezone.
pub fn utc_to_timezone<Tz>(time_str: &str, tz: &Tz, use_12_hour: bool, show_datetime: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(utc) = parse_utc(time_str.trim()) else {
        return time_str.to_string();
    };

    let clock = if use_12_hour { "%I:%M %p" } else { "%H:%M" };
    let pattern = if show_datetime {
        format!("%a %d, {clock}")
    } else {
        clock.to_string()
    };

    utc.with_timezone(tz).format(&pattern).to_string()
}

fn parse_utc(time_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(time_str, API_DATETIME_FORMAT) {
        return Some(naive.and_utc());
    }

    let time = NaiveTime::parse_from_str(time_str, LIVE_TIME_FORMAT).ok()?;
    Some(Utc::now().date_naive().and_time(time).and_utc())
}
