//! Class time-range rendering.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use credit_common::parse_f64;

/// Placeholder for a missing day or time.
pub const NOT_AVAILABLE: &str = "N/A";

const TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DISPLAY_FORMAT: &str = "%-I:%M %p";

/// Parses a stored start time: a clock time, or a date-time whose time part is used.
pub fn parse_start_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|datetime| datetime.time())
        })
}

/// Whole minutes from a stored duration, falling back to `default` when the
/// value is missing or not a finite number. Fractions are truncated.
pub fn duration_minutes(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(parse_f64)
        .filter(|minutes| minutes.is_finite())
        .map_or(default, |minutes| minutes.trunc() as i64)
}

/// Renders `"9:00 AM - 10:30 AM"` from a start time and a duration.
///
/// A missing start renders [`NOT_AVAILABLE`]. A start that cannot be parsed,
/// or a duration too large to add, renders the stored text unchanged. End
/// times past midnight wrap around.
pub fn format_time_range(start: Option<&str>, duration: Option<&str>, default: i64) -> String {
    let Some(raw) = start else {
        return NOT_AVAILABLE.to_string();
    };
    let Some(start_time) = parse_start_time(raw) else {
        tracing::trace!(start = %raw, "unparseable start time shown as stored");
        return raw.to_string();
    };
    let Some(delta) = TimeDelta::try_minutes(duration_minutes(duration, default)) else {
        return raw.to_string();
    };
    let (end_time, _) = start_time.overflowing_add_signed(delta);
    format!(
        "{} - {}",
        start_time.format(DISPLAY_FORMAT),
        end_time.format(DISPLAY_FORMAT)
    )
}
