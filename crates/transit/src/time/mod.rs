//! Clock-string arithmetic and the current service time.
//!
//! Schedule times are "HH:MM" strings counted from the start of the service
//! day. Hours past 23 are legal and denote service after midnight.

pub mod clock;

pub use clock::{service_minutes_at, Clock, FixedClock, ServiceClock, SystemClock};

use crate::models::types::{Result, ScheduleError};

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Split "HH:MM" into its hour and minute text. Anything after a second
/// colon (seconds) is ignored.
fn split_clock(time: &str) -> Result<(&str, &str)> {
    let mut parts = time.split(':');
    match (parts.next(), parts.next()) {
        (Some(hour), Some(minute)) => Ok((hour, minute)),
        _ => Err(ScheduleError::InvalidTime(time.to_string())),
    }
}

fn parse_field(field: &str, time: &str) -> Result<i32> {
    field
        .trim()
        .parse()
        .map_err(|_| ScheduleError::InvalidTime(time.to_string()))
}

/// Minutes since the start of the service day. No range check is applied, so
/// "25:10" yields 1510; only values that overflow `i32` are rejected.
pub fn parse_time(time: &str) -> Result<i32> {
    let (hour, minute) = split_clock(time)?;
    let hour = parse_field(hour, time)?;
    let minute = parse_field(minute, time)?;
    hour.checked_mul(60)
        .and_then(|h| h.checked_add(minute))
        .ok_or_else(|| ScheduleError::InvalidTime(time.to_string()))
}

/// 12-hour display form: "00:00" is "12:00 AM", "12:00" is "12:00 PM",
/// "13:05" is "1:05 PM". The minute text is carried through unchanged.
pub fn format_time(time: &str) -> Result<String> {
    let (hour, minute) = split_clock(time)?;
    let mut hour = parse_field(hour, time)?;

    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    if hour > 12 {
        hour -= 12;
    }
    if hour == 0 {
        hour = 12;
    }

    Ok(format!("{hour}:{minute} {meridiem}"))
}

/// Signed minutes from `now` until `stop_minutes`.
///
/// Anything further than `past_grace` minutes in the past is taken to be
/// tomorrow's run and moved forward one day. Saturates at the `i32` bounds.
pub fn minutes_away(stop_minutes: i32, now: i32, past_grace: i32) -> i32 {
    let away = stop_minutes.saturating_sub(now);
    if away < past_grace.saturating_neg() {
        away.saturating_add(MINUTES_PER_DAY)
    } else {
        away
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("08:30").unwrap(), 510);
        assert_eq!(parse_time("00:00").unwrap(), 0);
        assert_eq!(parse_time("23:59").unwrap(), 1439);
        assert_eq!(parse_time("25:10").unwrap(), 1510);
        assert_eq!(parse_time("7:05").unwrap(), 425);
        assert_eq!(parse_time("06:15:00").unwrap(), 375);
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert!(matches!(parse_time("0830"), Err(ScheduleError::InvalidTime(_))));
        assert!(parse_time("ab:cd").is_err());
        assert!(parse_time("").is_err());
        assert!(parse_time("12:").is_err());
    }

    #[test]
    fn test_parse_time_overflow_is_an_error() {
        assert!(matches!(parse_time("99999999:00"), Err(ScheduleError::InvalidTime(_))));
        assert!(parse_time("-35791395:00").is_err());
        assert!(parse_time("35791394:2147483647").is_err());
        assert_eq!(parse_time("-35791394:00").unwrap(), -2_147_483_640);
    }

    #[test]
    fn test_parse_time_monotonic_within_day() {
        let mut previous = -1;
        for hour in 0..24 {
            for minute in 0..60 {
                let value = parse_time(&format!("{hour:02}:{minute:02}")).unwrap();
                assert!(value > previous);
                previous = value;
            }
        }
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("00:00").unwrap(), "12:00 AM");
        assert_eq!(format_time("12:00").unwrap(), "12:00 PM");
        assert_eq!(format_time("13:05").unwrap(), "1:05 PM");
        assert_eq!(format_time("23:59").unwrap(), "11:59 PM");
        assert_eq!(format_time("09:07").unwrap(), "9:07 AM");
        assert_eq!(format_time("11:59").unwrap(), "11:59 AM");
        assert!(format_time("noon").is_err());
    }

    #[test]
    fn test_minutes_away_wraps_past_grace() {
        // Stop at 00:05, now 23:50
        assert_eq!(minutes_away(5, 1430, 60), 15);
        // Within the grace window the value stays negative
        assert_eq!(minutes_away(600, 660, 60), -60);
        assert_eq!(minutes_away(599, 660, 60), 1379);
        assert_eq!(minutes_away(700, 660, 60), 40);
    }

    #[test]
    fn test_minutes_away_saturates() {
        assert_eq!(minutes_away(i32::MIN + 120, 1430, 60), i32::MIN + MINUTES_PER_DAY);
        assert_eq!(minutes_away(i32::MAX, -10, 60), i32::MAX);
        assert_eq!(minutes_away(0, 0, i32::MIN), MINUTES_PER_DAY);
    }
}
