//! Time related utils.
//!
//! The timetable service wants timestamps as ISO-8601 in UTC with no
//! fractional seconds, e.g. `2024-01-01T12:00:00`.

use crate::{Error, Result};
use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_tz::Australia::Melbourne;
use chrono_tz::Tz;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Format a datetime the way the timetable service expects it: ISO-8601,
/// UTC, seconds precision, no offset suffix.
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Parse a timestamp in the service's ISO-8601 format back into a datetime.
pub fn parse_iso8601(s: &str) -> Result<DateTime> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| Error::decode_failed(format!("invalid ISO-8601 timestamp: {s}")).with_source(e))?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// Parse a service timestamp and convert it to Melbourne local time.
///
/// Departure and disruption timestamps come back from the service in UTC,
/// with or without a trailing `Z`. Riders read timetables in the network's
/// own timezone, so this handles the AEST/AEDT shift for the caller.
pub fn melbourne_time(s: &str) -> Result<chrono::DateTime<Tz>> {
    let utc = parse_iso8601(s.strip_suffix('Z').unwrap_or(s))?;
    Ok(utc.with_timezone(&Melbourne))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_drops_fractional_seconds() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
            + chrono::Duration::microseconds(123_456);
        assert_eq!(format_iso8601(t), "2024-01-01T12:00:00");
    }

    #[test]
    fn test_parse_round_trip() {
        let t = parse_iso8601("2024-06-30T23:59:59").unwrap();
        assert_eq!(format_iso8601(t), "2024-06-30T23:59:59");
    }

    #[test]
    fn test_parse_rejects_offset_suffix() {
        assert!(parse_iso8601("2024-01-01T12:00:00Z").is_err());
    }

    #[test]
    fn test_melbourne_time_in_summer() {
        // January is daylight saving time, UTC+11
        let t = melbourne_time("2024-01-01T12:00:00Z").unwrap();
        assert_eq!(
            t.format("%Y-%m-%dT%H:%M:%S %Z").to_string(),
            "2024-01-01T23:00:00 AEDT"
        );
    }

    #[test]
    fn test_melbourne_time_in_winter() {
        // June is standard time, UTC+10, and the day can roll over
        let t = melbourne_time("2024-06-30T23:59:59").unwrap();
        assert_eq!(
            t.format("%Y-%m-%dT%H:%M:%S %Z").to_string(),
            "2024-07-01T09:59:59 AEST"
        );
    }

    #[test]
    fn test_melbourne_time_rejects_garbage() {
        assert!(melbourne_time("next tuesday").is_err());
    }
}
