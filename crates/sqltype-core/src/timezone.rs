//! Timezone resolution for temporal values.
//!
//! A timezone option is either an IANA zone name (`Europe/Berlin`), looked up
//! with chrono-tz, or a fixed UTC offset (`+05:30`, `-0800`). Named zones win
//! when a string is both.

use crate::error::{EncodeError, ParseError};
use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use chrono_tz::Tz;
use std::str::FromStr;

/// A resolved timezone option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl Zone {
    /// Resolve a timezone option: zone lookup first, offset parsing second.
    pub fn resolve(timezone: &str) -> Option<Zone> {
        if let Ok(tz) = Tz::from_str(timezone) {
            return Some(Zone::Named(tz));
        }
        parse_offset(timezone).map(Zone::Fixed)
    }

    /// Express `instant` in this zone.
    pub fn from_utc(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Zone::Named(tz) => instant.with_timezone(tz).fixed_offset(),
            Zone::Fixed(offset) => instant.with_timezone(offset),
        }
    }

    /// Interpret a wall-clock time in this zone. Ambiguous times resolve to
    /// the earlier instant; times skipped by a DST gap are rejected.
    pub fn to_utc(&self, local: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Zone::Named(tz) => pick(tz.from_local_datetime(local)),
            Zone::Fixed(offset) => pick(offset.from_local_datetime(local)),
        }
    }
}

fn pick<T: TimeZone>(result: LocalResult<DateTime<T>>) -> Option<DateTime<Utc>> {
    result.earliest().map(|dt| dt.with_timezone(&Utc))
}

/// Parse `+HH:MM`, `-HHMM`, `+HH` or `Z`.
pub fn parse_offset(text: &str) -> Option<FixedOffset> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }
    let (sign, rest) = match text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        1 | 2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Express `instant` in the zone named by `timezone` (UTC when absent).
pub fn apply_timezone(
    instant: &DateTime<Utc>,
    timezone: Option<&str>,
) -> Result<DateTime<FixedOffset>, EncodeError> {
    match timezone {
        None => Ok(instant.fixed_offset()),
        Some(tz) => Zone::resolve(tz)
            .map(|zone| zone.from_utc(instant))
            .ok_or_else(|| EncodeError::InvalidTimezone(tz.to_string())),
    }
}

/// Interpret wall-clock text stored by a driver in the zone named by
/// `timezone` (UTC when absent).
pub fn local_text_to_utc(text: &str, timezone: Option<&str>) -> Result<DateTime<Utc>, ParseError> {
    let local = parse_naive(text).ok_or_else(|| ParseError::InvalidDateTime(text.to_string()))?;
    let zone = match timezone {
        None => Zone::Named(Tz::UTC),
        Some(tz) => Zone::resolve(tz).ok_or_else(|| ParseError::InvalidTimezone(tz.to_string()))?,
    };
    zone.to_utc(&local)
        .ok_or_else(|| ParseError::InvalidDateTime(text.to_string()))
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// Parse date/time text in any of the formats the type engine emits or
/// accepts. Text without an offset is read as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    parse_naive(text).map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offsets() {
        assert_eq!(parse_offset("+05:30"), FixedOffset::east_opt(19800));
        assert_eq!(parse_offset("-0800"), FixedOffset::east_opt(-28800));
        assert_eq!(parse_offset("+02"), FixedOffset::east_opt(7200));
        assert_eq!(parse_offset("Z"), FixedOffset::east_opt(0));
        assert_eq!(parse_offset("05:00"), None);
        assert_eq!(parse_offset("+5:75"), None);
    }

    #[test]
    fn test_named_zone_wins_over_offset() {
        assert!(matches!(Zone::resolve("America/New_York"), Some(Zone::Named(_))));
        assert!(matches!(Zone::resolve("+01:00"), Some(Zone::Fixed(_))));
        assert!(Zone::resolve("Mars/Olympus").is_none());
    }

    #[test]
    fn test_apply_timezone() {
        let instant = Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap();
        let local = apply_timezone(&instant, Some("Europe/Berlin")).unwrap();
        assert_eq!(local.to_rfc3339(), "2020-06-01T14:00:00+02:00");
        let fixed = apply_timezone(&instant, Some("-03:00")).unwrap();
        assert_eq!(fixed.to_rfc3339(), "2020-06-01T09:00:00-03:00");
        assert!(apply_timezone(&instant, Some("nowhere")).is_err());
    }

    #[test]
    fn test_local_text_to_utc() {
        let utc = local_text_to_utc("2020-06-01 14:00:00", Some("Europe/Berlin")).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap());
        let utc = local_text_to_utc("2020-06-01 14:00:00", Some("+02:00")).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(parse_timestamp("2020-01-02T03:04:05Z"), Some(expected));
        assert_eq!(
            parse_timestamp("2020-01-02 04:04:05.000 +01:00"),
            Some(expected)
        );
        assert_eq!(parse_timestamp("2020-01-02 03:04:05"), Some(expected));
        assert!(parse_timestamp("not a date").is_none());
    }
}
