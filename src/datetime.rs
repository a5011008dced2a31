// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Opaque date/date-time values (RFC 5545 §3.3.4, §3.3.5).
//!
//! This crate does not look up time zones or expand recurrences (see
//! crate-level non-goals); a `DateTimeValue` is an opaque instant with a
//! has-time-of-day flag and an optional `TZID` string carried through
//! unresolved, plus a `jiff`-backed comparison for the validator's
//! ordering rules.

use std::fmt;

/// A calendar date (RFC 5545 `date-value`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateValue {
    /// Year, e.g. 2023.
    pub year: i16,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
}

/// A time of day (RFC 5545 `time` production).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeValue {
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-60 (60 accounts for a positive leap second).
    pub second: u8,
    /// Whether the time carries a trailing `Z` (UTC).
    pub utc: bool,
}

/// A date or date-time value, with an optional `TZID` carried unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeValue {
    /// The date component, always present.
    pub date: DateValue,
    /// The time component; `None` means this is a DATE-only value.
    pub time: Option<TimeValue>,
    /// The `TZID` parameter value, if one was present on the property.
    pub tzid: Option<String>,
}

impl DateTimeValue {
    /// Whether this value carries a time-of-day component.
    #[must_use]
    pub const fn has_time(&self) -> bool {
        self.time.is_some()
    }

    /// A tuple usable to compare two values as instants, ignoring `TZID`
    /// resolution (this crate does not look up time-zone offsets). A
    /// DATE-only value compares as midnight.
    #[must_use]
    pub fn instant_key(&self) -> (i16, u8, u8, u8, u8, u8) {
        let time = self.time.unwrap_or(TimeValue {
            hour: 0,
            minute: 0,
            second: 0,
            utc: false,
        });
        (
            self.date.year,
            self.date.month,
            self.date.day,
            time.hour,
            time.minute,
            time.second,
        )
    }

    #[cfg(feature = "jiff")]
    /// Convert the date component to a `jiff::civil::Date`.
    ///
    /// # Errors
    /// Returns an error if the date is out of `jiff`'s representable range.
    pub fn civil_date(&self) -> Result<jiff::civil::Date, jiff::Error> {
        jiff::civil::Date::new(self.date.year, self.date.month as i8, self.date.day as i8)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)?;
        if let Some(time) = self.time {
            write!(f, "T{:02}{:02}{:02}", time.hour, time.minute, time.second)?;
            if time.utc {
                write!(f, "Z")?;
            }
        }
        Ok(())
    }
}

/// Parse a DATE or DATE-TIME value string (`YYYYMMDD` or `YYYYMMDDTHHMMSS[Z]`).
///
/// `tzid` should be the decoded `TZID` parameter value, if any was present.
#[must_use]
pub fn parse_date_or_date_time(text: &str, tzid: Option<String>) -> Option<DateTimeValue> {
    let date = parse_date(text.get(0..8)?)?;
    if text.len() == 8 {
        return Some(DateTimeValue {
            date,
            time: None,
            tzid,
        });
    }

    let rest = text.get(8..)?;
    let rest = rest.strip_prefix('T')?;
    let (digits, utc) = match rest.strip_suffix('Z') {
        Some(d) => (d, true),
        None => (rest, false),
    };
    if digits.len() != 6 {
        return None;
    }
    let hour = digits.get(0..2)?.parse::<u8>().ok()?;
    let minute = digits.get(2..4)?.parse::<u8>().ok()?;
    let second = digits.get(4..6)?.parse::<u8>().ok()?;
    if hour > 23 || minute > 59 || second > 60 {
        return None;
    }

    Some(DateTimeValue {
        date,
        time: Some(TimeValue {
            hour,
            minute,
            second,
            utc,
        }),
        tzid,
    })
}

/// Parse an 8-digit `YYYYMMDD` date string.
#[must_use]
pub fn parse_date(text: &str) -> Option<DateValue> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = text.get(0..4)?.parse::<i16>().ok()?;
    let month = text.get(4..6)?.parse::<u8>().ok()?;
    let day = text.get(6..8)?.parse::<u8>().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(DateValue { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let v = parse_date_or_date_time("19970714", None).unwrap();
        assert!(!v.has_time());
        assert_eq!(v.date, DateValue { year: 1997, month: 7, day: 14 });
    }

    #[test]
    fn test_parse_utc_date_time() {
        let v = parse_date_or_date_time("20230101T000000Z", None).unwrap();
        assert!(v.has_time());
        assert_eq!(v.time.unwrap().utc, true);
        assert_eq!(v.to_string(), "20230101T000000Z");
    }

    #[test]
    fn test_parse_local_date_time_with_tzid() {
        let v = parse_date_or_date_time("20230101T100000", Some("America/New_York".into()))
            .unwrap();
        assert!(!v.time.unwrap().utc);
        assert_eq!(v.tzid.as_deref(), Some("America/New_York"));
    }

    #[test]
    fn test_invalid_date_time_rejected() {
        assert!(parse_date_or_date_time("2023010", None).is_none());
        assert!(parse_date_or_date_time("20231301", None).is_none());
        assert!(parse_date_or_date_time("20230101T2500", None).is_none());
    }

    #[test]
    fn test_instant_ordering() {
        let earlier = parse_date_or_date_time("20230105", None).unwrap();
        let later = parse_date_or_date_time("20230110", None).unwrap();
        assert!(earlier.instant_key() < later.instant_key());
    }
}
