// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The typed property value (RFC 5545 §3.3), collapsed into one tagged
//! variant record rather than a hierarchy of per-type property classes
//! (see DESIGN.md — "deep inheritance of property/component types").

use crate::datetime::DateTimeValue;

/// A duration (RFC 5545 §3.3.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationValue {
    /// A day/hour/minute/second duration, e.g. `P1DT2H`.
    DayTime {
        /// Whether the duration is positive (`+`/absent) or negative (`-`).
        positive: bool,
        /// Whole days.
        day: u32,
        /// Hours, 0-23 conceptually but unconstrained on the wire.
        hour: u32,
        /// Minutes.
        minute: u32,
        /// Seconds.
        second: u32,
    },
    /// A week duration, e.g. `P2W`.
    Week {
        /// Whether the duration is positive.
        positive: bool,
        /// Whole weeks.
        week: u32,
    },
}

impl DurationValue {
    /// Total duration length in seconds, ignoring sign.
    #[must_use]
    pub const fn magnitude_seconds(self) -> u64 {
        match self {
            Self::DayTime {
                day,
                hour,
                minute,
                second,
                ..
            } => (day as u64) * 86_400 + (hour as u64) * 3_600 + (minute as u64) * 60 + second as u64,
            Self::Week { week, .. } => (week as u64) * 7 * 86_400,
        }
    }
}

/// A `GEO` value: latitude/longitude pair (RFC 5545 §3.8.1.6).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoValue {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// The parts of an `RRULE` the validator needs; this crate does not expand
/// recurrences (see crate-level non-goals).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceValue {
    /// The `FREQ` part, verbatim (e.g. `"DAILY"`).
    pub freq: String,
    /// Whether a `BYHOUR` part was present.
    pub by_hour: bool,
    /// Whether a `BYMINUTE` part was present.
    pub by_minute: bool,
    /// Whether a `BYSECOND` part was present.
    pub by_second: bool,
    /// The raw, unparsed value text, preserved for round-tripping.
    pub raw: String,
}

impl RecurrenceValue {
    /// Parse the `FREQ`/`BYHOUR`/`BYMINUTE`/`BYSECOND` parts out of a raw
    /// `RRULE` value, tolerating unknown parts (they are simply ignored —
    /// this crate does not validate the full recurrence grammar).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut freq = String::new();
        let mut by_hour = false;
        let mut by_minute = false;
        let mut by_second = false;

        for part in raw.split(';') {
            let Some((key, value)) = part.split_once('=') else {
                continue;
            };
            match key.to_ascii_uppercase().as_str() {
                "FREQ" => freq = value.to_string(),
                "BYHOUR" => by_hour = true,
                "BYMINUTE" => by_minute = true,
                "BYSECOND" => by_second = true,
                _ => {}
            }
        }

        Self {
            freq,
            by_hour,
            by_minute,
            by_second,
            raw: raw.to_string(),
        }
    }
}

/// A decoded property value.
///
/// `Raw` is used for any property name with no registered decoder (or
/// whose decoder failed): the crate preserves the original text so the
/// writer can round-trip it unchanged (RFC 5545 extension properties).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A text value, already unescaped (backslash sequences resolved).
    Text(String),
    /// A DATE or DATE-TIME value.
    DateTime(DateTimeValue),
    /// An INTEGER value.
    Integer(i64),
    /// A DURATION value.
    Duration(DurationValue),
    /// A GEO value.
    Geo(GeoValue),
    /// The recurrence-relevant parts of an RRULE value.
    Recurrence(RecurrenceValue),
    /// Unrecognized or undecodable value text, preserved verbatim.
    Raw(String),
}

impl Value {
    /// Borrow the text if this is a `Text` or `Raw` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Raw(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the date-time if this is a `DateTime` value.
    #[must_use]
    pub fn as_date_time(&self) -> Option<&DateTimeValue> {
        match self {
            Self::DateTime(v) => Some(v),
            _ => None,
        }
    }
}
