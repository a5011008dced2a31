// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Maps a property name (and an optional `VALUE=` override) to the decoder
//! that turns its raw value text into a typed [`Value`].
//!
//! Properties with no registered decoder, and properties whose decoder
//! rejects the text, fall back to [`Value::Raw`] so the writer can still
//! round-trip them unchanged.

use crate::datetime;
use crate::keyword::*;
use crate::model::{DurationValue, GeoValue, Parameters, RecurrenceValue, Value};
use crate::writer::value::decode_text;

/// The registered value-type families this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Text,
    DateTime,
    Duration,
    Integer,
    Geo,
    Recurrence,
}

impl ValueKind {
    /// The RFC 5545 §3.3 type name, used in [`DecodeError`]'s message.
    const fn type_name(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::DateTime => "DATE-TIME",
            Self::Duration => "DURATION",
            Self::Integer => "INTEGER",
            Self::Geo => "GEO",
            Self::Recurrence => "RECURRENCE",
        }
    }
}

/// A registered decoder could not parse the text it was given (e.g. `GEO`
/// handed non-numeric text).
///
/// This is a semantic fault, not an I/O fault: per the crate's three-tier
/// error model, the Object Reader converts it into a
/// [`crate::model::WarningCode::InvalidValue`] warning rather than
/// propagating it as a `Result` error, and falls back to [`Value::Raw`] so
/// the property still round-trips.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {type_name} value: {text:?}")]
pub struct DecodeError {
    type_name: &'static str,
    text: String,
}

/// Decode `raw_value` for a property named `property_name`, honoring a
/// `VALUE=` parameter override if present.
///
/// # Errors
/// Returns [`DecodeError`] when the property name (or a `VALUE=` override)
/// resolves to a known value type but the text does not parse as that type.
/// An unrecognized property name is not an error: it decodes as
/// [`Value::Raw`] so unknown and extension properties still round-trip.
pub fn decode_value(
    property_name: &str,
    parameters: &Parameters,
    raw_value: &str,
) -> Result<Value, DecodeError> {
    let kind = parameters
        .get_single(KW_VALUE)
        .and_then(value_kind_from_override)
        .or_else(|| default_kind_for_property(property_name));

    let Some(kind) = kind else {
        return Ok(Value::Raw(raw_value.to_string()));
    };

    let tzid = parameters.get_single(KW_TZID).map(str::to_string);
    decode_with_kind(kind, raw_value, tzid).ok_or_else(|| DecodeError {
        type_name: kind.type_name(),
        text: raw_value.to_string(),
    })
}

fn decode_with_kind(kind: ValueKind, raw_value: &str, tzid: Option<String>) -> Option<Value> {
    match kind {
        ValueKind::Text => Some(Value::Text(decode_text(raw_value))),
        ValueKind::DateTime => {
            datetime::parse_date_or_date_time(raw_value, tzid).map(Value::DateTime)
        }
        ValueKind::Duration => decode_duration(raw_value).map(Value::Duration),
        ValueKind::Integer => lexical::parse::<i64, _>(raw_value).ok().map(Value::Integer),
        ValueKind::Geo => decode_geo(raw_value).map(Value::Geo),
        ValueKind::Recurrence => Some(Value::Recurrence(RecurrenceValue::parse(raw_value))),
    }
}

fn value_kind_from_override(value: &str) -> Option<ValueKind> {
    match value.to_ascii_uppercase().as_str() {
        v if v == KW_TEXT => Some(ValueKind::Text),
        v if v == KW_DATE || v == KW_DATETIME => Some(ValueKind::DateTime),
        "DURATION" => Some(ValueKind::Duration),
        v if v == KW_INTEGER => Some(ValueKind::Integer),
        // GEO has no RFC-registered VALUE= name of its own; it is only
        // ever reached through the default-kind-by-property-name path.
        _ => None,
    }
}

fn default_kind_for_property(name: &str) -> Option<ValueKind> {
    let upper = name.to_ascii_uppercase();
    Some(match upper.as_str() {
        n if n == KW_DTSTART
            || n == KW_DTEND
            || n == KW_DUE
            || n == KW_COMPLETED
            || n == KW_CREATED
            || n == KW_DTSTAMP
            || n == KW_LAST_MODIFIED
            || n == KW_RECURRENCE_ID
            || n == KW_EXDATE
            || n == KW_RDATE =>
        {
            ValueKind::DateTime
        }
        n if n == KW_DURATION => ValueKind::Duration,
        n if n == KW_SEQUENCE || n == KW_PRIORITY || n == KW_PERCENT_COMPLETE || n == KW_REPEAT => {
            ValueKind::Integer
        }
        n if n == KW_GEO => ValueKind::Geo,
        n if n == KW_RRULE || n == KW_EXRULE => ValueKind::Recurrence,
        n if n == KW_SUMMARY
            || n == KW_DESCRIPTION
            || n == KW_LOCATION
            || n == KW_COMMENT
            || n == KW_CATEGORIES
            || n == KW_STATUS
            || n == KW_CLASS
            || n == KW_TRANSP
            || n == KW_UID
            || n == KW_CONTACT
            || n == KW_RELATED_TO
            || n == KW_TZID
            || n == KW_TZNAME
            || n == KW_ACTION
            || n == KW_URL
            || n == KW_PRODID
            || n == KW_VERSION
            || n == KW_CALSCALE
            || n == KW_METHOD
            || n == KW_REQUEST_STATUS =>
        {
            ValueKind::Text
        }
        _ => return None,
    })
}

fn decode_geo(raw: &str) -> Option<GeoValue> {
    let (lat, lon) = raw.split_once(';')?;
    let lat = lexical::parse::<f64, _>(lat.trim()).ok()?;
    let lon = lexical::parse::<f64, _>(lon.trim()).ok()?;
    Some(GeoValue { lat, lon })
}

/// Parse a `DURATION` value (RFC 5545 §3.3.6): `[+-]?P` followed by either
/// a week count or a day/time breakdown.
fn decode_duration(raw: &str) -> Option<DurationValue> {
    let (positive, rest) = match raw.strip_prefix('-') {
        Some(rest) => (false, rest),
        None => (true, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let rest = rest.strip_prefix('P')?;

    if let Some(weeks) = rest.strip_suffix('W') {
        let week = lexical::parse::<u32, _>(weeks).ok()?;
        return Some(DurationValue::Week { positive, week });
    }

    let mut saw_any_component = false;
    let mut remaining = rest;

    let day = if let Some(idx) = remaining.find('D') {
        let value = lexical::parse::<u32, _>(&remaining[..idx]).ok()?;
        remaining = &remaining[idx + 1..];
        saw_any_component = true;
        value
    } else {
        0
    };

    let (hour, minute, second) = if let Some(after_t) = remaining.strip_prefix('T') {
        remaining = after_t;
        let hour = consume_component(&mut remaining, 'H', &mut saw_any_component)?;
        let minute = consume_component(&mut remaining, 'M', &mut saw_any_component)?;
        let second = consume_component(&mut remaining, 'S', &mut saw_any_component)?;
        (hour, minute, second)
    } else {
        (0, 0, 0)
    };

    if !remaining.is_empty() || !saw_any_component {
        return None;
    }

    Some(DurationValue::DayTime {
        positive,
        day,
        hour,
        minute,
        second,
    })
}

fn consume_component(remaining: &mut &str, suffix: char, saw_any: &mut bool) -> Option<u32> {
    let Some(end) = remaining.find(suffix) else {
        return Some(0);
    };
    let value = lexical::parse::<u32, _>(&remaining[..end]).ok()?;
    *remaining = &remaining[end + 1..];
    *saw_any = true;
    Some(value)
}
