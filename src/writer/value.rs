// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Encodes a typed [`Value`] back into its wire value text.

use crate::model::Value;

/// Render a value's `value` field text, as it should appear after the `:`.
#[must_use]
pub fn encode_value(value: &Value) -> String {
    match value {
        Value::Text(s) | Value::Raw(s) => encode_text(s),
        Value::DateTime(dt) => dt.to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Duration(d) => encode_duration(*d),
        Value::Geo(g) => format!("{};{}", g.lat, g.lon),
        Value::Recurrence(r) => r.raw.clone(),
    }
}

/// Backslash-escape a TEXT value (RFC 5545 §3.3.11): backslash, semicolon,
/// comma, and newline are escaped; other characters pass through unchanged.
#[must_use]
pub fn encode_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            ';' => out.push_str(r"\;"),
            ',' => out.push_str(r"\,"),
            '\n' => out.push_str(r"\n"),
            other => out.push(other),
        }
    }
    out
}

fn encode_duration(d: crate::model::DurationValue) -> String {
    use crate::model::DurationValue::{DayTime, Week};
    match d {
        DayTime {
            positive,
            day,
            hour,
            minute,
            second,
        } => {
            let sign = if positive { "" } else { "-" };
            let mut s = format!("{sign}P");
            if day > 0 {
                s.push_str(&format!("{day}D"));
            }
            if hour > 0 || minute > 0 || second > 0 {
                s.push('T');
                if hour > 0 {
                    s.push_str(&format!("{hour}H"));
                }
                if minute > 0 {
                    s.push_str(&format!("{minute}M"));
                }
                if second > 0 {
                    s.push_str(&format!("{second}S"));
                }
            }
            if s.ends_with('P') {
                s.push_str("T0S");
            }
            s
        }
        Week { positive, week } => {
            let sign = if positive { "" } else { "-" };
            format!("{sign}P{week}W")
        }
    }
}

/// Unescape a TEXT value's backslash sequences (the inverse of
/// [`encode_text`]), used when decoding on read.
#[must_use]
pub fn decode_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('\\') => {
                out.push('\\');
                chars.next();
            }
            Some(';') => {
                out.push(';');
                chars.next();
            }
            Some(',') => {
                out.push(',');
                chars.next();
            }
            Some('n' | 'N') => {
                out.push('\n');
                chars.next();
            }
            Some(&other) => {
                out.push(other);
                chars.next();
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DurationValue, GeoValue};

    #[test]
    fn test_text_round_trip() {
        let raw = "Meeting; agenda, notes\nmore text";
        let encoded = encode_text(raw);
        assert_eq!(decode_text(&encoded), raw);
    }

    #[test]
    fn test_encode_geo() {
        let g = GeoValue { lat: 37.386_013, lon: -122.082_932 };
        assert_eq!(encode_value(&Value::Geo(g)), "37.386013;-122.082932");
    }

    #[test]
    fn test_encode_duration_day_time() {
        let d = DurationValue::DayTime {
            positive: true,
            day: 1,
            hour: 2,
            minute: 0,
            second: 0,
        };
        assert_eq!(encode_duration(d), "P1DT2H");
    }

    #[test]
    fn test_encode_duration_week() {
        let d = DurationValue::Week { positive: false, week: 2 };
        assert_eq!(encode_duration(d), "-P2W");
    }
}
