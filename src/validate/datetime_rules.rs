// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Date/time ordering and kind-agreement checks shared across component
//! rule sets.

use crate::model::{Component, Value, Warning, WarningCode};

fn date_time_value<'a>(component: &'a Component, name: &str) -> Option<&'a crate::datetime::DateTimeValue> {
    component.property_named(name)?.value.as_date_time()
}

/// `start_name`'s instant must not be later than `end_name`'s, when both are
/// present (RFC 5545 §3.6.2: `DTSTART <= DUE`; equal instants are allowed).
pub fn start_before_end(
    component: &Component,
    start_name: &str,
    end_name: &str,
    path: &[String],
) -> Option<Warning> {
    let start = date_time_value(component, start_name)?;
    let end = date_time_value(component, end_name)?;
    if start.instant_key() > end.instant_key() {
        Some(Warning::for_component(
            WarningCode::StartAfterEnd,
            path.to_vec(),
            vec![start_name.to_string(), end_name.to_string()],
        ))
    } else {
        None
    }
}

/// `a_name` and `b_name` must agree on has-time-of-day, when both present.
pub fn same_date_time_kind(
    component: &Component,
    a_name: &str,
    b_name: &str,
    path: &[String],
) -> Option<Warning> {
    let a = date_time_value(component, a_name)?;
    let b = date_time_value(component, b_name)?;
    if a.has_time() != b.has_time() {
        Some(Warning::for_component(
            WarningCode::DateTimeKindMismatch,
            path.to_vec(),
            vec![a_name.to_string(), b_name.to_string()],
        ))
    } else {
        None
    }
}

/// An `RRULE` using `BYHOUR`/`BYMINUTE`/`BYSECOND` requires a date-time
/// (not date-only) `DTSTART`.
pub fn recurrence_requires_date_time(component: &Component, path: &[String]) -> Option<Warning> {
    let rrule = component.property_named(crate::keyword::KW_RRULE)?;
    let Value::Recurrence(recurrence) = &rrule.value else {
        return None;
    };
    if !(recurrence.by_hour || recurrence.by_minute || recurrence.by_second) {
        return None;
    }
    let dtstart = date_time_value(component, crate::keyword::KW_DTSTART)?;
    if dtstart.has_time() {
        None
    } else {
        Some(Warning::for_component(
            WarningCode::RecurrenceRequiresDateTime,
            path.to_vec(),
            vec![crate::keyword::KW_DTSTART.to_string()],
        ))
    }
}
