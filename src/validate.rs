// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The semantic validator: a pure, read-only traversal that checks
//! cardinality and cross-property rules per component kind, accumulating
//! [`Warning`]s rather than aborting.
//!
//! Each component kind's rule set is a small, declarative list of calls into
//! [`cardinality`] and [`datetime_rules`] — the two shared building blocks
//! every kind's rules are assembled from.

mod cardinality;
mod datetime_rules;

use crate::keyword::*;
use crate::model::{Component, Warning, WarningCode};

/// Validate `component` and every descendant, returning all warnings found.
///
/// Pure: never mutates `component` or any child. The traversal is
/// depth-first and unconditional — a component with no rule set registered
/// for its kind (an extension component, or a sub-component this crate does
/// not special-case) simply contributes no warnings of its own, but its
/// children are still visited.
#[must_use]
pub fn validate(component: &Component) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let mut path = Vec::new();
    validate_recursive(component, &mut path, &mut warnings);
    warnings
}

fn validate_recursive(component: &Component, path: &mut Vec<String>, warnings: &mut Vec<Warning>) {
    path.push(component.name.clone());
    warnings.extend(rules_for_kind(component, path));
    for child in &component.children {
        validate_recursive(child, path, warnings);
    }
    path.pop();
}

fn rules_for_kind(component: &Component, path: &[String]) -> Vec<Warning> {
    let upper = component.name.to_ascii_uppercase();
    match upper.as_str() {
        n if n == KW_VEVENT => vevent_rules(component, path),
        n if n == KW_VTODO => vtodo_rules(component, path),
        n if n == KW_VJOURNAL => vjournal_rules(component, path),
        n if n == KW_VFREEBUSY => vfreebusy_rules(component, path),
        n if n == KW_VALARM => valarm_rules(component, path),
        n if n == KW_VTIMEZONE => vtimezone_rules(component, path),
        _ => Vec::new(),
    }
}

/// RFC 5545 §3.6.1: `UID`/`DTSTAMP`/`DTSTART` required exactly once, at most
/// one of `DTEND`/`DURATION`, ordering and has-time agreement between
/// `DTSTART` and `DTEND`, `DURATION` requires `DTSTART`, at most one
/// `RRULE`, and `BYHOUR`/`BYMINUTE`/`BYSECOND` require a date-time `DTSTART`.
fn vevent_rules(component: &Component, path: &[String]) -> Vec<Warning> {
    let vevent_status = [
        KW_STATUS_VEVENT_TENTATIVE,
        KW_STATUS_VEVENT_CONFIRMED,
        KW_STATUS_VEVENT_CANCELLED,
    ];
    // DTEND and DURATION are mutually exclusive; once that conflict fires,
    // "DURATION requires DTSTART" would be a redundant second warning about
    // the same misuse, so it is only checked when DTEND is absent.
    let duration_requires_start = if component.count_named(KW_DTEND) == 0 {
        cardinality::requires(component, KW_DURATION, KW_DTSTART, path)
    } else {
        None
    };
    [
        cardinality::required_exactly_one(component, KW_UID, path),
        cardinality::required_exactly_one(component, KW_DTSTAMP, path),
        cardinality::required_exactly_one(component, KW_DTSTART, path),
        cardinality::mutually_exclusive(component, KW_DTEND, KW_DURATION, path),
        duration_requires_start,
        cardinality::at_most_one(component, KW_RRULE, path),
        cardinality::status_in_vocabulary(component, KW_STATUS, &vevent_status, path),
        datetime_rules::start_before_end(component, KW_DTSTART, KW_DTEND, path),
        datetime_rules::same_date_time_kind(component, KW_DTSTART, KW_DTEND, path),
        datetime_rules::same_date_time_kind(component, KW_RECURRENCE_ID, KW_DTSTART, path),
        datetime_rules::recurrence_requires_date_time(component, path),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// RFC 5545 §3.6.2: `STATUS`
/// vocabulary, `DTSTART ≤ DUE` with has-time agreement, `DUE`/`DURATION`
/// mutual exclusion, `DURATION` requires `DTSTART`, `RECURRENCE-ID`/`DTSTART`
/// has-time agreement, at most one `RRULE`, and its `BYHOUR`/`BYMINUTE`/
/// `BYSECOND` parts require a date-time `DTSTART`.
fn vtodo_rules(component: &Component, path: &[String]) -> Vec<Warning> {
    let vtodo_status = [
        KW_STATUS_VTODO_NEEDS_ACTION,
        KW_STATUS_VTODO_COMPLETED,
        KW_STATUS_VTODO_IN_PROGRESS,
        KW_STATUS_VTODO_CANCELLED,
    ];
    // See the identical DTEND/DURATION comment in vevent_rules: once the
    // mutual-exclusion rule fires, skip the redundant "requires DTSTART"
    // warning about the same misuse.
    let duration_requires_start = if component.count_named(KW_DUE) == 0 {
        cardinality::requires(component, KW_DURATION, KW_DTSTART, path)
    } else {
        None
    };
    [
        cardinality::status_in_vocabulary(component, KW_STATUS, &vtodo_status, path),
        cardinality::mutually_exclusive(component, KW_DUE, KW_DURATION, path),
        duration_requires_start,
        cardinality::at_most_one(component, KW_RRULE, path),
        datetime_rules::start_before_end(component, KW_DTSTART, KW_DUE, path),
        datetime_rules::same_date_time_kind(component, KW_DTSTART, KW_DUE, path),
        datetime_rules::same_date_time_kind(component, KW_RECURRENCE_ID, KW_DTSTART, path),
        datetime_rules::recurrence_requires_date_time(component, path),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// RFC 5545 §3.6.3: `UID`/`DTSTAMP` required exactly once, at most one
/// `DTSTART`, at most one `RRULE` with the same `BYxxx`/has-time rule, and a
/// `STATUS` vocabulary specific to journal entries.
fn vjournal_rules(component: &Component, path: &[String]) -> Vec<Warning> {
    let vjournal_status = [
        KW_STATUS_VJOURNAL_DRAFT,
        KW_STATUS_VJOURNAL_FINAL,
        KW_STATUS_VJOURNAL_CANCELLED,
    ];
    [
        cardinality::required_exactly_one(component, KW_UID, path),
        cardinality::required_exactly_one(component, KW_DTSTAMP, path),
        cardinality::at_most_one(component, KW_DTSTART, path),
        cardinality::at_most_one(component, KW_RRULE, path),
        cardinality::status_in_vocabulary(component, KW_STATUS, &vjournal_status, path),
        datetime_rules::recurrence_requires_date_time(component, path),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// RFC 5545 §3.6.4: `UID`/`DTSTAMP` required exactly once; if both `DTSTART`
/// and `DTEND` are present, `DTSTART` must precede `DTEND`.
fn vfreebusy_rules(component: &Component, path: &[String]) -> Vec<Warning> {
    [
        cardinality::required_exactly_one(component, KW_UID, path),
        cardinality::required_exactly_one(component, KW_DTSTAMP, path),
        datetime_rules::start_before_end(component, KW_DTSTART, KW_DTEND, path),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// RFC 5545 §3.6.6: `ACTION`/`TRIGGER` required exactly once; `DURATION` and
/// `REPEAT` must appear together or not at all.
fn valarm_rules(component: &Component, path: &[String]) -> Vec<Warning> {
    [
        cardinality::required_exactly_one(component, KW_ACTION, path),
        cardinality::required_exactly_one(component, KW_TRIGGER, path),
        cardinality::together_or_neither(component, KW_DURATION, KW_REPEAT, path),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// RFC 5545 §3.6.5: `TZID` required exactly once; at least one `STANDARD` or
/// `DAYLIGHT` sub-component.
fn vtimezone_rules(component: &Component, path: &[String]) -> Vec<Warning> {
    let mut warnings: Vec<Warning> = [cardinality::required_exactly_one(component, KW_TZID, path)]
        .into_iter()
        .flatten()
        .collect();

    let has_standard = component.children_named(KW_STANDARD).next().is_some();
    let has_daylight = component.children_named(KW_DAYLIGHT).next().is_some();
    if !has_standard && !has_daylight {
        warnings.push(Warning::for_component(
            WarningCode::MissingProperty,
            path.to_vec(),
            vec![format!("{KW_STANDARD} or {KW_DAYLIGHT}")],
        ));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Property, Value};
    use crate::object::parse_str;
    use crate::reader::ReaderOptions;

    fn parse(text: &str) -> Component {
        let (mut roots, warnings) = parse_str(text, ReaderOptions::default()).unwrap();
        assert!(warnings.is_empty(), "unexpected read warnings: {warnings:?}");
        roots.remove(0)
    }

    #[test]
    fn test_clean_vtodo_has_no_warnings() {
        let cal = parse(
            "BEGIN:VCALENDAR\r\n\
             BEGIN:VTODO\r\n\
             UID:abc\r\n\
             DTSTAMP:20230101T000000Z\r\n\
             SUMMARY:Write report\r\n\
             END:VTODO\r\n\
             END:VCALENDAR\r\n",
        );
        assert!(validate(&cal).is_empty());
    }

    #[test]
    fn test_due_before_dtstart_is_warned() {
        let cal = parse(
            "BEGIN:VCALENDAR\r\n\
             BEGIN:VTODO\r\n\
             UID:abc\r\n\
             DTSTAMP:20230101T000000Z\r\n\
             DTSTART:20230110\r\n\
             DUE:20230105\r\n\
             END:VTODO\r\n\
             END:VCALENDAR\r\n",
        );
        let warnings = validate(&cal);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, crate::model::WarningCode::StartAfterEnd);
    }

    #[test]
    fn test_due_and_duration_conflict() {
        let cal = parse(
            "BEGIN:VCALENDAR\r\n\
             BEGIN:VTODO\r\n\
             UID:abc\r\n\
             DTSTAMP:20230101T000000Z\r\n\
             DUE:20230110\r\n\
             DURATION:P1D\r\n\
             END:VTODO\r\n\
             END:VCALENDAR\r\n",
        );
        let warnings = validate(&cal);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, crate::model::WarningCode::MutuallyExclusiveProperties);
    }

    #[test]
    fn test_validate_does_not_mutate_tree() {
        let cal = parse(
            "BEGIN:VCALENDAR\r\n\
             BEGIN:VTODO\r\n\
             UID:abc\r\n\
             DTSTAMP:20230101T000000Z\r\n\
             END:VTODO\r\n\
             END:VCALENDAR\r\n",
        );
        let before = cal.clone();
        let _ = validate(&cal);
        assert_eq!(cal, before);
    }

    #[test]
    fn test_vevent_clean_has_no_warnings() {
        let mut vevent = Component::new("VEVENT");
        vevent.push_property(Property::new("UID", Value::Text("e1".into())));
        vevent.push_property(Property::new(
            "DTSTAMP",
            crate::datetime::parse_date_or_date_time("20230101T000000Z", None)
                .map(Value::DateTime)
                .unwrap(),
        ));
        vevent.push_property(Property::new(
            "DTSTART",
            crate::datetime::parse_date_or_date_time("20230101T100000Z", None)
                .map(Value::DateTime)
                .unwrap(),
        ));
        assert!(validate(&vevent).is_empty());
    }

    #[test]
    fn test_vevent_missing_dtstart_is_warned() {
        let mut vevent = Component::new("VEVENT");
        vevent.push_property(Property::new("UID", Value::Text("e1".into())));
        vevent.push_property(Property::new(
            "DTSTAMP",
            crate::datetime::parse_date_or_date_time("20230101T000000Z", None)
                .map(Value::DateTime)
                .unwrap(),
        ));
        let warnings = validate(&vevent);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, crate::model::WarningCode::MissingProperty);
        assert_eq!(warnings[0].property_name.as_deref(), Some("DTSTART"));
    }

    #[test]
    fn test_valarm_duration_without_repeat_is_warned() {
        let mut valarm = Component::new("VALARM");
        valarm.push_property(Property::new("ACTION", Value::Text("DISPLAY".into())));
        valarm.push_property(Property::new("TRIGGER", Value::Raw("-PT15M".into())));
        valarm.push_property(Property::new(
            "DURATION",
            Value::Duration(crate::model::DurationValue::DayTime {
                positive: true,
                day: 0,
                hour: 0,
                minute: 15,
                second: 0,
            }),
        ));
        let warnings = validate(&valarm);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, crate::model::WarningCode::CompanionPropertyMissing);
    }

    #[test]
    fn test_vtimezone_requires_sub_component() {
        let mut tz = Component::new("VTIMEZONE");
        tz.push_property(Property::new("TZID", Value::Text("America/New_York".into())));
        let warnings = validate(&tz);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, crate::model::WarningCode::MissingProperty);
    }

    #[test]
    fn test_vtimezone_with_standard_child_is_clean() {
        let mut tz = Component::new("VTIMEZONE");
        tz.push_property(Property::new("TZID", Value::Text("America/New_York".into())));
        tz.push_child(Component::new("STANDARD"));
        assert!(validate(&tz).is_empty());
    }
}
