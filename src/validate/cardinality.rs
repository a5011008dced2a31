// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Small cardinality checks shared by every per-component rule set.

use crate::model::{Component, Warning, WarningCode};

/// `name` must appear exactly once.
pub fn required_exactly_one(component: &Component, name: &str, path: &[String]) -> Option<Warning> {
    match component.count_named(name) {
        1 => None,
        0 => Some(Warning::for_property(
            WarningCode::MissingProperty,
            path.to_vec(),
            name,
            vec![component.name.clone()],
        )),
        _ => Some(Warning::for_property(
            WarningCode::DuplicateProperty,
            path.to_vec(),
            name,
            vec![component.name.clone()],
        )),
    }
}

/// `name` must appear at most once.
pub fn at_most_one(component: &Component, name: &str, path: &[String]) -> Option<Warning> {
    if component.count_named(name) > 1 {
        Some(Warning::for_property(
            WarningCode::DuplicateProperty,
            path.to_vec(),
            name,
            vec![component.name.clone()],
        ))
    } else {
        None
    }
}

/// `a` and `b` must not both appear.
pub fn mutually_exclusive(component: &Component, a: &str, b: &str, path: &[String]) -> Option<Warning> {
    if component.count_named(a) > 0 && component.count_named(b) > 0 {
        Some(Warning::for_component(
            WarningCode::MutuallyExclusiveProperties,
            path.to_vec(),
            vec![a.to_string(), b.to_string()],
        ))
    } else {
        None
    }
}

/// If `dependent` appears, `required` must also appear.
pub fn requires(component: &Component, dependent: &str, required: &str, path: &[String]) -> Option<Warning> {
    if component.count_named(dependent) > 0 && component.count_named(required) == 0 {
        Some(Warning::for_property(
            WarningCode::DurationRequiresStart,
            path.to_vec(),
            dependent,
            vec![required.to_string()],
        ))
    } else {
        None
    }
}

/// `a` and `b` must appear together, or neither must appear.
pub fn together_or_neither(component: &Component, a: &str, b: &str, path: &[String]) -> Option<Warning> {
    let has_a = component.count_named(a) > 0;
    let has_b = component.count_named(b) > 0;
    if has_a == has_b {
        None
    } else {
        Some(Warning::for_component(
            WarningCode::CompanionPropertyMissing,
            path.to_vec(),
            vec![a.to_string(), b.to_string()],
        ))
    }
}

/// `name`'s value must be text matching one of `allowed` (case-insensitively).
pub fn status_in_vocabulary(
    component: &Component,
    name: &str,
    allowed: &[&str],
    path: &[String],
) -> Option<Warning> {
    let property = component.property_named(name)?;
    let text = property.value.as_text()?;
    if allowed.iter().any(|v| v.eq_ignore_ascii_case(text)) {
        None
    } else {
        Some(Warning::for_property(
            WarningCode::InvalidStatus,
            path.to_vec(),
            name,
            vec![text.to_string()],
        ))
    }
}
