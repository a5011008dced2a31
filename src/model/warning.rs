// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Structured, non-fatal diagnostics produced by decoding and validation.

/// A stable identifier for one kind of warning, independent of the
/// human-readable message built around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "SCREAMING-KEBAB-CASE")]
pub enum WarningCode {
    /// A logical line had no property name or no unquoted `:` separator.
    InvalidLine,
    /// A parameter region had no `=`.
    ValuelessParameter,
    /// A registered decoder could not parse a property's value text.
    InvalidValue,
    /// A required property was missing.
    MissingProperty,
    /// A property marked `at_most_one`/`required_exactly_one` appeared
    /// more than once.
    DuplicateProperty,
    /// A `STATUS` value outside the component's vocabulary.
    InvalidStatus,
    /// `DTSTART` did not precede `DUE`/`DTEND`.
    StartAfterEnd,
    /// `DTSTART`/`DUE` (or `DTSTART`/`RECURRENCE-ID`) disagreed on
    /// has-time-of-day.
    DateTimeKindMismatch,
    /// `DUE` and `DURATION` (or `DTEND` and `DURATION`) both present.
    MutuallyExclusiveProperties,
    /// `DURATION` present without `DTSTART`.
    DurationRequiresStart,
    /// `RRULE`'s `BYHOUR`/`BYMINUTE`/`BYSECOND` used with a date-only
    /// `DTSTART`.
    RecurrenceRequiresDateTime,
    /// Two properties that must appear together (e.g. `VALARM`'s `DURATION`
    /// and `REPEAT`) appeared alone.
    CompanionPropertyMissing,
    /// A `BEGIN`/`END` pair did not match.
    UnbalancedComponent,
}

/// One validation or decode diagnostic.
///
/// Warnings are accumulated into a `Vec`, never thrown — see the codec's
/// three-tier error model (fatal I/O, recoverable parse, non-throwing
/// semantic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// The warning's stable code.
    pub code: WarningCode,
    /// Positional arguments substituted into the code's message template.
    pub message_args: Vec<String>,
    /// Component names from the root down to (and including) the
    /// component the warning was raised against.
    pub component_path: Vec<String>,
    /// The property the warning concerns, if any.
    pub property_name: Option<String>,
}

impl Warning {
    /// Construct a warning scoped to a component (no specific property).
    #[must_use]
    pub fn for_component(
        code: WarningCode,
        component_path: Vec<String>,
        message_args: Vec<String>,
    ) -> Self {
        Self {
            code,
            message_args,
            component_path,
            property_name: None,
        }
    }

    /// Construct a warning scoped to a specific property within a component.
    #[must_use]
    pub fn for_property(
        code: WarningCode,
        component_path: Vec<String>,
        property_name: impl Into<String>,
        message_args: Vec<String>,
    ) -> Self {
        Self {
            code,
            message_args,
            component_path,
            property_name: Some(property_name.into()),
        }
    }
}
