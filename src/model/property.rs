// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! A single, decoded property instance (RFC 5545 §3.5).

use crate::model::parameters::Parameters;
use crate::model::value::Value;

/// A name, its parameters, and its decoded value.
///
/// Each instance is owned by exactly one [`Component`](crate::model::Component).
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name, as written (case is preserved; comparisons elsewhere
    /// are case-insensitive per RFC 5545 §3.5).
    pub name: String,
    /// The property's parameters, in the order they were written.
    pub parameters: Parameters,
    /// The decoded value.
    pub value: Value,
}

impl Property {
    /// Construct a property with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            parameters: Parameters::new(),
            value,
        }
    }

    /// Attach parameters, builder-style.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Whether this property's name matches `name`, ASCII-case-insensitively.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
