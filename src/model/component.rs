// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The component tree (RFC 5545 §3.6): a named container of properties and
//! child components.

use crate::model::property::Property;

/// A `BEGIN`/`END`-bracketed container, e.g. `VCALENDAR`, `VEVENT`, `VTODO`.
///
/// Properties are kept in one insertion-ordered list rather than a
/// name-keyed multimap of lists — the two are equivalent for this crate's
/// purposes (ordered iteration plus by-name lookup), and a flat list is
/// what the reader naturally produces one property at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Component name, as written (case is preserved; comparisons are
    /// case-insensitive per RFC 5545 §3.6).
    pub name: String,
    /// Properties in the order they were read or inserted.
    pub properties: Vec<Property>,
    /// Child components in the order they were read or inserted.
    pub children: Vec<Component>,
}

impl Component {
    /// An empty component with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Whether this component's name matches `name`, ASCII-case-insensitively.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Append a property, preserving insertion order.
    pub fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Append a child component, preserving insertion order.
    pub fn push_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// All properties named `name` (case-insensitive), in insertion order.
    pub fn properties_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Property> {
        self.properties.iter().filter(move |p| p.is_named(name))
    }

    /// The first property named `name` (case-insensitive), if any.
    #[must_use]
    pub fn property_named(&self, name: &str) -> Option<&Property> {
        self.properties_named(name).next()
    }

    /// How many properties are named `name` (case-insensitive).
    #[must_use]
    pub fn count_named(&self, name: &str) -> usize {
        self.properties_named(name).count()
    }

    /// Children named `name` (case-insensitive), in insertion order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Component> {
        self.children.iter().filter(move |c| c.is_named(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::value::Value;

    #[test]
    fn test_property_lookup_is_case_insensitive() {
        let mut comp = Component::new("VTODO");
        comp.push_property(Property::new("uid", Value::Text("abc".into())));
        assert!(comp.property_named("UID").is_some());
        assert_eq!(comp.count_named("UID"), 1);
    }

    #[test]
    fn test_duplicate_properties_preserve_order() {
        let mut comp = Component::new("VTODO");
        comp.push_property(Property::new("CATEGORIES", Value::Text("a".into())));
        comp.push_property(Property::new("CATEGORIES", Value::Text("b".into())));
        let values: Vec<_> = comp
            .properties_named("CATEGORIES")
            .map(|p| p.value.as_text().unwrap())
            .collect();
        assert_eq!(values, ["a", "b"]);
    }
}
