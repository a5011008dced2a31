// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Builds a [`Component`] tree from [`RawReader`] events.

use super::registry;
use crate::model::{Component, Property, Warning, WarningCode};
use crate::reader::{ControlFlow, Listener, RawProperty};

/// A [`Listener`] that assembles a tree of top-level components (and their
/// descendants) from raw reader events.
///
/// Mismatched or unterminated `BEGIN`/`END` pairs are tolerated: they are
/// reported as [`WarningCode::UnbalancedComponent`] warnings rather than
/// aborting the read, consistent with this crate's non-throwing diagnostics.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    stack: Vec<Component>,
    roots: Vec<Component>,
    warnings: Vec<Warning>,
}

impl TreeBuilder {
    /// An empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish building, closing out any components left open at
    /// end-of-stream (reported as `UnbalancedComponent` warnings) and
    /// returning the top-level components plus all accumulated warnings.
    #[must_use]
    pub fn finish(mut self) -> (Vec<Component>, Vec<Warning>) {
        while let Some(comp) = self.stack.pop() {
            self.warnings.push(Warning::for_component(
                WarningCode::UnbalancedComponent,
                self.component_path(),
                vec![comp.name.clone()],
            ));
            match self.stack.last_mut() {
                Some(parent) => parent.push_child(comp),
                None => self.roots.push(comp),
            }
        }
        (self.roots, self.warnings)
    }

    fn component_path(&self) -> Vec<String> {
        self.stack.iter().map(|c| c.name.clone()).collect()
    }
}

impl Listener for TreeBuilder {
    fn begin_component(&mut self, name: &str, _line_number: usize) -> ControlFlow {
        self.stack.push(Component::new(name));
        ControlFlow::Continue
    }

    fn end_component(&mut self, name: &str, _line_number: usize) -> ControlFlow {
        match self.stack.pop() {
            Some(comp) if comp.is_named(name) => match self.stack.last_mut() {
                Some(parent) => parent.push_child(comp),
                None => self.roots.push(comp),
            },
            Some(mismatched) => {
                self.warnings.push(Warning::for_component(
                    WarningCode::UnbalancedComponent,
                    self.component_path(),
                    vec![mismatched.name.clone(), name.to_string()],
                ));
                // The END did not actually close the open component; put it
                // back so a later, correctly-named END can still close it.
                self.stack.push(mismatched);
            }
            None => {
                self.warnings.push(Warning::for_component(
                    WarningCode::UnbalancedComponent,
                    Vec::new(),
                    vec![name.to_string()],
                ));
            }
        }
        ControlFlow::Continue
    }

    fn invalid_line(&mut self, text: &str, _line_number: usize) -> ControlFlow {
        tracing::debug!(%text, "skipping invalid content line");
        self.warnings.push(Warning::for_component(
            WarningCode::InvalidLine,
            self.component_path(),
            vec![text.to_string()],
        ));
        ControlFlow::Continue
    }

    fn valueless_parameter(&mut self, property_name: &str, parameter_name: &str, _line_number: usize) -> ControlFlow {
        tracing::debug!(name = property_name, parameter = parameter_name, "valueless parameter");
        self.warnings.push(Warning::for_property(
            WarningCode::ValuelessParameter,
            self.component_path(),
            property_name,
            vec![parameter_name.to_string()],
        ));
        ControlFlow::Continue
    }

    fn property(&mut self, property: RawProperty<'_>, _line_number: usize) -> ControlFlow {
        let value = match registry::decode_value(property.name, &property.parameters, property.raw_value) {
            Ok(value) => {
                if matches!(value, crate::model::Value::Raw(_)) {
                    tracing::debug!(name = property.name, "no registered decoder, kept as raw");
                }
                value
            }
            Err(err) => {
                tracing::debug!(name = property.name, %err, "registered decoder rejected value");
                self.warnings.push(Warning::for_property(
                    WarningCode::InvalidValue,
                    self.component_path(),
                    property.name,
                    vec![err.to_string()],
                ));
                crate::model::Value::Raw(property.raw_value.to_string())
            }
        };
        let decoded = Property::new(property.name, value).with_parameters(property.parameters);
        if let Some(current) = self.stack.last_mut() {
            current.push_property(decoded);
        }
        ControlFlow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::RawReader;

    #[test]
    fn test_builds_nested_tree() {
        let src = b"BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:a\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
        let mut reader = RawReader::new(&src[..]);
        let mut builder = TreeBuilder::new();
        reader.run(&mut builder).unwrap();
        let (roots, warnings) = builder.finish();
        assert!(warnings.is_empty());
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].children.len(), 1);
        assert_eq!(roots[0].children[0].property_named("UID").unwrap().value, crate::model::Value::Text("a".into()));
    }

    #[test]
    fn test_unterminated_component_is_warned_and_closed() {
        let src = b"BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:a\r\n";
        let mut reader = RawReader::new(&src[..]);
        let mut builder = TreeBuilder::new();
        reader.run(&mut builder).unwrap();
        let (roots, warnings) = builder.finish();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.code == WarningCode::UnbalancedComponent));
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].children.len(), 1);
    }

    #[test]
    fn test_mismatched_end_name_is_warned() {
        let src = b"BEGIN:VEVENT\r\nUID:a\r\nEND:VTODO\r\nEND:VEVENT\r\n";
        let mut reader = RawReader::new(&src[..]);
        let mut builder = TreeBuilder::new();
        reader.run(&mut builder).unwrap();
        let (roots, warnings) = builder.finish();
        assert_eq!(warnings.len(), 1);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].name, "VEVENT");
    }

    #[test]
    fn test_malformed_value_becomes_raw_with_warning() {
        let src = b"BEGIN:VEVENT\r\nGEO:not-a-number\r\nEND:VEVENT\r\n";
        let mut reader = RawReader::new(&src[..]);
        let mut builder = TreeBuilder::new();
        reader.run(&mut builder).unwrap();
        let (roots, warnings) = builder.finish();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::InvalidValue);
        assert_eq!(
            roots[0].property_named("GEO").unwrap().value,
            crate::model::Value::Raw("not-a-number".to_string())
        );
    }

    #[test]
    fn test_invalid_line_is_recorded_as_warning() {
        let src = b"BEGIN:VTODO\r\nGARBAGE-WITHOUT-COLON\r\nUID:abc\r\nEND:VTODO\r\n";
        let mut reader = RawReader::new(&src[..]);
        let mut builder = TreeBuilder::new();
        reader.run(&mut builder).unwrap();
        let (roots, warnings) = builder.finish();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::InvalidLine);
        assert_eq!(roots[0].property_named("UID").unwrap().value.as_text(), Some("abc"));
    }

    #[test]
    fn test_valueless_parameter_is_recorded_as_warning() {
        let src = b"BEGIN:VEVENT\r\nX-FOO;BAR:val\r\nEND:VEVENT\r\n";
        let mut reader = RawReader::new(&src[..]);
        let mut builder = TreeBuilder::new();
        reader.run(&mut builder).unwrap();
        let (roots, warnings) = builder.finish();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::ValuelessParameter);
        assert_eq!(warnings[0].property_name.as_deref(), Some("X-FOO"));
        assert_eq!(roots[0].property_named("X-FOO").unwrap().value.as_text(), Some("val"));
    }
}
