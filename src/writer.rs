// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Writes a [`crate::model::Component`] tree back to RFC 5545 text.

mod fold;
mod line;
pub(crate) mod value;

use std::io::{self, Write};

pub use fold::FoldingStyle;

use fold::FoldWriter;
use crate::model::Component;

/// Configuration for [`write`] and [`to_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    /// Maximum line length in octets before folding. `None` disables
    /// folding entirely. Default: `Some(75)`.
    pub fold_width: Option<usize>,
    /// Folding continuation style.
    pub folding_style: FoldingStyle,
    /// Whether parameter values are encoded with RFC 6868 `^`-escapes.
    pub circumflex_encoding: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            fold_width: Some(75),
            folding_style: FoldingStyle::Space,
            circumflex_encoding: true,
        }
    }
}

/// Write a component (and its children) to `w` as RFC 5545 text.
///
/// # Errors
/// Returns an error if writing to `w` fails.
pub fn write(w: &mut impl Write, component: &Component, options: WriterOptions) -> io::Result<()> {
    let mut fold_writer = match options.fold_width {
        Some(width) => FoldWriter::new(w, width, options.folding_style),
        None => FoldWriter::unfolded(w),
    };
    write_component(&mut fold_writer, component, options.circumflex_encoding)
}

/// Convenience wrapper around [`write`] that returns an owned `String`.
///
/// # Errors
/// Returns an error if the rendered output is not valid UTF-8 (it always
/// should be, since all inputs are `String`s) or if writing fails.
pub fn to_string(component: &Component, options: WriterOptions) -> io::Result<String> {
    let mut buffer = Vec::new();
    write(&mut buffer, component, options)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_component<W: Write>(
    w: &mut FoldWriter<W>,
    component: &Component,
    circumflex_encoding: bool,
) -> io::Result<()> {
    use crate::model::Parameters;

    let empty_params = Parameters::new();
    line::write_content_line(w, "BEGIN", &empty_params, &component.name, circumflex_encoding)?;

    for property in &component.properties {
        let raw_value = value::encode_value(&property.value);
        line::write_content_line(
            w,
            &property.name,
            &property.parameters,
            &raw_value,
            circumflex_encoding,
        )?;
    }

    for child in &component.children {
        write_component(w, child, circumflex_encoding)?;
    }

    line::write_content_line(w, "END", &empty_params, &component.name, circumflex_encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Property, Value};

    #[test]
    fn test_round_trip_minimal_component() {
        let mut vevent = Component::new("VEVENT");
        vevent.push_property(Property::new("UID", Value::Text("abc".into())));
        let mut cal = Component::new("VCALENDAR");
        cal.push_child(vevent);

        let rendered = to_string(&cal, WriterOptions::default()).unwrap();
        assert_eq!(
            rendered,
            "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:abc\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n"
        );
    }

    #[test]
    fn test_long_value_is_folded() {
        let mut comp = Component::new("VEVENT");
        let long = "x".repeat(120);
        comp.push_property(Property::new("SUMMARY", Value::Text(long.clone())));
        let rendered = to_string(&comp, WriterOptions::default()).unwrap();
        assert!(rendered.contains("\r\n "));
        assert!(rendered.contains(&long[..10]));
    }

    #[test]
    fn test_folding_disabled() {
        let mut comp = Component::new("VEVENT");
        let long = "x".repeat(120);
        comp.push_property(Property::new("SUMMARY", Value::Text(long)));
        let options = WriterOptions { fold_width: None, ..WriterOptions::default() };
        let rendered = to_string(&comp, options).unwrap();
        assert!(!rendered.contains("\r\n "));
    }
}
