// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Bridges the event-driven [`crate::reader`] to the typed
//! [`crate::model`] tree: decodes raw property text into [`Value`]s and
//! assembles nested components, collecting non-fatal [`Warning`]s along
//! the way.

mod reader;
mod registry;

use std::io::Read;

pub use reader::TreeBuilder;
pub use registry::DecodeError;

use crate::error::ReadError;
use crate::model::{Component, Warning};
use crate::reader::{RawReader, ReaderOptions};

/// Read every top-level component from a byte stream.
///
/// Most inputs contain exactly one `VCALENDAR`, but the grammar does not
/// forbid more than one, so this returns a `Vec`.
///
/// # Errors
/// Returns [`ReadError`] if the underlying stream fails or is not valid
/// UTF-8. Malformed lines, unbalanced components, and undecodable values are
/// reported as warnings, not errors — see the crate's three-tier error model.
pub fn read(source: impl Read, options: ReaderOptions) -> Result<(Vec<Component>, Vec<Warning>), ReadError> {
    let mut raw_reader = RawReader::with_options(source, options);
    let mut builder = TreeBuilder::new();
    raw_reader.run(&mut builder)?;
    Ok(builder.finish())
}

/// Convenience wrapper around [`read`] for an in-memory string.
///
/// # Errors
/// Returns [`ReadError`] only if reading from the in-memory buffer fails,
/// which does not happen in practice; the signature matches [`read`] for
/// symmetry.
pub fn parse_str(text: &str, options: ReaderOptions) -> Result<(Vec<Component>, Vec<Warning>), ReadError> {
    read(text.as_bytes(), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_minimal_vtodo() {
        let text = "BEGIN:VCALENDAR\r\n\
                     BEGIN:VTODO\r\n\
                     UID:todo-1\r\n\
                     DTSTAMP:20230101T000000Z\r\n\
                     SUMMARY:Buy milk\r\n\
                     END:VTODO\r\n\
                     END:VCALENDAR\r\n";
        let (roots, warnings) = parse_str(text, ReaderOptions::default()).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(roots.len(), 1);
        let vtodo = &roots[0].children[0];
        assert_eq!(vtodo.property_named("UID").unwrap().value.as_text(), Some("todo-1"));
    }
}
