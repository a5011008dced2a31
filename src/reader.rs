// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The raw, event-driven reader: turns a byte stream into a sequence of
//! `begin_component`/`end_component`/`property` events, tolerating per-line
//! faults rather than aborting on them.
//!
//! This is the lowest layer most callers should touch directly; most should
//! use [`crate::object`], which builds a [`crate::model::Component`] tree on
//! top of it. `RawReader` exists for callers that want to observe events as
//! they arrive (e.g. to bail out of a very large feed early) without paying
//! for a full in-memory tree.

mod scanner;
mod token;

use std::io::{self, Read};

use crate::line::FoldedLineReader;
use crate::model::Parameters;

pub use scanner::LineParse;

/// Whether the reader should keep going after a listener callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep reading.
    Continue,
    /// Stop reading; `run` returns without consuming the rest of the stream.
    Stop,
}

impl ControlFlow {
    #[must_use]
    pub(crate) const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// A property as seen on the wire: its name, its decoded parameters, and its
/// value text exactly as written (not yet decoded into a typed [`crate::model::Value`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProperty<'a> {
    /// Property name, as written.
    pub name: &'a str,
    /// Decoded parameters (backslash and, if enabled, circumflex escapes
    /// already resolved).
    pub parameters: Parameters,
    /// The value region verbatim, not yet unescaped or type-decoded.
    pub raw_value: &'a str,
}

/// Receives events from a [`RawReader`] as it scans a stream.
///
/// Every method has a default no-op implementation returning
/// [`ControlFlow::Continue`], so a listener only needs to override the
/// events it cares about. Returning [`ControlFlow::Stop`] from any method
/// ends the read immediately; this is the crate's only cancellation
/// mechanism — there are no exceptions to catch.
pub trait Listener {
    /// A `BEGIN:<name>` line.
    fn begin_component(&mut self, name: &str, line_number: usize) -> ControlFlow {
        let _ = (name, line_number);
        ControlFlow::Continue
    }

    /// An `END:<name>` line.
    fn end_component(&mut self, name: &str, line_number: usize) -> ControlFlow {
        let _ = (name, line_number);
        ControlFlow::Continue
    }

    /// Any other well-formed content line.
    fn property(&mut self, property: RawProperty<'_>, line_number: usize) -> ControlFlow {
        let _ = (property, line_number);
        ControlFlow::Continue
    }

    /// A logical line with no name or no unquoted `:` separator. Recoverable:
    /// the line is skipped and reading continues.
    fn invalid_line(&mut self, text: &str, line_number: usize) -> ControlFlow {
        let _ = (text, line_number);
        ControlFlow::Continue
    }

    /// A parameter region with no `=` (non-conformant but tolerated).
    fn valueless_parameter(
        &mut self,
        property_name: &str,
        parameter_name: &str,
        line_number: usize,
    ) -> ControlFlow {
        let _ = (property_name, parameter_name, line_number);
        ControlFlow::Continue
    }
}

/// Configuration for [`RawReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Whether RFC 6868 `^`-escapes are decoded in parameter values.
    /// Enabled by default; backslash escapes are always recognized
    /// regardless of this setting.
    pub circumflex_encoding: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            circumflex_encoding: true,
        }
    }
}

/// Scans a byte stream and dispatches events to a [`Listener`].
#[derive(Debug)]
pub struct RawReader<R> {
    lines: FoldedLineReader<R>,
    options: ReaderOptions,
}

impl<R: Read> RawReader<R> {
    /// Wrap a byte stream with default options.
    pub fn new(source: R) -> Self {
        Self::with_options(source, ReaderOptions::default())
    }

    /// Wrap a byte stream with explicit options.
    pub fn with_options(source: R, options: ReaderOptions) -> Self {
        Self {
            lines: FoldedLineReader::new(source),
            options,
        }
    }

    /// Scan the entire stream, dispatching events to `listener` until either
    /// the stream ends or the listener requests a stop.
    ///
    /// # Errors
    /// Returns an error if the underlying stream fails or is not valid UTF-8.
    /// Malformed content lines are reported to the listener, not raised as
    /// errors.
    pub fn run(&mut self, listener: &mut impl Listener) -> io::Result<()> {
        while let Some(logical) = self.lines.next_line()? {
            let line_number = logical.line_number;
            match scanner::parse_content_line(&logical.text, self.options.circumflex_encoding) {
                LineParse::Invalid => {
                    tracing::debug!(line_number, text = %logical.text, "invalid content line");
                    if listener.invalid_line(&logical.text, line_number).is_stop() {
                        return Ok(());
                    }
                }
                LineParse::Ok {
                    name,
                    parameters,
                    raw_value,
                    valueless_parameters,
                } => {
                    for parameter_name in &valueless_parameters {
                        tracing::debug!(line_number, %name, %parameter_name, "valueless parameter");
                        if listener
                            .valueless_parameter(name, parameter_name, line_number)
                            .is_stop()
                        {
                            return Ok(());
                        }
                    }

                    if name.eq_ignore_ascii_case("BEGIN") {
                        if listener
                            .begin_component(raw_value.trim(), line_number)
                            .is_stop()
                        {
                            return Ok(());
                        }
                    } else if name.eq_ignore_ascii_case("END") {
                        if listener
                            .end_component(raw_value.trim(), line_number)
                            .is_stop()
                        {
                            return Ok(());
                        }
                    } else {
                        let property = RawProperty {
                            name,
                            parameters,
                            raw_value,
                        };
                        if listener.property(property, line_number).is_stop() {
                            return Ok(());
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Listener for Recorder {
        fn begin_component(&mut self, name: &str, _line_number: usize) -> ControlFlow {
            self.events.push(format!("BEGIN {name}"));
            ControlFlow::Continue
        }

        fn end_component(&mut self, name: &str, _line_number: usize) -> ControlFlow {
            self.events.push(format!("END {name}"));
            ControlFlow::Continue
        }

        fn property(&mut self, property: RawProperty<'_>, _line_number: usize) -> ControlFlow {
            self.events
                .push(format!("PROP {}={}", property.name, property.raw_value));
            ControlFlow::Continue
        }

        fn invalid_line(&mut self, text: &str, _line_number: usize) -> ControlFlow {
            self.events.push(format!("INVALID {text}"));
            ControlFlow::Continue
        }
    }

    #[test]
    fn test_minimal_document_events() {
        let src = b"BEGIN:VCALENDAR\r\nUID:abc\r\nEND:VCALENDAR\r\n";
        let mut reader = RawReader::new(&src[..]);
        let mut recorder = Recorder::default();
        reader.run(&mut recorder).unwrap();
        assert_eq!(
            recorder.events,
            ["BEGIN VCALENDAR", "PROP UID=abc", "END VCALENDAR"]
        );
    }

    #[test]
    fn test_invalid_line_is_skipped_not_fatal() {
        let src = b"BEGIN:VCALENDAR\r\nTHIS IS NOT VALID\r\nUID:abc\r\nEND:VCALENDAR\r\n";
        let mut reader = RawReader::new(&src[..]);
        let mut recorder = Recorder::default();
        reader.run(&mut recorder).unwrap();
        assert_eq!(
            recorder.events,
            [
                "BEGIN VCALENDAR",
                "INVALID THIS IS NOT VALID",
                "PROP UID=abc",
                "END VCALENDAR"
            ]
        );
    }

    struct StopAfterFirstProperty {
        seen: usize,
    }

    impl Listener for StopAfterFirstProperty {
        fn property(&mut self, _property: RawProperty<'_>, _line_number: usize) -> ControlFlow {
            self.seen += 1;
            ControlFlow::Stop
        }
    }

    #[test]
    fn test_listener_can_request_early_stop() {
        let src = b"BEGIN:VCALENDAR\r\nUID:a\r\nUID:b\r\nEND:VCALENDAR\r\n";
        let mut reader = RawReader::new(&src[..]);
        let mut listener = StopAfterFirstProperty { seen: 0 };
        reader.run(&mut listener).unwrap();
        assert_eq!(listener.seen, 1);
    }
}
