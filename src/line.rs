// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Folded-line reader: turns a byte stream into logical content lines.
//!
//! A physical line is terminated by a bare CR, a CRLF pair, or a bare LF. A
//! physical line whose first byte is SPACE or HTAB is a continuation of the
//! previous line (RFC 5545 §3.1, "folding"); the single leading whitespace
//! byte is stripped and the remainder is appended to the logical line. An
//! empty physical line ends the current logical line and is discarded.

use std::io::{self, Read};
use std::iter::Peekable;

/// One unfolded logical line, with the physical line number it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Unfolded text, without the line terminator.
    pub text: String,
    /// 1-based physical line number of the line's base (non-continuation) line.
    pub line_number: usize,
}

/// Streaming reader that unfolds physical lines into logical lines.
///
/// # Example
///
/// ```
/// use ical_core::line::FoldedLineReader;
///
/// let src = b"BEGIN:VCALENDAR\r\n SUFFIX\r\nEND:VCALENDAR\r\n";
/// let mut reader = FoldedLineReader::new(&src[..]);
/// let line = reader.next_line().unwrap().unwrap();
/// assert_eq!(line.text, "BEGIN:VCALENDARSUFFIX");
/// assert_eq!(line.line_number, 1);
/// ```
#[derive(Debug)]
pub struct FoldedLineReader<R> {
    source: PhysicalLines<R>,
    pending: Option<(String, usize)>,
    current_line_number: usize,
}

impl<R: Read> FoldedLineReader<R> {
    /// Wrap a byte stream.
    pub fn new(source: R) -> Self {
        Self {
            source: PhysicalLines::new(source),
            pending: None,
            current_line_number: 0,
        }
    }

    /// The physical line number of the logical line most recently returned.
    #[must_use]
    pub const fn current_line_number(&self) -> usize {
        self.current_line_number
    }

    /// Read the next logical line, unfolding any continuations.
    ///
    /// # Errors
    /// Returns an error if the underlying stream fails or contains bytes
    /// that are not valid UTF-8.
    pub fn next_line(&mut self) -> io::Result<Option<LogicalLine>> {
        let (mut text, line_number) = loop {
            let (line, num) = match self.take_physical()? {
                Some(v) => v,
                None => return Ok(None),
            };
            if !line.is_empty() {
                break (line, num);
            }
            // Empty physical line with nothing accumulated yet: discard and retry.
        };

        loop {
            match self.take_physical()? {
                Some((line, _)) if line.is_empty() => break,
                Some((line, _)) if is_continuation(&line) => {
                    text.push_str(&line[1..]);
                }
                Some(other) => {
                    self.pending = Some(other);
                    break;
                }
                None => break,
            }
        }

        self.current_line_number = line_number;
        Ok(Some(LogicalLine {
            text,
            line_number,
        }))
    }

    fn take_physical(&mut self) -> io::Result<Option<(String, usize)>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }
        self.source.next_line()
    }
}

fn is_continuation(line: &str) -> bool {
    matches!(line.as_bytes().first(), Some(b' ' | b'\t'))
}

/// Splits a byte stream into physical lines on bare CR, CRLF, or bare LF.
#[derive(Debug)]
struct PhysicalLines<R> {
    source: Peekable<io::Bytes<R>>,
    line_number: usize,
}

impl<R: Read> PhysicalLines<R> {
    fn new(source: R) -> Self {
        Self {
            source: source.bytes().peekable(),
            line_number: 0,
        }
    }

    fn next_line(&mut self) -> io::Result<Option<(String, usize)>> {
        let mut buf = Vec::new();
        let mut saw_any = false;

        loop {
            let Some(byte) = self.source.next().transpose()? else {
                break;
            };
            saw_any = true;

            match byte {
                b'\r' => {
                    if matches!(self.source.peek(), Some(Ok(b'\n'))) {
                        self.source.next().transpose()?;
                    }
                    break;
                }
                b'\n' => break,
                other => buf.push(other),
            }
        }

        if !saw_any {
            return Ok(None);
        }

        self.line_number += 1;
        let text =
            String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some((text, self.line_number)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[u8]) -> Vec<LogicalLine> {
        let mut reader = FoldedLineReader::new(src);
        let mut out = Vec::new();
        while let Some(line) = reader.next_line().unwrap() {
            out.push(line);
        }
        out
    }

    #[test]
    fn test_basic_lines() {
        let out = lines(b"UID:abc\r\nSUMMARY:hi\r\n");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "UID:abc");
        assert_eq!(out[0].line_number, 1);
        assert_eq!(out[1].text, "SUMMARY:hi");
        assert_eq!(out[1].line_number, 2);
    }

    #[test]
    fn test_space_continuation() {
        let out = lines(b"SUMMARY:Hello\r\n World\r\n");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "SUMMARY:HelloWorld");
        assert_eq!(out[0].line_number, 1);
    }

    #[test]
    fn test_tab_continuation() {
        let out = lines(b"SUMMARY:Hello\r\n\tWorld\r\n");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "SUMMARY:HelloWorld");
    }

    #[test]
    fn test_multiple_continuations() {
        let out = lines(b"SUMMARY:A\r\n B\r\n C\r\n");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "SUMMARY:ABC");
    }

    #[test]
    fn test_bare_cr_and_bare_lf_terminators() {
        let out = lines(b"A:1\rB:2\nC:3\r\n");
        assert_eq!(
            out.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
            ["A:1", "B:2", "C:3"]
        );
    }

    #[test]
    fn test_empty_line_ends_logical_line_and_is_discarded() {
        let out = lines(b"SUMMARY:Hi\r\n\r\nUID:x\r\n");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "SUMMARY:Hi");
        assert_eq!(out[1].text, "UID:x");
        assert_eq!(out[1].line_number, 3);
    }

    #[test]
    fn test_no_trailing_terminator() {
        let out = lines(b"UID:abc");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "UID:abc");
    }

    #[test]
    fn test_empty_stream() {
        assert!(lines(b"").is_empty());
    }

    #[test]
    fn test_current_line_number_tracks_base_line() {
        let mut reader = FoldedLineReader::new(&b"A:1\r\nB:2\r\n C\r\n"[..]);
        let first = reader.next_line().unwrap().unwrap();
        assert_eq!(first.line_number, 1);
        assert_eq!(reader.current_line_number(), 1);

        let second = reader.next_line().unwrap().unwrap();
        assert_eq!(second.text, "B:2C");
        assert_eq!(second.line_number, 2);
        assert_eq!(reader.current_line_number(), 2);
    }
}
