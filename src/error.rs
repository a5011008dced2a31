// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The fatal tier of the crate's three-tier error model: failures that
//! abort a read outright, as distinct from the recoverable per-line faults
//! (`invalid_line`, `valueless_parameter`) and non-throwing semantic
//! warnings, both of which are reported through [`crate::model::Warning`]
//! instead.

use thiserror::Error;

/// A fatal failure from [`crate::read`] or [`crate::parse_str`].
///
/// Malformed content lines and unbalanced `BEGIN`/`END` pairs are *not*
/// represented here: they are recoverable and reported as warnings (see
/// [`crate::model::WarningCode::InvalidLine`] and
/// [`crate::model::WarningCode::UnbalancedComponent`]), consistent with the
/// crate's three-tier error model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadError {
    /// The underlying stream failed, or its bytes were not valid UTF-8.
    #[error("I/O error reading iCalendar stream: {0}")]
    Io(#[from] std::io::Error),
}
