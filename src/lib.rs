// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Read, write, and validate iCalendar data (RFC 5545, with RFC 2445 and
//! RFC 6868 compatibility).
//!
//! The crate is two layers: a streaming line-level codec ([`line`],
//! [`reader`], [`writer`]) that bridges the RFC 5545 content-line grammar to
//! event-driven dispatch, and a typed component/property tree ([`model`],
//! [`object`]) with a semantic [`validate`]. Most callers only need the
//! functions re-exported here; the submodules exist for callers who want to
//! observe wire events directly instead of building a tree.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

mod datetime;
mod error;
mod escape;
mod keyword;
pub mod line;
mod model;
mod object;
pub mod reader;
mod validate;
pub mod writer;

pub use crate::datetime::{DateTimeValue, DateValue, TimeValue};
pub use crate::error::ReadError;
pub use crate::model::{
    Component, DurationValue, GeoValue, ParamValue, Parameters, Property, RecurrenceValue, Value,
    Warning, WarningCode,
};
pub use crate::object::{DecodeError, parse_str, read};
pub use crate::reader::ReaderOptions;
pub use crate::validate::validate;
pub use crate::writer::{FoldingStyle, WriterOptions, to_string, write};
