// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Renders one `name *(";" param) ":" value` content line through a
//! [`FoldWriter`].

use std::io::{self, Write};

use super::fold::FoldWriter;
use crate::escape;
use crate::model::{ParamValue, Parameters};

/// Write one content line (name, parameters, and pre-encoded value text),
/// ending it with the fold writer's line terminator.
///
/// `raw_value` must already be encoded for the wire (see
/// [`super::value::encode_value`]); this function does not know about
/// registered value types.
pub fn write_content_line<W: Write>(
    w: &mut FoldWriter<W>,
    name: &str,
    parameters: &Parameters,
    raw_value: &str,
    circumflex_encoding: bool,
) -> io::Result<()> {
    w.write_all(name.as_bytes())?;
    for (param_name, value) in parameters.iter() {
        w.write_all(b";")?;
        w.write_all(param_name.as_bytes())?;
        match value {
            ParamValue::Valueless => {}
            ParamValue::Values(values) => {
                w.write_all(b"=")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        w.write_all(b",")?;
                    }
                    write_param_value(w, v, circumflex_encoding)?;
                }
            }
        }
    }
    w.write_all(b":")?;
    w.write_all(raw_value.as_bytes())?;
    w.end_line()
}

fn write_param_value<W: Write>(
    w: &mut FoldWriter<W>,
    decoded: &str,
    circumflex_encoding: bool,
) -> io::Result<()> {
    let encoded = escape::encode_param_value(decoded, circumflex_encoding);
    if escape::needs_quoting(decoded) {
        w.write_all(b"\"")?;
        w.write_all(encoded.as_bytes())?;
        w.write_all(b"\"")?;
    } else {
        w.write_all(encoded.as_bytes())?;
    }
    Ok(())
}
