// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Splits one logical line into a name, a parameter list, and a raw value.

use std::ops::Range;

use logos::Logos;

use super::token::Token;
use crate::escape;
use crate::model::{ParamValue, Parameters};

/// The outcome of scanning one logical line's structure.
pub enum LineParse<'a> {
    /// A well-formed `name *(";" param) ":" value` line.
    Ok {
        name: &'a str,
        parameters: Parameters,
        raw_value: &'a str,
        /// Names of parameters written with no `=` (non-conformant but
        /// tolerated; reported to the listener as a separate event).
        valueless_parameters: Vec<String>,
    },
    /// The line had no name, no unquoted `:`, or unbalanced quoting.
    Invalid,
}

/// Scan a logical line's name/parameter/value structure.
///
/// `circumflex_encoding` controls whether `^`-escapes (RFC 6868) are decoded
/// in parameter values; backslash escapes are always recognized.
pub fn parse_content_line(line: &str, circumflex_encoding: bool) -> LineParse<'_> {
    let Ok(tokens) = Token::lexer(line)
        .spanned()
        .map(|(tok, span)| tok.map(|t| (t, span)))
        .collect::<Result<Vec<(Token<'_>, Range<usize>)>, _>>()
    else {
        return LineParse::Invalid;
    };

    let mut pos = 0;
    let Some((Token::Text(raw_name), _)) = tokens.first() else {
        return LineParse::Invalid;
    };
    let name = raw_name.trim();
    if name.is_empty() {
        return LineParse::Invalid;
    }
    pos += 1;

    let mut parameters = Parameters::new();
    let mut valueless_parameters = Vec::new();

    loop {
        match tokens.get(pos) {
            Some((Token::Semicolon, _)) => {
                pos += 1;
                let Some((Token::Text(param_name), _)) = tokens.get(pos) else {
                    return LineParse::Invalid;
                };
                let param_name = param_name.trim().to_string();
                pos += 1;

                match tokens.get(pos) {
                    Some((Token::Equal, _)) => {
                        pos += 1;
                        let Some((values, new_pos)) = parse_param_values(&tokens, pos) else {
                            return LineParse::Invalid;
                        };
                        pos = new_pos;
                        let decoded = values
                            .into_iter()
                            .map(|v| escape::decode_param_value(&v, circumflex_encoding))
                            .collect();
                        parameters.push(param_name, ParamValue::Values(decoded));
                    }
                    _ => {
                        valueless_parameters.push(param_name.clone());
                        parameters.push(param_name, ParamValue::Valueless);
                    }
                }
            }
            Some((Token::Colon, span)) => {
                let value_start = span.end;
                return LineParse::Ok {
                    name,
                    parameters,
                    raw_value: &line[value_start..],
                    valueless_parameters,
                };
            }
            _ => return LineParse::Invalid,
        }
    }
}

fn parse_param_values(
    tokens: &[(Token<'_>, Range<usize>)],
    mut pos: usize,
) -> Option<(Vec<String>, usize)> {
    let mut values = Vec::new();
    loop {
        let (raw, new_pos) = parse_one_param_value(tokens, pos)?;
        values.push(raw);
        pos = new_pos;
        match tokens.get(pos) {
            Some((Token::Comma, _)) => pos += 1,
            _ => return Some((values, pos)),
        }
    }
}

fn parse_one_param_value(
    tokens: &[(Token<'_>, Range<usize>)],
    pos: usize,
) -> Option<(String, usize)> {
    if matches!(tokens.get(pos), Some((Token::DQuote, _))) {
        let mut pos = pos + 1;
        let mut raw = String::new();
        loop {
            match tokens.get(pos) {
                Some((Token::DQuote, _)) => return Some((raw, pos + 1)),
                Some((tok, _)) => {
                    raw.push_str(tok.literal());
                    pos += 1;
                }
                None => return None,
            }
        }
    } else {
        // Only the first '=' after a parameter name is structural; any
        // further '=' within an unquoted value is literal (RFC 5545 §3.2).
        let mut pos = pos;
        let mut raw = String::new();
        loop {
            match tokens.get(pos) {
                Some((Token::Text(t), _)) => {
                    raw.push_str(t);
                    pos += 1;
                }
                Some((Token::Equal, _)) => {
                    raw.push('=');
                    pos += 1;
                }
                Some((Token::Comma | Token::Semicolon | Token::Colon, _)) | None => {
                    return Some((raw, pos));
                }
                Some((Token::DQuote, _)) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(line: &str) -> (String, Parameters, String, Vec<String>) {
        match parse_content_line(line, true) {
            LineParse::Ok {
                name,
                parameters,
                raw_value,
                valueless_parameters,
            } => (
                name.to_string(),
                parameters,
                raw_value.to_string(),
                valueless_parameters,
            ),
            LineParse::Invalid => panic!("expected a valid line: {line}"),
        }
    }

    #[test]
    fn test_simple_property() {
        let (name, params, value, _) = ok("UID:abc-123");
        assert_eq!(name, "UID");
        assert!(params.is_empty());
        assert_eq!(value, "abc-123");
    }

    #[test]
    fn test_single_parameter() {
        let (name, params, value, _) = ok("DTSTART;TZID=America/New_York:20230101T100000");
        assert_eq!(name, "DTSTART");
        assert_eq!(params.get_single("TZID"), Some("America/New_York"));
        assert_eq!(value, "20230101T100000");
    }

    #[test]
    fn test_multi_valued_parameter() {
        let (_, params, _, _) = ok(r#"ATTENDEE;MEMBER="mailto:a@x","mailto:b@x":mailto:c@x"#);
        let values = params.get("MEMBER").unwrap().values();
        assert_eq!(values, ["mailto:a@x", "mailto:b@x"]);
    }

    #[test]
    fn test_quoted_value_with_colon() {
        let (_, params, value, _) = ok(r#"ATTACH;FMTTYPE="text/plain":http://example.com/a.txt"#);
        assert_eq!(params.get_single("FMTTYPE"), Some("text/plain"));
        assert_eq!(value, "http://example.com/a.txt");
    }

    #[test]
    fn test_valueless_parameter_reported() {
        let (_, params, _, valueless) = ok("X-FOO;BAR:baz");
        assert_eq!(valueless, ["BAR"]);
        assert!(matches!(params.get("BAR"), Some(crate::model::ParamValue::Valueless)));
    }

    #[test]
    fn test_circumflex_decoded_in_parameter_value() {
        let (_, params, _, _) = ok("SUMMARY;X-NOTE=a^nb:hi");
        assert_eq!(params.get_single("X-NOTE"), Some("a\nb"));
    }

    #[test]
    fn test_literal_equals_in_unquoted_parameter_value() {
        let (_, params, value, _) = ok("X-FOO;BAR=a=b:val");
        assert_eq!(params.get_single("BAR"), Some("a=b"));
        assert_eq!(value, "val");
    }

    #[test]
    fn test_no_colon_is_invalid() {
        assert!(matches!(parse_content_line("UID;FOO=bar", true), LineParse::Invalid));
    }

    #[test]
    fn test_missing_name_is_invalid() {
        assert!(matches!(parse_content_line(":value", true), LineParse::Invalid));
    }
}
