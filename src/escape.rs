// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Escape dialects applied to parameter values only (RFC 5545 §3.2, RFC 6868).
//!
//! Two independent escape introducers are recognized while scanning a
//! parameter value: backslash (`\\`, `\n`/`\N`, `\"`) and, when enabled,
//! circumflex (`^^`, `^n`, `^'`). The property `value` field never goes
//! through this module — it is passed through verbatim by the raw reader
//! and re-encoded, if at all, by a registered value type.

/// Decode backslash and (optionally) circumflex escapes in a parameter value.
#[must_use]
pub fn decode_param_value(raw: &str, circumflex_enabled: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some('\\') => {
                    out.push('\\');
                    chars.next();
                }
                Some('n' | 'N') => {
                    out.push('\n');
                    chars.next();
                }
                Some('"') => {
                    out.push('"');
                    chars.next();
                }
                Some(&other) => {
                    out.push('\\');
                    out.push(other);
                    chars.next();
                }
                None => out.push('\\'),
            },
            '^' if circumflex_enabled => match chars.peek() {
                Some('^') => {
                    out.push('^');
                    chars.next();
                }
                Some('n') => {
                    out.push('\n');
                    chars.next();
                }
                Some('\'') => {
                    out.push('"');
                    chars.next();
                }
                Some(&other) => {
                    out.push('^');
                    out.push(other);
                    chars.next();
                }
                None => out.push('^'),
            },
            other => out.push(other),
        }
    }

    out
}

/// Encode a decoded parameter value with circumflex escapes (RFC 6868 §3.1).
///
/// Backslash escaping is a read-side compatibility accommodation only; the
/// writer never emits it. Only `"`, newline, and `^` itself are re-encoded.
#[must_use]
pub fn encode_param_value(decoded: &str, circumflex_enabled: bool) -> String {
    if !circumflex_enabled {
        return decoded.to_string();
    }

    let mut out = String::with_capacity(decoded.len());
    for c in decoded.chars() {
        match c {
            '"' => out.push_str("^'"),
            '\n' => out.push_str("^n"),
            '^' => out.push_str("^^"),
            other => out.push(other),
        }
    }
    out
}

/// Whether a decoded parameter value requires double-quote wrapping when
/// written: it contains `;`, `:`, `,`, or any whitespace.
#[must_use]
pub fn needs_quoting(decoded: &str) -> bool {
    decoded
        .chars()
        .any(|c| matches!(c, ';' | ':' | ',') || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circumflex_decode() {
        assert_eq!(decode_param_value("Line1^nLine2", true), "Line1\nLine2");
        assert_eq!(decode_param_value("a^'b", true), "a\"b");
        assert_eq!(decode_param_value("a^^b", true), "a^b");
    }

    #[test]
    fn test_circumflex_disabled_is_literal() {
        assert_eq!(decode_param_value("Line1^nLine2", false), "Line1^nLine2");
    }

    #[test]
    fn test_unknown_circumflex_sequence_is_literal() {
        assert_eq!(decode_param_value("a^xb", true), "a^xb");
    }

    #[test]
    fn test_backslash_decode() {
        assert_eq!(decode_param_value(r"a\nb", true), "a\nb");
        assert_eq!(decode_param_value(r#"a\"b"#, true), "a\"b");
        assert_eq!(decode_param_value(r"a\\b", true), "a\\b");
    }

    #[test]
    fn test_unknown_backslash_sequence_is_literal() {
        assert_eq!(decode_param_value(r"a\qb", true), r"a\qb");
    }

    #[test]
    fn test_encode_round_trip() {
        let decoded = "Line1\nLine2 \"quoted\" ^caret";
        let encoded = encode_param_value(decoded, true);
        assert_eq!(decode_param_value(&encoded, true), decoded);
    }

    #[test]
    fn test_needs_quoting() {
        assert!(needs_quoting("a;b"));
        assert!(needs_quoting("a b"));
        assert!(needs_quoting("a,b"));
        assert!(needs_quoting("a:b"));
        assert!(!needs_quoting("plain"));
    }
}
