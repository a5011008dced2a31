// SPDX-FileCopyrightText: 2026 ical-core contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Structural tokens for the name/parameter region of one content line.
//!
//! Unlike a whole-document lexer, this one runs once per logical line (the
//! [`crate::line`] reader has already unfolded continuations), and only the
//! region up to the first unquoted `:` is tokenized — the value region is
//! sliced out of the original line text untouched, since property values may
//! legitimately contain any of these structural characters.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Equal,
    #[token(",")]
    Comma,
    #[token("\"")]
    DQuote,
    #[regex(r#"[^:;=,"]+"#)]
    Text(&'a str),
}

impl<'a> Token<'a> {
    /// The literal text this token stands for, used to reconstruct raw text
    /// inside a quoted parameter value.
    pub fn literal(&self) -> &'a str {
        match self {
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Equal => "=",
            Self::Comma => ",",
            Self::DQuote => "\"",
            Self::Text(t) => t,
        }
    }
}
