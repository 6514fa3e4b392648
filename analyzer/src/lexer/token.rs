//! Lexer tokens.
//!
//! Every token carries a [`Span`] of UTF-8 byte offsets into the original source, half-open
//! `[start, end)`. The end-of-input token has an empty span at `source.len()`.

use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of ASCII digits. No sign, decimal point or exponent.
    Number(Symbol),

    /* Arithmetic operators */
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,

    /* Delimiters */
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,

    /// A character that starts no token.
    Invalid(char),

    /// End Of File
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A token with its source span.
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl TokenKind {
    /// The fixed source spelling of punctuation tokens.
    pub fn spelling(&self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            OpenParen => "(",
            CloseParen => ")",
            _ => return None,
        })
    }

    /// Human-readable description used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Number(sym) => format!("number `{}`", sym.text),
            TokenKind::Invalid(ch) => format!("`{ch}`"),
            TokenKind::Eof => "end of input".into(),
            punct => format!("`{}`", punct.spelling().unwrap_or_default()),
        }
    }
}
