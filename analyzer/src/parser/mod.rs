//! Recursive-descent parser for arithmetic expressions.
//!
//! The parser owns its [`Lexer`] for the whole parse and pulls one token at a time; it always
//! holds exactly one current token. There is no backtracking: every production either commits
//! or fails, and the first failure is returned to the caller.
//!
//! Spans are UTF-8 byte offsets into the original source, with half-open semantics `[start, end)`.

use crate::diagnostics::ParseError;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::span::Span;

pub mod ast;
mod expr;
mod pretty;

/// Default bound on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default bound on the height of the parsed tree.
///
/// Evaluation, printing and dropping all recurse once per level, so the height has to stay well
/// inside a thread's stack. A flat chain like `1 + 1 + ... + 1` is one level per operator.
pub const DEFAULT_MAX_HEIGHT: usize = 1024;

/// What to do with tokens left after a complete top-level expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingInput {
    /// Stop at the end of the expression; `1 + 2 abc` parses as `1 + 2`.
    #[default]
    Ignore,
    /// Require end of input after the expression.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub trailing: TrailingInput,
    /// Maximum number of open parentheses at any point.
    pub max_depth: usize,
    /// Maximum height of the resulting tree; a literal has height 1.
    pub max_height: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            trailing: TrailingInput::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        ParseOptions {
            trailing: TrailingInput::Reject,
            ..Self::default()
        }
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    token: Token,
    options: ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self::with_options(lexer, ParseOptions::default())
    }

    pub fn with_options(mut lexer: Lexer<'a>, options: ParseOptions) -> Self {
        let token = lexer.next_token();
        Parser {
            lexer,
            token,
            options,
            depth: 0,
        }
    }

    fn cur(&self) -> &Token {
        &self.token
    }

    /// Advances to the next token and returns the one just consumed.
    fn bump(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.token, next)
    }

    /// Error for rejecting the current token where `expected` was required.
    fn unexpected(&self, expected: &'static str) -> ParseError {
        Self::reject(&self.cur().kind, self.cur().span, expected)
    }

    /// An invalid character is always reported as such, whatever the grammar expected.
    fn reject(found: &TokenKind, span: Span, expected: &'static str) -> ParseError {
        match *found {
            TokenKind::Invalid(ch) => ParseError::InvalidCharacter { ch, span },
            ref kind => ParseError::UnexpectedToken {
                expected,
                found: kind.describe(),
                span,
            },
        }
    }
}
