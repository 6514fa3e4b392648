//! Arithmetic expression front end.
//!
//! Pipeline: lex → parse. Tokens are pulled from the lexer on demand by the parser; the result is
//! an owned [`ast::Expr`] tree or the first [`ParseError`] encountered.
//! All spans are UTF-8 byte offsets into the original source, using `[start, end)`.

mod diagnostics;
mod lexer;
mod parser;
mod source_map;
mod span;
mod tests;

/// Parses `text` with the default [`ParseOptions`].
pub fn parse(text: &str) -> Result<ast::Expr, ParseError> {
    parse_with(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, options: &ParseOptions) -> Result<ast::Expr, ParseError> {
    Parser::with_options(Lexer::new(text), *options).parse()
}

pub use diagnostics::{Label, ParseError, format_error};
pub use lexer::{Lexer, Symbol, Token, TokenKind, lex};
pub use parser::ast;
pub use parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_HEIGHT, ParseOptions, Parser, TrailingInput};
pub use source_map::SourceMap;
pub use span::{Span, Spanned};
