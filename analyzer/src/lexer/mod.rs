mod token;

pub use token::{Symbol, Token, TokenKind};

use crate::span::Span;

/// On-demand tokenizer over a single source string.
///
/// The only state is the byte cursor, so a lexer can be restarted from any char boundary with
/// [`Lexer::at`] and will produce the same tokens a fresh lexer would from that offset.
///
/// - Whitespace is skipped and never emitted.
/// - Numbers: ASCII digits only (no sign, decimals or exponent).
/// - Operators and parens are single characters.
/// - Any other character becomes [`TokenKind::Invalid`]; the cursor moves past that character only.
/// - At end of input every call returns [`TokenKind::Eof`].
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0)
    }

    /// Starts lexing at byte offset `pos`, which must be a char boundary of `source`.
    pub fn at(source: &'a str, pos: usize) -> Self {
        debug_assert!(source.is_char_boundary(pos));
        Lexer { source, pos }
    }

    /// Byte offset of the next unread character.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn next_token(&mut self) -> Token {
        let rest = &self.source[self.pos..];
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();

        let start = self.pos;
        let Some(ch) = trimmed.chars().next() else {
            return Token {
                kind: TokenKind::Eof,
                span: Span::new(start, start),
            };
        };

        let kind = match ch {
            c if c.is_ascii_digit() => {
                let len = trimmed
                    .find(|c2: char| !c2.is_ascii_digit())
                    .unwrap_or(trimmed.len());
                self.pos += len;
                return Token {
                    kind: TokenKind::Number(Symbol {
                        text: String::from(&trimmed[..len]),
                    }),
                    span: Span::new(start, self.pos),
                };
            }

            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,

            other => TokenKind::Invalid(other),
        };

        self.pos += ch.len_utf8();
        Token {
            kind,
            span: Span::new(start, self.pos),
        }
    }
}

/// Lex the whole input, including the trailing [`TokenKind::Eof`].
pub fn lex(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.is_eof();
        tokens.push(tok);
        if done {
            break;
        }
    }
    tokens
}
