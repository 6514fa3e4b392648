//! Expression grammar.
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := Number | '(' expression ')'
//! ```

use tracing::{debug, trace};

use super::ast::{BinOp, BinOpKind, Expr};
use super::{Parser, TrailingInput};
use crate::diagnostics::ParseError;
use crate::lexer::{Symbol, TokenKind};
use crate::span::Span;

/// A parsed expression together with its height.
struct Subtree {
    expr: Expr,
    height: usize,
}

impl<'a> Parser<'a> {
    /// Parser's entry point.
    ///
    /// ```text
    /// `2 + 3 * 4` parses as `2 + (3 * 4)`
    /// `1 - 2 - 3` parses as `(1 - 2) - 3`   // left-associative
    /// `1 + 2 abc` parses as `1 + 2` unless trailing input is rejected
    /// ```
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let Subtree { expr, height } = self.parse_expr()?;

        if !self.cur().is_eof() {
            match self.options.trailing {
                TrailingInput::Ignore => {
                    trace!(span = ?self.cur().span, "ignoring input after expression");
                }
                TrailingInput::Reject => return Err(self.trailing_error()),
            }
        }

        debug!(span = ?expr.span, height, "parsed expression");
        Ok(expr)
    }

    /// `expression := term (('+' | '-') term)*`
    fn parse_expr(&mut self) -> Result<Subtree, ParseError> {
        let mut lhs = self.parse_term()?;

        while let Some(op) = self.peek_additive_op() {
            let op_tok = self.bump();
            let rhs = self.parse_term()?;
            lhs = self.fold(
                BinOp {
                    node: op,
                    span: op_tok.span,
                },
                lhs,
                rhs,
            )?;
        }

        Ok(lhs)
    }

    /// `term := factor (('*' | '/') factor)*`
    fn parse_term(&mut self) -> Result<Subtree, ParseError> {
        let mut lhs = self.parse_factor()?;

        while let Some(op) = self.peek_multiplicative_op() {
            let op_tok = self.bump();
            let rhs = self.parse_factor()?;
            lhs = self.fold(
                BinOp {
                    node: op,
                    span: op_tok.span,
                },
                lhs,
                rhs,
            )?;
        }

        Ok(lhs)
    }

    /// `factor := Number | '(' expression ')'`
    fn parse_factor(&mut self) -> Result<Subtree, ParseError> {
        if self.cur().kind == TokenKind::OpenParen {
            return self.parse_parens();
        }

        let tok = self.bump();
        match tok.kind {
            TokenKind::Number(sym) => self.number_literal(sym, tok.span),
            found => Err(Self::reject(&found, tok.span, "a number or `(`")),
        }
    }

    /// Literals must be finite so that printing the tree gives back parseable source.
    fn number_literal(&self, sym: Symbol, span: Span) -> Result<Subtree, ParseError> {
        match sym.text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Subtree {
                expr: Expr::lit(value, span),
                height: 1,
            }),
            _ => Err(ParseError::MalformedNumber {
                text: sym.text,
                span,
            }),
        }
    }

    fn parse_parens(&mut self) -> Result<Subtree, ParseError> {
        let lparen = self.bump(); // '('

        if self.depth >= self.options.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.options.max_depth,
                span: lparen.span,
            });
        }

        self.depth += 1;
        let inner = self.parse_expr()?;
        self.depth -= 1;

        match self.cur().kind {
            TokenKind::CloseParen => {
                self.bump();
                Ok(inner)
            }
            TokenKind::Invalid(_) => Err(self.unexpected("`)`")),
            ref found => Err(ParseError::UnclosedParen {
                open: lparen.span,
                found: found.describe(),
                span: self.cur().span,
            }),
        }
    }

    /// Joins `lhs op rhs`, failing if the new node is taller than `max_height`.
    fn fold(&self, op: BinOp, lhs: Subtree, rhs: Subtree) -> Result<Subtree, ParseError> {
        let height = lhs.height.max(rhs.height) + 1;
        if height > self.options.max_height {
            return Err(ParseError::ExpressionTooDeep {
                limit: self.options.max_height,
                span: op.span,
            });
        }

        Ok(Subtree {
            expr: Expr::binary(op, lhs.expr, rhs.expr),
            height,
        })
    }

    fn peek_additive_op(&self) -> Option<BinOpKind> {
        match self.cur().kind {
            TokenKind::Plus => Some(BinOpKind::Add),
            TokenKind::Minus => Some(BinOpKind::Sub),
            _ => None,
        }
    }

    fn peek_multiplicative_op(&self) -> Option<BinOpKind> {
        match self.cur().kind {
            TokenKind::Star => Some(BinOpKind::Mul),
            TokenKind::Slash => Some(BinOpKind::Div),
            _ => None,
        }
    }

    fn trailing_error(&self) -> ParseError {
        let tok = self.cur();
        match tok.kind {
            TokenKind::Invalid(ch) => ParseError::InvalidCharacter { ch, span: tok.span },
            ref kind => ParseError::TrailingInput {
                found: kind.describe(),
                span: tok.span,
            },
        }
    }
}
