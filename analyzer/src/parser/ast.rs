use crate::span::{Span, Spanned};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

pub type BinOp = Spanned<BinOpKind>;

impl BinOpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
        }
    }

    /// Returns `(left_bp, right_bp)`; larger numbers bind tighter.
    ///
    /// All operators are left-associative, so `right_bp = left_bp + 1`:
    /// `a - b - c` is `(a - b) - c` and `a / b / c` is `(a / b) / c`.
    pub fn binding_power(&self) -> (u8, u8) {
        match self {
            BinOpKind::Add | BinOpKind::Sub => (1, 2),
            BinOpKind::Mul | BinOpKind::Div => (3, 4),
        }
    }
}

/// An expression node. Parentheses used for grouping are not represented.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Lit(f64),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn lit(value: f64, span: Span) -> Self {
        Expr {
            span,
            kind: ExprKind::Lit(value),
        }
    }

    /// Builds `left op right`, spanning from the start of `left` to the end of `right`.
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr {
            span: left.span.to(right.span),
            kind: ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }
}
