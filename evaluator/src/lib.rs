//! Tree-walking evaluator for parsed arithmetic expressions.
//!
//! Evaluation is total: every well-formed tree reduces to an `f64`. Division follows IEEE 754,
//! so `5 / 0` is `inf`, `-5 / 0` is `-inf` and `0 / 0` is NaN. The operator set is a closed enum,
//! so there is no unknown-operator case to handle at run time.
//!
//! The only failures come from parsing, surfaced through [`Error`].

use analyzer::ast::{BinOpKind, Expr, ExprKind};
use analyzer::{ParseError, ParseOptions};
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses and evaluates `source` with the default [`ParseOptions`].
///
/// ```
/// assert_eq!(evaluator::evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert!(evaluator::evaluate("(1 + 2").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64> {
    evaluate_with(source, &ParseOptions::default())
}

pub fn evaluate_with(source: &str, options: &ParseOptions) -> Result<f64> {
    let expr = analyzer::parse_with(source, options)?;
    let value = eval(&expr);
    debug!(value, "evaluated expression");
    Ok(value)
}

/// Reduces `expr` to a value. Operands are evaluated left before right.
///
/// Recurses once per tree level; the parser bounds the height with `ParseOptions::max_height`.
pub fn eval(expr: &Expr) -> f64 {
    match &expr.kind {
        ExprKind::Lit(value) => *value,
        ExprKind::Binary { op, left, right } => {
            let lhs = eval(left);
            let rhs = eval(right);
            apply(op.node, lhs, rhs)
        }
    }
}

pub fn apply(op: BinOpKind, lhs: f64, rhs: f64) -> f64 {
    let value = match op {
        BinOpKind::Add => lhs + rhs,
        BinOpKind::Sub => lhs - rhs,
        BinOpKind::Mul => lhs * rhs,
        BinOpKind::Div => lhs / rhs,
    };
    trace!(op = op.as_str(), lhs, rhs, value, "applied operator");
    value
}
