use crate::source_map::SourceMap;
use crate::span::Span;

/// Every way a parse can fail. The first failure ends the parse; nothing is recovered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character that starts no token, found where the grammar needed one.
    #[error("invalid character `{ch}`")]
    InvalidCharacter { ch: char, span: Span },

    /// A token of the wrong class, e.g. an operator or end of input where a factor must start.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
    },

    /// A `(` whose expression is not followed by `)`.
    #[error("expected `)`, found {found}")]
    UnclosedParen { open: Span, found: String, span: Span },

    /// Digit-only text that does not parse to a finite `f64`.
    #[error("malformed numeric literal `{text}`")]
    MalformedNumber { text: String, span: Span },

    /// Input left over after a complete expression, when trailing input is rejected.
    #[error("unexpected {found} after expression")]
    TrailingInput { found: String, span: Span },

    #[error("parentheses nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize, span: Span },

    /// The tree would be taller than the configured height; `span` is the operator that crossed it.
    #[error("expression is deeper than {limit} levels")]
    ExpressionTooDeep { limit: usize, span: Span },
}

impl ParseError {
    /// Primary location of the failure. Empty at end of input.
    pub fn span(&self) -> Span {
        match self {
            ParseError::InvalidCharacter { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnclosedParen { span, .. }
            | ParseError::MalformedNumber { span, .. }
            | ParseError::TrailingInput { span, .. }
            | ParseError::NestingTooDeep { span, .. }
            | ParseError::ExpressionTooDeep { span, .. } => *span,
        }
    }

    pub fn labels(&self) -> Vec<Label> {
        match self {
            ParseError::UnclosedParen { open, .. } => vec![Label {
                span: *open,
                message: Some("this `(` is not closed".into()),
            }],
            _ => vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub span: Span,
    pub message: Option<String>,
}

/// Renders `err` against the source it came from.
///
/// ```text
/// error: expected `)`, found end of input
///   --> <input>:1:7 [6..6]
///   = label: 1:1 [0..1] this `(` is not closed
/// ```
pub fn format_error(source: &str, err: &ParseError) -> String {
    use std::fmt::Write;

    let sm = SourceMap::new(source);
    let span = err.span();

    let mut out = String::new();
    let (line, col) = sm.line_col(span.start);
    let _ = writeln!(&mut out, "error: {}", err);
    let _ = writeln!(
        &mut out,
        "  --> <input>:{}:{} [{}..{}]",
        line, col, span.start, span.end
    );
    for label in err.labels() {
        let (line, col) = sm.line_col(label.span.start);
        let _ = writeln!(
            &mut out,
            "  = label: {}:{} [{}..{}] {}",
            line,
            col,
            label.span.start,
            label.span.end,
            label.message.unwrap_or_default()
        );
    }
    out
}
