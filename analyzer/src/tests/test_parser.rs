use crate::parser::ast::{BinOpKind, ExprKind};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::{DEFAULT_MAX_HEIGHT, ParseOptions, Parser, parse, parse_with};

#[test]
fn test_single_number() {
    let ast = parse("42").unwrap();
    assert_lit!(ast, 42);
    assert_eq!(ast.span, Span { start: 0, end: 2 });
}

#[test]
fn test_precedence() {
    let ast = parse("2 + 3 * 4").unwrap();

    let (left, right) = assert_bin!(ast, BinOpKind::Add);
    assert_lit!(left, 2);

    let (left, right) = assert_bin!(right, BinOpKind::Mul);
    assert_lit!(left, 3);
    assert_lit!(right, 4);
}

#[test]
fn test_subtraction_is_left_associative() {
    let ast = parse("1 - 2 - 3").unwrap();

    let (left, right) = assert_bin!(ast, BinOpKind::Sub);
    assert_lit!(right, 3);

    let (left, right) = assert_bin!(left, BinOpKind::Sub);
    assert_lit!(left, 1);
    assert_lit!(right, 2);
}

#[test]
fn test_division_is_left_associative() {
    let ast = parse("100 / 10 / 2").unwrap();

    let (left, right) = assert_bin!(ast, BinOpKind::Div);
    assert_lit!(right, 2);

    let (left, right) = assert_bin!(left, BinOpKind::Div);
    assert_lit!(left, 100);
    assert_lit!(right, 10);
}

#[test]
fn test_mixed_terms_fold_left() {
    // 8 / 4 * 2 + 1 - 3 => (((8 / 4) * 2) + 1) - 3
    let ast = parse("8 / 4 * 2 + 1 - 3").unwrap();

    let (left, right) = assert_bin!(ast, BinOpKind::Sub);
    assert_lit!(right, 3);
    let (left, right) = assert_bin!(left, BinOpKind::Add);
    assert_lit!(right, 1);
    let (left, right) = assert_bin!(left, BinOpKind::Mul);
    assert_lit!(right, 2);
    let (left, right) = assert_bin!(left, BinOpKind::Div);
    assert_lit!(left, 8);
    assert_lit!(right, 4);
}

#[test]
fn test_parens_override_precedence() {
    let ast = parse("(2 + 3) * 4").unwrap();

    let (left, right) = assert_bin!(ast, BinOpKind::Mul);
    assert_lit!(right, 4);

    let (left, right) = assert_bin!(left, BinOpKind::Add);
    assert_lit!(left, 2);
    assert_lit!(right, 3);
}

#[test]
fn test_parens_are_not_nodes() {
    let bare = parse("7").unwrap();
    let wrapped = parse("((7))").unwrap();
    assert_eq!(bare.kind, wrapped.kind);
    // The literal keeps its own span, not the span of the parens.
    assert_eq!(wrapped.span, Span { start: 2, end: 3 });
}

#[test]
fn test_binary_spans() {
    let ast = parse("1 + 23 * 4").unwrap();
    assert_eq!(ast.span, Span { start: 0, end: 10 });

    let ExprKind::Binary { op, right, .. } = &ast.kind else {
        panic!("expected binary, got {:?}", ast.kind);
    };
    assert_eq!(op.span, Span { start: 2, end: 3 });
    assert_eq!(right.span, Span { start: 4, end: 10 });
}

#[test]
fn test_trailing_input_is_ignored_by_default() {
    let ast = parse("1 + 2 abc").unwrap();
    let (left, right) = assert_bin!(ast, BinOpKind::Add);
    assert_lit!(left, 1);
    assert_lit!(right, 2);

    // An extra number or paren is also left unread.
    let ast = parse("1 2").unwrap();
    assert_lit!(ast, 1);
    let ast = parse("(1) )").unwrap();
    assert_lit!(ast, 1);
}

#[test]
fn test_strict_mode_accepts_complete_input() {
    let ast = parse_with("  (1 + 2) * 3  ", &ParseOptions::strict()).unwrap();
    let (left, _) = assert_bin!(ast, BinOpKind::Mul);
    assert_bin!(left, BinOpKind::Add);
}

#[test]
fn test_nesting_within_limit() {
    let source = format!("{}1{}", "(".repeat(64), ")".repeat(64));
    let options = ParseOptions {
        max_depth: 64,
        ..ParseOptions::default()
    };
    let ast = parse_with(&source, &options).unwrap();
    assert_lit!(ast, 1);
}

#[test]
fn test_parser_pulls_from_a_restarted_lexer() {
    // Start after `junk ` and parse the rest with default options.
    let ast = Parser::new(Lexer::at("junk 6 / 3", 5)).parse().unwrap();
    let (left, right) = assert_bin!(ast, BinOpKind::Div);
    assert_lit!(left, 6);
    assert_lit!(right, 3);
    assert_eq!(ast.span, Span { start: 5, end: 10 });
}

#[test]
fn test_chain_at_height_limit() {
    let source = format!("1{}", " + 1".repeat(DEFAULT_MAX_HEIGHT - 1));
    let ast = parse(&source).unwrap();
    let (_, right) = assert_bin!(ast, BinOpKind::Add);
    assert_lit!(right, 1);
}

#[test]
fn test_parens_do_not_add_height() {
    let options = ParseOptions {
        max_height: 3,
        ..ParseOptions::default()
    };
    let ast = parse_with("((1 + 2)) * (((3 + 4)))", &options).unwrap();
    assert_bin!(ast, BinOpKind::Mul);
}
