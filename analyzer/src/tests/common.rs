macro_rules! assert_bin {
    ($e:expr, $op:pat) => {{
        match &($e).kind {
            ExprKind::Binary { op, left, right } if matches!(op.node, $op) => {
                (left.as_ref(), right.as_ref())
            }
            other => panic!("expected Binary({}), got {:?}", stringify!($op), other),
        }
    }};
}

macro_rules! assert_lit {
    ($e:expr, $value:expr) => {{
        match &($e).kind {
            ExprKind::Lit(v) => assert_eq!(*v, $value as f64),
            other => panic!("expected literal, got {:?}", other),
        }
    }};
}
