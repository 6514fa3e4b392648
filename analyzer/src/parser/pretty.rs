use super::ast::{Expr, ExprKind};

impl Expr {
    /// Renders the tree as source text with only the parentheses its shape requires.
    ///
    /// ```text
    /// (1 - 2) - 3   ->  1 - 2 - 3
    /// 1 - (2 - 3)   ->  1 - (2 - 3)
    /// ((2 + 3)) * 4 ->  (2 + 3) * 4
    /// ```
    pub fn pretty(&self) -> String {
        self.pretty_with_prec(0)
    }

    fn pretty_with_prec(&self, parent_prec: u8) -> String {
        match &self.kind {
            ExprKind::Lit(value) => value.to_string(),
            ExprKind::Binary { op, left, right } => {
                let (l_bp, r_bp) = op.node.binding_power();

                let l = left.pretty_with_prec(l_bp);
                let r = right.pretty_with_prec(r_bp);
                let combined = format!("{} {} {}", l, op.node.as_str(), r);

                if l_bp < parent_prec {
                    format!("({})", combined)
                } else {
                    combined
                }
            }
        }
    }
}
