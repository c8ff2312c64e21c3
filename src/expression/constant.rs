use crate::expression::ast::Expression;

impl Expression {
    /// True when the variable occurs nowhere in this subtree.
    ///
    /// List heads are skipped, so an operator symbol never counts as an
    /// occurrence.
    pub fn is_constant(&self) -> bool {
        match self {
            Expression::Atom(_) => !self.is_variable(),
            Expression::List(items) => items.iter().skip(1).all(Expression::is_constant),
        }
    }
}
