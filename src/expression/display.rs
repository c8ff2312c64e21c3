use std::fmt;

use crate::expression::ast::Expression;

/// Renders the tree back to prefix notation: atoms verbatim, lists as
/// space-separated children inside parentheses.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Atom(text) => write!(f, "{}", text),
            Expression::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}
