use log::{debug, trace};

use crate::expression::{Expression, Operator};
use crate::utils::{is_one, is_zero};

/// Algebraically reduce `expr`, bottom-up.
///
/// Only the arithmetic operators are rewritten: numeric operands are folded,
/// then the additive and multiplicative identities are applied. Any other
/// list keeps its shape with simplified children.
pub fn simplify(expr: Expression) -> Expression {
    let simplified = reduce(expr);
    debug!("Simplified result: {}", simplified);
    simplified
}

fn reduce(expr: Expression) -> Expression {
    let items = match expr {
        Expression::Atom(text) => return Expression::Atom(text),
        Expression::List(items) => items.into_iter().map(reduce).collect::<Vec<_>>(),
    };

    let op = match items.first() {
        Some(Expression::Atom(symbol)) => {
            Operator::from_symbol(symbol).filter(|op| op.is_binary())
        }
        _ => None,
    };
    let Some(op) = op else {
        return Expression::List(items);
    };

    match <[Expression; 3]>::try_from(items) {
        Ok([head, a, b]) => rewrite(op, head, a, b),
        Err(items) => Expression::List(items),
    }
}

fn rewrite(op: Operator, head: Expression, a: Expression, b: Expression) -> Expression {
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number())
        && let Some(value) = fold(op, x, y)
    {
        trace!("Folded ({} {} {}) to {}", op, a, b, value);
        return Expression::number(value);
    }

    let zero = |e: &Expression| e.as_number().is_some_and(is_zero);
    let one = |e: &Expression| e.as_number().is_some_and(is_one);

    let rule = match op {
        Operator::Add if zero(&a) => Some(Identity::Right),
        Operator::Add if zero(&b) => Some(Identity::Left),
        Operator::Add if a == b => Some(Identity::Double),
        Operator::Sub if zero(&b) => Some(Identity::Left),
        Operator::Mul if zero(&a) || zero(&b) => Some(Identity::Zero),
        Operator::Mul if one(&a) => Some(Identity::Right),
        Operator::Mul if one(&b) => Some(Identity::Left),
        Operator::Div if zero(&a) => Some(Identity::Zero),
        Operator::Div if one(&b) => Some(Identity::Left),
        Operator::Pow if zero(&b) => Some(Identity::One),
        Operator::Pow if one(&b) => Some(Identity::Left),
        _ => None,
    };

    let Some(rule) = rule else {
        return Expression::List(vec![head, a, b]);
    };
    trace!("Applying {:?} to ({} {} {})", rule, op, a, b);

    match rule {
        Identity::Left => a,
        Identity::Right => b,
        Identity::Zero => Expression::number(0.0),
        Identity::One => Expression::number(1.0),
        Identity::Double => Expression::binary(Operator::Mul, Expression::number(2.0), a),
    }
}

/// What an algebraic identity reduces `(op a b)` to
#[derive(Debug, Clone, Copy)]
enum Identity {
    Left,
    Right,
    Zero,
    One,
    /// `a + a` becomes `2 * a`
    Double,
}

/// Constant-fold two literals; division by zero is left symbolic
fn fold(op: Operator, x: f64, y: f64) -> Option<f64> {
    match op {
        Operator::Add => Some(x + y),
        Operator::Sub => Some(x - y),
        Operator::Mul => Some(x * y),
        Operator::Div if !is_zero(y) => Some(x / y),
        Operator::Div => None,
        Operator::Pow => Some(x.powf(y)),
        _ => None,
    }
}
