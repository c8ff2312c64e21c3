use log::{debug, warn};

use crate::calculus::errors::DerivativeError;
use crate::expression::{Expression, ExpressionError, Operator};

/// Symbolic derivative of `expr` with respect to the variable.
///
/// The result is not simplified; it follows the textbook rule for each
/// operator literally.
///
/// # Errors
///
/// Returns an error when a list is headed by an unsupported operator or a
/// supported operator is given the wrong number of operands. No partial
/// result is produced.
pub fn differentiate(expr: &Expression) -> Result<Expression, DerivativeError> {
    let derivative = derive(expr)?;
    debug!("d/dx {} = {}", expr, derivative);
    Ok(derivative)
}

fn derive(expr: &Expression) -> Result<Expression, DerivativeError> {
    if let Expression::Atom(text) = expr {
        if expr.is_variable() {
            return Ok(Expression::number(1.0));
        }
        if !expr.is_number() {
            warn!("Treating unrecognized atom '{}' as a constant", text);
        }
        return Ok(Expression::number(0.0));
    }

    let Some((op, args)) = expr.operation()? else {
        return Ok(Expression::number(0.0));
    };

    match (op, args) {
        (Operator::Add | Operator::Sub, [a, b]) => {
            Ok(Expression::binary(op, derive(a)?, derive(b)?))
        }
        (Operator::Mul, [a, b]) => product_rule(a, b),
        (Operator::Div, [a, b]) => quotient_rule(a, b),
        (Operator::Pow, [base, exponent]) => power_rule(base, exponent),
        (Operator::Sin, [u]) => chain_rule(u, Expression::unary(Operator::Cos, u.clone())),
        (Operator::Cos, [u]) => chain_rule(
            u,
            Expression::binary(
                Operator::Mul,
                Expression::number(-1.0),
                Expression::unary(Operator::Sin, u.clone()),
            ),
        ),
        (Operator::Tan, [u]) => chain_rule(
            u,
            Expression::binary(
                Operator::Add,
                Expression::number(1.0),
                Expression::binary(
                    Operator::Pow,
                    Expression::unary(Operator::Tan, u.clone()),
                    Expression::number(2.0),
                ),
            ),
        ),
        (Operator::Exp, [u]) => chain_rule(u, Expression::unary(Operator::Exp, u.clone())),
        (Operator::Ln, [u]) => chain_rule(
            u,
            Expression::binary(Operator::Div, Expression::number(1.0), u.clone()),
        ),
        // operation() has already checked the arity
        (_, _) => Err(ExpressionError::ArityMismatch {
            operator: op,
            expected: op.arity(),
            found: args.len(),
        }
        .into()),
    }
}

/// `outer * du`
fn chain_rule(u: &Expression, outer: Expression) -> Result<Expression, DerivativeError> {
    Ok(Expression::binary(Operator::Mul, outer, derive(u)?))
}

/// `da*b + a*db`
fn product_rule(a: &Expression, b: &Expression) -> Result<Expression, DerivativeError> {
    let da = derive(a)?;
    let db = derive(b)?;
    Ok(Expression::binary(
        Operator::Add,
        Expression::binary(Operator::Mul, da, b.clone()),
        Expression::binary(Operator::Mul, a.clone(), db),
    ))
}

/// `(da*b - a*db) / b^2`
fn quotient_rule(a: &Expression, b: &Expression) -> Result<Expression, DerivativeError> {
    let da = derive(a)?;
    let db = derive(b)?;
    let numerator = Expression::binary(
        Operator::Sub,
        Expression::binary(Operator::Mul, da, b.clone()),
        Expression::binary(Operator::Mul, a.clone(), db),
    );
    let denominator = Expression::binary(Operator::Pow, b.clone(), Expression::number(2.0));
    Ok(Expression::binary(Operator::Div, numerator, denominator))
}

fn power_rule(base: &Expression, exponent: &Expression) -> Result<Expression, DerivativeError> {
    let da = derive(base)?;

    if exponent.is_constant() {
        // b * a^(b-1) * da
        let lowered = Expression::binary(
            Operator::Sub,
            exponent.clone(),
            Expression::number(1.0),
        );
        let scaled = Expression::binary(
            Operator::Mul,
            exponent.clone(),
            Expression::binary(Operator::Pow, base.clone(), lowered),
        );
        return Ok(Expression::binary(Operator::Mul, scaled, da));
    }

    // a^b * ((b*da)/a + db*ln(a))
    let db = derive(exponent)?;
    let base_term = Expression::binary(
        Operator::Div,
        Expression::binary(Operator::Mul, exponent.clone(), da),
        base.clone(),
    );
    let exponent_term = Expression::binary(
        Operator::Mul,
        db,
        Expression::unary(Operator::Ln, base.clone()),
    );
    Ok(Expression::binary(
        Operator::Mul,
        Expression::binary(Operator::Pow, base.clone(), exponent.clone()),
        Expression::binary(Operator::Add, base_term, exponent_term),
    ))
}
