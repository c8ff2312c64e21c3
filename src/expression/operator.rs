use std::fmt;
use std::str::FromStr;

use crate::expression::errors::ExpressionError;

/// Operators that may head a list node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Sin,
    Cos,
    Tan,
    Exp,
    Ln,
}

impl Operator {
    #[cfg(test)]
    pub const ALL: [Operator; 10] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
        Operator::Sin,
        Operator::Cos,
        Operator::Tan,
        Operator::Exp,
        Operator::Ln,
    ];

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "^" => Some(Operator::Pow),
            "sin" => Some(Operator::Sin),
            "cos" => Some(Operator::Cos),
            "tan" => Some(Operator::Tan),
            "exp" => Some(Operator::Exp),
            "ln" => Some(Operator::Ln),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::Sin => "sin",
            Operator::Cos => "cos",
            Operator::Tan => "tan",
            Operator::Exp => "exp",
            Operator::Ln => "ln",
        }
    }

    pub fn arity(self) -> usize {
        if self.is_binary() { 2 } else { 1 }
    }

    /// Arithmetic operators; the only ones the simplifier rewrites
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Pow
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_symbol(s).ok_or_else(|| ExpressionError::UnsupportedOperator(s.to_string()))
    }
}
