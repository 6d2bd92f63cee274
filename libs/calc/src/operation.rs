//! Operator table and single-step evaluation
//!
//! The four supported operators are a closed enum; each variant carries its
//! own evaluation rule in [`Operator::apply`].

use crate::error::{CalcError, Result};
use crate::number::{format_operand, format_result};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every supported operator, in menu order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Validate a raw token: exactly one character, and that character
    /// must be one of `+ - * /`.
    pub fn from_token(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_symbol(c).ok_or_else(|| CalcError::invalid_operator(token))
            },
            _ => Err(CalcError::invalid_operator(token)),
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Overflow is not checked (it yields an infinity). Division fails only
    /// when the divisor is exactly zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            },
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_token(s)
    }
}

/// One evaluated calculation; lives for a single loop iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub result: f64,
}

impl Calculation {
    pub fn evaluate(lhs: f64, operator: Operator, rhs: f64) -> Result<Self> {
        let result = operator.apply(lhs, rhs)?;
        debug!(lhs, op = %operator, rhs, result, "evaluated");
        Ok(Self {
            lhs,
            operator,
            rhs,
            result,
        })
    }

    /// Render as `<label>: <lhs> <op> <rhs> = <result>`
    pub fn render(&self, label: &str) -> String {
        format!("{}: {}", label, self)
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_operand(self.lhs),
            self.operator,
            format_operand(self.rhs),
            format_result(self.result)
        )
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_accepts_each_symbol() {
        assert_eq!(Operator::from_token("+").unwrap(), Operator::Add);
        assert_eq!(Operator::from_token("-").unwrap(), Operator::Subtract);
        assert_eq!(Operator::from_token("*").unwrap(), Operator::Multiply);
        assert_eq!(Operator::from_token("/").unwrap(), Operator::Divide);
    }

    #[test]
    fn test_from_token_rejects_malformed() {
        for token in ["", "%", "++", "+-", "x", "^", " +"] {
            assert!(
                matches!(
                    Operator::from_token(token),
                    Err(CalcError::InvalidOperator(_))
                ),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_symbol_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
            assert_eq!(op.to_string(), op.symbol().to_string());
        }
    }

    #[test]
    fn test_arithmetic_matches_ieee() {
        let pairs = [(3.0, 4.0), (-5.0, 2.0), (0.1, 0.2), (1e308, 10.0), (-0.0, 7.5)];
        for (a, b) in pairs {
            assert_eq!(Operator::Add.apply(a, b).unwrap(), a + b);
            assert_eq!(Operator::Subtract.apply(a, b).unwrap(), a - b);
            assert_eq!(Operator::Multiply.apply(a, b).unwrap(), a * b);
            assert_eq!(Operator::Divide.apply(a, b).unwrap(), a / b);
        }
    }

    #[test]
    fn test_overflow_yields_infinity() {
        let r = Operator::Multiply.apply(f64::MAX, 2.0).unwrap();
        assert!(r.is_infinite() && r.is_sign_positive());
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(
            Operator::Divide.apply(8.0, 0.0),
            Err(CalcError::DivisionByZero)
        ));
        assert!(matches!(
            Operator::Divide.apply(8.0, -0.0),
            Err(CalcError::DivisionByZero)
        ));
    }

    #[test]
    fn test_division_by_value_and_negation() {
        for v in [2.0, 0.5, 1e-300, 123.456] {
            let pos = Operator::Divide.apply(9.0, v).unwrap();
            let neg = Operator::Divide.apply(9.0, -v).unwrap();
            assert_eq!(pos, -neg);
        }
    }

    #[test]
    fn test_calculation_render() {
        let calc = Calculation::evaluate(3.0, Operator::Add, 4.0).unwrap();
        assert_eq!(calc.render("Result"), "Result: 3.0 + 4.0 = 7.00");

        let calc = Calculation::evaluate(-5.0, Operator::Multiply, 2.0).unwrap();
        assert_eq!(calc.render("Result"), "Result: (-5.0) * 2.0 = -10.00");
    }
}
