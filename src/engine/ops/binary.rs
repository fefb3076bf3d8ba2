//! Binary operator evaluation

use crate::engine::errors::{CalcError, ParseInputError};
use std::fmt;
use std::str::FromStr;

/// Two-operand operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// Symbol shown on the keypad and in the pending-operation line
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '−',
            BinaryOp::Multiply => '×',
            BinaryOp::Divide => '÷',
            BinaryOp::Power => '^',
        }
    }

    /// Map an operator character, accepting both ASCII and typographic forms
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinaryOp::Add),
            '-' | '−' => Some(BinaryOp::Subtract),
            '*' | '×' => Some(BinaryOp::Multiply),
            '/' | '÷' => Some(BinaryOp::Divide),
            '^' => Some(BinaryOp::Power),
            _ => None,
        }
    }

    /// Apply the operator. Only a zero divisor is rejected here; overflowing
    /// results are caught when they are formatted.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            BinaryOp::Add => Ok(lhs + rhs),
            BinaryOp::Subtract => Ok(lhs - rhs),
            BinaryOp::Multiply => Ok(lhs * rhs),
            BinaryOp::Divide => {
                if rhs == 0.0 {
                    Err(CalcError::DivisionByZero { dividend: lhs })
                } else {
                    Ok(lhs / rhs)
                }
            }
            BinaryOp::Power => Ok(lhs.powf(rhs)),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for BinaryOp {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_symbol(c).ok_or_else(|| ParseInputError::UnknownOperator(s.to_string()))
            }
            _ => Err(ParseInputError::UnknownOperator(s.to_string())),
        }
    }
}
