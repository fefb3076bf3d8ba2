//! Error types for the calculator engine
//!
//! This module defines [`CalcError`], which represents every way a calculator
//! input can fail, and [`ParseInputError`] for textual operator and function
//! names that do not map to an input.
//!
//! All calculation errors collapse into the same visible state: the display
//! reads `Error` until the next input acknowledges it.

use crate::display::FormatError;
use crate::engine::ops::Function;
use std::fmt;

/// Errors that can occur while applying an input
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Division or reciprocal with a zero divisor
    DivisionByZero { dividend: f64 },

    /// Function argument outside the function's domain
    DomainError { function: Function, value: f64 },

    /// Result is NaN or infinite, or a computation would overflow
    OverflowOrInvalid { operation: String },

    /// Display text that does not parse as a number
    InvalidOperand { text: String },
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero { dividend } => {
                write!(f, "Division by zero: {} / 0", dividend)
            }
            CalcError::DomainError { function, value } => {
                write!(f, "Domain error: {}({}) is undefined", function.name(), value)
            }
            CalcError::OverflowOrInvalid { operation } => {
                write!(f, "Overflow or invalid result in {}", operation)
            }
            CalcError::InvalidOperand { text } => {
                write!(f, "Invalid operand '{}'", text)
            }
        }
    }
}

impl std::error::Error for CalcError {}

impl From<FormatError> for CalcError {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::NonFinite { value } => CalcError::OverflowOrInvalid {
                operation: format!("result {}", value),
            },
        }
    }
}

/// Errors produced when turning text into calculator inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseInputError {
    /// Not one of `+ - − * × / ÷ ^`
    UnknownOperator(String),

    /// Not a scientific function name
    UnknownFunction(String),

    /// Character with no key binding in a keystroke script
    UnboundKey(char),
}

impl fmt::Display for ParseInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseInputError::UnknownOperator(symbol) => {
                write!(f, "Unknown operator '{}'", symbol)
            }
            ParseInputError::UnknownFunction(name) => {
                write!(f, "Unknown function '{}'", name)
            }
            ParseInputError::UnboundKey(c) => write!(f, "No key bound to '{}'", c),
        }
    }
}

impl std::error::Error for ParseInputError {}
