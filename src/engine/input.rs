//! Logical calculator inputs
//!
//! An [`Input`] is what a button press or a key press means to the engine.
//! The keyboard adapter and the on-screen keypad both produce these.

use crate::engine::ops::{BinaryOp, Function};

/// Memory register operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryOp {
    /// M+
    Add,
    /// M-
    Subtract,
    /// MR
    Recall,
    /// MC
    Clear,
}

impl MemoryOp {
    pub fn label(self) -> &'static str {
        match self {
            MemoryOp::Add => "M+",
            MemoryOp::Subtract => "M-",
            MemoryOp::Recall => "MR",
            MemoryOp::Clear => "MC",
        }
    }
}

/// One user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A digit `'0'..='9'`; any other character is ignored
    Digit(char),
    DecimalPoint,
    Operator(BinaryOp),
    Equals,
    ClearEntry,
    AllClear,
    Backspace,
    Function(Function),
    Memory(MemoryOp),
    ToggleShift,
    ToggleAlpha,
    ToggleAngleMode,
    RecallAns,
}
