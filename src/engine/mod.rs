//! Calculator engine
//!
//! This module provides the input state machine:
//! - [`state`]: the calculator state aggregate and its mode enums
//! - [`input`]: the logical inputs a key or button produces
//! - [`ops`]: binary operators and scientific functions
//! - [`transition`]: the pure `(state, input) -> state` function
//! - [`calculator`]: the owner that applies transitions and handles failures
//! - [`errors`]: error types
//!
//! # Execution Model
//!
//! Inputs are applied one at a time and run to completion. A failing input
//! leaves the state as it was before the input, except that the display
//! switches to `Error`.

pub mod calculator;
pub mod errors;
pub mod input;
pub mod ops;
pub mod state;
pub mod transition;

pub use calculator::Calculator;
pub use errors::{CalcError, ParseInputError};
pub use input::{Input, MemoryOp};
pub use ops::{BinaryOp, Function};
pub use state::{AngleMode, CalculatorState, Modifier};
