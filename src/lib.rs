//! # Introduction
//!
//! calctty is a scientific calculator: a two-operand input state machine with
//! a 16-character display, shift/alpha modifiers, an angle mode and a single
//! memory register. The state machine is driven from a terminal keypad built
//! with [ratatui](https://docs.rs/ratatui), or from a keystroke script.
//!
//! ## Pipeline
//!
//! ```text
//! Key event → Keymap → Input → Transition → CalculatorState → Formatter → TUI
//! ```
//!
//! 1. [`display`]: converts numbers into bounded display strings.
//! 2. [`engine`]: the calculator state, scientific functions, errors and
//!    the pure transition function behind [`engine::Calculator`].
//! 3. [`ui`]: ratatui-based TUI and keyboard adapter; not part of the
//!    stable library API.
//!
//! ## Arithmetic model
//!
//! Binary operators chain strictly left to right (`2 + 3 × 4 = 20`). Every
//! failure collapses into a single `Error` display that the next keystroke
//! acknowledges.

pub mod display;
pub mod engine;
pub mod ui;
