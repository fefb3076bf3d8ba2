//! Display formatting for the 16-character calculator screen
//!
//! This module provides:
//! - [`format`]: conversion of a computed `f64` into the text shown on the display
//! - [`constants`]: display width and notation thresholds
//!
//! # Notation
//!
//! Values between `1e-7` and `1e10` in magnitude are written in fixed decimal
//! notation with the fraction truncated to the remaining display width. Anything
//! outside that window is written as `d.ddddE±x`.

pub mod constants;
pub mod format;

pub use format::{format_value, FormatError};
