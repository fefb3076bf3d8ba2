//! Input transitions
//!
//! [`transition`] is a pure function from the current state and one input to
//! the next state. It never enters the error state itself: a failing input
//! returns `Err`, and [`Calculator`](crate::engine::Calculator) puts the
//! *previous* state into the error state. That is why a failed `=` leaves the
//! pending operation in place.
//!
//! Every handler that can act on an error display starts by acknowledging it.

use crate::display::constants::MAX_INPUT_DIGITS;
use crate::display::format_value;
use crate::engine::errors::CalcError;
use crate::engine::input::{Input, MemoryOp};
use crate::engine::ops::{BinaryOp, Function};
use crate::engine::state::{CalculatorState, Modifier, PendingOperation};

/// Apply one input to a copy of `state`.
pub fn transition(state: &CalculatorState, input: Input) -> Result<CalculatorState, CalcError> {
    let mut next = state.clone();

    match input {
        Input::Digit(digit) => next.enter_digit(digit),
        Input::DecimalPoint => next.enter_decimal_point(),
        Input::Operator(op) => next.select_operator(op)?,
        Input::Equals => next.calculate()?,
        Input::ClearEntry => next.clear_entry(),
        Input::AllClear => next.all_clear(),
        Input::Backspace => next.backspace(),
        Input::Function(function) => next.apply_function(function)?,
        Input::Memory(op) => next.apply_memory(op)?,
        Input::ToggleShift => next.toggle_modifier(Modifier::Shift),
        Input::ToggleAlpha => next.toggle_modifier(Modifier::Alpha),
        Input::ToggleAngleMode => next.angle_mode = next.angle_mode.toggled(),
        Input::RecallAns => next.reset_on_next_input = false,
    }

    Ok(next)
}

/// Parse display text as an operand
fn parse_operand(text: &str) -> Result<f64, CalcError> {
    text.parse::<f64>().map_err(|_| CalcError::InvalidOperand {
        text: text.to_string(),
    })
}

/// Number of digit characters, ignoring sign and decimal point
fn digit_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}

impl CalculatorState {
    fn enter_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }

        // Acknowledging an error leaves reset-on-next-input as it was
        if self.error {
            self.error = false;
            self.display = digit.to_string();
            return;
        }

        if self.display == "0" || self.reset_on_next_input {
            self.reset_on_next_input = false;
            self.display = digit.to_string();
            return;
        }

        if digit_count(&self.display) >= MAX_INPUT_DIGITS {
            return;
        }
        self.display.push(digit);
    }

    fn enter_decimal_point(&mut self) {
        if self.error {
            self.error = false;
            self.display = String::from("0.");
            return;
        }

        if self.reset_on_next_input {
            self.reset_on_next_input = false;
            self.display = String::from("0.");
            return;
        }

        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn select_operator(&mut self, op: BinaryOp) -> Result<(), CalcError> {
        // An operator after an error only acknowledges it
        if self.acknowledge_error() {
            return Ok(());
        }

        // Chain left to right: `2 + 3 ×` evaluates `2 + 3` first
        if self.pending.is_some() && !self.reset_on_next_input {
            self.calculate()?;
        }

        self.pending = Some(PendingOperation {
            operand: self.display.clone(),
            operator: op,
        });
        self.reset_on_next_input = true;
        Ok(())
    }

    fn calculate(&mut self) -> Result<(), CalcError> {
        if self.acknowledge_error() {
            return Ok(());
        }

        let Some(pending) = &self.pending else {
            return Ok(());
        };

        let lhs = parse_operand(&pending.operand)?;
        let rhs = parse_operand(&self.display)?;
        let result = pending.operator.apply(lhs, rhs)?;

        self.display = format_value(result)?;
        self.pending = None;
        self.reset_on_next_input = true;
        Ok(())
    }

    fn clear_entry(&mut self) {
        self.error = false;
        self.display = String::from("0");
    }

    fn all_clear(&mut self) {
        self.display = String::from("0");
        self.pending = None;
        self.reset_on_next_input = false;
        self.error = false;
    }

    /// Drop the last display character.
    ///
    /// Removing the digit of a negative single-digit value such as `"-5"`
    /// yields `"0"` rather than `"-"`, so the display always parses as a
    /// number.
    fn backspace(&mut self) {
        if self.acknowledge_error() {
            return;
        }

        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = String::from("0");
        }
    }

    fn apply_function(&mut self, function: Function) -> Result<(), CalcError> {
        if self.acknowledge_error() {
            return Ok(());
        }

        let x = parse_operand(&self.display)?;
        let inverse = self.modifier == Modifier::Shift;
        let result = function.apply(x, self.angle_mode, inverse)?;

        self.display = format_value(result)?;
        self.reset_on_next_input = true;
        if self.modifier == Modifier::Shift {
            self.modifier = Modifier::None;
        }
        Ok(())
    }

    fn apply_memory(&mut self, op: MemoryOp) -> Result<(), CalcError> {
        if self.error {
            return Ok(());
        }

        match op {
            MemoryOp::Add => {
                self.memory += parse_operand(&self.display)?;
                self.reset_on_next_input = true;
            }
            MemoryOp::Subtract => {
                self.memory -= parse_operand(&self.display)?;
                self.reset_on_next_input = true;
            }
            MemoryOp::Recall => {
                self.display = format_value(self.memory)?;
                self.reset_on_next_input = true;
            }
            MemoryOp::Clear => self.memory = 0.0,
        }
        Ok(())
    }

    fn toggle_modifier(&mut self, modifier: Modifier) {
        self.modifier = if self.modifier == modifier {
            Modifier::None
        } else {
            modifier
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(inputs: &[Input]) -> CalculatorState {
        let mut state = CalculatorState::new();
        for input in inputs {
            state = transition(&state, *input).unwrap();
        }
        state
    }

    #[test]
    fn test_transition_does_not_mutate_input_state() {
        let state = CalculatorState::new();
        let next = transition(&state, Input::Digit('7')).unwrap();
        assert_eq!(state.display(), "0");
        assert_eq!(next.display(), "7");
    }

    #[test]
    fn test_failed_calculation_reports_error_without_touching_state() {
        let state = run(&[
            Input::Digit('1'),
            Input::Operator(BinaryOp::Divide),
            Input::Digit('0'),
        ]);
        let result = transition(&state, Input::Equals);
        assert!(matches!(result, Err(CalcError::DivisionByZero { .. })));
        assert_eq!(state.pending_operator(), Some(BinaryOp::Divide));
        assert!(!state.has_error());
    }

    #[test]
    fn test_digit_count_ignores_sign_and_point() {
        assert_eq!(digit_count("-12.5"), 3);
        assert_eq!(digit_count("0."), 1);
    }

    #[test]
    fn test_backspace_never_leaves_bare_sign() {
        let state = run(&[
            Input::Digit('5'),
            Input::Function(Function::ToggleSign),
            Input::RecallAns,
            Input::Backspace,
        ]);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_modifiers_are_exclusive() {
        let state = run(&[Input::ToggleShift, Input::ToggleAlpha]);
        assert_eq!(state.modifier(), Modifier::Alpha);
        let state = run(&[Input::ToggleShift, Input::ToggleShift]);
        assert_eq!(state.modifier(), Modifier::None);
    }
}
