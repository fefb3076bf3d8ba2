//! The calculator: owner of one [`CalculatorState`]
//!
//! [`Calculator`] applies [`transition`] to its state for each input. On
//! failure it keeps the pre-input state, switches it into the error state and
//! remembers the error so the UI can explain it.

use crate::engine::errors::{CalcError, ParseInputError};
use crate::engine::input::{Input, MemoryOp};
use crate::engine::ops::{BinaryOp, Function};
use crate::engine::state::{AngleMode, CalculatorState, Modifier};
use crate::engine::transition::transition;
use tracing::{debug, warn};

/// A calculator instance driven by discrete inputs
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,

    /// Error behind the current `Error` display, if any
    last_error: Option<CalcError>,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            state: CalculatorState::new(),
            last_error: None,
        }
    }

    /// Create a calculator starting in the given angle mode
    pub fn with_angle_mode(angle_mode: AngleMode) -> Self {
        Calculator {
            state: CalculatorState::with_angle_mode(angle_mode),
            last_error: None,
        }
    }

    /// Apply one input.
    ///
    /// On `Err` the calculator is already showing `Error`; the error is
    /// returned for reporting only.
    pub fn dispatch(&mut self, input: Input) -> Result<(), CalcError> {
        match transition(&self.state, input) {
            Ok(next) => {
                self.state = next;
                if !self.state.has_error() {
                    self.last_error = None;
                }
                debug!(?input, display = %self.state.display(), "input applied");
                Ok(())
            }
            Err(err) => {
                warn!(?input, error = %err, "input failed");
                self.state.enter_error();
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Dispatch and keep going; failures are visible through the display
    fn press(&mut self, input: Input) -> &mut Self {
        let _ = self.dispatch(input);
        self
    }

    pub fn enter_digit(&mut self, digit: char) -> &mut Self {
        self.press(Input::Digit(digit))
    }

    pub fn enter_decimal_point(&mut self) -> &mut Self {
        self.press(Input::DecimalPoint)
    }

    pub fn select_operator(&mut self, op: BinaryOp) -> &mut Self {
        self.press(Input::Operator(op))
    }

    pub fn equals(&mut self) -> &mut Self {
        self.press(Input::Equals)
    }

    pub fn clear_entry(&mut self) -> &mut Self {
        self.press(Input::ClearEntry)
    }

    pub fn all_clear(&mut self) -> &mut Self {
        self.press(Input::AllClear)
    }

    pub fn backspace(&mut self) -> &mut Self {
        self.press(Input::Backspace)
    }

    pub fn invoke_function(&mut self, function: Function) -> &mut Self {
        self.press(Input::Function(function))
    }

    /// Invoke a function by name (`"sin"`, `"1/x"`, `"toggleSign"`, ...).
    ///
    /// An unknown name leaves the calculator untouched.
    pub fn invoke_function_named(&mut self, name: &str) -> Result<&mut Self, ParseInputError> {
        let function = name.parse::<Function>()?;
        Ok(self.invoke_function(function))
    }

    pub fn memory_op(&mut self, op: MemoryOp) -> &mut Self {
        self.press(Input::Memory(op))
    }

    pub fn toggle_shift(&mut self) -> &mut Self {
        self.press(Input::ToggleShift)
    }

    pub fn toggle_alpha(&mut self) -> &mut Self {
        self.press(Input::ToggleAlpha)
    }

    pub fn toggle_angle_mode(&mut self) -> &mut Self {
        self.press(Input::ToggleAngleMode)
    }

    /// Ans key. There is no separate answer register: this only stops the
    /// next digit from replacing the display.
    pub fn recall_ans(&mut self) -> &mut Self {
        self.press(Input::RecallAns)
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn has_error(&self) -> bool {
        self.state.has_error()
    }

    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    pub fn pending_operand(&self) -> Option<&str> {
        self.state.pending_operand()
    }

    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.state.pending_operator()
    }

    pub fn reset_on_next_input(&self) -> bool {
        self.state.reset_on_next_input()
    }

    pub fn modifier(&self) -> Modifier {
        self.state.modifier()
    }

    pub fn shift_active(&self) -> bool {
        self.state.shift_active()
    }

    pub fn alpha_active(&self) -> bool {
        self.state.alpha_active()
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.state.angle_mode()
    }

    pub fn memory(&self) -> f64 {
        self.state.memory()
    }

    pub fn memory_indicator_active(&self) -> bool {
        self.state.memory_indicator_active()
    }
}
