//! Calculator state representation
//!
//! [`CalculatorState`] is the single aggregate every transition reads and
//! produces. Invalid combinations are unrepresentable where possible:
//!
//! - [`Modifier`] holds at most one of shift/alpha
//! - [`PendingOperation`] keeps the left operand and operator together
//!
//! The remaining invariant, that the error flag is set exactly when the display
//! reads `Error`, is maintained by [`CalculatorState::enter_error`] and the
//! acknowledgement step at the start of each transition.

use crate::display::constants::ERROR_TEXT;
use crate::engine::ops::BinaryOp;

/// Modifier key currently latched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    #[default]
    None,
    Shift,
    Alpha,
}

/// Unit used for trigonometric arguments and results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// Convert an angle in this unit into radians
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::Degrees => angle.to_radians(),
            AngleMode::Radians => angle,
        }
    }

    /// Convert an angle in radians into this unit
    pub fn radians_to_unit(self, radians: f64) -> f64 {
        match self {
            AngleMode::Degrees => radians.to_degrees(),
            AngleMode::Radians => radians,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AngleMode::Degrees => AngleMode::Radians,
            AngleMode::Radians => AngleMode::Degrees,
        }
    }

    /// Short indicator for the status bar
    pub fn label(self) -> &'static str {
        match self {
            AngleMode::Degrees => "DEG",
            AngleMode::Radians => "RAD",
        }
    }
}

/// Left operand and operator captured by an operator key
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOperation {
    pub operand: String,
    pub operator: BinaryOp,
}

/// Complete calculator state
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// Text currently shown
    pub(crate) display: String,

    /// Operation awaiting its right operand
    pub(crate) pending: Option<PendingOperation>,

    /// Next digit or decimal point replaces the display instead of appending
    pub(crate) reset_on_next_input: bool,

    pub(crate) modifier: Modifier,

    pub(crate) angle_mode: AngleMode,

    /// Memory register (M+, M-, MR, MC)
    pub(crate) memory: f64,

    /// Display holds the error sentinel
    pub(crate) error: bool,
}

impl CalculatorState {
    pub fn new() -> Self {
        CalculatorState {
            display: String::from("0"),
            pending: None,
            reset_on_next_input: false,
            modifier: Modifier::None,
            angle_mode: AngleMode::Degrees,
            memory: 0.0,
            error: false,
        }
    }

    pub fn with_angle_mode(angle_mode: AngleMode) -> Self {
        CalculatorState {
            angle_mode,
            ..Self::new()
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn reset_on_next_input(&self) -> bool {
        self.reset_on_next_input
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn shift_active(&self) -> bool {
        self.modifier == Modifier::Shift
    }

    pub fn alpha_active(&self) -> bool {
        self.modifier == Modifier::Alpha
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// True when the memory register holds a non-zero value
    pub fn memory_indicator_active(&self) -> bool {
        self.memory != 0.0
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Put the display into the error state.
    ///
    /// Pending operation, reset flag, modifiers and memory are left as they
    /// were before the failing input.
    pub(crate) fn enter_error(&mut self) {
        self.display = ERROR_TEXT.to_string();
        self.error = true;
    }

    /// Clear a pending error, resetting the display to `0`.
    ///
    /// Returns whether there was an error to acknowledge.
    pub(crate) fn acknowledge_error(&mut self) -> bool {
        if self.error {
            self.error = false;
            self.display = String::from("0");
            true
        } else {
            false
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
