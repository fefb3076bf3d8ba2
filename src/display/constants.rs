// Constants for the calculator display

/// Number of characters the display can show
pub const DISPLAY_WIDTH: usize = 16;

/// Maximum number of digits accepted while typing a number
pub const MAX_INPUT_DIGITS: usize = 16;

/// Magnitudes at or above this switch to scientific notation
pub const SCIENTIFIC_UPPER: f64 = 1e10;

/// Non-zero magnitudes below this switch to scientific notation
pub const SCIENTIFIC_LOWER: f64 = 1e-7;

/// Fractional digits of the scientific mantissa
pub const SCIENTIFIC_PRECISION: usize = 4;

/// Text shown while the calculator is in the error state
pub const ERROR_TEXT: &str = "Error";
