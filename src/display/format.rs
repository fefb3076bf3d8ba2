//! Number-to-display conversion
//!
//! [`format_value`] is a pure function: it never touches calculator state.
//! A non-finite value is reported as [`FormatError::NonFinite`] and the caller
//! decides what to do with it.

use crate::display::constants::{
    DISPLAY_WIDTH, SCIENTIFIC_LOWER, SCIENTIFIC_PRECISION, SCIENTIFIC_UPPER,
};
use std::fmt;

/// Errors produced while formatting a value for the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatError {
    /// The value is NaN or infinite
    NonFinite { value: f64 },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NonFinite { value } => {
                write!(f, "Cannot display non-finite value {}", value)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Format a value for the 16-character display.
///
/// Zero (including negative zero) is always `"0"`. Large and tiny magnitudes
/// use scientific notation; everything else is fixed decimal with the fraction
/// truncated, not rounded, to fit.
pub fn format_value(value: f64) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFinite { value });
    }

    if value == 0.0 {
        return Ok("0".to_string());
    }

    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_UPPER || magnitude < SCIENTIFIC_LOWER {
        return Ok(truncate_to_width(format_scientific(value)));
    }

    Ok(format_fixed(value))
}

/// `d.ddddE±x`, with the exponent sign always written out
fn format_scientific(value: f64) -> String {
    let raw = format!("{:.*E}", SCIENTIFIC_PRECISION, value);
    match raw.split_once('E') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}E+{}", mantissa, exponent),
        None => raw,
    }
}

fn format_fixed(value: f64) -> String {
    // f64's Display never switches to exponent form, so the split is reliable
    let text = value.to_string();

    let (integer, fraction) = match text.split_once('.') {
        Some(parts) => parts,
        None => return truncate_to_width(text.clone()),
    };

    // The sign counts against the width like any other character
    if integer.len() >= DISPLAY_WIDTH {
        return truncate_to_width(integer.to_string());
    }

    let budget = DISPLAY_WIDTH - integer.len() - 1;
    let kept = &fraction[..fraction.len().min(budget)];
    let kept = kept.trim_end_matches('0');

    if kept.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, kept)
    }
}

/// Cut a string down to the display width. This may split an exponent.
fn truncate_to_width(mut text: String) -> String {
    if text.len() > DISPLAY_WIDTH {
        text.truncate(DISPLAY_WIDTH);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_value(5.0).unwrap(), "5");
        assert_eq!(format_value(120.0).unwrap(), "120");
        assert_eq!(format_value(-42.0).unwrap(), "-42");
        assert_eq!(format_value(9_999_999_999.0).unwrap(), "9999999999");
    }

    #[test]
    fn test_zero_has_no_sign() {
        assert_eq!(format_value(0.0).unwrap(), "0");
        assert_eq!(format_value(-0.0).unwrap(), "0");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(format_value(123.456000).unwrap(), "123.456");
        assert_eq!(format_value(2.5).unwrap(), "2.5");
    }

    #[test]
    fn test_fraction_truncated_not_rounded() {
        let text = format_value(2.0 / 3.0).unwrap();
        assert_eq!(text, "0.66666666666666");
        assert_eq!(text.len(), DISPLAY_WIDTH);

        let text = format_value(-2.0 / 3.0).unwrap();
        assert_eq!(text, "-0.6666666666666");
        assert_eq!(text.len(), DISPLAY_WIDTH);
    }

    #[test]
    fn test_large_values_use_scientific() {
        assert_eq!(format_value(1e11).unwrap(), "1.0000E+11");
        assert_eq!(format_value(1e10).unwrap(), "1.0000E+10");
        assert_eq!(format_value(-123_456_789_012.0).unwrap(), "-1.2346E+11");
    }

    #[test]
    fn test_tiny_values_use_scientific() {
        assert_eq!(format_value(0.00000005).unwrap(), "5.0000E-8");
        assert_eq!(format_value(0.0000001).unwrap(), "0.0000001");
    }

    #[test]
    fn test_non_finite_is_an_error() {
        assert!(matches!(
            format_value(f64::NAN),
            Err(FormatError::NonFinite { .. })
        ));
        assert!(format_value(f64::INFINITY).is_err());
        assert!(format_value(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_reformatting_fixed_output_is_stable() {
        for value in [1.0 / 3.0, 123.456, -98.765432109876, 0.125, 4096.0] {
            let once = format_value(value).unwrap();
            let reparsed: f64 = once.parse().unwrap();
            assert_eq!(format_value(reparsed).unwrap(), once);
        }
    }
}
