//! Scientific (single-operand) function evaluation
//!
//! Each [`Function`] maps the current display value to a new value. The
//! trigonometric functions honour the [`AngleMode`] and switch to their inverse
//! when shift is latched; every other function ignores shift.

use crate::engine::errors::{CalcError, ParseInputError};
use crate::engine::state::AngleMode;
use std::f64::consts;
use std::str::FromStr;

/// Largest argument whose factorial is finite in an `f64`
pub const MAX_FACTORIAL: f64 = 170.0;

/// Scientific function keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
    Sqrt,
    Square,
    Cube,
    Reciprocal,
    Exp,
    Pi,
    E,
    Abs,
    Factorial,
    SinSquared,
    TenPow,
    ToggleSign,
}

impl Function {
    pub const ALL: [Function; 17] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Ln,
        Function::Log,
        Function::Sqrt,
        Function::Square,
        Function::Cube,
        Function::Reciprocal,
        Function::Exp,
        Function::Pi,
        Function::E,
        Function::Abs,
        Function::Factorial,
        Function::SinSquared,
        Function::TenPow,
        Function::ToggleSign,
    ];

    /// Name accepted by [`Function::from_str`]
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Ln => "ln",
            Function::Log => "log",
            Function::Sqrt => "sqrt",
            Function::Square => "x2",
            Function::Cube => "x3",
            Function::Reciprocal => "1/x",
            Function::Exp => "exp",
            Function::Pi => "pi",
            Function::E => "e",
            Function::Abs => "abs",
            Function::Factorial => "fact",
            Function::SinSquared => "sin2",
            Function::TenPow => "10x",
            Function::ToggleSign => "toggleSign",
        }
    }

    /// Keypad label, which changes for the trig keys while shift is latched
    pub fn label(self, shift: bool) -> &'static str {
        match self {
            Function::Sin if shift => "sin⁻¹",
            Function::Cos if shift => "cos⁻¹",
            Function::Tan if shift => "tan⁻¹",
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Ln => "ln",
            Function::Log => "log",
            Function::Sqrt => "√",
            Function::Square => "x²",
            Function::Cube => "x³",
            Function::Reciprocal => "1/x",
            Function::Exp => "eˣ",
            Function::Pi => "π",
            Function::E => "e",
            Function::Abs => "|x|",
            Function::Factorial => "n!",
            Function::SinSquared => "sin²",
            Function::TenPow => "10ˣ",
            Function::ToggleSign => "±",
        }
    }

    /// Whether shift selects an inverse variant of this function
    pub fn has_inverse(self) -> bool {
        matches!(self, Function::Sin | Function::Cos | Function::Tan)
    }

    /// Apply the function to `x`.
    ///
    /// `inverse` selects asin/acos/atan for the trig keys and is ignored
    /// otherwise. Results that overflow are returned as-is and rejected by
    /// the display formatter.
    pub fn apply(self, x: f64, angle_mode: AngleMode, inverse: bool) -> Result<f64, CalcError> {
        let value = match self {
            Function::Sin if inverse => angle_mode.radians_to_unit(x.asin()),
            Function::Cos if inverse => angle_mode.radians_to_unit(x.acos()),
            Function::Tan if inverse => angle_mode.radians_to_unit(x.atan()),
            Function::Sin => angle_mode.to_radians(x).sin(),
            Function::Cos => angle_mode.to_radians(x).cos(),
            Function::Tan => angle_mode.to_radians(x).tan(),
            Function::Ln => {
                self.require(x > 0.0, x)?;
                x.ln()
            }
            Function::Log => {
                self.require(x > 0.0, x)?;
                x.log10()
            }
            Function::Sqrt => {
                self.require(x >= 0.0, x)?;
                x.sqrt()
            }
            Function::Square => x * x,
            Function::Cube => x * x * x,
            Function::Reciprocal => {
                if x == 0.0 {
                    return Err(CalcError::DivisionByZero { dividend: 1.0 });
                }
                1.0 / x
            }
            Function::Exp => x.exp(),
            Function::Pi => consts::PI,
            Function::E => consts::E,
            Function::Abs => x.abs(),
            Function::Factorial => factorial(x)?,
            Function::SinSquared => angle_mode.to_radians(x).sin().powi(2),
            Function::TenPow => 10f64.powf(x),
            Function::ToggleSign => -x,
        };
        Ok(value)
    }

    fn require(self, in_domain: bool, value: f64) -> Result<(), CalcError> {
        if in_domain {
            Ok(())
        } else {
            Err(CalcError::DomainError {
                function: self,
                value,
            })
        }
    }
}

impl FromStr for Function {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| ParseInputError::UnknownFunction(s.to_string()))
    }
}

/// n! by repeated multiplication, for non-negative integers up to 170
fn factorial(x: f64) -> Result<f64, CalcError> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(CalcError::DomainError {
            function: Function::Factorial,
            value: x,
        });
    }
    if x > MAX_FACTORIAL {
        return Err(CalcError::OverflowOrInvalid {
            operation: format!("{}!", x),
        });
    }

    let n = x as u32;
    Ok((2..=n).fold(1.0, |acc, i| acc * i as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_names_round_trip() {
        for f in Function::ALL {
            assert_eq!(f.name().parse::<Function>(), Ok(f));
        }
        assert!(matches!(
            "cosh".parse::<Function>(),
            Err(ParseInputError::UnknownFunction(ref s)) if s == "cosh"
        ));
    }

    #[test]
    fn test_trig_in_degrees() {
        let deg = AngleMode::Degrees;
        assert!(close(Function::Sin.apply(30.0, deg, false).unwrap(), 0.5));
        assert!(close(Function::Cos.apply(60.0, deg, false).unwrap(), 0.5));
        assert!(close(Function::Tan.apply(45.0, deg, false).unwrap(), 1.0));
        assert!(close(Function::Sin.apply(0.5, deg, true).unwrap(), 30.0));
        assert!(close(Function::Tan.apply(1.0, deg, true).unwrap(), 45.0));
    }

    #[test]
    fn test_trig_in_radians() {
        let rad = AngleMode::Radians;
        assert!(close(
            Function::Sin.apply(consts::FRAC_PI_2, rad, false).unwrap(),
            1.0
        ));
        assert!(close(
            Function::Cos.apply(1.0, rad, true).unwrap(),
            0.0
        ));
    }

    #[test]
    fn test_shift_ignored_without_inverse() {
        let deg = AngleMode::Degrees;
        assert_eq!(Function::Square.apply(3.0, deg, true), Ok(9.0));
        assert!(!Function::Log.has_inverse());
        assert!(Function::Cos.has_inverse());
    }

    #[test]
    fn test_domain_errors() {
        let deg = AngleMode::Degrees;
        assert!(matches!(
            Function::Sqrt.apply(-1.0, deg, false),
            Err(CalcError::DomainError {
                function: Function::Sqrt,
                ..
            })
        ));
        assert!(Function::Ln.apply(0.0, deg, false).is_err());
        assert!(Function::Log.apply(-5.0, deg, false).is_err());
        assert!(matches!(
            Function::Reciprocal.apply(0.0, deg, false),
            Err(CalcError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(5.0), Ok(120.0));
        assert!(factorial(170.0).unwrap().is_finite());
        assert!(matches!(
            factorial(171.0),
            Err(CalcError::OverflowOrInvalid { .. })
        ));
        assert!(matches!(
            factorial(2.5),
            Err(CalcError::DomainError { .. })
        ));
        assert!(factorial(-1.0).is_err());
    }

    #[test]
    fn test_constants_ignore_input() {
        let deg = AngleMode::Degrees;
        assert_eq!(Function::Pi.apply(42.0, deg, false), Ok(consts::PI));
        assert_eq!(Function::E.apply(-1.0, deg, false), Ok(consts::E));
    }

    #[test]
    fn test_powers_and_sign() {
        let deg = AngleMode::Degrees;
        assert_eq!(Function::Cube.apply(-2.0, deg, false), Ok(-8.0));
        assert_eq!(Function::TenPow.apply(3.0, deg, false), Ok(1000.0));
        assert_eq!(Function::ToggleSign.apply(7.5, deg, false), Ok(-7.5));
        assert_eq!(Function::Abs.apply(-7.5, deg, false), Ok(7.5));
        assert!(close(
            Function::SinSquared.apply(30.0, deg, false).unwrap(),
            0.25
        ));
    }
}
