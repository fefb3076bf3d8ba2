//! Keyboard bindings
//!
//! Maps key presses to calculator [`Input`]s. The core bindings are fixed:
//!
//! | Key | Input |
//! |---|---|
//! | `0`-`9` | digit |
//! | `.` | decimal point |
//! | `+ - * /` | operator |
//! | Enter, `=` | equals |
//! | Backspace | backspace |
//! | Delete | clear entry |
//! | Escape | all clear |
//!
//! Letter shortcuts for scientific functions and modes are layered on top.

use crate::engine::{BinaryOp, Function, Input, ParseInputError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key event to an input, if it is bound
pub fn input_for_key(key: KeyEvent) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => input_for_char(c),
        KeyCode::Enter => Some(Input::Equals),
        KeyCode::Backspace => Some(Input::Backspace),
        KeyCode::Delete => Some(Input::ClearEntry),
        KeyCode::Esc => Some(Input::AllClear),
        _ => None,
    }
}

/// Map a typed character to an input
pub fn input_for_char(c: char) -> Option<Input> {
    let input = match c {
        '0'..='9' => Input::Digit(c),
        '.' => Input::DecimalPoint,
        '+' | '-' | '*' | '/' | '^' => Input::Operator(BinaryOp::from_symbol(c)?),
        '=' => Input::Equals,
        's' => Input::Function(Function::Sin),
        'c' => Input::Function(Function::Cos),
        't' => Input::Function(Function::Tan),
        'l' => Input::Function(Function::Ln),
        'g' => Input::Function(Function::Log),
        'r' => Input::Function(Function::Sqrt),
        '!' => Input::Function(Function::Factorial),
        'n' => Input::Function(Function::ToggleSign),
        'p' => Input::Function(Function::Pi),
        'S' => Input::ToggleShift,
        'A' => Input::ToggleAlpha,
        'd' => Input::ToggleAngleMode,
        _ => return None,
    };
    Some(input)
}

/// Turn a keystroke script such as `"2+3*4="` into inputs.
///
/// Whitespace is skipped; any other unbound character is an error.
pub fn inputs_for_script(script: &str) -> Result<Vec<Input>, ParseInputError> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| input_for_char(c).ok_or(ParseInputError::UnboundKey(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_core_bindings() {
        assert_eq!(input_for_key(key(KeyCode::Char('7'))), Some(Input::Digit('7')));
        assert_eq!(input_for_key(key(KeyCode::Char('.'))), Some(Input::DecimalPoint));
        assert_eq!(
            input_for_key(key(KeyCode::Char('-'))),
            Some(Input::Operator(BinaryOp::Subtract))
        );
        assert_eq!(
            input_for_key(key(KeyCode::Char('/'))),
            Some(Input::Operator(BinaryOp::Divide))
        );
        assert_eq!(input_for_key(key(KeyCode::Enter)), Some(Input::Equals));
        assert_eq!(input_for_key(key(KeyCode::Char('='))), Some(Input::Equals));
        assert_eq!(input_for_key(key(KeyCode::Backspace)), Some(Input::Backspace));
        assert_eq!(input_for_key(key(KeyCode::Delete)), Some(Input::ClearEntry));
        assert_eq!(input_for_key(key(KeyCode::Esc)), Some(Input::AllClear));
    }

    #[test]
    fn test_control_chords_unbound() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(input_for_key(ctrl_c), None);
        assert_eq!(input_for_key(key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_script() {
        let inputs = inputs_for_script("12 + 3 =").unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::Digit('1'),
                Input::Digit('2'),
                Input::Operator(BinaryOp::Add),
                Input::Digit('3'),
                Input::Equals,
            ]
        );
        assert_eq!(
            inputs_for_script("2 # 3"),
            Err(ParseInputError::UnboundKey('#'))
        );
    }
}
