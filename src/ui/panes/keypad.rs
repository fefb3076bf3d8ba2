//! On-screen keypad rendering
//!
//! The keypad is a fixed grid of buttons, each bound to one engine [`Input`].
//! A cursor (moved with the arrow keys) marks the button that Space activates.

use crate::engine::{BinaryOp, Function, Input, MemoryOp};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const KEYPAD_ROWS: usize = 9;
pub const KEYPAD_COLUMNS: usize = 5;

/// Button grid, top row first
pub const KEYPAD: [[Input; KEYPAD_COLUMNS]; KEYPAD_ROWS] = [
    [
        Input::ToggleShift,
        Input::ToggleAlpha,
        Input::ToggleAngleMode,
        Input::Memory(MemoryOp::Clear),
        Input::Memory(MemoryOp::Recall),
    ],
    [
        Input::Memory(MemoryOp::Add),
        Input::Memory(MemoryOp::Subtract),
        Input::RecallAns,
        Input::Function(Function::Pi),
        Input::Function(Function::E),
    ],
    [
        Input::Function(Function::Sin),
        Input::Function(Function::Cos),
        Input::Function(Function::Tan),
        Input::Function(Function::SinSquared),
        Input::Function(Function::Factorial),
    ],
    [
        Input::Function(Function::Ln),
        Input::Function(Function::Log),
        Input::Function(Function::Exp),
        Input::Function(Function::TenPow),
        Input::Function(Function::Abs),
    ],
    [
        Input::Function(Function::Sqrt),
        Input::Function(Function::Square),
        Input::Function(Function::Cube),
        Input::Function(Function::Reciprocal),
        Input::Operator(BinaryOp::Power),
    ],
    [
        Input::Digit('7'),
        Input::Digit('8'),
        Input::Digit('9'),
        Input::Backspace,
        Input::AllClear,
    ],
    [
        Input::Digit('4'),
        Input::Digit('5'),
        Input::Digit('6'),
        Input::Operator(BinaryOp::Multiply),
        Input::Operator(BinaryOp::Divide),
    ],
    [
        Input::Digit('1'),
        Input::Digit('2'),
        Input::Digit('3'),
        Input::Operator(BinaryOp::Add),
        Input::Operator(BinaryOp::Subtract),
    ],
    [
        Input::Digit('0'),
        Input::DecimalPoint,
        Input::Function(Function::ToggleSign),
        Input::ClearEntry,
        Input::Equals,
    ],
];

/// Cursor position on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeypadCursor {
    pub row: usize,
    pub column: usize,
}

impl KeypadCursor {
    pub fn up(self) -> Self {
        KeypadCursor {
            row: (self.row + KEYPAD_ROWS - 1) % KEYPAD_ROWS,
            ..self
        }
    }

    pub fn down(self) -> Self {
        KeypadCursor {
            row: (self.row + 1) % KEYPAD_ROWS,
            ..self
        }
    }

    pub fn left(self) -> Self {
        KeypadCursor {
            column: (self.column + KEYPAD_COLUMNS - 1) % KEYPAD_COLUMNS,
            ..self
        }
    }

    pub fn right(self) -> Self {
        KeypadCursor {
            column: (self.column + 1) % KEYPAD_COLUMNS,
            ..self
        }
    }

    pub fn input(self) -> Input {
        KEYPAD[self.row][self.column]
    }
}

/// Text printed on a button
pub fn button_label(input: Input, shift: bool) -> String {
    match input {
        Input::Digit(c) => c.to_string(),
        Input::DecimalPoint => ".".to_string(),
        Input::Operator(BinaryOp::Power) => "xʸ".to_string(),
        Input::Operator(op) => op.symbol().to_string(),
        Input::Equals => "=".to_string(),
        Input::ClearEntry => "CE".to_string(),
        Input::AllClear => "AC".to_string(),
        Input::Backspace => "DEL".to_string(),
        Input::Function(function) => function.label(shift).to_string(),
        Input::Memory(op) => op.label().to_string(),
        Input::ToggleShift => "SHIFT".to_string(),
        Input::ToggleAlpha => "ALPHA".to_string(),
        Input::ToggleAngleMode => "DRG".to_string(),
        Input::RecallAns => "Ans".to_string(),
    }
}

fn button_color(input: Input) -> Color {
    match input {
        Input::Digit(_) | Input::DecimalPoint => DEFAULT_THEME.digit,
        Input::Operator(_) | Input::Equals => DEFAULT_THEME.operator,
        Input::Function(_) | Input::RecallAns => DEFAULT_THEME.function,
        Input::ClearEntry | Input::AllClear | Input::Backspace => DEFAULT_THEME.control,
        Input::Memory(_) => DEFAULT_THEME.primary,
        Input::ToggleShift | Input::ToggleAlpha | Input::ToggleAngleMode => {
            DEFAULT_THEME.secondary
        }
    }
}

fn button_style(input: Input, selected: bool) -> Style {
    let style = Style::default()
        .fg(button_color(input))
        .bg(DEFAULT_THEME.bg);
    if selected {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}

/// Render the keypad grid
pub fn render_keypad_pane(frame: &mut Frame, area: Rect, cursor: KeypadCursor, shift: bool) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, KEYPAD_ROWS as u32); KEYPAD_ROWS])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, KEYPAD_COLUMNS as u32); KEYPAD_COLUMNS])
            .split(*row_area);

        for (column_index, cell) in cells.iter().enumerate() {
            let input = KEYPAD[row_index][column_index];
            let selected = cursor.row == row_index && cursor.column == column_index;

            let border_style = if selected {
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.border_normal)
            };

            let button = Paragraph::new(button_label(input, shift))
                .style(button_style(input, selected))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            frame.render_widget(button, *cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_function_has_a_button() {
        for function in Function::ALL {
            assert!(
                KEYPAD
                    .iter()
                    .flatten()
                    .any(|input| *input == Input::Function(function)),
                "missing button for {}",
                function.name()
            );
        }
    }

    #[test]
    fn test_cursor_wraps() {
        let cursor = KeypadCursor::default();
        assert_eq!(cursor.up().row, KEYPAD_ROWS - 1);
        assert_eq!(cursor.left().column, KEYPAD_COLUMNS - 1);
        assert_eq!(cursor.down().down().row, 2);
        assert_eq!(cursor.input(), Input::ToggleShift);
    }

    #[test]
    fn test_buttons_share_the_keypad_background() {
        let digit = button_style(Input::Digit('1'), false);
        assert_eq!(digit.bg, Some(DEFAULT_THEME.bg));
        assert_eq!(digit.fg, Some(DEFAULT_THEME.digit));

        let selected = button_style(Input::Equals, true);
        assert_eq!(selected.bg, Some(DEFAULT_THEME.bg));
        assert!(selected.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_shift_relabels_trig_keys() {
        let sin = Input::Function(Function::Sin);
        assert_eq!(button_label(sin, false), "sin");
        assert_eq!(button_label(sin, true), "sin⁻¹");
        assert_eq!(button_label(Input::Digit('4'), true), "4");
    }
}
