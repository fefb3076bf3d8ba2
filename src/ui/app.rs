//! Main TUI application state and logic

use crate::engine::{Calculator, Input};
use crate::ui::keymap;
use crate::ui::panes::keypad::button_label;
use crate::ui::panes::KeypadCursor;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::info;

/// The main application state
pub struct App {
    /// The calculator instance
    pub calculator: Calculator,

    /// Keypad button under the cursor
    pub cursor: KeypadCursor,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app driving the given calculator
    pub fn new(calculator: Calculator) -> Self {
        App {
            calculator,
            cursor: KeypadCursor::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("calculator started");

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        info!(display = %self.calculator.display(), "calculator closed");
        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Display on top, keypad below, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_display_pane(frame, chunks[0], &self.calculator);

        super::panes::render_keypad_pane(
            frame,
            chunks[1],
            self.cursor,
            self.calculator.shift_active(),
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            &self.calculator,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Up => self.cursor = self.cursor.up(),
            KeyCode::Down => self.cursor = self.cursor.down(),
            KeyCode::Left => self.cursor = self.cursor.left(),
            KeyCode::Right => self.cursor = self.cursor.right(),
            KeyCode::Char(' ') => {
                let input = self.cursor.input();
                self.press(input);
            }
            _ => {
                if let Some(input) = keymap::input_for_key(key) {
                    self.press(input);
                }
            }
        }
    }

    /// Send one input to the calculator and report the outcome
    fn press(&mut self, input: Input) {
        // Label before dispatch: shift may be released by the input
        let label = button_label(input, self.calculator.shift_active());
        match self.calculator.dispatch(input) {
            Ok(()) => {
                self.status_message = format!("Pressed {}", label);
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }
}
