//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`display`]: the calculator display with the pending operation
//! - [`keypad`]: the button grid and its cursor
//! - [`status`]: status bar with mode indicators and keybindings
//!
//! Each pane module exports a primary `render_*` function that draws from a
//! borrowed [`Calculator`](crate::engine::Calculator) and holds no state.

pub mod display;
pub mod keypad;
pub mod status;

pub use display::render_display_pane;
pub use keypad::{render_keypad_pane, KeypadCursor};
pub use status::render_status_bar;
