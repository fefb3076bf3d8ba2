//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, keypad cursor
//! - **[`keymap`]**: translation of key presses into engine inputs
//! - **[`panes`]**: stateless render functions for the display, keypad and status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Calculator`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Calculator`]: crate::engine::Calculator
//! [`App::run`]: app::App::run

pub mod app;
pub mod keymap;
pub mod panes;
pub mod theme;

pub use app::App;
