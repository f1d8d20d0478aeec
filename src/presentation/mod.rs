//! Presentation layer handling terminal UI and user input.
//!
//! This module builds a plain view model from application state,
//! renders it with ratatui, and handles keyboard input.

pub mod view;
pub mod ui;
pub mod input;

pub use view::*;
pub use ui::*;
pub use input::*;
