//! Terminal output formatting
//!
//! Display utilities for guess feedback, the letter keyboard, and end-of-game
//! banners.

pub mod display;
pub mod formatters;

pub use display::{print_game_over, print_win};
pub use formatters::{render_guess_row, render_keyboard, statuses_to_emoji};
