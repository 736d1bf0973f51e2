//! Command implementations

pub mod collect;
pub mod play;

pub use collect::run_collect;
pub use play::run_play;

use std::io::{self, Write};

/// Get user input with a prompt
pub(crate) fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
