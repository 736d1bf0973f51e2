//! Formatting utilities for terminal output

use colored::Colorize;

use crate::core::LetterStatus;
use crate::gacha::LetterInventory;

/// Format a feedback sequence as an emoji string
#[must_use]
pub fn statuses_to_emoji(statuses: &[LetterStatus]) -> String {
    statuses
        .iter()
        .map(|status| match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬜',
        })
        .collect()
}

/// Render a guessed word as colored tiles
#[must_use]
pub fn render_guess_row(guess: &str, statuses: &[LetterStatus]) -> String {
    guess
        .chars()
        .zip(statuses)
        .map(|(letter, status)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            match status {
                LetterStatus::Correct => tile.bold().white().on_green().to_string(),
                LetterStatus::Present => tile.bold().white().on_yellow().to_string(),
                LetterStatus::Absent => tile.bold().white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the A-Z keyboard with owned letters highlighted
///
/// Unowned letters are dimmed; only owned letters are usable in the
/// collection variant.
#[must_use]
pub fn render_keyboard(inventory: &LetterInventory) -> String {
    ('A'..='Z')
        .map(|letter| {
            if inventory.owns(letter) {
                letter.to_string().bold().bright_white().to_string()
            } else {
                letter.to_string().dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    #[test]
    fn statuses_to_emoji_mixed() {
        let emoji = statuses_to_emoji(&[Correct, Present, Absent]);
        assert_eq!(emoji, "🟩🟨⬜");
    }

    #[test]
    fn statuses_to_emoji_empty() {
        assert_eq!(statuses_to_emoji(&[]), "");
    }

    #[test]
    fn render_guess_row_uppercases_letters() {
        colored::control::set_override(false);
        let row = render_guess_row("crane", &[Correct; 5]);
        assert!(row.contains('C'));
        assert!(row.contains('E'));
        colored::control::unset_override();
    }

    #[test]
    fn render_keyboard_covers_alphabet() {
        colored::control::set_override(false);
        let mut inventory = LetterInventory::new();
        inventory.add(&['A']);
        let keyboard = render_keyboard(&inventory);
        assert_eq!(keyboard.split(' ').count(), 26);
        colored::control::unset_override();
    }
}
