//! Letter-collection game variant
//!
//! Guesses may only use letters pulled from the rarity deck. The first pull
//! of a session is the vowel-guaranteed ten-pull; after that, letters come
//! one at a time.

use colored::Colorize;
use rand::Rng;
use tokio::time::{Duration, sleep};

use crate::dictionary::Validator;
use crate::gacha::RarityTable;
use crate::game::{GameSession, GameStatus, GuessError};
use crate::output::{print_game_over, print_win, render_keyboard};

use super::get_user_input;
use super::play::submit_with_spinner;

/// Pacing delay before each letter reveal (cosmetic, no cancellation)
const REVEAL_DELAY: Duration = Duration::from_millis(300);

/// Run the collection-variant game loop
///
/// # Errors
/// Returns an error on I/O failure reading player input.
pub async fn run_collect<R: Rng>(
    mut session: GameSession,
    table: &RarityTable,
    rng: &mut R,
    validator: &dyn Validator,
) -> Result<(), String> {
    let length = session.config().length;

    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║                    WordUp: Gacha Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");
    println!("Pull letters from the deck, then guess the {length}-letter word.");
    println!("You can only guess with letters you own!");
    println!("Commands: 'pull' for a letter, a word to guess, 'quit' to exit\n");

    while session.status() == GameStatus::Playing {
        if let Some(inventory) = session.inventory() {
            println!("  {}\n", render_keyboard(inventory));
        }

        let prompt = if session.beginner_pull_available() {
            "Your first 'pull' is a 10-pull with a guaranteed vowel".to_string()
        } else {
            format!(
                "Guess {}/{} (or 'pull')",
                session.history().len() + 1,
                session.config().max_guesses
            )
        };
        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "pull" | "p" => {
                if let Some(letters) = session.pull_letters(table, &mut *rng, 1) {
                    reveal_pulls(&letters).await;
                }
            }
            "" => {}
            word => match submit_with_spinner(&mut session, word, validator).await {
                Ok(()) => {}
                Err(err @ GuessError::ScoringMismatch { .. }) => {
                    println!("{}\n", err.to_string().bright_red());
                    break;
                }
                Err(err) => println!("{}\n", err.to_string().bright_red()),
            },
        }
    }

    match session.status() {
        GameStatus::Won => print_win(&session),
        GameStatus::Lost => print_game_over(&session),
        GameStatus::Playing => {}
    }

    Ok(())
}

/// Reveal pulled letters one by one with a fixed pacing delay
async fn reveal_pulls(letters: &[char]) {
    use std::io::Write;

    print!("  ");
    for &letter in letters {
        sleep(REVEAL_DELAY).await;
        print!("{} ", sparkle(letter));
        let _ = std::io::stdout().flush();
    }
    println!("\n");
}

fn sparkle(letter: char) -> String {
    if crate::gacha::VOWELS.contains(&letter) {
        format!("✨{letter}✨").bright_yellow().bold().to_string()
    } else {
        letter.to_string().bright_white().bold().to_string()
    }
}
