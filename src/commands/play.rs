//! Classic guessing game
//!
//! Text-based interactive loop: guess the secret word within the allowed
//! number of tries.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::dictionary::Validator;
use crate::game::{GameSession, GameStatus, GuessError};
use crate::output::{print_game_over, print_win, render_guess_row};

use super::get_user_input;

/// Run the classic game loop until the session ends or the player quits
///
/// # Errors
/// Returns an error on I/O failure reading player input.
pub async fn run_play(
    mut session: GameSession,
    validator: &dyn Validator,
) -> Result<(), String> {
    let length = session.config().length;

    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║                         WordUp                           ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {length}-letter word. You have {} tries.",
        session.config().max_guesses
    );
    println!("Commands: 'quit' to exit\n");

    while session.status() == GameStatus::Playing {
        let prompt = format!(
            "Guess {}/{}",
            session.history().len() + 1,
            session.config().max_guesses
        );
        let input = get_user_input(&prompt)?.to_lowercase();

        if matches!(input.as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        match submit_with_spinner(&mut session, &input, validator).await {
            Ok(()) => {}
            Err(err @ GuessError::ScoringMismatch { .. }) => {
                println!("{}\n", err.to_string().bright_red());
                break;
            }
            Err(err) => println!("{}\n", err.to_string().bright_red()),
        }
    }

    match session.status() {
        GameStatus::Won => print_win(&session),
        GameStatus::Lost => print_game_over(&session),
        GameStatus::Playing => {}
    }

    Ok(())
}

/// Submit a guess, showing a spinner while the dictionary lookup is pending
///
/// Further submissions are impossible while this awaits: the session is
/// mutably borrowed for the whole call.
pub(crate) async fn submit_with_spinner(
    session: &mut GameSession,
    input: &str,
    validator: &dyn Validator,
) -> Result<(), GuessError> {
    let spinner = checking_spinner();
    let result = session.submit_guess(input, validator).await;
    spinner.finish_and_clear();

    let feedback = result?;
    println!("  {}\n", render_guess_row(feedback.guess.text(), &feedback.statuses));
    Ok(())
}

fn checking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static template is valid"),
    );
    spinner.set_message("Checking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
