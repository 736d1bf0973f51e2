//! End-of-game banners

use colored::Colorize;

use crate::game::GameSession;
use crate::output::formatters::statuses_to_emoji;

/// Celebrate a win, with the share-style emoji history
pub fn print_win(session: &GameSession) {
    let turns = session.history().len();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉  Y O U   W O N !  🎉    ".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let performance = match turns {
        1 => "🏆 Incredible hole-in-one!",
        2 => "⭐ Outstanding!",
        3 => "💫 Great game!",
        4 => "✨ Nice work!",
        _ => "👍 Got there!",
    };
    println!("\n  {}", performance.bright_yellow().bold());
    println!(
        "  Solved in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    print_history(session);
    print_pull_cost(session);
    println!("\n{}\n", "═".repeat(60).bright_cyan());
}

/// Commiserate a loss and reveal the answer
pub fn print_game_over(session: &GameSession) {
    println!("\n{}", "═".repeat(60).bright_red());
    println!(
        "  Game over! The word was {}",
        session.answer().text().to_uppercase().bright_white().bold()
    );
    println!("{}", "═".repeat(60).bright_red());

    print_history(session);
    print_pull_cost(session);
    println!();
}

fn print_history(session: &GameSession) {
    if session.history().is_empty() {
        return;
    }
    println!("\n  Guess history:");
    for (i, entry) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            entry.guess.text().to_uppercase().bright_white().bold(),
            statuses_to_emoji(&entry.statuses)
        );
    }
}

/// Cosmetic cost line for the collection variant
fn print_pull_cost(session: &GameSession) {
    if let Some(inventory) = session.inventory() {
        println!(
            "\n  Letters pulled this game: {} ({} owned)",
            inventory.pulls_spent().to_string().bright_magenta(),
            inventory.len()
        );
    }
}
