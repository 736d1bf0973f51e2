//! WordUp - CLI
//!
//! Wordle-style word games: classic guessing and a gacha letter-collection
//! variant.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use wordup::{
    answers::{AnswerTable, WordLength, loader},
    commands::{run_collect, run_play},
    core::Word,
    dictionary::{DictionaryClient, DictionaryConfig},
    gacha::RarityTable,
    game::{GameConfig, GameSession},
};

#[derive(Parser)]
#[command(
    name = "wordup",
    about = "Wordle-style word games with a gacha letter-collection variant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length: 5, 6, or 7
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Maximum number of guesses
    #[arg(short, long, global = true, default_value = "6")]
    max_guesses: usize,

    /// Path to a custom answer list (one word per line); replaces the
    /// embedded answers for the chosen length
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classic game: guess the secret word (default)
    Play,

    /// Collection variant: pull letters from the rarity deck, then guess
    Collect {
        /// Rarity deck to pull from
        #[arg(short, long, value_enum, default_value = "standard")]
        deck: Deck,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Deck {
    /// common/uncommon/rare/legendary at 50/40/8/2
    Standard,
    /// useless/uncommon/epic/legendary at 40/50/8/2
    Frequency,
}

/// Build the answer table, swapping in a custom wordlist for the active
/// length when one is given
fn load_answer_table(length: WordLength, wordlist: Option<&str>) -> Result<AnswerTable> {
    let table = AnswerTable::embedded();

    let Some(path) = wordlist else {
        return Ok(table);
    };

    let words: Vec<Word> = loader::load_from_file(path)?
        .into_iter()
        .filter(|w| w.len() == length.as_usize())
        .collect();
    Ok(table.with_replaced(length, words)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let length = WordLength::try_from(cli.length)?;
    let table = load_answer_table(length, cli.wordlist.as_deref())?;
    let validator = DictionaryClient::new(DictionaryConfig::default())?;

    let mut config = GameConfig::new(length);
    config.max_guesses = cli.max_guesses;

    let mut rng = rand::rng();
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let session = GameSession::new(config, &table, &mut rng);
            run_play(session, &validator)
                .await
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Collect { deck } => {
            config.collection = true;
            let rarity = match deck {
                Deck::Standard => RarityTable::standard(),
                Deck::Frequency => RarityTable::frequency(),
            };
            let session = GameSession::new(config, &table, &mut rng);
            run_collect(session, &rarity, &mut rng, &validator)
                .await
                .map_err(|e| anyhow::anyhow!(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_decks_parse() {
        for deck in ["standard", "frequency"] {
            assert!(Cli::try_parse_from(["wordup", "collect", "--deck", deck]).is_ok());
        }
    }

    #[test]
    fn unknown_deck_is_rejected() {
        assert!(Cli::try_parse_from(["wordup", "collect", "--deck", "frequancy"]).is_err());
    }

    #[test]
    fn custom_wordlist_replaces_active_length() {
        let path = std::env::temp_dir().join(format!("wordup-answers-{}.txt", std::process::id()));
        std::fs::write(&path, "crane\nslate\n").unwrap();

        let table = load_answer_table(WordLength::Five, path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(table.words(WordLength::Five).len(), 2);
        let mut rng = rand::rng();
        let answer = table.random_answer(WordLength::Five, &mut rng);
        assert!(answer.text() == "crane" || answer.text() == "slate");
    }

    #[test]
    fn wordlist_without_words_of_active_length_is_an_error() {
        let path = std::env::temp_dir().join(format!("wordup-sixes-{}.txt", std::process::id()));
        std::fs::write(&path, "planet\n").unwrap();

        let result = load_answer_table(WordLength::Five, path.to_str());
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}
