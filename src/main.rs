//! Wordle Client - CLI
//!
//! Connects to a game server, plays one game and prints the flag or the
//! reason the game failed.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use wordle_client::{
    client::play,
    config::{ClientConfig, ConfigError, DEFAULT_FIRST_WORD, DEFAULT_WORD_LIST},
    output::print_outcome,
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_client",
    about = "Plays the word-guessing game against a remote server",
    version,
    author
)]
struct Cli {
    /// Use TLS (default port becomes 27994)
    #[arg(short = 's', long = "secure")]
    secure: bool,

    /// Server port (default 27993, or 27994 with -s)
    #[arg(short, long)]
    port: Option<u16>,

    /// Word list, one word per line
    #[arg(short = 'w', long = "words", default_value = DEFAULT_WORD_LIST)]
    words: PathBuf,

    /// Opening guess
    #[arg(short = 'f', long = "first-word", default_value = DEFAULT_FIRST_WORD)]
    first_word: String,

    /// Server hostname
    hostname: String,

    /// Username sent in the greeting
    username: String,
}

impl Cli {
    fn into_config(self) -> Result<ClientConfig, ConfigError> {
        ClientConfig::new(self.hostname, self.username, self.secure, self.port)
            .with_word_list(self.words)
            .with_first_word(&self.first_word)
    }
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config()?;

    let dictionary = load_from_file(&config.word_list)
        .with_context(|| format!("cannot load word list {}", config.word_list.display()))?;
    // Non-empty: `load_from_file` rejects word lists without a usable word
    config.check_word_length(dictionary[0].len())?;

    let outcome = play(&config, &dictionary);
    print_outcome(&outcome);

    Ok(if outcome.is_solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
