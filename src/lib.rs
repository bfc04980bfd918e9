//! Wordle Client
//!
//! Plays a word-guessing game against a remote server over newline-delimited
//! JSON, narrowing a dictionary from per-letter feedback until the server
//! accepts a guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_client::core::{Marks, Word};
//! use wordle_client::solver::{filter_candidates, select_guess};
//!
//! let dictionary: Vec<Word> = ["crane", "slate", "stare", "trace"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let candidates: Vec<&Word> = dictionary.iter().collect();
//!
//! let guess = Word::new("stare").unwrap();
//! let marks: Marks = "--GYG".parse().unwrap();
//! let remaining = filter_candidates(&candidates, &guess, &marks).unwrap();
//! assert_eq!(select_guess(&remaining).unwrap().text(), "crane");
//! ```

// Core domain types
pub mod core;

// Candidate filter and guess selector
pub mod solver;

// Wire messages and the session state machine
pub mod protocol;

// Plain / TLS line transport
pub mod transport;

// Control loop
pub mod client;

pub mod config;
pub mod error;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;

pub use error::SessionError;
