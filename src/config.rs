//! Client configuration
//!
//! Plain values resolved from the command line before any connection is made.

use crate::core::{Word, WordError};
use std::path::PathBuf;
use thiserror::Error;

/// Port for unencrypted connections
pub const PLAIN_PORT: u16 = 27993;
/// Port for TLS connections
pub const TLS_PORT: u16 = 27994;
/// Opening guess when none is given
pub const DEFAULT_FIRST_WORD: &str = "stare";
/// Word list read when none is given
pub const DEFAULT_WORD_LIST: &str = "project1-words.txt";

/// Error type for unusable configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid first word {word:?}: {source}")]
    InvalidFirstWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("first word {word:?} has {actual} letters but the word list uses {expected}")]
    FirstWordLength {
        word: String,
        expected: usize,
        actual: usize,
    },
}

/// Default port for the chosen encryption mode
#[must_use]
pub const fn default_port(tls: bool) -> u16 {
    if tls { TLS_PORT } else { PLAIN_PORT }
}

/// Everything needed to play one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub hostname: String,
    pub port: u16,
    pub tls: bool,
    pub username: String,
    pub word_list: PathBuf,
    pub first_word: Word,
}

impl ClientConfig {
    /// Build a configuration; `port` falls back to the default for `tls`
    ///
    /// # Examples
    /// ```
    /// use wordle_client::config::{ClientConfig, TLS_PORT};
    ///
    /// let config = ClientConfig::new("example.org", "doe.j", true, None);
    /// assert_eq!(config.port, TLS_PORT);
    /// assert_eq!(config.first_word.text(), "stare");
    /// ```
    #[must_use]
    pub fn new(
        hostname: impl Into<String>,
        username: impl Into<String>,
        tls: bool,
        port: Option<u16>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            port: port.unwrap_or(default_port(tls)),
            tls,
            username: username.into(),
            word_list: PathBuf::from(DEFAULT_WORD_LIST),
            first_word: default_first_word(),
        }
    }

    #[must_use]
    pub fn with_word_list(mut self, path: impl Into<PathBuf>) -> Self {
        self.word_list = path.into();
        self
    }

    /// Replace the opening guess
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidFirstWord` if `text` is not a valid word.
    pub fn with_first_word(mut self, text: &str) -> Result<Self, ConfigError> {
        self.first_word = Word::new(text).map_err(|source| ConfigError::InvalidFirstWord {
            word: text.to_owned(),
            source,
        })?;
        Ok(self)
    }

    /// Check the opening guess against the loaded dictionary's word length
    ///
    /// # Errors
    /// Returns `ConfigError::FirstWordLength` on a mismatch.
    pub fn check_word_length(&self, expected: usize) -> Result<(), ConfigError> {
        if self.first_word.len() == expected {
            Ok(())
        } else {
            Err(ConfigError::FirstWordLength {
                word: self.first_word.text().to_owned(),
                expected,
                actual: self.first_word.len(),
            })
        }
    }
}

fn default_first_word() -> Word {
    Word::new(DEFAULT_FIRST_WORD).expect("default first word is a valid word")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ports_follow_encryption() {
        assert_eq!(ClientConfig::new("h", "u", false, None).port, 27993);
        assert_eq!(ClientConfig::new("h", "u", true, None).port, 27994);
    }

    #[test]
    fn explicit_port_overrides_default() {
        let config = ClientConfig::new("h", "u", true, Some(4000));
        assert_eq!(config.port, 4000);
        assert!(config.tls);
    }

    #[test]
    fn default_first_word_is_valid() {
        assert_eq!(default_first_word().text(), DEFAULT_FIRST_WORD);
    }

    #[test]
    fn first_word_override() {
        let config = ClientConfig::new("h", "u", false, None)
            .with_first_word("SALET")
            .unwrap();
        assert_eq!(config.first_word.text(), "salet");

        let err = ClientConfig::new("h", "u", false, None)
            .with_first_word("sa1et")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFirstWord { .. }));
    }

    #[test]
    fn first_word_length_must_match_dictionary() {
        let config = ClientConfig::new("h", "u", false, None);
        assert!(config.check_word_length(5).is_ok());
        assert_eq!(
            config.check_word_length(6),
            Err(ConfigError::FirstWordLength {
                word: "stare".into(),
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn word_list_override() {
        let config = ClientConfig::new("h", "u", false, None).with_word_list("words.txt");
        assert_eq!(config.word_list, PathBuf::from("words.txt"));
    }
}
