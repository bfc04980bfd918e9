//! Word list loading utilities
//!
//! Reads the dictionary once at startup. The result is immutable and shared by
//! reference with the session.

use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for unusable word lists
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no usable words in {}", .0.display())]
    Empty(PathBuf),
}

/// Load words from a file, one per line
///
/// Blank lines are skipped, as are invalid words and words whose length
/// differs from the first valid word. Both `\n` and `\r\n` endings work.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Empty`
/// if it holds no usable word.
///
/// # Examples
/// ```no_run
/// use wordle_client::wordlists::load_from_file;
///
/// let words = load_from_file("project1-words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(content.lines());
    if words.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert a string slice to a Word vector, with the same rules as files
///
/// # Examples
/// ```
/// use wordle_client::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "toolong"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut words: Vec<Word> = Vec::new();

    for (number, line) in lines.enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Word::new(trimmed) {
            Ok(word) => match words.first() {
                Some(first) if first.len() != word.len() => {
                    warn!(
                        "skipping {:?} on line {}: expected {} letters",
                        word.text(),
                        number + 1,
                        first.len()
                    );
                }
                _ => words.push(word),
            },
            Err(err) => warn!("skipping {trimmed:?} on line {}: {err}", number + 1),
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn word_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("words.txt");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid_and_other_lengths() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let words = words_from_slice(&[]);
        assert!(words.is_empty());
    }

    #[test]
    fn load_handles_crlf_and_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = word_file(&dir, "stare\r\ncrane\r\n\r\nslate\r\n");
        let words = load_from_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["stare", "crane", "slate"]);
    }

    #[test]
    fn load_empty_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = word_file(&dir, "\n\n");
        let result = load_from_file(&path);

        assert!(matches!(result, Err(LoadError::Empty(ref p)) if *p == path));
    }

    #[test]
    fn load_skips_mixed_lengths_in_file() {
        let dir = TempDir::new().unwrap();
        let path = word_file(&dir, "crane\nsalsas\nCLOUD\nbad!!\n");
        let words = load_from_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "cloud"]);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = load_from_file(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
