//! Guess selection
//!
//! The policy is deliberately plain: the first remaining candidate in
//! dictionary order.

use crate::core::Word;
use thiserror::Error;

/// Error type for an empty candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no candidate words remain")]
pub struct Exhausted;

/// Pick the next guess from the candidate set
///
/// # Errors
/// Returns `Exhausted` if `candidates` is empty: the dictionary lacks the
/// solution, or the server scores differently from the filter.
///
/// # Examples
/// ```
/// use wordle_client::core::Word;
/// use wordle_client::solver::select_guess;
///
/// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
/// let candidates: Vec<&Word> = words.iter().collect();
/// assert_eq!(select_guess(&candidates).unwrap().text(), "crane");
/// ```
pub fn select_guess<'a>(candidates: &[&'a Word]) -> Result<&'a Word, Exhausted> {
    candidates.first().copied().ok_or(Exhausted)
}
