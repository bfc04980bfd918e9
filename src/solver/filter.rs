//! Candidate filtering
//!
//! Narrows the candidate set to the words consistent with one round of
//! feedback. Repeated letters are handled per distinct letter: an `Absent`
//! mark on a letter that scored `Present`/`Correct` elsewhere in the same guess
//! caps the count at the confirmed number instead of banning the letter.

use crate::core::{Mark, Marks, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Error type for feedback that cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("feedback has {actual} marks for a {expected}-letter guess")]
    MalformedFeedback { expected: usize, actual: usize },
}

/// What one round of feedback says about a single distinct letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LetterConstraint {
    /// Positions holding this letter that scored `Present` or `Correct`
    required: usize,
    /// Some position holding this letter scored `Absent`
    capped: bool,
}

/// Compiled constraints for one (guess, marks) pair
#[derive(Debug)]
pub struct Constraints<'g> {
    guess: &'g Word,
    marks: &'g [Mark],
    letters: FxHashMap<u8, LetterConstraint>,
}

impl<'g> Constraints<'g> {
    /// Compile the constraints implied by `marks` for `guess`
    ///
    /// # Errors
    /// Returns `FilterError::MalformedFeedback` if the marks and the guess
    /// differ in length.
    pub fn new(guess: &'g Word, marks: &'g Marks) -> Result<Self, FilterError> {
        if marks.len() != guess.len() {
            return Err(FilterError::MalformedFeedback {
                expected: guess.len(),
                actual: marks.len(),
            });
        }

        let mut letters: FxHashMap<u8, LetterConstraint> = FxHashMap::default();
        for (&letter, &mark) in guess.chars().iter().zip(marks.as_slice()) {
            let entry = letters.entry(letter).or_default();
            if mark.confirms_letter() {
                entry.required += 1;
            } else {
                entry.capped = true;
            }
        }

        Ok(Self {
            guess,
            marks: marks.as_slice(),
            letters,
        })
    }

    /// Check whether `candidate` could still be the solution
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        if candidate.len() != self.guess.len() {
            return false;
        }

        let positional = self
            .guess
            .chars()
            .iter()
            .zip(candidate.chars())
            .zip(self.marks)
            .all(|((&g, &c), mark)| match mark {
                Mark::Correct => c == g,
                Mark::Present => c != g && candidate.has_letter(g),
                Mark::Absent => true,
            });

        positional
            && self
                .letters
                .iter()
                .filter(|(_, constraint)| constraint.capped)
                .all(|(&letter, constraint)| candidate.count_of(letter) == constraint.required)
    }
}

/// Keep the candidates consistent with `marks` for `guess`, preserving order
///
/// The result is never larger than `candidates`.
///
/// # Errors
/// Returns `FilterError::MalformedFeedback` if `marks.len() != guess.len()`.
///
/// # Examples
/// ```
/// use wordle_client::core::{Marks, Word};
/// use wordle_client::solver::filter_candidates;
///
/// let words: Vec<Word> = ["crane", "slate", "stare", "trace"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
/// let guess = Word::new("stare").unwrap();
/// let marks: Marks = "--GYG".parse().unwrap();
///
/// let remaining = filter_candidates(&candidates, &guess, &marks).unwrap();
/// assert_eq!(remaining, vec![&words[0]]);
/// ```
pub fn filter_candidates<'a>(
    candidates: &[&'a Word],
    guess: &Word,
    marks: &Marks,
) -> Result<Vec<&'a Word>, FilterError> {
    let constraints = Constraints::new(guess, marks)?;

    Ok(candidates
        .par_iter()
        .copied()
        .filter(|candidate| constraints.admits(candidate))
        .collect())
}
