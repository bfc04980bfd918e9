//! Per-letter feedback marks
//!
//! The server scores each position of a guess with one of three codes:
//! - 0 = Absent (letter not in the solution, modulo duplicate accounting)
//! - 1 = Present (letter in the solution, wrong position)
//! - 2 = Correct (letter in the correct position)
//!
//! On the wire a mark is the bare integer.

use super::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Mark {
    /// True for `Present` and `Correct`
    #[inline]
    #[must_use]
    pub const fn confirms_letter(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Error for integers outside the mark alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMark(pub u8);

impl fmt::Display for InvalidMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mark must be 0, 1 or 2, got {}", self.0)
    }
}

impl std::error::Error for InvalidMark {}

impl TryFrom<u8> for Mark {
    type Error = InvalidMark;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Absent),
            1 => Ok(Self::Present),
            2 => Ok(Self::Correct),
            other => Err(InvalidMark(other)),
        }
    }
}

impl From<Mark> for u8 {
    fn from(mark: Mark) -> Self {
        mark as Self
    }
}

/// An ordered feedback vector, one mark per letter of the guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marks(Vec<Mark>);

impl Marks {
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Correct).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Score `guess` against `answer` with the usual duplicate-letter rules
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present-but-misplaced letters from what remains
    ///
    /// # Examples
    /// ```
    /// use wordle_client::core::{Marks, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("spine").unwrap();
    /// let marks = Marks::score(&guess, &answer);
    /// assert_eq!(marks, "GGY--".parse::<Marks>().unwrap());
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "words must share a length");

        let mut result = vec![Mark::Absent; guess.len()];
        let mut available = answer.char_counts();

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Mark::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Mark::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl From<Vec<Mark>> for Marks {
    fn from(marks: Vec<Mark>) -> Self {
        Self(marks)
    }
}

impl std::str::FromStr for Marks {
    type Err = String;

    /// Parse "GY-GY", "gy_gy", "🟩🟨⬜🟩🟨" or the wire digits "21021"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' | '2' => Ok(Mark::Correct),
                'Y' | 'y' | '🟨' | '1' => Ok(Mark::Present),
                '-' | '_' | '⬜' | '0' => Ok(Mark::Absent),
                _ => Err(format!("Invalid marks string: {s}")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for Marks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &mark in &self.0 {
            write!(f, "{}", u8::from(mark))?;
        }
        Ok(())
    }
}
