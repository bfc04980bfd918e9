//! Core domain types for the word game
//!
//! Pure value types with no I/O: words and the feedback marks the server
//! assigns to them.

mod marks;
mod word;

pub use marks::{InvalidMark, Mark, Marks};
pub use word::{Word, WordError};
