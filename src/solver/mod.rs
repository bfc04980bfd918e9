//! Candidate narrowing and guess selection
//!
//! Both halves are pure functions over borrowed dictionary words.

pub mod filter;
pub mod selector;

pub use filter::{Constraints, FilterError, filter_candidates};
pub use selector::{Exhausted, select_guess};
