//! Dictionary loading
//!
//! The dictionary is read once and treated as immutable afterwards; sessions
//! borrow from it.

pub mod loader;

pub use loader::{LoadError, load_from_file, words_from_slice};
