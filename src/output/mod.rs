//! Terminal output formatting
//!
//! Operator-facing rendering of the final outcome.

pub mod display;

pub use display::print_outcome;
