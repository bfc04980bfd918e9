//! Display functions for session results

use crate::protocol::Outcome;
use colored::Colorize;

/// Print how the game ended
///
/// Success goes to stdout with the flag; failure goes to stderr with the
/// reason.
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Solved { flag, rounds } => {
            println!("\n{}", "─".repeat(60).cyan());
            println!(
                "{}",
                format!("✅ Solved in {rounds} guesses!").green().bold()
            );
            println!("Flag: {}", flag.bright_yellow().bold());
            println!("{}", "─".repeat(60).cyan());
        }
        Outcome::Failed(err) => {
            eprintln!("\n{}", "─".repeat(60).red());
            eprintln!("{}", "❌ Game failed".red().bold());
            eprintln!("   {err}");
            eprintln!("{}", "─".repeat(60).red());
        }
    }
}
