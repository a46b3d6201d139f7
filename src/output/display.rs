//! Display functions for command results

use super::formatters::format_guess;
use crate::commands::{CheckResult, LinkResult};
use colored::Colorize;

/// Print the result of evaluating a single guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{}  {}",
        format_guess(&result.guess, &result.feedback),
        result.feedback.to_glyphs()
    );
    if result.feedback.is_perfect() {
        println!("{}", "✅ Correct!".green().bold());
    }
    println!();
}

/// Print a generated puzzle link
pub fn print_link_result(result: &LinkResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {} ({} letters)",
        result.answer.text().to_uppercase().bright_yellow().bold(),
        result.answer.len()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("Token: {}", result.token);
    println!("Link:  {}", result.link.bright_white().underline());
    println!();
}
