//! Simple line-based play mode
//!
//! Text-based session without the TUI. Every line is typed into the board one
//! letter at a time and then submitted, so the same guards apply as in the
//! interactive mode.
//!
//! While the puzzle is open, a line of exactly `word_length` letters is always
//! a guess, even when it spells a command word. Commands can be prefixed with
//! `:` to reach them in that case.

use crate::game::{Game, GameStatus, InputOutcome};
use crate::output::formatters::{format_keyboard, format_row};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(game: Game) -> io::Result<Game> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, stdin.lock(), stdout.lock())
}

/// Run the simple mode over arbitrary input and output streams
///
/// Returns the session in its final state.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    mut game: Game,
    input: R,
    mut out: W,
) -> io::Result<Game> {
    let config = game.config();
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║          Wordal - Simple Mode          ║")?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        config.word_length, config.max_guesses
    )?;
    writeln!(
        out,
        "Commands: 'share' after solving, 'quit' to exit (or ':share', ':quit')\n"
    )?;
    prompt(&mut out, &game)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim().to_lowercase();

        if is_guess(&game, &line) {
            submit_line(&mut game, &line, &mut out)?;
            prompt(&mut out, &game)?;
            continue;
        }

        match line.strip_prefix(':').unwrap_or(&line) {
            "" => {}
            "quit" | "q" | "exit" => break,
            "share" => match game.share() {
                Some(summary) => writeln!(out, "\n{summary}\n")?,
                None => writeln!(out, "Solve the puzzle first!")?,
            },
            guess => {
                if game.status().is_over() {
                    writeln!(out, "The game is over. Type 'share' or 'quit'.")?;
                } else {
                    submit_line(&mut game, guess, &mut out)?;
                }
            }
        }

        prompt(&mut out, &game)?;
    }

    out.flush()?;
    Ok(game)
}

/// A full-length letter line while the puzzle is still open
fn is_guess(game: &Game, line: &str) -> bool {
    !game.status().is_over()
        && line.len() == game.config().word_length
        && line.bytes().all(|b| b.is_ascii_alphabetic())
}

fn submit_line<W: Write>(game: &mut Game, guess: &str, out: &mut W) -> io::Result<()> {
    let word_length = game.config().word_length;
    if guess.chars().count() != word_length || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        writeln!(out, "❌ Enter exactly {word_length} letters")?;
        return Ok(());
    }

    for letter in guess.chars() {
        game.enter_letter(letter);
    }

    match game.submit() {
        InputOutcome::Submitted { row, status, .. } => {
            if let Some(board_row) = game.board().row(row) {
                writeln!(out, "  {}", format_row(board_row))?;
            }
            writeln!(out, "  {}\n", format_keyboard(game.keyboard()))?;
            match status {
                GameStatus::Won => {
                    writeln!(
                        out,
                        "{}",
                        format!("🎉 Solved in {} {}!", row + 1, plural(row + 1))
                            .green()
                            .bold()
                    )?;
                    writeln!(out, "Type 'share' for your result.")?;
                }
                GameStatus::Lost => {
                    writeln!(
                        out,
                        "{}",
                        format!("❌ Out of guesses! The word was {}", game.answer())
                            .red()
                            .bold()
                    )?;
                }
                GameStatus::InProgress => {}
            }
        }
        InputOutcome::InvalidWord(word) => {
            writeln!(out, "❌ Invalid word: {}", word.text().to_uppercase())?;
            clear_row(game);
        }
        InputOutcome::Applied | InputOutcome::Ignored => clear_row(game),
    }

    Ok(())
}

fn clear_row(game: &mut Game) {
    while game.cursor().column > 0 {
        game.backspace();
    }
}

fn prompt<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    if game.status().is_over() {
        write!(out, "> ")?;
    } else {
        write!(
            out,
            "Guess {}/{}: ",
            game.cursor().row + 1,
            game.config().max_guesses
        )?;
    }
    out.flush()
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
