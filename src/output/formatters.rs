//! Formatting utilities for terminal output

use crate::core::{Feedback, KEYBOARD_ROWS, KeyboardState, Verdict, Word};
use crate::game::Row;
use colored::{ColoredString, Colorize};

/// Style one letter tile according to its verdict
#[must_use]
pub fn tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a board row as colored tiles
#[must_use]
pub fn format_row(row: &Row) -> String {
    row.cells()
        .map(|cell| {
            let letter = cell.letter.map_or('_', char::from);
            tile(letter, cell.verdict).to_string()
        })
        .collect()
}

/// Render a guess with its feedback as colored tiles
#[must_use]
pub fn format_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| tile(char::from(letter), Some(verdict)).to_string())
        .collect()
}

/// Render the keyboard rows, letters colored by best verdict
#[must_use]
pub fn format_keyboard(keyboard: &KeyboardState) -> String {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|letter| key(char::from(letter), keyboard.get(letter)).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn key(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let text = letter.to_string();
    match verdict {
        Some(Verdict::Correct) => text.green().bold(),
        Some(Verdict::Present) => text.yellow().bold(),
        Some(Verdict::Absent) => text.bright_black(),
        None => text.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn format_keyboard_lists_every_key() {
        colored::control::set_override(false);
        let keyboard = KeyboardState::new();
        assert_eq!(
            format_keyboard(&keyboard),
            "q w e r t y u i o p  a s d f g h j k l  z x c v b n m"
        );
    }

    #[test]
    fn format_row_shows_letters_and_blanks() {
        colored::control::set_override(false);
        let mut game = Game::new(Word::new("abc").unwrap());
        game.enter_letter('c');
        let row = game.board().row(0).unwrap();
        assert_eq!(format_row(row), " C  _  _ ");
    }

    #[test]
    fn format_guess_uppercases() {
        colored::control::set_override(false);
        let guess = Word::new("ab").unwrap();
        let feedback = Feedback::from_verdicts(vec![Verdict::Correct, Verdict::Present]);
        assert_eq!(format_guess(&guess, &feedback), " A  B ");
    }
}
