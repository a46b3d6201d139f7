//! Core domain types for the puzzle
//!
//! Pure, deterministic types: words, verdicts, guess evaluation and the
//! keyboard aggregate. Nothing here performs I/O.

mod feedback;
mod keyboard;
mod verdict;
mod word;

pub use feedback::{Feedback, FeedbackError, evaluate};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use verdict::Verdict;
pub use word::{Word, WordError};
