//! Puzzle session state machine
//!
//! Board, cursor and the controller that turns player input into evaluated
//! guesses.

mod board;
mod dictionary;
mod session;

pub use board::{Board, Cell, Cursor, Row};
pub use dictionary::{AcceptAll, Dictionary, WordList};
pub use session::{Game, GameConfig, GameStatus, Input, InputOutcome};
