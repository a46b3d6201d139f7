//! Wordal
//!
//! A shareable word-guessing puzzle: guess a hidden word of any length in one
//! more attempt than it has letters, with per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordal::core::Word;
//! use wordal::game::{Game, GameStatus, Input};
//!
//! let mut game = Game::new(Word::new("speed").unwrap());
//! for letter in "speed".chars() {
//!     game.handle(Input::Letter(letter));
//! }
//! game.handle(Input::Submit);
//!
//! assert_eq!(game.status(), GameStatus::Won);
//! println!("{}", game.share().unwrap());
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Answer tokens, links and share summaries
pub mod share;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
