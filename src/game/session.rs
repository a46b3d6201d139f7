//! Guess entry and game progression
//!
//! A [`Game`] owns everything for one puzzle session: the answer, the board,
//! the cursor, the keyboard aggregate and the status. Input events are handled
//! one at a time to completion. Events that do not apply in the current state
//! are ignored without touching anything.

use super::board::{Board, Cursor, Row};
use super::dictionary::{AcceptAll, Dictionary};
use crate::core::{Feedback, KeyboardState, Word};
use crate::share::ShareSummary;
use std::fmt;
use tracing::{debug, info, trace};

/// Fixed dimensions of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
}

impl GameConfig {
    /// Dimensions for an answer: one more guess than there are letters
    #[must_use]
    pub fn for_answer(answer: &Word) -> Self {
        Self {
            word_length: answer.len(),
            max_guesses: answer.len() + 1,
        }
    }
}

/// Session progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or lost; no further input is accepted
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Input event from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Backspace,
    Submit,
}

/// What an input event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// A letter was written or erased
    Applied,
    /// The event does not apply in the current state; nothing changed
    Ignored,
    /// The completed row is not an accepted word; nothing changed
    InvalidWord(Word),
    /// The row was evaluated
    Submitted {
        row: usize,
        feedback: Feedback,
        status: GameStatus,
    },
}

/// One puzzle session
pub struct Game {
    answer: Word,
    config: GameConfig,
    board: Board,
    cursor: Cursor,
    keyboard: KeyboardState,
    status: GameStatus,
    dictionary: Box<dyn Dictionary>,
}

impl Game {
    /// Start a session where every well-formed guess is accepted
    ///
    /// # Examples
    /// ```
    /// use wordal::core::Word;
    /// use wordal::game::{Game, GameStatus, InputOutcome};
    ///
    /// let mut game = Game::new(Word::new("arose").unwrap());
    /// for letter in "arose".chars() {
    ///     game.enter_letter(letter);
    /// }
    /// assert!(matches!(game.submit(), InputOutcome::Submitted { .. }));
    /// assert_eq!(game.status(), GameStatus::Won);
    /// assert!(game.share().is_some());
    /// ```
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self::with_dictionary(answer, AcceptAll)
    }

    /// Start a session that validates guesses against `dictionary`
    ///
    /// The answer itself is always accepted.
    #[must_use]
    pub fn with_dictionary(answer: Word, dictionary: impl Dictionary + 'static) -> Self {
        let config = GameConfig::for_answer(&answer);
        debug!(
            word_length = config.word_length,
            max_guesses = config.max_guesses,
            "starting session"
        );
        Self {
            board: Board::new(config.word_length, config.max_guesses),
            answer,
            config,
            cursor: Cursor::default(),
            keyboard: KeyboardState::new(),
            status: GameStatus::InProgress,
            dictionary: Box::new(dictionary),
        }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of evaluated guesses
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.board.results().count()
    }

    /// Dispatch one input event
    pub fn handle(&mut self, input: Input) -> InputOutcome {
        match input {
            Input::Letter(letter) => self.enter_letter(letter),
            Input::Backspace => self.backspace(),
            Input::Submit => self.submit(),
        }
    }

    /// Write a letter at the cursor and advance
    ///
    /// Ignored once the game is over, when the row is full, or for anything
    /// other than an ASCII letter.
    pub fn enter_letter(&mut self, letter: char) -> InputOutcome {
        if self.status.is_over()
            || self.cursor.column >= self.config.word_length
            || !letter.is_ascii_alphabetic()
        {
            trace!(%letter, ?self.cursor, "letter ignored");
            return InputOutcome::Ignored;
        }

        self.board.set_letter(
            self.cursor.row,
            self.cursor.column,
            letter.to_ascii_lowercase() as u8,
        );
        self.cursor.column += 1;
        InputOutcome::Applied
    }

    /// Erase the letter before the cursor
    pub fn backspace(&mut self) -> InputOutcome {
        if self.status.is_over() || self.cursor.column == 0 {
            trace!(?self.cursor, "backspace ignored");
            return InputOutcome::Ignored;
        }

        self.cursor.column -= 1;
        self.board.clear_letter(self.cursor.row, self.cursor.column);
        InputOutcome::Applied
    }

    /// Evaluate the current row
    ///
    /// Requires an in-progress game and a completely filled row. A guess the
    /// dictionary rejects leaves every part of the state untouched.
    pub fn submit(&mut self) -> InputOutcome {
        if self.status.is_over() || self.cursor.row >= self.config.max_guesses {
            trace!(status = ?self.status, "submit ignored");
            return InputOutcome::Ignored;
        }

        let row = self.cursor.row;
        let Some(guess) = self.board.row(row).and_then(Row::guess) else {
            trace!(row, "submit ignored on incomplete row");
            return InputOutcome::Ignored;
        };

        if guess != self.answer && !self.dictionary.accepts(guess.text()) {
            debug!(row, guess = %guess, "guess rejected by dictionary");
            return InputOutcome::InvalidWord(guess);
        }

        let Ok(feedback) = Feedback::calculate(&guess, &self.answer) else {
            // Rows are sized from the answer, so lengths always agree
            return InputOutcome::Ignored;
        };

        self.board.set_feedback(row, feedback.clone());
        self.keyboard.update(&guess, &feedback);
        debug!(row, glyphs = %feedback.to_glyphs(), "guess evaluated");

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
            info!(guesses = row + 1, "puzzle solved");
        } else {
            self.cursor.row += 1;
            self.cursor.column = 0;
            if self.cursor.row == self.config.max_guesses {
                self.status = GameStatus::Lost;
                info!(guesses = self.cursor.row, "out of guesses");
            }
        }

        InputOutcome::Submitted {
            row,
            feedback,
            status: self.status,
        }
    }

    /// Share payload for a won game
    ///
    /// Returns `None` until the puzzle is solved.
    #[must_use]
    pub fn share(&self) -> Option<ShareSummary> {
        if self.status != GameStatus::Won {
            return None;
        }
        let rows = self.board.results().cloned().collect();
        Some(ShareSummary::for_answer(&self.answer, rows))
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("cursor", &self.cursor)
            .field("status", &self.status)
            .field("guesses_used", &self.guesses_used())
            .finish_non_exhaustive()
    }
}
