//! Board grid and cursor
//!
//! The board owns `max_guesses` rows of `word_length` cells. Rows are written
//! by the session controller only; renderers get read access.

use crate::core::{Feedback, Verdict, Word};

/// Position of the next writable cell
///
/// `row` doubles as the number of guesses submitted so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

/// Read-only view of one cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<u8>,
    pub verdict: Option<Verdict>,
}

/// One guess row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    letters: Vec<Option<u8>>,
    feedback: Option<Feedback>,
}

impl Row {
    fn new(word_length: usize) -> Self {
        Self {
            letters: vec![None; word_length],
            feedback: None,
        }
    }

    /// Cell at `column`, or `None` past the end of the row
    #[must_use]
    pub fn cell(&self, column: usize) -> Option<Cell> {
        let letter = *self.letters.get(column)?;
        let verdict = self
            .feedback
            .as_ref()
            .map(|feedback| feedback.verdicts()[column]);
        Some(Cell { letter, verdict })
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.letters.len()).filter_map(|column| self.cell(column))
    }

    /// Every cell holds exactly one letter
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.letters.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.feedback.is_some()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// The row's letters as a word, if the row is filled
    #[must_use]
    pub fn guess(&self) -> Option<Word> {
        let letters: Vec<u8> = self.letters.iter().copied().collect::<Option<_>>()?;
        Word::from_letters(&letters).ok()
    }
}

/// The full guess grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    word_length: usize,
    rows: Vec<Row>,
}

impl Board {
    #[must_use]
    pub fn new(word_length: usize, max_guesses: usize) -> Self {
        Self {
            word_length,
            rows: (0..max_guesses).map(|_| Row::new(word_length)).collect(),
        }
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    /// Feedback of every submitted row, oldest first
    pub fn results(&self) -> impl Iterator<Item = &Feedback> {
        self.rows.iter().map_while(Row::feedback)
    }

    pub(crate) fn set_letter(&mut self, row: usize, column: usize, letter: u8) {
        self.rows[row].letters[column] = Some(letter);
    }

    pub(crate) fn clear_letter(&mut self, row: usize, column: usize) {
        self.rows[row].letters[column] = None;
    }

    pub(crate) fn set_feedback(&mut self, row: usize, feedback: Feedback) {
        debug_assert_eq!(feedback.len(), self.word_length);
        self.rows[row].feedback = Some(feedback);
    }
}
