//! Guess evaluation against the hidden answer
//!
//! Feedback is one [`Verdict`] per letter position. It is computed with the
//! two-pass, frequency-correct rules: exact matches first, then the remaining
//! positions left to right against the leftover answer letters.

use super::{Verdict, Word};
use thiserror::Error;

/// Feedback for one submitted guess (one verdict per position)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Box<[Verdict]>);

/// Error type for evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Guess must be {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl Feedback {
    /// Calculate the feedback when `guess` is guessed and `answer` is the target
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as correct and remove them from the
    ///    leftover pool
    /// 2. Second pass: for every other position, left to right, mark present if
    ///    the letter still has a leftover count (and consume it), else absent
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordal::core::{Feedback, Verdict, Word};
    ///
    /// let answer = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer).unwrap();
    ///
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// assert_eq!(feedback.count(Verdict::Correct), 2);
    /// ```
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self, FeedbackError> {
        if guess.len() != answer.len() {
            return Err(FeedbackError::LengthMismatch {
                expected: answer.len(),
                actual: guess.len(),
            });
        }

        let guess_letters = guess.letters();
        let answer_letters = answer.letters();
        let mut result = vec![Verdict::Absent; answer.len()];
        let mut leftover = answer.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess_letters.iter().zip(answer_letters).enumerate() {
            if g == a {
                result[i] = Verdict::Correct;
                if let Some(count) = leftover.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, claimed left to right
        for (verdict, &letter) in result.iter_mut().zip(guess_letters) {
            if *verdict == Verdict::Correct {
                continue;
            }
            if let Some(count) = leftover.get_mut(&letter)
                && *count > 0
            {
                *verdict = Verdict::Present;
                *count -= 1;
            }
        }

        Ok(Self(result.into_boxed_slice()))
    }

    /// Build feedback from explicit verdicts
    #[must_use]
    pub fn from_verdicts(verdicts: impl Into<Box<[Verdict]>>) -> Self {
        Self(verdicts.into())
    }

    /// Verdicts in position order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count positions carrying the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Render as a glyph row like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_glyphs(&self) -> String {
        self.0.iter().map(|v| v.glyph()).collect()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|v| write!(f, "{}", v.code()))
    }
}

/// Evaluate `guess` against `answer`
///
/// Argument order follows the puzzle's point of view: answer first.
///
/// # Errors
/// Returns `FeedbackError::LengthMismatch` if the words differ in length.
pub fn evaluate(answer: &Word, guess: &Word) -> Result<Feedback, FeedbackError> {
    Feedback::calculate(guess, answer)
}
