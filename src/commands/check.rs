//! Single evaluation command
//!
//! Evaluates one guess against an answer without starting a session.

use crate::core::{Feedback, FeedbackError, Word, WordError};
use thiserror::Error;

/// Result of evaluating one guess
pub struct CheckResult {
    pub answer: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Error type for the check command
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Invalid answer: {0}")]
    Answer(WordError),
    #[error("Invalid guess: {0}")]
    Guess(WordError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}

/// Evaluate `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
pub fn check_guess(answer: &str, guess: &str) -> Result<CheckResult, CheckError> {
    let answer = Word::new(answer).map_err(CheckError::Answer)?;
    let guess = Word::new(guess).map_err(CheckError::Guess)?;
    let feedback = Feedback::calculate(&guess, &answer)?;

    Ok(CheckResult {
        answer,
        guess,
        feedback,
    })
}
