//! Shareable result summary
//!
//! A summary is three parts joined by newlines: the session label, the answer
//! token, and one glyph row per submitted guess.

use super::token::encode_answer;
use crate::core::{Feedback, Word};
use std::fmt;

/// Label heading every share summary
pub const SESSION_LABEL: &str = "Wordal";

/// Render submitted results as glyph rows, one line per guess
///
/// # Examples
/// ```
/// use wordal::core::{Feedback, Verdict::{Absent, Correct, Present}};
/// use wordal::share::glyph_block;
///
/// let rows = [
///     Feedback::from_verdicts(vec![Present, Absent, Correct]),
///     Feedback::from_verdicts(vec![Correct; 3]),
/// ];
/// assert_eq!(glyph_block(&rows), "🟨⬛🟩\n🟩🟩🟩");
/// ```
#[must_use]
pub fn glyph_block<'a>(rows: impl IntoIterator<Item = &'a Feedback>) -> String {
    rows.into_iter()
        .map(Feedback::to_glyphs)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Complete share payload for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSummary {
    label: String,
    token: String,
    rows: Vec<Feedback>,
}

impl ShareSummary {
    #[must_use]
    pub fn new(label: impl Into<String>, token: impl Into<String>, rows: Vec<Feedback>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
            rows,
        }
    }

    /// Summary under the default label, tokenizing `answer`
    #[must_use]
    pub fn for_answer(answer: &Word, rows: Vec<Feedback>) -> Self {
        Self::new(SESSION_LABEL, encode_answer(answer), rows)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn rows(&self) -> &[Feedback] {
        &self.rows
    }
}

impl fmt::Display for ShareSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.label, self.token, glyph_block(&self.rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct, Present};
    use crate::share::decode_answer;

    #[test]
    fn glyph_block_empty_history() {
        assert_eq!(glyph_block(std::iter::empty()), "");
    }

    #[test]
    fn summary_text_layout() {
        let answer = Word::new("arose").unwrap();
        let rows = vec![
            Feedback::from_verdicts(vec![Absent, Present, Absent, Absent, Present]),
            Feedback::from_verdicts(vec![Correct; 5]),
        ];
        let summary = ShareSummary::for_answer(&answer, rows);

        assert_eq!(
            summary.to_string(),
            "Wordal\nYXJvc2U=\n⬛🟨⬛⬛🟨\n🟩🟩🟩🟩🟩"
        );
        assert_eq!(summary.rows().len(), 2);
    }

    #[test]
    fn summary_token_reproduces_answer() {
        let answer = Word::new("speed").unwrap();
        let summary = ShareSummary::for_answer(&answer, Vec::new());
        assert_eq!(summary.label(), SESSION_LABEL);
        assert_eq!(decode_answer(summary.token()).unwrap(), answer);
    }

    #[test]
    fn summary_custom_label() {
        let rows = vec![Feedback::from_verdicts(vec![Correct])];
        let summary = ShareSummary::new("Daily", "dG9rZW4=", rows);
        assert_eq!(summary.to_string(), "Daily\ndG9rZW4=\n🟩");
    }
}
