//! Per-letter feedback classification
//!
//! Variants are declared in precedence order so the derived `Ord` gives
//! `Absent < Present < Correct`.

use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    /// Letter does not occur (any more) in the answer
    Absent,
    /// Letter occurs elsewhere in the answer
    Present,
    /// Letter is in the correct position
    Correct,
}

impl Verdict {
    /// Glyph used in share summaries
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '\u{1F7E9}', // 🟩
            Self::Present => '\u{1F7E8}', // 🟨
            Self::Absent => '\u{2B1B}',   // ⬛
        }
    }

    /// Single-letter code: `G`, `Y` or `-`
    #[inline]
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// The better of two verdicts
    #[inline]
    #[must_use]
    pub fn best(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(Verdict::Correct > Verdict::Present);
        assert!(Verdict::Present > Verdict::Absent);
        assert_eq!(Verdict::Absent.best(Verdict::Correct), Verdict::Correct);
        assert_eq!(Verdict::Correct.best(Verdict::Present), Verdict::Correct);
    }

    #[test]
    fn glyph_table() {
        assert_eq!(Verdict::Correct.glyph(), '🟩');
        assert_eq!(Verdict::Present.glyph(), '🟨');
        assert_eq!(Verdict::Absent.glyph(), '⬛');
    }

    #[test]
    fn code_table() {
        assert_eq!(Verdict::Correct.code(), 'G');
        assert_eq!(Verdict::Present.code(), 'Y');
        assert_eq!(Verdict::Absent.code(), '-');
    }
}
