//! Accepted-guess membership capability
//!
//! A session is handed a dictionary at construction. When none is supplied,
//! every well-formed guess is accepted.

use rustc_hash::FxHashSet;

/// Yes/no membership test for submitted guesses
pub trait Dictionary {
    /// Whether `word` (lowercase) may be submitted
    fn accepts(&self, word: &str) -> bool;
}

/// Accepts every guess
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn accepts(&self, _word: &str) -> bool {
        true
    }
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn accepts(&self, word: &str) -> bool {
        self(word)
    }
}

/// In-memory accepted-word set
///
/// The list only restricts guesses of a length it has words for. Guesses of
/// any other length, and every guess against an empty list, are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: FxHashSet<String>,
    lengths: FxHashSet<usize>,
}

impl WordList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word, normalized to lowercase
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.lengths.insert(word.len());
        self.words.insert(word)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Whether any listed word has `length` letters
    #[must_use]
    pub fn covers_length(&self, length: usize) -> bool {
        self.lengths.contains(&length)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.insert(word.as_ref());
        }
        list
    }
}

impl Dictionary for WordList {
    fn accepts(&self, word: &str) -> bool {
        !self.covers_length(word.len()) || self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_all_accepts_anything() {
        assert!(AcceptAll.accepts("zzzzz"));
    }

    #[test]
    fn closure_dictionary() {
        let only_vowel_start = |w: &str| w.starts_with(['a', 'e', 'i', 'o', 'u']);
        assert!(only_vowel_start.accepts("arose"));
        assert!(!only_vowel_start.accepts("speed"));
    }

    #[test]
    fn word_list_membership() {
        let list: WordList = ["arose", "SPEED", " crane "].into_iter().collect();
        assert_eq!(list.len(), 3);
        assert!(list.accepts("arose"));
        assert!(list.accepts("speed"));
        assert!(list.accepts("crane"));
        assert!(!list.accepts("zzzzz"));
    }

    #[test]
    fn empty_word_list_accepts_everything() {
        let list = WordList::new();
        assert!(list.is_empty());
        assert!(list.accepts("zzzzz"));
    }

    #[test]
    fn word_list_only_restricts_listed_lengths() {
        let list: WordList = ["arose", "speed", "crane"].into_iter().collect();
        assert!(list.covers_length(5));
        assert!(!list.covers_length(7));
        assert!(!list.accepts("zzzzz"));
        assert!(list.accepts("muzzles"));
        assert!(list.accepts("ab"));
    }
}
