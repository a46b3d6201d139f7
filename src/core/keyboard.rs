//! Best-known verdict per letter across a session
//!
//! Verdicts only ever improve: once a letter is correct it stays correct, and
//! an absent result never overwrites a present one.

use super::{Feedback, Verdict, Word};
use rustc_hash::FxHashMap;

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Mapping from letter to the best verdict observed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, Verdict>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one submitted guess into the state
    ///
    /// Letters and verdicts are zipped; extra positions on either side are
    /// ignored.
    ///
    /// # Examples
    /// ```
    /// use wordal::core::{Feedback, KeyboardState, Verdict, Word};
    ///
    /// let answer = Word::new("arose").unwrap();
    /// let mut keyboard = KeyboardState::new();
    ///
    /// let guess = Word::new("erase").unwrap();
    /// keyboard.update(&guess, &Feedback::calculate(&guess, &answer).unwrap());
    /// assert_eq!(keyboard.get(b'e'), Some(Verdict::Correct));
    /// assert_eq!(keyboard.get(b'r'), Some(Verdict::Correct));
    /// assert_eq!(keyboard.get(b'z'), None);
    /// ```
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &verdict) in guess.letters().iter().zip(feedback.verdicts()) {
            self.record(letter, verdict);
        }
    }

    /// Pure form of [`KeyboardState::update`]
    #[must_use]
    pub fn merged(mut self, guess: &Word, feedback: &Feedback) -> Self {
        self.update(guess, feedback);
        self
    }

    fn record(&mut self, letter: u8, verdict: Verdict) {
        let letter = letter.to_ascii_lowercase();
        self.letters
            .entry(letter)
            .and_modify(|stored| *stored = stored.best(verdict))
            .or_insert(verdict);
    }

    /// Best verdict recorded for a letter (case-insensitive)
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Verdict> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Number of letters with a recorded verdict
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Recorded letters in alphabetical order
    #[must_use]
    pub fn entries(&self) -> Vec<(u8, Verdict)> {
        let mut entries: Vec<_> = self.letters.iter().map(|(&l, &v)| (l, v)).collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct, Present};
    use proptest::prelude::*;

    fn feedback(answer: &str, guess: &str) -> (Word, Feedback) {
        let answer = Word::new(answer).unwrap();
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::calculate(&guess, &answer).unwrap();
        (guess, feedback)
    }

    #[test]
    fn keyboard_first_observation_is_stored() {
        let (guess, result) = feedback("speed", "erase");
        let keyboard = KeyboardState::new().merged(&guess, &result);

        assert_eq!(keyboard.get(b'e'), Some(Present));
        assert_eq!(keyboard.get(b's'), Some(Present));
        assert_eq!(keyboard.get(b'r'), Some(Absent));
        assert_eq!(keyboard.get(b'a'), Some(Absent));
        assert_eq!(keyboard.len(), 4);
    }

    #[test]
    fn keyboard_duplicate_letters_keep_best() {
        // "eerie" vs "speed": two e's present, third absent
        let (guess, result) = feedback("speed", "eerie");
        let keyboard = KeyboardState::new().merged(&guess, &result);
        assert_eq!(keyboard.get(b'e'), Some(Present));
    }

    #[test]
    fn keyboard_correct_never_downgrades() {
        let mut keyboard = KeyboardState::new();
        let guess = Word::new("a").unwrap();
        keyboard.update(&guess, &Feedback::from_verdicts(vec![Correct]));
        keyboard.update(&guess, &Feedback::from_verdicts(vec![Absent]));
        keyboard.update(&guess, &Feedback::from_verdicts(vec![Absent]));
        keyboard.update(&guess, &Feedback::from_verdicts(vec![Present]));
        assert_eq!(keyboard.get(b'a'), Some(Correct));
    }

    #[test]
    fn keyboard_present_upgrades_absent() {
        let mut keyboard = KeyboardState::new();
        let guess = Word::new("b").unwrap();
        keyboard.update(&guess, &Feedback::from_verdicts(vec![Absent]));
        keyboard.update(&guess, &Feedback::from_verdicts(vec![Present]));
        assert_eq!(keyboard.get(b'b'), Some(Present));
        assert_eq!(keyboard.get(b'B'), Some(Present));
    }

    #[test]
    fn keyboard_entries_sorted() {
        let (guess, result) = feedback("arose", "crane");
        let keyboard = KeyboardState::new().merged(&guess, &result);
        let letters: Vec<u8> = keyboard.entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(letters, b"acenr".to_vec());
    }

    #[test]
    fn keyboard_layout_covers_alphabet() {
        let mut letters: Vec<u8> = KEYBOARD_ROWS.iter().flat_map(|row| row.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<_>>());
    }

    fn verdict() -> impl Strategy<Value = Verdict> {
        prop_oneof![Just(Absent), Just(Present), Just(Correct)]
    }

    proptest! {
        #[test]
        fn keyboard_holds_max_of_history(history in proptest::collection::vec(verdict(), 1..20)) {
            let guess = Word::new("q").unwrap();
            let mut keyboard = KeyboardState::new();
            let mut previous = None;
            for &v in &history {
                keyboard.update(&guess, &Feedback::from_verdicts(vec![v]));
                let current = keyboard.get(b'q');
                prop_assert!(current >= previous);
                previous = current;
            }
            prop_assert_eq!(keyboard.get(b'q'), history.iter().copied().max());
        }
    }
}
