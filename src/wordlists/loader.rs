//! Word list loading utilities
//!
//! Accepted-guess lists are plain text files with one word per line.

use crate::core::Word;
use crate::game::WordList;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load an accepted-word list from a file
///
/// Blank lines and lines starting with `#` are skipped, as are entries that
/// are not letter sequences.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordal::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let list = parse_word_list(&content);
    debug!(path = %path.display(), words = list.len(), "loaded word list");
    Ok(list)
}

/// Parse word list text into a `WordList`
#[must_use]
pub fn parse_word_list(content: &str) -> WordList {
    let mut skipped = 0usize;
    let list = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .map(|word| word.text().to_string())
        .collect();

    if skipped > 0 {
        warn!(skipped, "ignored malformed word list entries");
    }
    list
}
