//! Accepted-guess word lists

pub mod loader;

pub use loader::{load_from_file, parse_word_list};
