//! Command implementations

pub mod answer;
pub mod check;
pub mod link;
pub mod simple;

pub use answer::{AnswerSource, decode_input};
pub use check::{CheckError, CheckResult, check_guess};
pub use link::{LinkResult, create_link};
pub use simple::{run_simple, run_simple_with};
