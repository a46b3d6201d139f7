//! Puzzle link generation command

use crate::core::Word;
use crate::share::{TokenError, encode_answer, generate_link};

/// Generated link and its parts
pub struct LinkResult {
    pub answer: Word,
    pub token: String,
    pub link: String,
}

/// Build the token and link for `answer`
///
/// # Errors
///
/// Returns `TokenError::Word` if the answer is empty or contains non-letters.
pub fn create_link(base_url: &str, answer: &str) -> Result<LinkResult, TokenError> {
    let link = generate_link(base_url, answer)?;
    let answer = Word::new(answer)?;
    let token = encode_answer(&answer);

    Ok(LinkResult {
        answer,
        token,
        link,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::decode_input;

    #[test]
    fn create_link_round_trips() {
        let result = create_link("https://wordal.app/", "ArOsE").unwrap();
        assert_eq!(result.answer.text(), "arose");
        assert_eq!(result.token, "YXJvc2U=");
        assert_eq!(decode_input(&result.link).unwrap(), result.answer);
    }

    #[test]
    fn create_link_rejects_empty_answer() {
        assert!(create_link("https://wordal.app/", "").is_err());
    }
}
