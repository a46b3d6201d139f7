//! Where a session's answer comes from

use crate::core::Word;
use crate::share::{TokenError, answer_from_link, decode_answer};

/// Answer supplied on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    /// Plain answer text
    Plain(String),
    /// Encoded answer token
    Token(String),
    /// Puzzle link carrying the token
    Link(String),
}

impl AnswerSource {
    /// Resolve to a validated answer
    ///
    /// # Errors
    ///
    /// Returns `TokenError` if the answer is malformed or the token/link
    /// cannot be decoded. A malformed answer means no session can start.
    pub fn resolve(&self) -> Result<Word, TokenError> {
        match self {
            Self::Plain(text) => Ok(Word::new(text.as_str())?),
            Self::Token(token) => decode_answer(token),
            Self::Link(link) => answer_from_link(link),
        }
    }
}

/// Decode either a bare token or a full link
///
/// # Errors
///
/// See [`AnswerSource::resolve`].
pub fn decode_input(input: &str) -> Result<Word, TokenError> {
    let input = input.trim();
    let source = if input.contains('?') {
        AnswerSource::Link(input.to_string())
    } else {
        AnswerSource::Token(input.to_string())
    };
    source.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    #[test]
    fn resolve_plain_answer() {
        let answer = AnswerSource::Plain("Speed".into()).resolve().unwrap();
        assert_eq!(answer.text(), "speed");
    }

    #[test]
    fn resolve_malformed_answer() {
        assert!(matches!(
            AnswerSource::Plain(String::new()).resolve(),
            Err(TokenError::Word(WordError::Empty))
        ));
        assert!(matches!(
            AnswerSource::Plain("sp-ed".into()).resolve(),
            Err(TokenError::Word(WordError::InvalidCharacters))
        ));
    }

    #[test]
    fn resolve_token_and_link() {
        let token = AnswerSource::Token("YXJvc2U=".into()).resolve().unwrap();
        let link = AnswerSource::Link("https://wordal.app/?a=YXJvc2U%3D".into())
            .resolve()
            .unwrap();
        assert_eq!(token, link);
    }

    #[test]
    fn decode_input_detects_links() {
        assert_eq!(decode_input(" c3BlZWQ= ").unwrap().text(), "speed");
        assert_eq!(
            decode_input("https://wordal.app/?a=c3BlZWQ%3D").unwrap().text(),
            "speed"
        );
        assert!(decode_input("https://wordal.app/?b=1").is_err());
    }
}
