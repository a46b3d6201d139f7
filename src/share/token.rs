//! Answer token and puzzle links
//!
//! The answer travels as standard base64 of its lowercase letters inside a
//! single `a=` query parameter. This is an obfuscation, not a secret: anyone
//! holding a link can decode the answer.

use crate::core::{Word, WordError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Query parameter carrying the answer token
pub const ANSWER_PARAM: &str = "a";

/// Error type for token and link decoding
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Answer token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Answer token is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Invalid answer: {0}")]
    Word(#[from] WordError),
    #[error("Link has no answer parameter")]
    MissingParameter,
}

/// Encode an answer as a token
///
/// # Examples
/// ```
/// use wordal::core::Word;
/// use wordal::share::{decode_answer, encode_answer};
///
/// let answer = Word::new("arose").unwrap();
/// let token = encode_answer(&answer);
/// assert_eq!(token, "YXJvc2U=");
/// assert_eq!(decode_answer(&token).unwrap(), answer);
/// ```
#[must_use]
pub fn encode_answer(answer: &Word) -> String {
    STANDARD.encode(answer.letters())
}

/// Decode a token back into the answer
///
/// # Errors
/// Returns `TokenError` if the token is not base64, not UTF-8, or does not
/// decode to a letter sequence.
pub fn decode_answer(token: &str) -> Result<Word, TokenError> {
    let bytes = STANDARD.decode(token.trim())?;
    let text = String::from_utf8(bytes)?;
    Ok(Word::new(text)?)
}

/// Build a shareable puzzle link for `answer`
///
/// Any query string already present on `base_url` is dropped.
///
/// # Errors
/// Returns `TokenError::Word` if the answer is empty or has non-letters.
///
/// # Examples
/// ```
/// use wordal::share::generate_link;
///
/// let link = generate_link("https://wordal.app/?a=old", "Speed").unwrap();
/// assert_eq!(link, "https://wordal.app/?a=c3BlZWQ%3D");
/// assert!(generate_link("https://wordal.app/", "sp33d").is_err());
/// ```
pub fn generate_link(base_url: &str, answer: &str) -> Result<String, TokenError> {
    let answer = Word::new(answer)?;
    let base = base_url.split('?').next().unwrap_or(base_url);
    let token = encode_answer(&answer);
    Ok(format!(
        "{base}?{ANSWER_PARAM}={}",
        urlencoding::encode(&token)
    ))
}

/// Extract the raw answer token from a link
///
/// # Errors
/// Returns `TokenError::MissingParameter` if the link has no answer parameter,
/// or `TokenError::Utf8` if percent-decoding fails.
pub fn token_from_link(link: &str) -> Result<String, TokenError> {
    let without_fragment = link.split('#').next().unwrap_or(link);
    let (_, query) = without_fragment
        .split_once('?')
        .ok_or(TokenError::MissingParameter)?;

    let value = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find_map(|(key, value)| (key == ANSWER_PARAM).then_some(value))
        .ok_or(TokenError::MissingParameter)?;

    Ok(urlencoding::decode(value)?.into_owned())
}

/// Decode the answer carried by a link
///
/// # Errors
/// See [`token_from_link`] and [`decode_answer`].
pub fn answer_from_link(link: &str) -> Result<Word, TokenError> {
    decode_answer(&token_from_link(link)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn token_matches_plain_base64() {
        let answer = Word::new("speed").unwrap();
        assert_eq!(encode_answer(&answer), "c3BlZWQ=");
    }

    #[test]
    fn token_decode_normalizes_case() {
        // base64 of "SPEED"
        assert_eq!(decode_answer("U1BFRUQ=").unwrap().text(), "speed");
    }

    #[test]
    fn token_decode_rejects_garbage() {
        assert!(matches!(decode_answer("!!!"), Err(TokenError::Base64(_))));
        // base64 of "ab1"
        assert!(matches!(decode_answer("YWIx"), Err(TokenError::Word(_))));
        assert!(matches!(
            decode_answer(""),
            Err(TokenError::Word(WordError::Empty))
        ));
        // base64 of 0xff 0xfe
        assert!(matches!(decode_answer("//4="), Err(TokenError::Utf8(_))));
    }

    #[test]
    fn link_round_trip() {
        let link = generate_link("https://wordal.app/play", "arose").unwrap();
        assert_eq!(link, "https://wordal.app/play?a=YXJvc2U%3D");
        assert_eq!(token_from_link(&link).unwrap(), "YXJvc2U=");
        assert_eq!(answer_from_link(&link).unwrap().text(), "arose");
    }

    #[test]
    fn link_with_other_parameters_and_fragment() {
        let link = "https://wordal.app/?x=1&a=c3BlZWQ%3D&y=2#top";
        assert_eq!(answer_from_link(link).unwrap().text(), "speed");
    }

    #[test]
    fn link_without_answer_parameter() {
        assert!(matches!(
            token_from_link("https://wordal.app/"),
            Err(TokenError::MissingParameter)
        ));
        assert!(matches!(
            token_from_link("https://wordal.app/?b=1"),
            Err(TokenError::MissingParameter)
        ));
    }

    #[test]
    fn link_rejects_invalid_answers() {
        assert!(matches!(
            generate_link("https://wordal.app/", ""),
            Err(TokenError::Word(WordError::Empty))
        ));
        assert!(matches!(
            generate_link("https://wordal.app/", "two words"),
            Err(TokenError::Word(WordError::InvalidCharacters))
        ));
    }

    proptest! {
        #[test]
        fn token_round_trips(answer in "[a-z]{1,16}") {
            let word = Word::new(answer.as_str()).unwrap();
            let decoded = decode_answer(&encode_answer(&word)).unwrap();
            prop_assert_eq!(decoded.text(), answer.as_str());
        }

        #[test]
        fn link_round_trips(answer in "[a-zA-Z]{1,16}") {
            let link = generate_link("https://wordal.app/", &answer).unwrap();
            let decoded = answer_from_link(&link).unwrap();
            prop_assert_eq!(decoded.text(), answer.to_lowercase());
        }
    }
}
