//! Sharing: answer tokens, puzzle links and result summaries

mod summary;
mod token;

pub use summary::{SESSION_LABEL, ShareSummary, glyph_block};
pub use token::{
    ANSWER_PARAM, TokenError, answer_from_link, decode_answer, encode_answer, generate_link,
    token_from_link,
};
