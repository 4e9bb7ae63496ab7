//! Text processing
//!
//! - Token normalization (case folding, URL/emoji rejection, punctuation stripping)
//! - Lazy tokenization with "not"/"very" bigram merging

mod normalize;
mod tokenizer;

pub use normalize::{normalize, FILTERED_PATTERNS, MERGE_WORDS};
pub use tokenizer::{Tokenizer, Tokens};
