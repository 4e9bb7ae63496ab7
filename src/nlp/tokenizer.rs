//! Tokenizer
//!
//! Splits text on spaces and yields normalized tokens lazily. A piece that
//! normalizes to "not" or "very" swallows the following raw piece into a
//! single bigram token; the swallowed piece is never emitted on its own.

use super::normalize::{normalize_with_min_len, MERGE_WORDS};
use crate::config::DEFAULT_MIN_TOKEN_LEN;
use crate::models::{Token, TokenKind};
use std::iter::Filter;
use std::str::Split;

const PIECE_DELIMITER: char = ' ';

type Pieces<'a> = Filter<Split<'a, char>, fn(&&'a str) -> bool>;

/// Tokenizer for tweet bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_token_len: usize,
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }

    /// Set the minimum token length
    pub fn with_min_length(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    /// Normalize a single piece
    pub fn normalize(&self, raw: &str) -> Option<String> {
        normalize_with_min_len(raw, self.min_token_len)
    }

    /// Tokenize text lazily
    pub fn tokenize<'a>(&self, text: &'a str) -> Tokens<'a> {
        Tokens {
            tokenizer: *self,
            pieces: pieces(text),
            position: 0,
        }
    }

    /// Tokenize and keep only the normalized strings
    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        self.tokenize(text).map(|t| t.normalized).collect()
    }

    /// Number of pieces in the text before any filtering
    pub fn raw_count(&self, text: &str) -> usize {
        pieces(text).count()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn pieces<'a>(text: &'a str) -> Pieces<'a> {
    let non_empty: fn(&&'a str) -> bool = |piece| !piece.is_empty();
    text.split(PIECE_DELIMITER).filter(non_empty)
}

/// Single-pass token stream over one text
pub struct Tokens<'a> {
    tokenizer: Tokenizer,
    pieces: Pieces<'a>,
    position: usize,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let raw = self.pieces.next()?;
            let position = self.position;
            self.position += 1;

            let Some(mut normalized) = self.tokenizer.normalize(raw) else {
                continue;
            };

            let mut kind = TokenKind::Word;
            if MERGE_WORDS.contains(&normalized.as_str()) {
                // Trailing "not"/"very" stays a plain word
                if let Some(next) = self.pieces.next() {
                    self.position += 1;
                    kind = if normalized == "not" {
                        TokenKind::Negation
                    } else {
                        TokenKind::Intensifier
                    };
                    normalized = format!("{normalized} {next}");
                }
            }

            return Some(Token {
                original: raw.to_string(),
                normalized,
                position,
                kind,
            });
        }
    }
}
